use notelist_core::{notes_store, Note, NoteList};
use std::sync::{Arc, Mutex};
use std::thread;

// Every assertion on the process-wide list lives in this one test, so no
// other test in this binary can race it.
#[test]
fn singleton_starts_empty_and_is_shared_across_handles_and_threads() {
    assert!(notes_store().get().is_empty());
    assert!(std::ptr::eq(notes_store(), notes_store()));

    let injected: NoteList = notes_store().clone();
    let counts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&counts);
    let unsubscribe = injected.subscribe(move |items| {
        sink.lock().unwrap().push(items.len());
    });

    let writer = notes_store().clone();
    thread::spawn(move || {
        writer.set(vec![Note::new("from worker"), Note::new("second")]);
    })
    .join()
    .expect("writer thread should finish");

    let current = notes_store().get();
    assert_eq!(current.len(), 2);
    assert_eq!(current[0].content, "from worker");
    assert_eq!(injected.get(), current);

    notes_store().update(|items| items.iter().skip(1).cloned().collect());
    assert_eq!(injected.len(), 1);
    assert_eq!(injected.get()[0].content, "second");

    unsubscribe.unsubscribe();
    notes_store().set(Vec::new());

    assert_eq!(*counts.lock().unwrap(), vec![0, 2, 1]);
    assert_eq!(notes_store().observer_count(), 0);
    assert!(notes_store().is_empty());
}

#[test]
fn fresh_note_list_is_independent_of_singleton() {
    let local = NoteList::new();
    local.set(vec![Note::new("local only")]);

    assert_eq!(local.len(), 1);
    assert!(!std::ptr::eq(&local, notes_store()));
}
