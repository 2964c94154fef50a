//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `notelist_core` linkage without any UI runtime.
//! - Exercise the shared note list once and print deterministic output.

use notelist_core::{notes_store, Note};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() {
    println!("notelist_core ping={}", notelist_core::ping());
    println!("notelist_core version={}", notelist_core::core_version());

    let notes = notes_store().clone();
    let notifications = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&notifications);
    let unsubscribe = notes.subscribe(move |items| {
        let round = counter.fetch_add(1, Ordering::SeqCst);
        println!("notes observed round={round} count={}", items.len());
    });

    notes.set(vec![Note::new("first"), Note::new("second")]);
    notes.update(|current| {
        let mut next = current.to_vec();
        next.push(Note::new("third"));
        next
    });
    unsubscribe.unsubscribe();
    notes.set(Vec::new());

    println!(
        "notes final count={} notifications={}",
        notes.len(),
        notifications.load(Ordering::SeqCst)
    );
}
