//! Observable list container.
//!
//! # Responsibility
//! - Hold one ordered sequence behind a shared, cloneable handle.
//! - Replace the sequence wholesale and notify observers synchronously.
//!
//! # Invariants
//! - The held sequence is never absent; a fresh container holds `[]`.
//! - Replacement is committed before any observer runs.
//! - Observers run in subscription order and outside the internal lock.
//! - A deregistered observer is never invoked again, including later in the
//!   notification round that was in flight when it was deregistered.

use log::{debug, trace};
use std::fmt::{Debug, Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Observer<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Identifier assigned to one observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverId(u64);

impl Display for ObserverId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Registration<T> {
    id: ObserverId,
    active: Arc<AtomicBool>,
    observer: Observer<T>,
}

// Manual impl: deriving would require `T: Clone`.
impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Arc::clone(&self.active),
            observer: Arc::clone(&self.observer),
        }
    }
}

struct State<T> {
    items: Arc<Vec<T>>,
    observers: Vec<Registration<T>>,
    next_id: u64,
}

struct Shared<T> {
    state: Mutex<State<T>>,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        // State is only ever replaced whole, so a poisoned guard is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn detach(&self, id: ObserverId) -> usize {
        let mut state = self.lock();
        state.observers.retain(|registration| registration.id != id);
        state.observers.len()
    }
}

/// Shared handle to an observable ordered sequence.
///
/// Cloning the handle shares the underlying sequence and observer set; it
/// never copies the items.
pub struct ObservableList<T> {
    shared: Arc<Shared<T>>,
}

impl<T> ObservableList<T> {
    /// Creates a container holding the empty sequence.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Creates a container seeded with `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    items: Arc::new(items),
                    observers: Vec::new(),
                    next_id: 0,
                }),
            }),
        }
    }

    /// Returns the current sequence snapshot.
    ///
    /// The snapshot is immutable; later replacements do not affect it.
    pub fn get(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.shared.lock().items)
    }

    pub fn len(&self) -> usize {
        self.shared.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().items.is_empty()
    }

    /// Returns the number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.shared.lock().observers.len()
    }

    /// Replaces the whole sequence and notifies every active observer.
    ///
    /// Observers are called in subscription order before this returns. Equal
    /// values are not deduplicated: every call notifies.
    pub fn set(&self, items: Vec<T>) {
        let (snapshot, observers) = {
            let mut state = self.shared.lock();
            state.items = Arc::new(items);
            (Arc::clone(&state.items), state.observers.clone())
        };

        debug!(
            "event=list_replace module=store status=ok items={} observers={}",
            snapshot.len(),
            observers.len()
        );

        for registration in &observers {
            if !registration.active.load(Ordering::Acquire) {
                continue;
            }
            trace!(
                "event=observer_notify module=store observer_id={} items={}",
                registration.id,
                snapshot.len()
            );
            (registration.observer)(snapshot.as_slice());
        }
    }

    /// Replaces the sequence with `f(current)`.
    ///
    /// Same outcome as `set(f(&get()))`; `f` runs without the lock held.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&[T]) -> Vec<T>,
    {
        let current = self.get();
        self.set(f(current.as_slice()));
    }
}

impl<T> ObservableList<T>
where
    T: Send + Sync + 'static,
{
    /// Registers `observer` and immediately calls it with the current value.
    ///
    /// The observer is then called on every later `set`/`update` until the
    /// returned handle is invoked. Dropping the handle does not deregister.
    pub fn subscribe<F>(&self, observer: F) -> Unsubscribe
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        let observer: Observer<T> = Arc::new(observer);
        let active = Arc::new(AtomicBool::new(true));

        let (id, snapshot, count) = {
            let mut state = self.shared.lock();
            let id = ObserverId(state.next_id);
            state.next_id += 1;
            state.observers.push(Registration {
                id,
                active: Arc::clone(&active),
                observer: Arc::clone(&observer),
            });
            (id, Arc::clone(&state.items), state.observers.len())
        };

        debug!(
            "event=observer_subscribe module=store status=ok observer_id={} observers={}",
            id, count
        );

        observer(snapshot.as_slice());

        let shared: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Unsubscribe {
            id,
            active,
            detach: Box::new(move |id: ObserverId| {
                // The container may already be gone; nothing left to detach from.
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let remaining = shared.detach(id);
                debug!(
                    "event=observer_unsubscribe module=store status=ok observer_id={} observers={}",
                    id, remaining
                );
            }),
        }
    }
}

impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for ObservableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("ObservableList")
            .field("len", &state.items.len())
            .field("observers", &state.observers.len())
            .finish()
    }
}

/// Handle returned by [`ObservableList::subscribe`].
///
/// Calling [`Unsubscribe::unsubscribe`] deregisters the observer.
#[must_use = "dropping the handle leaves the observer registered"]
pub struct Unsubscribe {
    id: ObserverId,
    active: Arc<AtomicBool>,
    detach: Box<dyn FnOnce(ObserverId) + Send + Sync>,
}

impl Unsubscribe {
    pub fn observer_id(&self) -> ObserverId {
        self.id
    }

    /// Returns whether the observer is still registered.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Deregisters the observer.
    ///
    /// Takes effect immediately, even for a notification round in progress.
    pub fn unsubscribe(self) {
        if self.active.swap(false, Ordering::AcqRel) {
            (self.detach)(self.id);
        }
    }
}

impl Debug for Unsubscribe {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unsubscribe")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
