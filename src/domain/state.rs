use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::domain::logging::LogComponent;
use crate::domain::market_data::Selection;
use crate::{log_debug, log_trace};

type Listener = Rc<dyn Fn()>;

/// Shared, single-threaded holder of the current [`Selection`].
///
/// `update` overwrites the selection and fires a payload-free change signal.
/// Subscribers re-read the store when notified. A new subscriber is called
/// once right away, so it never has to special-case the first render.
pub struct SelectionStore {
    selection: RefCell<Selection>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl SelectionStore {
    pub fn new(initial: Selection) -> Rc<Self> {
        Rc::new(Self {
            selection: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Overwrite the selection and notify every subscriber once.
    ///
    /// No validation and no change detection: an identical tuple still notifies.
    pub fn update(&self, coin: &str, currency: &str, days: &str) {
        *self.selection.borrow_mut() = Selection::new(coin, currency, days);
        log_debug!(
            LogComponent::Domain("SelectionStore"),
            "🔁 Selection updated to {}",
            self.selection.borrow()
        );
        self.notify();
    }

    pub fn current_selection(&self) -> Selection {
        self.selection.borrow().clone()
    }

    pub fn coin(&self) -> String {
        self.selection.borrow().coin.clone()
    }

    pub fn currency(&self) -> String {
        self.selection.borrow().currency.clone()
    }

    pub fn days(&self) -> String {
        self.selection.borrow().days.clone()
    }

    /// Register `listener`. It is invoked immediately once, then after every `update`.
    pub fn subscribe_to_changes<F>(self: &Rc<Self>, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let listener: Listener = Rc::new(listener);
        self.listeners.borrow_mut().push((id, Rc::clone(&listener)));
        listener();

        Subscription { store: Rc::downgrade(self), id: Some(id) }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe, unsubscribe or update re-entrantly.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        log_trace!(LogComponent::Domain("SelectionStore"), "notifying {} listener(s)", snapshot.len());
        for listener in snapshot {
            listener();
        }
    }

    fn remove(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

/// Registration guard returned by [`SelectionStore::subscribe_to_changes`].
/// Detaches on `unsubscribe` or drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<SelectionStore>,
    id: Option<u64>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let (Some(id), Some(store)) = (self.id.take(), self.store.upgrade()) {
            store.remove(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
