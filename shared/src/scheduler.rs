//! Single-flight render notification.
//!
//! A render requested while listeners are running is not re-entered; the
//! newest snapshot is parked and delivered in exactly one follow-up pass.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

type Listener<S> = Rc<dyn Fn(&S)>;

/// Keeps a listener registered until dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

pub struct RenderScheduler<S> {
    listeners: RefCell<Vec<(u64, Listener<S>)>>,
    next_id: Cell<u64>,
    rendering: Cell<bool>,
    pending: RefCell<Option<S>>,
    passes: Cell<u64>,
}

impl<S> Default for RenderScheduler<S> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            rendering: Cell::new(false),
            pending: RefCell::new(None),
            passes: Cell::new(0),
        }
    }
}

struct RenderingGuard<'a>(&'a Cell<bool>);

impl Drop for RenderingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: 'static> RenderScheduler<S> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(&S) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        let scheduler: Weak<Self> = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(scheduler) = scheduler.upgrade() {
                scheduler
                    .listeners
                    .borrow_mut()
                    .retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Completed notification passes since creation.
    pub fn passes(&self) -> u64 {
        self.passes.get()
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering.get()
    }

    pub fn request(&self, snapshot: S) {
        if self.rendering.get() {
            *self.pending.borrow_mut() = Some(snapshot);
            return;
        }
        self.rendering.set(true);
        let _guard = RenderingGuard(&self.rendering);

        let mut snapshot = snapshot;
        loop {
            // Cloned so listeners may subscribe or unsubscribe mid-pass.
            let listeners: Vec<Listener<S>> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            for listener in listeners {
                listener(&snapshot);
            }
            self.passes.set(self.passes.get() + 1);

            let next = self.pending.borrow_mut().take();
            match next {
                Some(next) => snapshot = next,
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_entrant_requests_coalesce_into_one_follow_up() {
        let scheduler: Rc<RenderScheduler<u32>> = RenderScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&scheduler);
        let log = Rc::clone(&seen);
        let _sub = scheduler.subscribe(move |value: &u32| {
            log.borrow_mut().push(*value);
            if *value == 1 {
                if let Some(scheduler) = weak.upgrade() {
                    scheduler.request(2);
                    scheduler.request(3);
                }
            }
        });

        scheduler.request(1);
        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert_eq!(scheduler.passes(), 2);
        assert!(!scheduler.is_rendering());
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let scheduler: Rc<RenderScheduler<u32>> = RenderScheduler::new();
        let sub = scheduler.subscribe(|_| {});
        assert_eq!(scheduler.listener_count(), 1);
        drop(sub);
        assert_eq!(scheduler.listener_count(), 0);
    }
}
