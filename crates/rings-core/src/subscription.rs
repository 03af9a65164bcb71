use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle returned by every listener registration.
///
/// Dropping it keeps the listener registered; call [`Subscription::unsubscribe`]
/// to detach. Unsubscribing from inside a running callback is allowed.
#[derive(Debug)]
pub struct Subscription {
    active: Rc<Cell<bool>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

struct Slot<T> {
    active: Rc<Cell<bool>>,
    callback: Box<dyn FnMut(&T)>,
}

/// Single-threaded listener list.
pub struct Listeners<T> {
    slots: RefCell<Vec<Slot<T>>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let active = Rc::new(Cell::new(true));
        self.slots.borrow_mut().push(Slot {
            active: active.clone(),
            callback: Box::new(callback),
        });
        Subscription { active }
    }

    /// Call every active listener in registration order; returns how many ran.
    pub fn emit(&self, value: &T) -> usize {
        let mut slots = self.slots.borrow_mut();
        slots.retain(|s| s.active.get());
        let mut called = 0;
        for slot in slots.iter_mut() {
            if slot.active.get() {
                (slot.callback)(value);
                called += 1;
            }
        }
        called
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().iter().filter(|s| s.active.get()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
