use std::{cell::Cell, rc::Rc};

use super::BetSlipStore;

/// Background scroll suppression while the bet slip overlay is open.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    locked: Rc<Cell<bool>>,
}

impl ScrollLock {
    pub fn attach(store: &BetSlipStore) -> Self {
        let lock = ScrollLock {
            locked: Rc::new(Cell::new(store.is_visible())),
        };
        let locked = lock.locked.clone();
        store.on_visibility_change(move |show| locked.set(show));
        lock
    }
    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }
}
