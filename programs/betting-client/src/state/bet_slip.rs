use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BetSelection {
    pub chosen: String,
    pub bet: String,
    #[serde(rename = "match")]
    pub fixture: String,
    pub odds: f64,
}

type VisibilityListener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct BetSlip {
    bets: Vec<BetSelection>,
    show: bool,
    listeners: Vec<VisibilityListener>,
}

/// Shared handle to the bet slip. The application shell owns the first handle
/// and hands clones to every component that reads or writes the slip.
#[derive(Clone, Default)]
pub struct BetSlipStore {
    inner: Rc<RefCell<BetSlip>>,
}

impl BetSlipStore {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn bets(&self) -> Vec<BetSelection> {
        self.inner.borrow().bets.clone()
    }
    pub fn len(&self) -> usize {
        self.inner.borrow().bets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().bets.is_empty()
    }
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().show
    }
    pub fn set_bets(&self, bets: Vec<BetSelection>) {
        self.inner.borrow_mut().bets = bets;
    }
    /// Listeners only hear about actual changes of the flag.
    pub fn set_visible(&self, show: bool) {
        let listeners = {
            let mut slip = self.inner.borrow_mut();
            if slip.show == show {
                return;
            }
            slip.show = show;
            slip.listeners.clone()
        };
        for listener in listeners {
            listener(show);
        }
    }
    pub fn on_visibility_change(&self, listener: impl Fn(bool) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }
}
