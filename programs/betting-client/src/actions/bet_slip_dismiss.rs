use crate::state::BetSlipStore;

pub fn bet_slip_dismiss(store: &BetSlipStore) {
    store.set_visible(false);
}
