use crate::state::{BetSlipStore, Fixture, Pick};

/// Adds the picked outcome to the slip and opens the overlay. The same
/// outcome may be added more than once.
pub fn bet_slip_select(store: &BetSlipStore, fixture: &Fixture, pick: Pick) {
    let mut bets = store.bets();
    bets.push(fixture.selection(pick));
    store.set_bets(bets);
    store.set_visible(true);
}
