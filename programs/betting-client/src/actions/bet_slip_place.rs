use serde::Serialize;
use tracing::info;

use crate::state::{BetSelection, BetSlipStore};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PlacedSlip {
    pub selections: Vec<BetSelection>,
    pub stake: f64,
    pub possible_winnings: f64,
}

/// Stake times the sum of the selected odds.
pub fn possible_winnings(stake: f64, bets: &[BetSelection]) -> f64 {
    stake * bets.iter().map(|bet| bet.odds).sum::<f64>()
}

/// Takes the slip as it stands, then clears it and closes the overlay.
/// An empty slip or a zero stake is accepted as is.
pub fn bet_slip_place(store: &BetSlipStore, stake: f64) -> PlacedSlip {
    let selections = store.bets();
    let possible_winnings = possible_winnings(stake, &selections);
    info!(
        target: "bet_slip",
        bets = selections.len(),
        stake,
        possible_winnings,
        "bet slip placed"
    );

    store.set_bets(Vec::new());
    store.set_visible(false);

    PlacedSlip {
        selections,
        stake,
        possible_winnings,
    }
}
