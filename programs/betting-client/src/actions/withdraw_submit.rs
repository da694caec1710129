use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::{
    constants::{
        MAX_DEPOSIT_AMOUNT, MAX_WITHDRAW_AMOUNT, MIN_DEPOSIT_AMOUNT, MIN_WITHDRAW_AMOUNT, WITHDRAW_CONFIRMED,
    },
    error::BettingError,
    provider::{ChainReader, WalletProvider},
    state::TransactionOutcome,
};

use super::TransferDispatcher;

/// Withdraw tab: an amount, a destination and the dispatcher that pays out.
pub struct WithdrawPanel<W, C> {
    dispatcher: TransferDispatcher<W, C>,
    destination: Pubkey,
    amount: f64,
}

impl<W: WalletProvider, C: ChainReader> WithdrawPanel<W, C> {
    pub fn new(dispatcher: TransferDispatcher<W, C>, destination: Pubkey) -> Self {
        WithdrawPanel {
            dispatcher,
            destination,
            amount: 0.0,
        }
    }
    pub fn amount(&self) -> f64 {
        self.amount
    }
    pub fn destination(&self) -> Pubkey {
        self.destination
    }
    pub fn dispatcher(&self) -> &TransferDispatcher<W, C> {
        &self.dispatcher
    }
    pub fn outcome(&self) -> &TransactionOutcome {
        self.dispatcher.outcome()
    }

    /// Blank input reads as zero; anything unparsable is kept as NaN and
    /// rejected when dispatched.
    pub fn set_amount(&mut self, input: &str) {
        let input = input.trim();
        self.amount = if input.is_empty() {
            0.0
        } else {
            input.parse().unwrap_or(f64::NAN)
        };
    }

    pub fn set_destination(&mut self, input: &str) -> Result<()> {
        self.destination = Pubkey::from_str(input.trim()).map_err(|_| error!(BettingError::InvalidDestination))?;
        Ok(())
    }

    /// The limits are shown to the user, not enforced.
    pub fn within_advisory_limits(&self) -> bool {
        (MIN_WITHDRAW_AMOUNT..=MAX_WITHDRAW_AMOUNT).contains(&self.amount)
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.outcome().error.is_none()
    }

    pub fn status_message(&self) -> Option<String> {
        let outcome = self.outcome();
        match outcome.success {
            Some(true) => Some(WITHDRAW_CONFIRMED.to_string()),
            Some(false) => outcome.error.clone(),
            None => None,
        }
    }

    /// Dispatches only while the button is enabled. Returns whether a
    /// transfer was attempted.
    pub async fn submit(&mut self) -> bool {
        if !self.is_submit_enabled() {
            return false;
        }
        self.dispatcher.dispatch(self.destination, self.amount).await;
        true
    }
}

/// Advisory deposit range shown on the profile page. Not enforced.
pub fn deposit_within_advisory_limits(amount: f64) -> bool {
    (MIN_DEPOSIT_AMOUNT..=MAX_DEPOSIT_AMOUNT).contains(&amount)
}
