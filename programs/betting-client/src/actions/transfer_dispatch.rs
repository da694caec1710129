use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{error::Error, prelude::*};
use tracing::{debug, info, warn};

use crate::{
    config::DispatchMode,
    error::{error_message, BettingError},
    provider::{ChainReader, ReceiptStatus, WalletProvider},
    state::{DispatchPhase, FailureKind, Token, TransactionOutcome, TransferCall},
    utils::to_base_units,
};

/// Sends one token transfer per call and records how it ended.
///
/// Only the outcome and phase of the latest call are kept. Every call resets
/// them first and sets the outcome exactly once. Failures never escape
/// `dispatch`; they become a `success == Some(false)` outcome with a message.
pub struct TransferDispatcher<W, C> {
    token: Token,
    mode: DispatchMode,
    wallet: Option<W>,
    chain: C,
    outcome: TransactionOutcome,
    phase: DispatchPhase,
}

impl<W: WalletProvider, C: ChainReader> TransferDispatcher<W, C> {
    pub fn new(token: Token, mode: DispatchMode, wallet: Option<W>, chain: C) -> Self {
        TransferDispatcher {
            token,
            mode,
            wallet,
            chain,
            outcome: TransactionOutcome::default(),
            phase: DispatchPhase::Idle,
        }
    }
    pub fn token(&self) -> Token {
        self.token
    }
    pub fn mode(&self) -> DispatchMode {
        self.mode
    }
    pub fn outcome(&self) -> &TransactionOutcome {
        &self.outcome
    }
    pub fn phase(&self) -> &DispatchPhase {
        &self.phase
    }
    pub fn wallet(&self) -> Option<&W> {
        self.wallet.as_ref()
    }
    pub fn chain(&self) -> &C {
        &self.chain
    }

    pub async fn dispatch(&mut self, destination: Pubkey, amount: f64) {
        self.outcome = TransactionOutcome::default();
        self.phase = DispatchPhase::Idle;

        if self.mode == DispatchMode::Mock {
            info!(target: "dispatch", token = self.token.symbol(), amount, "mock transfer confirmed");
            self.phase = DispatchPhase::Confirmed { success: true };
            self.outcome = TransactionOutcome::confirmed();
            return;
        }

        self.phase = DispatchPhase::Resolving;
        if self.wallet.is_none() {
            let err = error!(BettingError::NoProviderAvailable);
            self.fail(FailureKind::NoProviderAvailable, &err);
            return;
        }

        let signature = match self.submit(destination, amount).await {
            Ok(signature) => signature,
            Err(err) => return self.fail(FailureKind::TransferFailed, &err),
        };
        debug!(target: "dispatch", %signature, "transfer submitted");
        self.phase = DispatchPhase::Submitted(signature);

        let receipt = match self.chain.wait_for_receipt(&signature).await {
            Ok(receipt) => receipt,
            Err(err) => return self.fail(FailureKind::TransferFailed, &err),
        };
        match receipt.status {
            ReceiptStatus::Success => {
                info!(target: "dispatch", %signature, token = self.token.symbol(), amount, "transfer confirmed");
                self.phase = DispatchPhase::Confirmed { success: true };
                self.outcome = TransactionOutcome::confirmed();
            }
            ReceiptStatus::Reverted { reason } => {
                warn!(target: "dispatch", %signature, %reason, "transfer reverted");
                self.phase = DispatchPhase::Confirmed { success: false };
                self.outcome =
                    TransactionOutcome::failed(format!("{}: {}", BettingError::TransactionReverted, reason));
            }
        }
    }

    async fn submit(&self, destination: Pubkey, amount: f64) -> Result<Signature> {
        let wallet = self
            .wallet
            .as_ref()
            .ok_or_else(|| error!(BettingError::NoProviderAvailable))?;
        let config = self.token.config();
        let amount = to_base_units(amount, config.decimals)?;

        let authority = wallet
            .addresses()
            .await?
            .first()
            .copied()
            .ok_or_else(|| error!(BettingError::NoAccountAvailable))?;
        let call = TransferCall {
            token: self.token,
            authority,
            destination,
            amount,
        };
        debug!(
            target: "dispatch",
            token = self.token.symbol(),
            %authority,
            %destination,
            amount,
            "submitting transfer"
        );
        wallet.submit(&authority, &[call.instruction()?]).await
    }

    fn fail(&mut self, kind: FailureKind, err: &Error) {
        let message = error_message(err);
        warn!(target: "dispatch", ?kind, %message, "transfer failed");
        self.phase = DispatchPhase::Failed(kind);
        self.outcome = TransactionOutcome::failed(message);
    }
}
