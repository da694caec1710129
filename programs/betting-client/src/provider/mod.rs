//! Seams to the external wallet and chain. The dispatcher only orchestrates
//! calls against these; signing, key management and transport live behind them.

pub mod rpc;

pub use rpc::*;

use anchor_client::solana_sdk::signature::Signature;
use anchor_lang::{prelude::*, solana_program::instruction::Instruction};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub signature: Signature,
    pub status: ReceiptStatus,
}

/// Signer capability, the injected wallet.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Accounts the wallet can sign for, primary first.
    async fn addresses(&self) -> Result<Vec<Pubkey>>;
    /// Signs `instructions` as `account` and submits them in one transaction.
    async fn submit(&self, account: &Pubkey, instructions: &[Instruction]) -> Result<Signature>;
}

/// Read-only chain access.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    /// Waits until `signature` lands. No timeout is applied.
    async fn wait_for_receipt(&self, signature: &Signature) -> Result<Receipt>;
}
