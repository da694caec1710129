pub mod actions;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

pub use actions::*;
pub use config::{ClientConfig, DispatchMode};
pub use error::BettingError;
pub use provider::{connect, ChainReader, KeypairWallet, Receipt, ReceiptStatus, RpcChain, WalletProvider};
pub use state::*;
