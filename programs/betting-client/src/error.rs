use anchor_lang::error::{AnchorError, Error};
use anchor_lang::prelude::*;

#[error_code]
pub enum BettingError {
    #[msg("Could not find provider, are you using Opera MiniPay?")]
    NoProviderAvailable = 0,
    #[msg("An unknown error occurred")]
    TransferFailed = 1,
    #[msg("Transaction was reverted")]
    TransactionReverted = 2,
    #[msg("Wallet did not expose any account")]
    NoAccountAvailable = 3,
    #[msg("Amount must be a finite, non-negative number")]
    InvalidAmount = 4,
    #[msg("Amount does not fit in base units")]
    AmountOverflow = 5,
    #[msg("Destination is not a valid address")]
    InvalidDestination = 6,
    #[msg("Invalid configuration value")]
    InvalidConfig = 7,
    #[msg("Wallet cannot sign for the requested account")]
    UnknownAccount = 8,
}

/// Wraps a foreign failure as `TransferFailed`, keeping its message verbatim.
/// A blank message falls back to the generic `TransferFailed` text.
pub fn transfer_failed(reason: impl ToString) -> Error {
    let reason = reason.to_string();
    let error_msg = if reason.trim().is_empty() {
        BettingError::TransferFailed.to_string()
    } else {
        reason
    };
    Error::from(AnchorError {
        error_name: BettingError::TransferFailed.name(),
        error_code_number: BettingError::TransferFailed.into(),
        error_msg,
        error_origin: None,
        compared_values: None,
    })
}

pub fn error_message(err: &Error) -> String {
    match err {
        Error::AnchorError(e) => e.error_msg.clone(),
        Error::ProgramError(e) => e.program_error.to_string(),
    }
}

pub fn error_number(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        Error::ProgramError(_) => None,
    }
}
