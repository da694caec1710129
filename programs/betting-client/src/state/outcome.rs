use anchor_client::solana_sdk::signature::Signature;
use serde::{Deserialize, Serialize};

/// Result of the most recent dispatch. `success` is `None` until a call has
/// been attempted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionOutcome {
    pub error: Option<String>,
    pub success: Option<bool>,
}

impl TransactionOutcome {
    pub fn confirmed() -> Self {
        TransactionOutcome {
            error: None,
            success: Some(true),
        }
    }
    pub fn failed(error: String) -> Self {
        TransactionOutcome {
            error: Some(error),
            success: Some(false),
        }
    }
    pub fn is_attempted(&self) -> bool {
        self.success.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    NoProviderAvailable,
    TransferFailed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DispatchPhase {
    #[default]
    Idle,
    Resolving,
    Submitted(Signature),
    Confirmed {
        success: bool,
    },
    Failed(FailureKind),
}
