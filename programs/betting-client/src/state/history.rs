use anchor_lang::prelude::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Deposit,
    Withdraw,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Mastercard,
    OperaMinipay,
    ApplePay,
    GooglePay,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    Pending,
    Processed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub kind: EntryKind,
    pub method: PaymentMethod,
    pub amount: u64,
    pub recorded_at: DateTime<Utc>,
    pub state: EntryState,
}

/// Source of deposit and withdrawal records for the history page.
pub trait HistoryProvider {
    fn entries(&self) -> Result<Vec<HistoryEntry>>;
}

#[derive(Clone, Debug, Default)]
pub struct StaticHistory {
    entries: Vec<HistoryEntry>,
}

impl StaticHistory {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        StaticHistory { entries }
    }
}

impl HistoryProvider for StaticHistory {
    fn entries(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.clone())
    }
}
