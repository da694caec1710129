use anchor_lang::prelude::*;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::BettingError,
    state::{EntryKind, HistoryEntry, HistoryProvider},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistorySummary {
    pub entries: Vec<HistoryEntry>,
    pub total_deposits: u64,
    pub total_withdrawals: u64,
    /// Deposits minus withdrawals.
    pub net_deposits: i64,
}

pub fn history_summarize(provider: &impl HistoryProvider, now: DateTime<Utc>, window_days: i64) -> Result<HistorySummary> {
    let since = Duration::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| error!(BettingError::InvalidConfig))?;
    let mut entries: Vec<HistoryEntry> = provider
        .entries()?
        .into_iter()
        .filter(|entry| entry.recorded_at >= since && entry.recorded_at <= now)
        .collect();
    entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    let total = |kind: EntryKind| -> Result<u64> {
        entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .try_fold(0_u64, |sum, entry| sum.checked_add(entry.amount))
            .ok_or_else(|| error!(BettingError::AmountOverflow))
    };
    let total_deposits = total(EntryKind::Deposit)?;
    let total_withdrawals = total(EntryKind::Withdraw)?;
    let net_deposits = i64::try_from(total_deposits)
        .ok()
        .zip(i64::try_from(total_withdrawals).ok())
        .and_then(|(deposits, withdrawals)| deposits.checked_sub(withdrawals))
        .ok_or_else(|| error!(BettingError::AmountOverflow))?;

    Ok(HistorySummary {
        entries,
        total_deposits,
        total_withdrawals,
        net_deposits,
    })
}
