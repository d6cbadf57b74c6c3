/*
[INPUT]:  Decoded info-endpoint responses from the SDK
[OUTPUT]: Account snapshots exported to foreign callers
[POS]:    Data layer - read-only account models
[UPDATE]: When the info client exposes new account data
*/

use serde::{Deserialize, Serialize};

/// Margin summary snapshot for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct UserState {
    /// Checksummed account address
    pub address: String,
    pub equity: f64,
    pub account_value: f64,
    pub total_margin_used: f64,
    pub withdrawable: f64,
}

/// Resting order as reported by the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct OpenOrder {
    pub asset: String,
    pub is_buy: bool,
    pub size: f64,
    pub price: f64,
    pub oid: u64,
    /// Placement time, milliseconds since epoch
    pub timestamp: u64,
}

/// Spot token balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct UserBalance {
    pub token: String,
    pub hold: f64,
    pub total: f64,
}
