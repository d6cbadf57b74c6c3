/*
[INPUT]:  Caller-supplied order and cancel parameters
[OUTPUT]: Immutable request value objects with local validation
[POS]:    Data layer - request types for the exchange client
[UPDATE]: When order or cancel parameters change
*/

use serde::{Deserialize, Serialize};

use crate::error::{BindingError, Result};

/// Limit order to place (always good-til-cancelled)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct OrderRequest {
    /// Asset symbol, e.g. "ETH"
    pub asset: String,
    pub is_buy: bool,
    pub size: f64,
    /// Limit price
    pub price: f64,
    pub reduce_only: bool,
}

impl OrderRequest {
    pub fn new(asset: impl Into<String>, is_buy: bool, size: f64, price: f64, reduce_only: bool) -> Self {
        Self {
            asset: asset.into(),
            is_buy,
            size,
            price,
            reduce_only,
        }
    }

    /// Reject values the exchange could never accept before signing anything
    pub fn validate(&self) -> Result<()> {
        if self.asset.trim().is_empty() {
            return Err(BindingError::invalid_input("order asset must not be empty"));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(BindingError::invalid_input(format!(
                "order size must be positive, got {}",
                self.size
            )));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(BindingError::invalid_input(format!(
                "order price must be positive, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

/// Identifies a resting order to cancel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct CancelRequest {
    pub asset: String,
    /// Exchange-assigned order id
    pub oid: u64,
}

impl CancelRequest {
    pub fn new(asset: impl Into<String>, oid: u64) -> Self {
        Self {
            asset: asset.into(),
            oid,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.asset.trim().is_empty() {
            return Err(BindingError::invalid_input("cancel asset must not be empty"));
        }
        Ok(())
    }
}
