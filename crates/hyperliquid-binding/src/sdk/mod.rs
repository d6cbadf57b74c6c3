/*
[INPUT]:  Façade calls needing an exchange round trip
[OUTPUT]: Async capability traits over the wrapped SDK
[POS]:    SDK seam - injected capability between façades and hyperliquid_rust_sdk
[UPDATE]: When a façade needs a new SDK operation
*/

use std::collections::HashMap;

use alloy_primitives::Address;
use async_trait::async_trait;
use tracing::warn;

use crate::error::{BindingError, Result};
use crate::types::{CancelAck, CancelRequest, OpenOrder, OrderAck, OrderRequest, UserBalance, UserState};

pub mod hyperliquid;
pub mod mock;

pub use hyperliquid::{HyperliquidExchangeApi, HyperliquidInfoApi};
pub use mock::MockExchange;

/// Read-only exchange queries
///
/// Implemented by the SDK-backed client and by [`MockExchange`]. Async callers
/// can use it directly instead of the blocking façade.
#[async_trait]
pub trait InfoApi: Send + Sync {
    /// Mid price per asset symbol, as decimal strings
    async fn all_mids(&self) -> Result<HashMap<String, String>>;

    async fn user_state(&self, address: Address) -> Result<UserState>;

    async fn open_orders(&self, address: Address) -> Result<Vec<OpenOrder>>;

    async fn user_balances(&self, address: Address) -> Result<Vec<UserBalance>>;
}

/// Signed exchange actions for one wallet
#[async_trait]
pub trait ExchangeApi: Send + Sync {
    /// Address of the signing wallet
    fn wallet_address(&self) -> Address;

    /// Account whose orders this client places and cancels: the vault when
    /// trading on its behalf, otherwise the signing wallet
    fn account_address(&self) -> Address;

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderAck>;

    async fn cancel_order(&self, cancel: &CancelRequest) -> Result<CancelAck>;

    /// Cancel several orders in one signed action
    async fn bulk_cancel(&self, cancels: Vec<CancelRequest>) -> Result<Vec<CancelAck>>;
}

/// Fold per-order cancel outcomes into one result
///
/// Any rejection fails the call with an `Api` error naming each rejected
/// order. Cancels that were accepted stay cancelled.
pub(crate) fn collect_cancel_outcomes(
    cancels: &[CancelRequest],
    outcomes: Vec<Result<CancelAck>>,
) -> Result<Vec<CancelAck>> {
    let mut acks = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (cancel, outcome) in cancels.iter().zip(outcomes) {
        match outcome {
            Ok(ack) => acks.push(ack),
            Err(e) => failures.push(format!("{} oid {}: {}", cancel.asset, cancel.oid, e.message())),
        }
    }

    if failures.is_empty() {
        return Ok(acks);
    }

    warn!(
        cancelled = acks.len(),
        failed = failures.len(),
        "bulk cancel partially rejected"
    );
    Err(BindingError::api_error(format!(
        "{} of {} cancels rejected: {}",
        failures.len(),
        cancels.len(),
        failures.join("; ")
    )))
}
