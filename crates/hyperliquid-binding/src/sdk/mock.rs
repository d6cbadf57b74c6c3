/*
[INPUT]:  Scripted mids, accounts and orders
[OUTPUT]: Deterministic in-memory exchange implementing both capabilities
[POS]:    SDK seam - test double for façades and async callers
[UPDATE]: When capability traits change or tests need new venue behavior
*/

use std::collections::HashMap;

use alloy_primitives::Address;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{BindingError, Result};
use crate::sdk::{collect_cancel_outcomes, ExchangeApi, InfoApi};
use crate::types::{
    CancelAck, CancelRequest, OpenOrder, OrderAck, OrderRequest, UserBalance, UserState,
};

/// Message the exchange returns when cancelling an unknown order
pub const ORDER_NOT_FOUND: &str = "Order was never placed, already canceled, or filled.";

const FIRST_OID: u64 = 1_000;
const MOCK_START_TIMESTAMP_MS: u64 = 1_700_000_000_000;

/// In-memory exchange for offline tests
///
/// Buy orders priced at or above the mid (and sells at or below) fill
/// immediately; everything else rests until cancelled.
#[derive(Debug)]
pub struct MockExchange {
    wallet: Address,
    vault: Option<Address>,
    state: Mutex<MockState>,
}

#[derive(Debug)]
struct MockState {
    mids: HashMap<String, String>,
    accounts: HashMap<Address, UserState>,
    balances: HashMap<Address, Vec<UserBalance>>,
    open_orders: Vec<OpenOrder>,
    next_oid: u64,
    offline: bool,
}

impl MockExchange {
    /// Create a venue with a funded account for `wallet`
    pub fn new(wallet: Address) -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            wallet,
            UserState {
                address: wallet.to_checksum(None),
                equity: 10_000.0,
                account_value: 10_000.0,
                total_margin_used: 0.0,
                withdrawable: 10_000.0,
            },
        );

        Self {
            wallet,
            vault: None,
            state: Mutex::new(MockState {
                mids: HashMap::new(),
                accounts,
                balances: HashMap::new(),
                open_orders: Vec::new(),
                next_oid: FIRST_OID,
                offline: false,
            }),
        }
    }

    /// Trade on behalf of `vault`; its account is funded like the wallet's
    pub fn with_vault(mut self, vault: Address) -> Self {
        let state = self.state.get_mut();
        let funded = state.accounts.get(&self.wallet).cloned().map(|mut account| {
            account.address = vault.to_checksum(None);
            account
        });
        if let Some(account) = funded {
            state.accounts.insert(vault, account);
        }
        self.vault = Some(vault);
        self
    }

    fn account(&self) -> Address {
        self.vault.unwrap_or(self.wallet)
    }

    pub fn with_mid(mut self, asset: &str, mid: &str) -> Self {
        self.state
            .get_mut()
            .mids
            .insert(asset.to_string(), mid.to_string());
        self
    }

    pub fn with_balance(mut self, token: &str, hold: f64, total: f64) -> Self {
        let account = self.account();
        self.state
            .get_mut()
            .balances
            .entry(account)
            .or_default()
            .push(UserBalance {
                token: token.to_string(),
                hold,
                total,
            });
        self
    }

    /// Simulate a transport outage; every call fails with a network error
    pub async fn set_offline(&self, offline: bool) {
        self.state.lock().await.offline = offline;
    }
}

impl MockState {
    fn ensure_online(&self) -> Result<()> {
        if self.offline {
            return Err(BindingError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }

    fn mid(&self, asset: &str) -> Result<f64> {
        let mid = self
            .mids
            .get(asset)
            .ok_or_else(|| BindingError::api_error(format!("Asset not found: {asset}")))?;
        mid.parse::<f64>()
            .map_err(|_| BindingError::malformed_response(format!("mid for {asset}: {mid:?}")))
    }

    fn remove_order(&mut self, cancel: &CancelRequest) -> Result<CancelAck> {
        let position = self
            .open_orders
            .iter()
            .position(|order| order.asset == cancel.asset && order.oid == cancel.oid)
            .ok_or_else(|| BindingError::api_error(ORDER_NOT_FOUND))?;
        self.open_orders.remove(position);

        Ok(CancelAck {
            asset: cancel.asset.clone(),
            oid: cancel.oid,
        })
    }
}

#[async_trait]
impl InfoApi for MockExchange {
    async fn all_mids(&self) -> Result<HashMap<String, String>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        Ok(state.mids.clone())
    }

    async fn user_state(&self, address: Address) -> Result<UserState> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        state
            .accounts
            .get(&address)
            .cloned()
            .ok_or_else(|| BindingError::api_error(format!("User or API Wallet {address} does not exist.")))
    }

    async fn open_orders(&self, address: Address) -> Result<Vec<OpenOrder>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        if address != self.account() {
            return Ok(Vec::new());
        }
        Ok(state.open_orders.clone())
    }

    async fn user_balances(&self, address: Address) -> Result<Vec<UserBalance>> {
        let state = self.state.lock().await;
        state.ensure_online()?;
        Ok(state.balances.get(&address).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ExchangeApi for MockExchange {
    fn wallet_address(&self) -> Address {
        self.wallet
    }

    fn account_address(&self) -> Address {
        self.account()
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderAck> {
        let mut state = self.state.lock().await;
        state.ensure_online()?;

        let mid = state.mid(&order.asset)?;
        let oid = state.next_oid;
        state.next_oid += 1;

        let crosses = if order.is_buy {
            order.price >= mid
        } else {
            order.price <= mid
        };
        if crosses {
            return Ok(OrderAck::Filled {
                oid,
                total_size: order.size,
                avg_price: mid,
            });
        }

        state.open_orders.push(OpenOrder {
            asset: order.asset.clone(),
            is_buy: order.is_buy,
            size: order.size,
            price: order.price,
            oid,
            timestamp: MOCK_START_TIMESTAMP_MS + (oid - FIRST_OID),
        });
        Ok(OrderAck::Resting { oid })
    }

    async fn cancel_order(&self, cancel: &CancelRequest) -> Result<CancelAck> {
        let mut state = self.state.lock().await;
        state.ensure_online()?;
        state.remove_order(cancel)
    }

    async fn bulk_cancel(&self, cancels: Vec<CancelRequest>) -> Result<Vec<CancelAck>> {
        let mut state = self.state.lock().await;
        state.ensure_online()?;
        let outcomes = cancels
            .iter()
            .map(|cancel| state.remove_order(cancel))
            .collect();
        collect_cancel_outcomes(&cancels, outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet() -> Address {
        "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf"
            .parse()
            .unwrap()
    }

    #[tokio::test]
    async fn test_resting_order_lifecycle() {
        let venue = MockExchange::new(wallet()).with_mid("ETH", "3000.0");

        let ack = venue
            .place_order(&OrderRequest::new("ETH", true, 0.1, 2500.0, false))
            .await
            .unwrap();
        assert_eq!(ack, OrderAck::Resting { oid: FIRST_OID });
        assert_eq!(venue.open_orders(wallet()).await.unwrap().len(), 1);

        let cancel = CancelRequest::new("ETH", FIRST_OID);
        venue.cancel_order(&cancel).await.unwrap();
        assert!(venue.open_orders(wallet()).await.unwrap().is_empty());

        let err = venue.cancel_order(&cancel).await.unwrap_err();
        assert_eq!(err, BindingError::api_error(ORDER_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_crossing_order_fills() {
        let venue = MockExchange::new(wallet()).with_mid("ETH", "3000.0");
        let ack = venue
            .place_order(&OrderRequest::new("ETH", false, 0.2, 2900.0, false))
            .await
            .unwrap();
        assert!(matches!(ack, OrderAck::Filled { avg_price, .. } if avg_price == 3000.0));
        assert!(venue.open_orders(wallet()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_cancel_partial_rejection_is_aggregated() {
        let venue = MockExchange::new(wallet()).with_mid("ETH", "3000.0");
        venue
            .place_order(&OrderRequest::new("ETH", true, 0.1, 2500.0, false))
            .await
            .unwrap();

        let err = venue
            .bulk_cancel(vec![
                CancelRequest::new("ETH", FIRST_OID),
                CancelRequest::new("ETH", 42),
            ])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BindingError::api_error(format!("1 of 2 cancels rejected: ETH oid 42: {ORDER_NOT_FOUND}"))
        );
        assert!(venue.open_orders(wallet()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_vault_owns_orders() {
        let vault: Address = "0x2B5AD5c4795c026514f8317c7a215E218DcCD6cF".parse().unwrap();
        let venue = MockExchange::new(wallet())
            .with_vault(vault)
            .with_mid("ETH", "3000.0");
        assert_eq!(venue.account_address(), vault);
        assert_eq!(venue.wallet_address(), wallet());

        venue
            .place_order(&OrderRequest::new("ETH", true, 0.1, 2500.0, false))
            .await
            .unwrap();
        assert_eq!(venue.open_orders(vault).await.unwrap().len(), 1);
        assert!(venue.open_orders(wallet()).await.unwrap().is_empty());
        assert!(venue.user_state(vault).await.is_ok());
    }

    #[tokio::test]
    async fn test_offline_venue_fails_with_network_error() {
        let venue = MockExchange::new(wallet()).with_mid("BTC", "65000");
        venue.set_offline(true).await;
        assert!(venue.all_mids().await.unwrap_err().is_transport_error());
        venue.set_offline(false).await;
        assert!(venue.all_mids().await.is_ok());
    }
}
