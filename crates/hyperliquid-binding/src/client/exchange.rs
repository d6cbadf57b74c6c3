/*
[INPUT]:  Private key, exchange config, order and cancel requests
[OUTPUT]: Order/cancel acknowledgments and the signing wallet address
[POS]:    Façade layer - read/write exchange client
[UPDATE]: When adding exchange actions
*/

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;
use tracing::{debug, info, warn};

use crate::config::ExchangeConfig;
use crate::error::{BindingError, Result};
use crate::network::Network;
use crate::runtime::block_on;
use crate::sdk::{ExchangeApi, HyperliquidExchangeApi, HyperliquidInfoApi, InfoApi};
use crate::signer::WalletKey;
use crate::types::{CancelAck, CancelRequest, OrderAck, OrderRequest};

/// Read/write client handle bound to one signing wallet
///
/// Each action is a single signed round trip: no retries, no local order
/// tracking. Re-query open orders to confirm the effect of a call.
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct ExchangeClient {
    network: Network,
    wallet_address: Address,
    account_address: Address,
    exchange: Arc<dyn ExchangeApi>,
    info: Arc<dyn InfoApi>,
}

impl ExchangeClient {
    /// Validate the key and establish an exchange session
    ///
    /// The key is checked locally first, so a malformed key fails with
    /// `InvalidPrivateKey` without touching the network.
    pub fn new(private_key: &str, network: Network) -> Result<Self> {
        Self::with_config(private_key, ExchangeConfig::new(network))
    }

    pub fn with_config(private_key: &str, config: ExchangeConfig) -> Result<Self> {
        let key = WalletKey::from_hex(private_key)?;
        let vault_address = config.parsed_vault_address()?;
        let network = config.network;

        let (exchange, info) = block_on(async move {
            let info = HyperliquidInfoApi::connect(network).await?;
            let exchange = HyperliquidExchangeApi::connect(key, network, vault_address).await?;
            Ok::<_, BindingError>((exchange, info))
        })??;

        Ok(Self::with_apis(network, Arc::new(exchange), Arc::new(info)))
    }

    /// Build a client over injected capabilities
    pub fn with_apis(
        network: Network,
        exchange: Arc<dyn ExchangeApi>,
        info: Arc<dyn InfoApi>,
    ) -> Self {
        Self {
            network,
            wallet_address: exchange.wallet_address(),
            account_address: exchange.account_address(),
            exchange,
            info,
        }
    }

    pub fn wallet_address(&self) -> Address {
        self.wallet_address
    }

    /// Account whose orders this client manages (the vault, if configured)
    pub fn account_address(&self) -> Address {
        self.account_address
    }

    /// Underlying async capability, for callers already inside a runtime
    pub fn api(&self) -> Arc<dyn ExchangeApi> {
        Arc::clone(&self.exchange)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl ExchangeClient {
    pub fn network(&self) -> Network {
        self.network
    }

    /// Checksummed address derived from the held key
    pub fn get_wallet_address(&self) -> String {
        self.wallet_address.to_checksum(None)
    }

    /// Place a good-til-cancelled limit order
    pub fn place_order(&self, order: OrderRequest) -> Result<OrderAck, BindingError> {
        order.validate()?;
        debug!(
            asset = %order.asset,
            is_buy = order.is_buy,
            size = order.size,
            price = order.price,
            reduce_only = order.reduce_only,
            "placing order"
        );

        match block_on(self.exchange.place_order(&order))? {
            Ok(ack) => {
                info!(asset = %order.asset, oid = ?ack.oid(), ?ack, "order acknowledged");
                Ok(ack)
            }
            Err(e) => {
                warn!(asset = %order.asset, error = %e, "order failed");
                Err(e)
            }
        }
    }

    pub fn cancel_order(&self, cancel: CancelRequest) -> Result<CancelAck, BindingError> {
        cancel.validate()?;
        debug!(asset = %cancel.asset, oid = cancel.oid, "cancelling order");

        let ack = block_on(self.exchange.cancel_order(&cancel))??;
        info!(asset = %ack.asset, oid = ack.oid, "order cancelled");
        Ok(ack)
    }

    /// Cancel every open order of the trading account, optionally for one asset only
    ///
    /// Lists open orders, then cancels them in a single bulk action. Returns
    /// an empty list when nothing was open.
    pub fn cancel_all_orders(&self, asset: Option<String>) -> Result<Vec<CancelAck>, BindingError> {
        let account = self.account_address;
        let asset = asset.map(|a| a.trim().to_string()).filter(|a| !a.is_empty());

        block_on(async {
            let cancels: Vec<CancelRequest> = self
                .info
                .open_orders(account)
                .await?
                .into_iter()
                .filter(|order| asset.as_deref().is_none_or(|a| order.asset == a))
                .map(|order| CancelRequest::new(order.asset, order.oid))
                .collect();

            if cancels.is_empty() {
                debug!(asset = ?asset, "no open orders to cancel");
                return Ok(Vec::new());
            }

            debug!(asset = ?asset, count = cancels.len(), "cancelling open orders");
            let acks = self.exchange.bulk_cancel(cancels).await?;
            info!(count = acks.len(), "open orders cancelled");
            Ok::<_, BindingError>(acks)
        })?
    }
}

impl fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeClient")
            .field("network", &self.network)
            .field("wallet_address", &self.get_wallet_address())
            .field("account_address", &self.account_address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::MockExchange;

    const ZERO_KEY: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn test_malformed_key_fails_without_io() {
        for key in [ZERO_KEY, "0x1234", "not a key"] {
            let err = ExchangeClient::new(key, Network::Testnet).unwrap_err();
            assert!(matches!(err, BindingError::InvalidPrivateKey { .. }), "{key}");
        }
    }

    #[test]
    fn test_place_order_validates_locally() {
        let wallet: Address = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf".parse().unwrap();
        let venue = Arc::new(MockExchange::new(wallet).with_mid("ETH", "3000"));
        let client = ExchangeClient::with_apis(Network::Testnet, venue.clone(), venue);

        let err = client
            .place_order(OrderRequest::new("ETH", true, 0.0, 2500.0, false))
            .unwrap_err();
        assert!(err.is_validation_error());
    }
}
