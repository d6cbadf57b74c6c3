/*
[INPUT]:  Network selector and account addresses
[OUTPUT]: Mids, account snapshots, open orders and balances
[POS]:    Façade layer - read-only info client
[UPDATE]: When adding info queries
*/

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::convert::parse_address;
use crate::error::{BindingError, Result};
use crate::network::Network;
use crate::runtime::block_on;
use crate::sdk::{HyperliquidInfoApi, InfoApi};
use crate::types::{OpenOrder, UserBalance, UserState};

/// Read-only client handle
///
/// Every call is one blocking round trip; nothing is cached.
#[cfg_attr(feature = "uniffi", derive(uniffi::Object))]
pub struct InfoClient {
    network: Network,
    api: Arc<dyn InfoApi>,
}

impl InfoClient {
    /// Establish a session against the selected deployment
    pub fn new(network: Network) -> Result<Self> {
        let api = block_on(HyperliquidInfoApi::connect(network))??;
        Ok(Self::with_api(network, Arc::new(api)))
    }

    /// Build a client over an injected capability
    pub fn with_api(network: Network, api: Arc<dyn InfoApi>) -> Self {
        Self { network, api }
    }

    /// Underlying async capability, for callers already inside a runtime
    pub fn api(&self) -> Arc<dyn InfoApi> {
        Arc::clone(&self.api)
    }
}

#[cfg_attr(feature = "uniffi", uniffi::export)]
impl InfoClient {
    pub fn network(&self) -> Network {
        self.network
    }

    /// Mid price per asset symbol
    pub fn get_all_mids(&self) -> Result<HashMap<String, String>, BindingError> {
        debug!(network = %self.network, "get_all_mids");
        block_on(self.api.all_mids())?
    }

    pub fn get_user_state(&self, address: String) -> Result<UserState, BindingError> {
        let address = parse_address(&address)?;
        debug!(network = %self.network, %address, "get_user_state");
        block_on(self.api.user_state(address))?
    }

    /// Open orders for an account; empty when none rest on the book
    pub fn get_open_orders(&self, address: String) -> Result<Vec<OpenOrder>, BindingError> {
        let address = parse_address(&address)?;
        debug!(network = %self.network, %address, "get_open_orders");
        block_on(self.api.open_orders(address))?
    }

    pub fn get_user_balances(&self, address: String) -> Result<Vec<UserBalance>, BindingError> {
        let address = parse_address(&address)?;
        debug!(network = %self.network, %address, "get_user_balances");
        block_on(self.api.user_balances(address))?
    }
}

impl fmt::Debug for InfoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoClient")
            .field("network", &self.network)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::MockExchange;

    const WALLET: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

    fn client() -> InfoClient {
        let venue = MockExchange::new(WALLET.parse().unwrap()).with_mid("ETH", "3000.5");
        InfoClient::with_api(Network::Testnet, Arc::new(venue))
    }

    #[test]
    fn test_get_all_mids() {
        let mids = client().get_all_mids().unwrap();
        assert_eq!(mids.get("ETH").map(String::as_str), Some("3000.5"));
    }

    #[test]
    fn test_malformed_address_fails_before_round_trip() {
        let err = client().get_user_state("0xnot-an-address".to_string()).unwrap_err();
        assert!(matches!(err, BindingError::InvalidInput { .. }));
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(
            format!("{:?}", client()),
            "InfoClient { network: Testnet, .. }"
        );
    }
}
