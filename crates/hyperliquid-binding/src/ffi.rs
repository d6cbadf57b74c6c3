/*
[INPUT]:  Foreign calls (Kotlin, Swift, Python) through UniFFI
[OUTPUT]: Shared client handles and crate-level entry points
[POS]:    FFI layer - constructors and free functions exported with `uniffi`
[UPDATE]: When adding exported constructors or top-level functions
*/

use std::sync::Arc;

use crate::client::{ExchangeClient, InfoClient};
use crate::config::ExchangeConfig;
use crate::error::{BindingError, Result};
use crate::network::Network;

#[uniffi::export]
impl InfoClient {
    #[uniffi::constructor]
    pub fn create(network: Network) -> Result<Arc<Self>, BindingError> {
        Self::new(network).map(Arc::new)
    }
}

#[uniffi::export]
impl ExchangeClient {
    #[uniffi::constructor]
    pub fn create(private_key: String, network: Network) -> Result<Arc<Self>, BindingError> {
        Self::new(&private_key, network).map(Arc::new)
    }

    #[uniffi::constructor]
    pub fn create_with_config(
        private_key: String,
        config: ExchangeConfig,
    ) -> Result<Arc<Self>, BindingError> {
        Self::with_config(&private_key, config).map(Arc::new)
    }
}

#[uniffi::export]
pub fn create_info_client(network: Network) -> Result<Arc<InfoClient>, BindingError> {
    InfoClient::create(network)
}

#[uniffi::export]
pub fn create_exchange_client(
    private_key: String,
    network: Network,
) -> Result<Arc<ExchangeClient>, BindingError> {
    ExchangeClient::create(private_key, network)
}

/// Route crate logs to stdout with the given filter directive
#[uniffi::export]
pub fn init_logging(filter: String) -> Result<(), BindingError> {
    crate::logging::init_logging(&filter)
}

/// Parse "mainnet" / "testnet" for hosts that carry the selector as text
#[uniffi::export]
pub fn parse_network(selector: String) -> Result<Network, BindingError> {
    selector.parse()
}
