/*
[INPUT]:  Network selector and optional vault address
[OUTPUT]: Exchange client configuration
[POS]:    Configuration layer - exchange client setup
[UPDATE]: When adding construction options forwarded to the SDK
*/

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::convert::parse_address;
use crate::error::Result;
use crate::network::Network;

/// Exchange client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExchangeConfig {
    /// Deployment to trade against
    #[serde(default)]
    pub network: Network,
    /// Trade on behalf of a vault or subaccount the signer is an agent for
    #[serde(default)]
    pub vault_address: Option<String>,
}

impl ExchangeConfig {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            vault_address: None,
        }
    }

    pub fn with_vault_address(mut self, vault_address: impl Into<String>) -> Self {
        self.vault_address = Some(vault_address.into());
        self
    }

    pub(crate) fn parsed_vault_address(&self) -> Result<Option<Address>> {
        self.vault_address
            .as_deref()
            .map(parse_address)
            .transpose()
    }
}
