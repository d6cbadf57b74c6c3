/*
[INPUT]:  Network selector chosen by the caller ("mainnet" / "testnet")
[OUTPUT]: Typed deployment selector and its API base URL
[POS]:    Marshalling layer - network selection
[UPDATE]: When adding deployments or changing endpoint URLs
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BindingError;

/// Base URLs for Hyperliquid deployments
const MAINNET_API_URL: &str = "https://api.hyperliquid.xyz";
const TESTNET_API_URL: &str = "https://api.hyperliquid-testnet.xyz";

/// Exchange deployment a client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
}

impl Network {
    pub fn api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_API_URL,
            Network::Testnet => TESTNET_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(BindingError::invalid_input(format!(
                "unknown network selector {other:?}, expected \"mainnet\" or \"testnet\""
            ))),
        }
    }
}
