/*
[INPUT]:  EVM private key (hex string)
[OUTPUT]: Validated signing key and its wallet address
[POS]:    Auth layer - key validation for the exchange client
[UPDATE]: When key format rules or address formatting change
*/

use std::fmt;

use alloy_primitives::Address;
use ethers::signers::{LocalWallet, Signer};

use crate::error::{BindingError, Result};

const PRIVATE_KEY_HEX_LEN: usize = 64;

/// Signing key held by an exchange client
///
/// The key must be 32 bytes of hex, optionally "0x"-prefixed, and a valid
/// secp256k1 scalar (non-zero and below the curve order), as accepted by the
/// SDK's `LocalWallet`.
pub struct WalletKey {
    wallet: LocalWallet,
}

impl WalletKey {
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let trimmed = private_key.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != PRIVATE_KEY_HEX_LEN {
            return Err(invalid_key(format!(
                "expected {PRIVATE_KEY_HEX_LEN} hex digits, got {}",
                digits.len()
            )));
        }

        let bytes = hex::decode(digits).map_err(|e| invalid_key(e.to_string()))?;
        let wallet = LocalWallet::from_bytes(&bytes)
            .map_err(|e| invalid_key(format!("not a valid secp256k1 secret: {e}")))?;

        Ok(Self { wallet })
    }

    pub fn address(&self) -> Address {
        Address::from(self.wallet.address().to_fixed_bytes())
    }

    /// EIP-55 checksummed wallet address
    pub fn checksum_address(&self) -> String {
        self.address().to_checksum(None)
    }

    pub(crate) fn into_wallet(self) -> LocalWallet {
        self.wallet
    }
}

impl fmt::Debug for WalletKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletKey")
            .field("address", &self.checksum_address())
            .finish_non_exhaustive()
    }
}

fn invalid_key(message: String) -> BindingError {
    BindingError::InvalidPrivateKey { message }
}
