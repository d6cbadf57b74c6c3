/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Hyperliquid binding crate surface
[POS]:    Crate root - module wiring and UniFFI scaffolding
[UPDATE]: When public modules or exports change
*/

//! Bindings over `hyperliquid_rust_sdk` for mobile and desktop hosts.
//!
//! Two blocking façades, [`InfoClient`] and [`ExchangeClient`], forward each
//! call to the SDK through the [`InfoApi`] / [`ExchangeApi`] capabilities and
//! marshal the result into plain records. Build with `--features uniffi` to
//! export them to Kotlin, Swift and Python.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod network;
pub mod runtime;
pub mod sdk;
pub mod signer;
pub mod types;

mod convert;

#[cfg(feature = "uniffi")]
mod ffi;

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

pub use client::{ExchangeClient, InfoClient};
pub use config::ExchangeConfig;
pub use error::{BindingError, Result};
pub use logging::init_logging;
pub use network::Network;
pub use sdk::{ExchangeApi, HyperliquidExchangeApi, HyperliquidInfoApi, InfoApi, MockExchange};
pub use signer::WalletKey;

// Re-export all types
pub use types::*;
