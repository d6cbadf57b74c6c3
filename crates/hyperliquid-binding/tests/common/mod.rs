/*
[INPUT]:  Test environment (.env / HYPERLIQUID_PRIVATE_KEY) and fixture needs
[OUTPUT]: Shared fixtures, mock venue builders and credential lookup
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for hyperliquid-binding tests

use std::sync::Arc;

use hyperliquid_binding::MockExchange;

/// Secret scalar 1: valid secp256k1 key with no economic meaning
#[allow(dead_code)]
pub const KEY_ONE: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";

/// Address derived from [`KEY_ONE`]
pub const KEY_ONE_ADDRESS: &str = "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf";

/// Mock venue funded for [`KEY_ONE_ADDRESS`] with ETH and BTC mids
#[allow(dead_code)]
pub fn mock_venue() -> Arc<MockExchange> {
    let wallet = KEY_ONE_ADDRESS.parse().expect("fixture address");
    Arc::new(
        MockExchange::new(wallet)
            .with_mid("ETH", "3000.0")
            .with_mid("BTC", "65000.0")
            .with_balance("USDC", 0.0, 10_000.0),
    )
}

/// Private key for live tests, from the environment or a local `.env`
/// (`HYPERLIQUID_PRIVATE_KEY=` or `privateKey=`)
#[allow(dead_code)]
pub fn live_private_key() -> Option<String> {
    dotenvy::dotenv().ok();
    ["HYPERLIQUID_PRIVATE_KEY", "privateKey"]
        .iter()
        .find_map(|name| std::env::var(name).ok())
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}
