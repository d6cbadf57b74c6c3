/*
[INPUT]:  Mock venue behind the InfoApi capability
[OUTPUT]: Test results for the info client façade
[POS]:    Integration tests - read-only client
[UPDATE]: When info queries change
*/

mod common;

use common::{mock_venue, KEY_ONE_ADDRESS};
use hyperliquid_binding::{BindingError, InfoClient, Network};
use rstest::rstest;
use tokio_test::{assert_err, assert_ok};

#[rstest]
#[case(Network::Mainnet)]
#[case(Network::Testnet)]
fn test_info_client_construction(#[case] network: Network) {
    let client = InfoClient::with_api(network, mock_venue());
    assert_eq!(client.network(), network);
}

#[test]
fn test_all_mids_contains_numeric_price() {
    let client = InfoClient::with_api(Network::Testnet, mock_venue());
    let mids = assert_ok!(client.get_all_mids());

    let eth = mids.get("ETH").expect("ETH mid");
    let price: f64 = assert_ok!(eth.parse());
    assert!(price > 0.0);
}

#[test]
fn test_user_state_for_known_account() {
    let client = InfoClient::with_api(Network::Testnet, mock_venue());
    let state = assert_ok!(client.get_user_state(KEY_ONE_ADDRESS.to_lowercase()));

    assert_eq!(state.address, KEY_ONE_ADDRESS);
    assert_eq!(state.equity, state.account_value);
    assert_eq!(state.total_margin_used, 0.0);
}

#[rstest]
#[case("")]
#[case("0x1234")]
#[case("definitely-not-an-address")]
fn test_user_state_rejects_malformed_address(#[case] address: &str) {
    let client = InfoClient::with_api(Network::Testnet, mock_venue());
    let err = assert_err!(client.get_user_state(address.to_string()));
    assert!(matches!(err, BindingError::InvalidInput { .. }));
}

#[test]
fn test_user_state_for_unknown_account_is_api_error() {
    let client = InfoClient::with_api(Network::Testnet, mock_venue());
    let err = assert_err!(
        client.get_user_state("0x0000000000000000000000000000000000000001".to_string())
    );
    assert!(matches!(err, BindingError::Api { .. }));
}

#[test]
fn test_open_orders_empty_when_none() {
    let client = InfoClient::with_api(Network::Testnet, mock_venue());
    let orders = assert_ok!(client.get_open_orders(KEY_ONE_ADDRESS.to_string()));
    assert!(orders.is_empty());
}

#[test]
fn test_user_balances() {
    let client = InfoClient::with_api(Network::Testnet, mock_venue());
    let balances = assert_ok!(client.get_user_balances(KEY_ONE_ADDRESS.to_string()));

    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].token, "USDC");
    assert_eq!(balances[0].total, 10_000.0);
}

#[test]
fn test_transport_failure_is_surfaced() {
    let venue = mock_venue();
    let client = InfoClient::with_api(Network::Testnet, venue.clone());

    tokio_test::block_on(venue.set_offline(true));

    let err = assert_err!(client.get_all_mids());
    assert!(err.is_transport_error());
    let err = assert_err!(client.get_open_orders(KEY_ONE_ADDRESS.to_string()));
    assert!(err.is_transport_error());
}
