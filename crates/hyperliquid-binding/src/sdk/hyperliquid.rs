/*
[INPUT]:  Network selector, validated wallet key, binding request types
[OUTPUT]: SDK round trips marshalled into binding types
[POS]:    SDK seam - production capability backed by hyperliquid_rust_sdk
[UPDATE]: When the wrapped SDK changes its client API or response shapes
*/

use std::collections::HashMap;

use alloy_primitives::Address;
use async_trait::async_trait;
use ethers::types::H160;
use hyperliquid_rust_sdk::{
    BaseUrl, ClientCancelRequest, ClientLimit, ClientOrder, ClientOrderRequest,
    ExchangeClient as SdkExchangeClient, ExchangeDataStatus, ExchangeResponseStatus,
    InfoClient as SdkInfoClient,
};
use tracing::{debug, info};

use crate::convert::{parse_decimal, parse_side};
use crate::error::{BindingError, Result};
use crate::network::Network;
use crate::sdk::{collect_cancel_outcomes, ExchangeApi, InfoApi};
use crate::signer::WalletKey;
use crate::types::{
    CancelAck, CancelRequest, OpenOrder, OrderAck, OrderRequest, UserBalance, UserState,
};

const TIME_IN_FORCE_GTC: &str = "Gtc";

/// The SDK addresses accounts with ethers' `H160`
fn to_h160(address: Address) -> H160 {
    H160(address.0 .0)
}

impl From<Network> for BaseUrl {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => BaseUrl::Mainnet,
            Network::Testnet => BaseUrl::Testnet,
        }
    }
}

/// Info capability over the SDK's `InfoClient`
pub struct HyperliquidInfoApi {
    client: SdkInfoClient,
}

impl HyperliquidInfoApi {
    /// Establish an info session for the selected deployment
    pub async fn connect(network: Network) -> Result<Self> {
        let client = SdkInfoClient::new(None, Some(network.into()))
            .await
            .map_err(|e| session_error(network, e))?;
        info!(%network, "info session established");
        Ok(Self { client })
    }
}

#[async_trait]
impl InfoApi for HyperliquidInfoApi {
    async fn all_mids(&self) -> Result<HashMap<String, String>> {
        let mids = self.client.all_mids().await?;
        debug!(count = mids.len(), "fetched mids");
        Ok(mids)
    }

    async fn user_state(&self, address: Address) -> Result<UserState> {
        let state = self.client.user_state(to_h160(address)).await?;
        let account_value = parse_decimal("accountValue", &state.margin_summary.account_value)?;

        Ok(UserState {
            address: address.to_checksum(None),
            equity: account_value,
            account_value,
            total_margin_used: parse_decimal(
                "totalMarginUsed",
                &state.margin_summary.total_margin_used,
            )?,
            withdrawable: parse_decimal("withdrawable", &state.withdrawable)?,
        })
    }

    async fn open_orders(&self, address: Address) -> Result<Vec<OpenOrder>> {
        let orders = self.client.open_orders(to_h160(address)).await?;
        debug!(%address, count = orders.len(), "fetched open orders");

        orders
            .into_iter()
            .map(|order| {
                Ok(OpenOrder {
                    is_buy: parse_side(&order.side)?,
                    size: parse_decimal("sz", &order.sz)?,
                    price: parse_decimal("limitPx", &order.limit_px)?,
                    oid: order.oid,
                    timestamp: order.timestamp,
                    asset: order.coin,
                })
            })
            .collect()
    }

    async fn user_balances(&self, address: Address) -> Result<Vec<UserBalance>> {
        let response = self.client.user_token_balances(to_h160(address)).await?;

        response
            .balances
            .into_iter()
            .map(|balance| {
                Ok(UserBalance {
                    hold: parse_decimal("hold", &balance.hold)?,
                    total: parse_decimal("total", &balance.total)?,
                    token: balance.coin,
                })
            })
            .collect()
    }
}

/// Exchange capability over the SDK's `ExchangeClient`
///
/// Owns the signing key; it is moved into the SDK client and never copied.
pub struct HyperliquidExchangeApi {
    client: SdkExchangeClient,
    wallet_address: Address,
    account_address: Address,
}

impl HyperliquidExchangeApi {
    /// Establish an exchange session (fetches asset metadata)
    pub async fn connect(
        key: WalletKey,
        network: Network,
        vault_address: Option<Address>,
    ) -> Result<Self> {
        let wallet_address = key.address();
        let account_address = vault_address.unwrap_or(wallet_address);
        let client = SdkExchangeClient::new(
            None,
            key.into_wallet(),
            Some(network.into()),
            None,
            vault_address.map(to_h160),
        )
        .await
        .map_err(|e| session_error(network, e))?;

        info!(
            %network,
            wallet = %wallet_address,
            account = %account_address,
            "exchange session established"
        );
        Ok(Self {
            client,
            wallet_address,
            account_address,
        })
    }
}

#[async_trait]
impl ExchangeApi for HyperliquidExchangeApi {
    fn wallet_address(&self) -> Address {
        self.wallet_address
    }

    fn account_address(&self) -> Address {
        self.account_address
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<OrderAck> {
        let request = ClientOrderRequest {
            asset: order.asset.clone(),
            is_buy: order.is_buy,
            reduce_only: order.reduce_only,
            limit_px: order.price,
            sz: order.size,
            cloid: None,
            order_type: ClientOrder::Limit(ClientLimit {
                tif: TIME_IN_FORCE_GTC.to_string(),
            }),
        };

        let response = self.client.order(request, None).await?;
        let status = statuses(response)?
            .into_iter()
            .next()
            .ok_or_else(|| BindingError::malformed_response("order response carried no status"))?;

        order_ack(status)
    }

    async fn cancel_order(&self, cancel: &CancelRequest) -> Result<CancelAck> {
        let request = ClientCancelRequest {
            asset: cancel.asset.clone(),
            oid: cancel.oid,
        };

        let response = self.client.cancel(request, None).await?;
        let status = statuses(response)?
            .into_iter()
            .next()
            .ok_or_else(|| BindingError::malformed_response("cancel response carried no status"))?;

        cancel_ack(cancel, status)
    }

    async fn bulk_cancel(&self, cancels: Vec<CancelRequest>) -> Result<Vec<CancelAck>> {
        let requests = cancels
            .iter()
            .map(|cancel| ClientCancelRequest {
                asset: cancel.asset.clone(),
                oid: cancel.oid,
            })
            .collect();

        let response = self.client.bulk_cancel(requests, None).await?;
        bulk_cancel_acks(&cancels, response)
    }
}

fn session_error(network: Network, err: hyperliquid_rust_sdk::Error) -> BindingError {
    BindingError::Network {
        message: format!("failed to establish {network} session: {err}"),
    }
}

/// Unwrap the per-order statuses, surfacing a top-level rejection verbatim
fn statuses(response: ExchangeResponseStatus) -> Result<Vec<ExchangeDataStatus>> {
    match response {
        ExchangeResponseStatus::Err(message) => Err(BindingError::Api { message }),
        ExchangeResponseStatus::Ok(response) => response
            .data
            .map(|data| data.statuses)
            .ok_or_else(|| BindingError::malformed_response("exchange response carried no data")),
    }
}

fn order_ack(status: ExchangeDataStatus) -> Result<OrderAck> {
    match status {
        ExchangeDataStatus::Resting(order) => Ok(OrderAck::Resting { oid: order.oid }),
        ExchangeDataStatus::Filled(order) => Ok(OrderAck::Filled {
            oid: order.oid,
            total_size: parse_decimal("totalSz", &order.total_sz)?,
            avg_price: parse_decimal("avgPx", &order.avg_px)?,
        }),
        ExchangeDataStatus::WaitingForFill => Ok(OrderAck::WaitingForFill),
        ExchangeDataStatus::WaitingForTrigger => Ok(OrderAck::WaitingForTrigger),
        ExchangeDataStatus::Error(message) => Err(BindingError::Api { message }),
        ExchangeDataStatus::Success => Ok(OrderAck::Accepted),
    }
}

fn bulk_cancel_acks(
    cancels: &[CancelRequest],
    response: ExchangeResponseStatus,
) -> Result<Vec<CancelAck>> {
    let statuses = statuses(response)?;
    if statuses.len() != cancels.len() {
        return Err(BindingError::malformed_response(format!(
            "bulk cancel returned {} statuses for {} orders",
            statuses.len(),
            cancels.len()
        )));
    }

    let outcomes = cancels
        .iter()
        .zip(statuses)
        .map(|(cancel, status)| cancel_ack(cancel, status))
        .collect();
    collect_cancel_outcomes(cancels, outcomes)
}

fn cancel_ack(cancel: &CancelRequest, status: ExchangeDataStatus) -> Result<CancelAck> {
    match status {
        ExchangeDataStatus::Success => Ok(CancelAck {
            asset: cancel.asset.clone(),
            oid: cancel.oid,
        }),
        ExchangeDataStatus::Error(message) => Err(BindingError::Api { message }),
        other => Err(BindingError::malformed_response(format!(
            "unexpected cancel status {other:?}"
        ))),
    }
}
