/*
[INPUT]:  HYPERLIQUID_PRIVATE_KEY (env or .env), testnet deployment
[OUTPUT]: Place-then-cancel walkthrough on testnet
[POS]:    Examples - exchange client operations
[UPDATE]: When exchange client API changes
*/

use hyperliquid_binding::{
    init_logging, CancelRequest, ExchangeClient, InfoClient, Network, OrderAck, OrderRequest,
};

fn main() {
    println!("=== Hyperliquid Trading Example (testnet) ===\n");
    if let Err(e) = init_logging("hyperliquid_binding=debug") {
        eprintln!("Failed to init logging: {}", e);
    }
    dotenvy::dotenv().ok();

    let Ok(private_key) = std::env::var("HYPERLIQUID_PRIVATE_KEY") else {
        eprintln!("Set HYPERLIQUID_PRIVATE_KEY to run this example");
        return;
    };

    let exchange = match ExchangeClient::new(&private_key, Network::Testnet) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create exchange client: {}", e);
            return;
        }
    };
    let info = match InfoClient::new(Network::Testnet) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create info client: {}", e);
            return;
        }
    };
    println!("✓ Wallet {}", exchange.get_wallet_address());

    let mid = info
        .get_all_mids()
        .ok()
        .and_then(|mids| mids.get("ETH").and_then(|p| p.parse::<f64>().ok()));
    let Some(mid) = mid else {
        eprintln!("No ETH mid available");
        return;
    };

    let order = OrderRequest::new("ETH", true, 0.01, (mid * 0.5).round(), false);
    println!("\nPlacing {:?}", order);
    let oid = match exchange.place_order(order) {
        Ok(OrderAck::Resting { oid }) => oid,
        Ok(other) => {
            println!("Order did not rest: {:?}", other);
            return;
        }
        Err(e) => {
            eprintln!("Order rejected: {}", e);
            return;
        }
    };
    println!("✓ Resting with oid {}", oid);

    match exchange.cancel_order(CancelRequest::new("ETH", oid)) {
        Ok(ack) => println!("✓ Cancelled {:?}", ack),
        Err(e) => eprintln!("Cancel failed: {}", e),
    }
}
