/*
[INPUT]:  Network selector (first CLI argument, default "mainnet")
[OUTPUT]: Console output of mid prices
[POS]:    Examples - read-only info client
[UPDATE]: When info client API changes
*/

use hyperliquid_binding::{init_logging, InfoClient, Network};

fn main() {
    println!("=== Hyperliquid Market Data Example ===\n");

    if let Err(e) = init_logging("info") {
        eprintln!("Failed to init logging: {}", e);
    }

    let network = match std::env::args().nth(1).unwrap_or_else(|| "mainnet".to_string()).parse::<Network>() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let client = match InfoClient::new(network) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create info client: {}", e);
            return;
        }
    };
    println!("✓ Info client created ({})", network);

    match client.get_all_mids() {
        Ok(mids) => {
            let mut symbols: Vec<_> = mids.keys().filter(|s| !s.starts_with('@')).collect();
            symbols.sort();
            println!("\n{} assets, first 10:", symbols.len());
            for symbol in symbols.into_iter().take(10) {
                println!("  {:<10} {}", symbol, mids[symbol]);
            }
        }
        Err(e) => eprintln!("Failed to fetch mids: {}", e),
    }
}
