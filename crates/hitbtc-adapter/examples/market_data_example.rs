/*
[INPUT]:  Symbol identifier (e.g., "ETHBTC")
[OUTPUT]: Market data (server time, ticker, order book, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use hitbtc_adapter::*;

/// Example: Query market data (no authentication required)
///
/// Set `HITBTC_SANDBOX=1` to query the demo environment.
#[tokio::main]
async fn main() {
    println!("=== HitBTC Market Data Example ===\n");

    let use_sandbox = std::env::var("HITBTC_SANDBOX").is_ok_and(|value| value == "1");
    let client = match HitbtcClient::new(ClientOptions::public().sandbox(use_sandbox)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created against {}\n", client.base_url());

    let symbol = "ETHBTC";

    println!("Querying server time...");
    match client.get_server_time().await.into_result() {
        Ok(time) => println!("✓ Server time: {}", time.timestamp),
        Err(e) => println!("✗ Error: {:?}", e),
    }

    println!("\nQuerying ticker for {}...", symbol);
    match client.get_ticker(symbol).await {
        ApiResult::Success(ticker) => println!("✓ Ticker: {}", ticker),
        ApiResult::Failure(e) => println!("✗ Error: {:?}", e),
    }

    println!("\nQuerying order book for {}...", symbol);
    match client.get_order_book(symbol).await {
        ApiResult::Success(book) => {
            for side in ["asks", "bids"] {
                let best = book.get(side).and_then(|levels| levels.first());
                match best {
                    Some(level) => {
                        println!("✓ Best {}: {} @ {}", side, level.volume, level.price)
                    }
                    None => println!("✓ No {}", side),
                }
            }
        }
        ApiResult::Failure(e) => println!("✗ Error: {:?}", e),
    }

    println!("\nQuerying recent trades for {}...", symbol);
    let params = ParameterMap::new().with("max_results", 5);
    match client.get_recent_trades(symbol, params).await {
        ApiResult::Success(trades) => println!("✓ Trades: {}", trades),
        ApiResult::Failure(e) => println!("✗ Error: {:?}", e),
    }

    println!("\n✓ Market data example complete");
}
