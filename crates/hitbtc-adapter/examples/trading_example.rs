/*
[INPUT]:  API key/secret from the environment and order parameters
[OUTPUT]: Balances, order placement and cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use hitbtc_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Trading operations (requires API key + HMAC signature)
///
/// Reads `HITBTC_API_KEY` and `HITBTC_API_SECRET` and runs against the demo
/// environment.
#[tokio::main]
async fn main() {
    println!("=== HitBTC Trading Example ===\n");

    let options = ClientOptions {
        api_key: std::env::var("HITBTC_API_KEY").ok(),
        api_secret: std::env::var("HITBTC_API_SECRET").ok(),
        use_sandbox: true,
    };
    let client = match HitbtcClient::new(options) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    if !client.has_credentials() {
        println!("HITBTC_API_KEY / HITBTC_API_SECRET not set.");
        match client.get_my_balance().await {
            Err(e) => println!("✗ Expected usage error: {}", e),
            Ok(_) => println!("✗ Unexpected response without credentials"),
        }
        return;
    }
    println!("✓ Signed client created against {}", client.base_url());

    println!("\nQuerying trading balance...");
    match client.get_my_balance().await {
        Ok(ApiResult::Success(balances)) => {
            for (currency, record) in balances.get("balance").into_iter().flatten() {
                println!("  {}: cash={} reserved={}", currency, record.cash, record.reserved);
            }
        }
        Ok(ApiResult::Failure(e)) => println!("✗ Error: {:?}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    let mut order = NewOrder::limit(
        "ETHBTC",
        Side::Buy,
        Decimal::from_str("0.01").unwrap_or_default(),
        Decimal::from_str("0.001").unwrap_or_default(),
    );
    order.time_in_force = Some(TimeInForce::Gtc);
    let client_order_id = generate_client_order_id();
    order.client_order_id = Some(client_order_id.clone());

    println!("\nPlacing order {}...", client_order_id);
    match client.place_order(order).await {
        Ok(ApiResult::Success(report)) => println!("✓ Execution report: {}", report),
        Ok(ApiResult::Failure(e)) => println!("✗ Error: {:?}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nCancelling order {}...", client_order_id);
    let mut cancel = CancelOrder::new(client_order_id);
    cancel.symbol = Some("ETHBTC".to_string());
    cancel.side = Some(Side::Buy);
    match client.cancel_order(cancel).await {
        Ok(ApiResult::Success(report)) => println!("✓ Cancel report: {}", report),
        Ok(ApiResult::Failure(e)) => println!("✗ Error: {:?}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
