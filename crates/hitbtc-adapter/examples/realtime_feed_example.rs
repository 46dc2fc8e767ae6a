/*
[INPUT]:  Stream URL and symbols to follow
[OUTPUT]: Real-time order book snapshots and increments
[POS]:    Examples - WebSocket stream handling
[UPDATE]: When WebSocket API changes
*/

use hitbtc_adapter::*;
use tokio::time::{Duration, timeout};

/// Example: Follow the market-data stream for one symbol
#[tokio::main]
async fn main() {
    println!("=== HitBTC Realtime Feed Example ===\n");

    let mut feed = RealtimeFeed::new(false);
    let mut receiver = match feed.take_receiver() {
        Some(rx) => rx,
        None => {
            eprintln!("Receiver already taken");
            return;
        }
    };

    feed.subscribe("ETHBTC").await;
    if let Err(e) = feed.connect().await {
        eprintln!("Failed to connect to {}: {}", feed.url(), e);
        return;
    }
    println!("✓ Connected to {}", feed.url());

    println!("\nReading messages for 10 seconds...");
    let _ = timeout(Duration::from_secs(10), async {
        while let Some(message) = receiver.recv().await {
            println!("  [{}] {}", message.kind(), message.symbol().unwrap_or("-"));
        }
    })
    .await;

    feed.disconnect().await;
    println!("\n✓ Realtime feed example complete");
}
