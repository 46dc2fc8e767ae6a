/*
[INPUT]:  WebSocket test scenarios against a local stream server
[OUTPUT]: Test results for the realtime feed
[POS]:    Integration tests - WebSocket
[UPDATE]: When WebSocket client changes
*/

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use hitbtc_adapter::{FeedMessage, HitbtcError, RealtimeFeed};
use tokio::net::TcpListener;
use tokio::time::timeout;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

const WAIT: Duration = Duration::from_secs(5);

/// Serve one connection that pushes `frames` and then waits for the client
async fn serve_frames(frames: Vec<&'static str>, close_after: bool) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(stream).await.expect("handshake");
        for frame in frames {
            ws.send(Message::Text(frame.to_string().into()))
                .await
                .expect("send frame");
        }
        if close_after {
            let _ = ws.close(None).await;
        }
        while let Some(Ok(_)) = ws.next().await {}
    });

    format!("ws://{addr}")
}

#[test]
fn test_feed_creation() {
    let mut feed = RealtimeFeed::new(false);
    assert_eq!(feed.url(), "ws://api.hitbtc.com:80");
    assert!(feed.take_receiver().is_some());
}

#[test]
fn test_feed_receiver_take_once() {
    let mut feed = RealtimeFeed::new(true);
    assert!(feed.take_receiver().is_some());
    assert!(feed.take_receiver().is_none());
}

#[tokio::test]
async fn test_only_subscribed_symbols_are_delivered() {
    let url = serve_frames(
        vec![
            r#"{"MarketDataSnapshotFullRefresh":{"symbol":"BTCUSD","ask":[],"bid":[]}}"#,
            r#"{"heartbeat":true}"#,
            r#"{"MarketDataIncrementalRefresh":{"symbol":"ETHBTC","ask":[{"price":"0.05","size":2}],"bid":[]}}"#,
        ],
        false,
    )
    .await;

    let mut feed = RealtimeFeed::with_url(url);
    let mut rx = feed.take_receiver().expect("receiver");
    feed.subscribe("ETHBTC").await;
    feed.connect().await.expect("connect");
    assert!(feed.is_connected().await);

    let message = timeout(WAIT, rx.recv())
        .await
        .expect("message before timeout")
        .expect("channel open");

    assert_eq!(message.symbol(), Some("ETHBTC"));
    assert!(matches!(message, FeedMessage::IncrementalRefresh { .. }));

    feed.disconnect().await;
    assert!(!feed.is_connected().await);
}

#[tokio::test]
async fn test_second_connect_is_rejected() {
    let url = serve_frames(Vec::new(), false).await;
    let feed = RealtimeFeed::with_url(url);

    feed.connect().await.expect("connect");
    let err = feed.connect().await.expect_err("already connected");
    assert!(matches!(err, HitbtcError::WebSocket(_)));

    feed.disconnect().await;
}

#[tokio::test]
async fn test_server_close_marks_feed_disconnected() {
    let url = serve_frames(Vec::new(), true).await;
    let feed = RealtimeFeed::with_url(url);
    feed.connect().await.expect("connect");

    let disconnected = timeout(WAIT, async {
        while feed.is_connected().await {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await;
    assert!(disconnected.is_ok());
}

#[tokio::test]
async fn test_connect_failure_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let feed = RealtimeFeed::with_url(format!("ws://{addr}"));
    let err = feed.connect().await.expect_err("nothing listening");
    assert!(matches!(err, HitbtcError::WebSocket(_)));
    assert!(!feed.is_connected().await);
}

#[tokio::test]
async fn test_disconnect_with_undrained_receiver_closes_socket() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (closed_tx, closed_rx) = tokio::sync::oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.expect("accept");
        let mut ws = accept_async(stream).await.expect("handshake");
        let frame = r#"{"MarketDataIncrementalRefresh":{"symbol":"ETHBTC","ask":[],"bid":[]}}"#;
        for _ in 0..150 {
            if ws.send(Message::Text(frame.to_string().into())).await.is_err() {
                break;
            }
        }
        while let Some(Ok(_)) = ws.next().await {}
        let _ = closed_tx.send(());
    });

    // The receiver is never taken, so the channel fills up
    let feed = RealtimeFeed::with_url(format!("ws://{addr}"));
    feed.subscribe("ETHBTC").await;
    feed.connect().await.expect("connect");
    tokio::time::sleep(Duration::from_millis(200)).await;

    feed.disconnect().await;

    let closed = timeout(WAIT, closed_rx).await;
    assert!(matches!(closed, Ok(Ok(()))));
}
