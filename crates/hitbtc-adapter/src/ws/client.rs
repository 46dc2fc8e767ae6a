/*
[INPUT]:  Market stream URL and symbol subscriptions
[OUTPUT]: Real-time market data for subscribed symbols via a channel
[POS]:    WebSocket layer - real-time data stream handling
[UPDATE]: When adding new streams or changing connection logic
*/

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{Mutex, RwLock, mpsc};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{debug, info};

use crate::http::{HitbtcError, Result};
use crate::ws::message::FeedMessage;

const PRODUCTION_STREAM_URL: &str = "ws://api.hitbtc.com:80";
const SANDBOX_STREAM_URL: &str = "ws://demo-api.hitbtc.com:80";
const CHANNEL_CAPACITY: usize = 100;
const PARSE_FAIL_LOG_LIMIT: usize = 3;
const DROP_LOG_LIMIT: usize = 3;
const RAW_LOG_MAX_BYTES: usize = 1024;

static PARSE_FAIL_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);
static DROP_LOG_COUNT: AtomicUsize = AtomicUsize::new(0);

type Subscriptions = Arc<RwLock<HashSet<String>>>;
type Outbound = Arc<Mutex<Option<(u64, mpsc::Sender<WsMessage>)>>>;

/// Market-data stream client.
///
/// The v1 stream pushes every symbol; `subscribe`/`unsubscribe` maintain a
/// client-side filter and only messages for subscribed symbols reach the
/// receiver. Messages arriving while the receiver is full are dropped.
#[derive(Debug)]
pub struct RealtimeFeed {
    url: String,
    message_tx: mpsc::Sender<FeedMessage>,
    message_rx: Option<mpsc::Receiver<FeedMessage>>,
    subscriptions: Subscriptions,
    outbound_tx: Outbound,
    generation: AtomicU64,
}

impl RealtimeFeed {
    /// Feed for the production or sandbox stream
    pub fn new(use_sandbox: bool) -> Self {
        let url = if use_sandbox {
            SANDBOX_STREAM_URL
        } else {
            PRODUCTION_STREAM_URL
        };
        Self::with_url(url)
    }

    /// Feed for an explicit stream URL
    pub fn with_url(url: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            url: url.into(),
            message_tx: tx,
            message_rx: Some(rx),
            subscriptions: Arc::new(RwLock::new(HashSet::new())),
            outbound_tx: Arc::new(Mutex::new(None)),
            generation: AtomicU64::new(0),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the message receiver (only once)
    pub fn take_receiver(&mut self) -> Option<mpsc::Receiver<FeedMessage>> {
        self.message_rx.take()
    }

    /// Start forwarding messages for `symbol`
    pub async fn subscribe(&self, symbol: &str) {
        let added = self.subscriptions.write().await.insert(symbol.to_string());
        if added {
            info!(symbol, "feed subscription added");
        }
    }

    /// Stop forwarding messages for `symbol`
    pub async fn unsubscribe(&self, symbol: &str) {
        let removed = self.subscriptions.write().await.remove(symbol);
        if removed {
            info!(symbol, "feed subscription removed");
        }
    }

    /// Currently subscribed symbols, sorted
    pub async fn subscriptions(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.subscriptions.read().await.iter().cloned().collect();
        symbols.sort();
        symbols
    }

    pub async fn is_connected(&self) -> bool {
        self.outbound_tx.lock().await.is_some()
    }

    /// Open the stream and spawn the reader task
    pub async fn connect(&self) -> Result<()> {
        let mut guard = self.outbound_tx.lock().await;
        if guard.is_some() {
            return Err(HitbtcError::WebSocket("WebSocket already connected".to_string()));
        }

        let (ws_stream, _response) = connect_async(self.url.as_str())
            .await
            .map_err(|e| HitbtcError::WebSocket(format!("connect to {} failed: {e}", self.url)))?;
        let (mut write, mut read) = ws_stream.split();
        let (outbound_tx, mut outbound_rx) = mpsc::channel::<WsMessage>(CHANNEL_CAPACITY);

        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        *guard = Some((generation, outbound_tx));
        drop(guard);

        info!(url = %self.url, "feed connected");

        let message_tx = self.message_tx.clone();
        let subscriptions = self.subscriptions.clone();
        let outbound_state = self.outbound_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    outbound = outbound_rx.recv() => {
                        match outbound {
                            Some(message) => {
                                if write.send(message).await.is_err() {
                                    break;
                                }
                            }
                            None => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break;
                            }
                        }
                    }
                    incoming = read.next() => {
                        match incoming {
                            Some(Ok(WsMessage::Close(_))) => {
                                let _ = write.send(WsMessage::Close(None)).await;
                                break;
                            }
                            Some(Ok(WsMessage::Ping(_))) | Some(Ok(WsMessage::Pong(_))) => {}
                            Some(Ok(message)) => {
                                let Some(parsed) = parse_message(message) else {
                                    continue;
                                };
                                let wanted = match parsed.symbol() {
                                    Some(symbol) => subscriptions.read().await.contains(symbol),
                                    None => false,
                                };
                                if !wanted {
                                    continue;
                                }
                                // Drop rather than block while the receiver is full
                                match message_tx.try_send(parsed) {
                                    Ok(()) => {}
                                    Err(TrySendError::Full(dropped)) => log_drop_once(&dropped),
                                    Err(TrySendError::Closed(_)) => break,
                                }
                            }
                            Some(Err(err)) => {
                                debug!(error = %err, "feed read failed");
                                break;
                            }
                            None => break,
                        }
                    }
                }
            }

            let mut guard = outbound_state.lock().await;
            if matches!(guard.as_ref(), Some((current, _)) if *current == generation) {
                *guard = None;
            }
            info!("feed disconnected");
        });

        Ok(())
    }

    /// Close the stream; a no-op when not connected
    pub async fn disconnect(&self) {
        // Dropping the sender makes the reader task send Close and exit
        let _ = self.outbound_tx.lock().await.take();
    }
}

fn parse_message(message: WsMessage) -> Option<FeedMessage> {
    let text: String = match message {
        WsMessage::Text(text) => text.to_string(),
        WsMessage::Binary(bytes) => String::from_utf8(bytes.to_vec()).ok()?,
        _ => return None,
    };

    match FeedMessage::parse(&text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            log_parse_fail_once(&err, &text);
            None
        }
    }
}

fn log_parse_fail_once(err: &serde_json::Error, raw: &str) {
    let count = PARSE_FAIL_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < PARSE_FAIL_LOG_LIMIT {
        let preview = truncate_for_log(raw, RAW_LOG_MAX_BYTES);
        debug!(
            sample_index = count + 1,
            sample_limit = PARSE_FAIL_LOG_LIMIT,
            error = %err,
            bytes = raw.len(),
            message = %preview,
            "feed message parse failed"
        );
    }
}

fn log_drop_once(message: &FeedMessage) {
    let count = DROP_LOG_COUNT.fetch_add(1, Ordering::Relaxed);
    if count < DROP_LOG_LIMIT {
        debug!(
            sample_index = count + 1,
            sample_limit = DROP_LOG_LIMIT,
            kind = message.kind(),
            symbol = message.symbol().unwrap_or("-"),
            "feed receiver full, message dropped"
        );
    }
}

fn truncate_for_log(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }
    let mut end = max_len;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    let mut out = String::with_capacity(end + 3);
    out.push_str(&value[..end]);
    out.push_str("...");
    out
}
