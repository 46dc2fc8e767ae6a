/*
[INPUT]:  Stream URL and symbol subscriptions
[OUTPUT]: Real-time market data messages
[POS]:    WebSocket layer - real-time data streams
[UPDATE]: When adding new streams or changing connection logic
*/

pub mod client;
pub mod message;

pub use client::RealtimeFeed;
pub use message::FeedMessage;
