/*
[INPUT]:  Wall clock (or a test-supplied sequence)
[OUTPUT]: Millisecond nonces, non-decreasing within a process
[POS]:    Auth layer - replay protection input for request signatures
[UPDATE]: When the nonce unit or monotonicity guarantee changes
*/

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of per-request nonces.
pub trait NonceSource: Send + Sync + Debug {
    fn next_nonce(&self) -> u64;
}

/// Wall-clock nonce in milliseconds.
///
/// Keeps an atomic high-water mark so a clock step backwards never yields a
/// smaller nonce than one already handed out.
#[derive(Debug, Default)]
pub struct SystemClockNonce {
    last: AtomicU64,
}

impl SystemClockNonce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for SystemClockNonce {
    fn next_nonce(&self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let previous = self.last.fetch_max(now, Ordering::AcqRel);
        previous.max(now)
    }
}

/// Always returns the same nonce
#[derive(Debug, Clone, Copy)]
pub struct FixedNonce(pub u64);

impl NonceSource for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

/// Counts up from a starting value, one per call
#[derive(Debug)]
pub struct SequenceNonce {
    next: AtomicU64,
}

impl SequenceNonce {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl NonceSource for SequenceNonce {
    fn next_nonce(&self) -> u64 {
        self.next.fetch_add(1, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_non_decreasing() {
        let source = SystemClockNonce::new();
        let mut previous = source.next_nonce();
        for _ in 0..1_000 {
            let current = source.next_nonce();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_system_clock_ignores_backwards_steps() {
        let source = SystemClockNonce::new();
        let far_future = u64::MAX / 2;
        source.last.store(far_future, Ordering::SeqCst);
        assert_eq!(source.next_nonce(), far_future);
    }

    #[test]
    fn test_system_clock_is_milliseconds() {
        let nonce = SystemClockNonce::new().next_nonce();
        // 2020-01-01 in ms; a seconds or microseconds clock would miss this window
        assert!(nonce > 1_577_836_800_000);
        assert!(nonce < 10_000_000_000_000);
    }

    #[test]
    fn test_sequence_nonce_counts_up() {
        let source = SequenceNonce::starting_at(5);
        assert_eq!(source.next_nonce(), 5);
        assert_eq!(source.next_nonce(), 6);
        assert_eq!(FixedNonce(42).next_nonce(), 42);
    }
}
