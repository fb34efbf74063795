//! Decouples bursty token arrival from a steady character reveal rate.
//!
//! Tokens land in the accumulation immediately; a frame-paced scheduler
//! (the session controller's tick) then moves a bounded number of
//! characters per tick across the revealed boundary. Nothing is ever
//! dropped: if the producer outpaces the consumer, the reveal just lags
//! until flush.

use std::time::Duration;

/// Tunable reveal parameters.
///
/// The defaults (4 chars per 16 ms tick, ~250 chars/s) keep the reveal
/// readable while finishing a normal-length response shortly after
/// generation completes.
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    /// Maximum characters moved to the displayed prefix per tick.
    pub chars_per_tick: usize,
    /// Interval between scheduler ticks (one tick ≈ one rendering frame).
    pub tick_interval: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            chars_per_tick: 4,
            tick_interval: Duration::from_millis(16),
        }
    }
}

/// The undisplayed-character queue between the transport-read path and the
/// reveal tick.
///
/// Holds the full accumulated text (the source of truth for what has been
/// generated) and the boundary of the revealed prefix (what has been
/// displayed). The queue is the unrevealed suffix. The displayed prefix is
/// built strictly in character order and never shrinks within a session.
#[derive(Debug, Default)]
pub struct PacingBuffer {
    accumulated: String,
    /// Byte offset of the revealed boundary into `accumulated`. Always on
    /// a char boundary.
    revealed_bytes: usize,
    revealed_chars: usize,
}

impl PacingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to the accumulation. Does not reveal anything.
    pub fn push(&mut self, token: &str) {
        self.accumulated.push_str(token);
    }

    /// Move up to `max_chars` characters across the revealed boundary.
    ///
    /// Returns the new displayed text if the boundary advanced, `None` on
    /// an empty queue (no reveal this tick).
    pub fn reveal(&mut self, max_chars: usize) -> Option<&str> {
        if max_chars == 0 || self.revealed_bytes == self.accumulated.len() {
            return None;
        }
        let rest = &self.accumulated[self.revealed_bytes..];
        let mut advance = rest.len();
        let mut taken = 0;
        for (i, _) in rest.char_indices() {
            if taken == max_chars {
                advance = i;
                break;
            }
            taken += 1;
        }
        self.revealed_bytes += advance;
        self.revealed_chars += taken;
        Some(&self.accumulated[..self.revealed_bytes])
    }

    /// Reveal the entire remaining queue in one step, bypassing the rate
    /// limit. Returns the full accumulated text; afterwards zero characters
    /// remain queued.
    pub fn flush(&mut self) -> &str {
        let rest = &self.accumulated[self.revealed_bytes..];
        self.revealed_chars += rest.chars().count();
        self.revealed_bytes = self.accumulated.len();
        &self.accumulated
    }

    /// Everything generated so far, displayed or not.
    pub fn accumulated(&self) -> &str {
        &self.accumulated
    }

    /// The revealed prefix.
    pub fn displayed(&self) -> &str {
        &self.accumulated[..self.revealed_bytes]
    }

    /// Characters revealed so far.
    pub fn displayed_chars(&self) -> usize {
        self.revealed_chars
    }

    /// Characters queued but not yet revealed.
    pub fn pending_chars(&self) -> usize {
        self.accumulated[self.revealed_bytes..].chars().count()
    }

    /// Clear all state. Must be called before a new session consumes its
    /// stream, so prior content can't leak into it.
    pub fn reset(&mut self) {
        self.accumulated.clear();
        self.revealed_bytes = 0;
        self.revealed_chars = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_rate_limited() {
        let mut buf = PacingBuffer::new();
        buf.push("hello world");
        assert_eq!(buf.reveal(5), Some("hello"));
        assert_eq!(buf.reveal(5), Some("hello worl"));
        assert_eq!(buf.reveal(5), Some("hello world"));
        assert_eq!(buf.reveal(5), None);
    }

    #[test]
    fn empty_queue_yields_no_reveal() {
        let mut buf = PacingBuffer::new();
        assert_eq!(buf.reveal(10), None);
        buf.push("ab");
        buf.flush();
        assert_eq!(buf.reveal(10), None);
    }

    #[test]
    fn displayed_never_exceeds_accumulated() {
        let mut buf = PacingBuffer::new();
        let mut last = 0;
        for i in 0..20 {
            if i % 3 == 0 {
                buf.push("abcdefg");
            }
            buf.reveal(2);
            let shown = buf.displayed_chars();
            assert!(shown >= last, "displayed length must be non-decreasing");
            assert!(shown <= buf.accumulated().chars().count());
            last = shown;
        }
    }

    #[test]
    fn flush_empties_queue_in_one_step() {
        let mut buf = PacingBuffer::new();
        buf.push("a long stretch of text");
        buf.reveal(3);
        assert_eq!(buf.flush(), "a long stretch of text");
        assert_eq!(buf.pending_chars(), 0);
        assert_eq!(buf.displayed(), buf.accumulated());
    }

    #[test]
    fn flush_on_empty_buffer() {
        let mut buf = PacingBuffer::new();
        assert_eq!(buf.flush(), "");
        assert_eq!(buf.pending_chars(), 0);
    }

    #[test]
    fn reveal_counts_chars_not_bytes() {
        let mut buf = PacingBuffer::new();
        buf.push("héllo");
        // 'h' + 'é' = 3 bytes but 2 chars
        assert_eq!(buf.reveal(2), Some("hé"));
        assert_eq!(buf.displayed_chars(), 2);
        assert_eq!(buf.reveal(100), Some("héllo"));
    }

    #[test]
    fn tokens_append_in_arrival_order() {
        let mut buf = PacingBuffer::new();
        buf.push("Hel");
        buf.push("lo");
        assert_eq!(buf.accumulated(), "Hello");
        assert_eq!(buf.displayed(), "");
    }

    #[test]
    fn reset_clears_everything() {
        let mut buf = PacingBuffer::new();
        buf.push("stale");
        buf.reveal(2);
        buf.reset();
        assert_eq!(buf.accumulated(), "");
        assert_eq!(buf.displayed(), "");
        assert_eq!(buf.displayed_chars(), 0);
        buf.push("fresh");
        assert_eq!(buf.reveal(5), Some("fresh"));
    }

    #[test]
    fn zero_rate_reveals_nothing() {
        let mut buf = PacingBuffer::new();
        buf.push("text");
        assert_eq!(buf.reveal(0), None);
        assert_eq!(buf.displayed(), "");
    }
}
