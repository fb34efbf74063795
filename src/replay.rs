//! Feeds a captured event stream through the transport contract.
//!
//! Replays a recorded response body as a sequence of chunks, optionally
//! sleeping between them to simulate network cadence. Chunk boundaries are
//! arbitrary with respect to line boundaries — exactly like a live body.

use std::time::Duration;

use bytes::Bytes;
use futures::stream::{self, BoxStream};

use crate::error::StreamError;

/// How a capture is cut into chunks during replay.
#[derive(Debug, Clone, Copy)]
pub struct ReplayConfig {
    /// Size of each chunk in bytes (the last chunk may be shorter).
    pub chunk_bytes: usize,
    /// Pause before each chunk after the first.
    pub chunk_delay: Duration,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: 64,
            chunk_delay: Duration::from_millis(40),
        }
    }
}

/// Cut a capture into a chunk stream satisfying the transport contract.
pub fn chunk_stream(
    data: Vec<u8>,
    config: ReplayConfig,
) -> BoxStream<'static, Result<Bytes, StreamError>> {
    let data = Bytes::from(data);
    let chunk_bytes = config.chunk_bytes.max(1);
    Box::pin(stream::unfold(0usize, move |offset| {
        let data = data.clone();
        async move {
            if offset >= data.len() {
                return None;
            }
            if offset > 0 && !config.chunk_delay.is_zero() {
                tokio::time::sleep(config.chunk_delay).await;
            }
            let end = (offset + chunk_bytes).min(data.len());
            Some((Ok(data.slice(offset..end)), end))
        }
    }))
}
