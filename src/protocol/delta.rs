use super::types::ChunkPayload;

/// SSE field prefix for data-bearing lines.
const DATA_PREFIX: &str = "data:";

/// Payload value signalling explicit end-of-content, distinct from the
/// transport simply closing the body. Both are completion signals.
const DONE_SENTINEL: &str = "[DONE]";

/// What one event line contributes to the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// An incremental text fragment.
    Token(String),
    /// The explicit end-of-content sentinel.
    Done,
    /// Nothing — blank line, comment, unrecognized field, or a valid
    /// payload carrying no token. Routine in this protocol family.
    Ignored,
    /// A data-bearing line whose payload failed to decode. Treated exactly
    /// like `Ignored` except callers may surface it as a diagnostic.
    Malformed(String),
}

/// Extract the contribution of a single event line.
///
/// Never fails: decode errors are swallowed here by design, since partial
/// and non-data lines are expected during normal operation. Zero-length
/// tokens are dropped silently.
pub fn extract(line: &str) -> LineEvent {
    let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
        return LineEvent::Ignored;
    };
    let payload = payload.strip_prefix(' ').unwrap_or(payload);

    if payload.trim() == DONE_SENTINEL {
        return LineEvent::Done;
    }

    match serde_json::from_str::<ChunkPayload>(payload) {
        Ok(chunk) => match chunk.content() {
            Some(text) if !text.is_empty() => LineEvent::Token(text.to_string()),
            _ => LineEvent::Ignored,
        },
        Err(e) => LineEvent::Malformed(e.to_string()),
    }
}
