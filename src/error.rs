/// Terminal errors for one streaming session.
///
/// Malformed frames are not represented here — they are dropped inside the
/// delta extractor. Cancellation is not represented either: it is a normal
/// outcome (`SessionOutcome::Cancelled`), never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// Connection failure or a non-success status from the remote service.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote service throttled the request. Recoverable: the caller
    /// should retract its optimistically-recorded outgoing message and may
    /// retry later.
    #[error("rate limited by the remote service")]
    RateLimited,

    /// The request succeeded but yielded no readable response body.
    #[error("response had no readable body")]
    MissingBody,
}

impl StreamError {
    /// Whether the caller should unwind optimistic local state (e.g. a
    /// provisionally appended outgoing message) rather than surface a
    /// generic failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StreamError::RateLimited)
    }
}
