/// Lifecycle phases of one streaming session.
///
/// Normal flow is `Idle → Sending → Streaming → Completing → Idle`.
/// `Cancelled` is reachable from `Sending` or `Streaming` via an external
/// cancellation signal and is a normal terminal state, not a failure.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    /// Request issued; no chunk received yet.
    Sending,
    /// At least one chunk of the response has arrived.
    Streaming,
    /// End-of-body or the done sentinel observed; flushing and segmenting.
    Completing,
    /// Externally cancelled. Undisplayed content is discarded from the
    /// consumer's perspective.
    Cancelled,
}
