use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::error::StreamError;
use crate::pacing::{PacingBuffer, PacingConfig};
use crate::protocol::delta::{self, LineEvent};
use crate::protocol::frame::FrameDecoder;
use crate::session::state::SessionStatus;
use crate::sidecar;

/// Rendering collaborator for one session.
///
/// `on_display` receives the full current displayed text (not a diff) on
/// every tick that changed it, and once more at the terminal flush. The
/// implementation is responsible for efficient re-paint.
pub trait DisplaySink {
    fn on_display(&mut self, text: &str);

    /// Diagnostic for a dropped malformed frame. Default: discard.
    fn on_warning(&mut self, _message: &str) {}
}

/// How a session ended (both variants are normal, non-error outcomes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Stream completed; remaining text was flushed and segmented.
    Completed {
        body: String,
        suggestions: Vec<String>,
    },
    /// Externally cancelled. Undisplayed content was discarded, the
    /// scheduler stopped without flushing.
    Cancelled,
}

/// Owns one conversation's streaming state across sessions.
///
/// All mutable session state (accumulation, displayed prefix, pending
/// frame fragment) lives here for the session's lifetime; nothing else
/// retains it across session boundaries. At most one session is live at a
/// time: [`SessionController::begin`] cancels any prior in-flight session
/// before handing out a fresh cancellation token, and a session that ends
/// (completed, cancelled, or failed) releases its token so the next
/// [`SessionController::run`] starts from empty state.
pub struct SessionController {
    pacing: PacingConfig,
    decoder: FrameDecoder,
    buffer: PacingBuffer,
    status: SessionStatus,
    active: Option<CancellationToken>,
}

impl SessionController {
    pub fn new(pacing: PacingConfig) -> Self {
        Self {
            pacing,
            decoder: FrameDecoder::new(),
            buffer: PacingBuffer::new(),
            status: SessionStatus::Idle,
            active: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Start a new session: cancel the prior one if still in flight, clear
    /// all carried state, and return the cancellation token for this
    /// session. The caller passes clones of the token to whatever issues
    /// the transport request, so cancellation also aborts the in-flight
    /// read.
    pub fn begin(&mut self) -> CancellationToken {
        self.cancel();
        self.decoder.reset();
        self.buffer.reset();
        self.status = SessionStatus::Sending;
        let token = CancellationToken::new();
        self.active = Some(token.clone());
        token
    }

    /// Signal cancellation of the active session. Idempotent: cancelling a
    /// completed or already-cancelled session has no effect.
    pub fn cancel(&self) {
        if let Some(ref token) = self.active {
            token.cancel();
        }
    }

    /// Consume one response stream to completion, pacing the reveal.
    ///
    /// Single-threaded and cooperative: one `select!` arm awaits the next
    /// transport chunk (the producer path), the other a frame-paced tick
    /// (the consumer path). Neither blocks the other — an empty queue
    /// simply yields no reveal that tick, and a burst of tokens only grows
    /// the queue.
    ///
    /// Returns `Ok(Completed)` on end-of-body or the done sentinel (after
    /// flushing everything still queued), `Ok(Cancelled)` if the session's
    /// token fires, and `Err` only for transport-level failures — in that
    /// case text already displayed stays displayed, but nothing further is
    /// revealed.
    pub async fn run<C, D>(
        &mut self,
        mut chunks: C,
        sink: &mut D,
    ) -> Result<SessionOutcome, StreamError>
    where
        C: Stream<Item = Result<Bytes, StreamError>> + Unpin,
        D: DisplaySink,
    {
        let cancel = match self.active {
            Some(ref token) => token.clone(),
            None => self.begin(),
        };

        let mut tick = time::interval(self.pacing.tick_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    self.status = SessionStatus::Cancelled;
                    self.active = None;
                    return Ok(SessionOutcome::Cancelled);
                }
                chunk = chunks.next() => match chunk {
                    Some(Ok(bytes)) => {
                        if self.status == SessionStatus::Sending {
                            self.status = SessionStatus::Streaming;
                        }
                        for line in self.decoder.push(&bytes) {
                            match delta::extract(&line) {
                                LineEvent::Token(token) => self.buffer.push(&token),
                                LineEvent::Done => return Ok(self.complete(sink)),
                                LineEvent::Ignored => {}
                                LineEvent::Malformed(err) => {
                                    sink.on_warning(&format!(
                                        "dropped malformed frame: {err}\n  Line: {line}"
                                    ));
                                }
                            }
                        }
                    }
                    Some(Err(e)) => {
                        self.status = SessionStatus::Idle;
                        self.active = None;
                        return Err(e);
                    }
                    None => return Ok(self.complete(sink)),
                },
                _ = tick.tick() => {
                    if let Some(shown) = self.buffer.reveal(self.pacing.chars_per_tick) {
                        sink.on_display(shown);
                    }
                }
            }
        }
    }

    /// Terminal flush and segmentation. Returning from `run` drops the
    /// tick interval, which is the Stop — no further automatic reveals.
    fn complete<D: DisplaySink>(&mut self, sink: &mut D) -> SessionOutcome {
        self.status = SessionStatus::Completing;
        self.active = None;
        let full = self.buffer.flush().to_string();
        sink.on_display(&full);
        let segmented = sidecar::segment(&full);
        self.status = SessionStatus::Idle;
        SessionOutcome::Completed {
            body: segmented.body,
            suggestions: segmented.suggestions,
        }
    }
}
