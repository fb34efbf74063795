//! Client-side pipeline for chat-completion event streams.
//!
//! Consumes a bursty, chunked response body and re-presents it as smooth,
//! human-paced prose, while decoding the suggestions sidecar interleaved
//! into the same stream behind sentinel markers.
//!
//! Data flow: transport bytes → [`protocol::frame::FrameDecoder`] →
//! event lines → [`protocol::delta::extract`] → tokens into the
//! [`pacing::PacingBuffer`] → the session controller's tick reveals
//! characters at a bounded rate → on stream end the remaining queue is
//! flushed and [`sidecar::segment`] splits body from suggestions.

pub mod config;
pub mod display;
pub mod error;
pub mod pacing;
pub mod protocol;
pub mod replay;
pub mod session;
pub mod sidecar;
