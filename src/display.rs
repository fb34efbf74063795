//! Terminal sink for the paced reveal.
//!
//! Receives full displayed-text snapshots and appends only the new suffix,
//! so re-paint cost stays proportional to what changed. Styles use only
//! named ANSI attributes so colors adapt to the user's terminal theme.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, ContentStyle, Print};

use crate::session::controller::DisplaySink;
use crate::sidecar::SUGGESTIONS_START;

fn dim() -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Dim.into(),
        ..Default::default()
    }
}

fn suggestion_style() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        ..Default::default()
    }
}

fn error_style() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Red),
        ..Default::default()
    }
}

/// Streams revealed text to a terminal writer.
pub struct TermSink<W: Write = io::Stdout> {
    out: W,
    /// Byte length of what has been written so far (a prefix of every
    /// snapshot we receive).
    written_bytes: usize,
    /// Whether to hold back the raw sentinel region during the reveal.
    hide_sidecar: bool,
}

impl Default for TermSink<io::Stdout> {
    fn default() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl TermSink<io::Stdout> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<W: Write> TermSink<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            out: writer,
            written_bytes: 0,
            hide_sidecar: true,
        }
    }

    pub fn set_hide_sidecar(&mut self, hide: bool) {
        self.hide_sidecar = hide;
    }

    /// Render the final suggestions list after the body has streamed.
    pub fn render_suggestions(&mut self, suggestions: &[String]) {
        if suggestions.is_empty() {
            return;
        }
        queue!(self.out, Print("\n\n"), Print(dim().apply("Ask next:")), Print("\n")).ok();
        for suggestion in suggestions {
            queue!(
                self.out,
                Print(dim().apply("  → ")),
                Print(suggestion_style().apply(suggestion)),
                Print("\n"),
            )
            .ok();
        }
        self.out.flush().ok();
    }

    pub fn render_cancelled(&mut self) {
        queue!(self.out, Print("\n"), Print(dim().apply("[stopped]")), Print("\n")).ok();
        self.out.flush().ok();
    }

    pub fn render_error(&mut self, message: &str) {
        queue!(
            self.out,
            Print("\n"),
            Print(error_style().apply(message)),
            Print("\n"),
        )
        .ok();
        self.out.flush().ok();
    }

    pub fn finish_line(&mut self) {
        queue!(self.out, Print("\n")).ok();
        self.out.flush().ok();
    }
}

impl<W: Write> DisplaySink for TermSink<W> {
    fn on_display(&mut self, text: &str) {
        // The sentinel region is machine data for the segmenter; keep it
        // off the screen while it streams in.
        let visible = if self.hide_sidecar {
            &text[..visible_len(text)]
        } else {
            text
        };
        if visible.len() <= self.written_bytes {
            return;
        }
        let new = &visible[self.written_bytes..];
        queue!(self.out, Print(new)).ok();
        self.out.flush().ok();
        self.written_bytes = visible.len();
    }

    fn on_warning(&mut self, message: &str) {
        queue!(
            self.out,
            Print("\n"),
            Print(dim().apply(message)),
            Print("\n"),
        )
        .ok();
        self.out.flush().ok();
    }
}

/// Length of the prefix safe to show when hiding the sidecar: everything
/// before a start sentinel, and nothing of a trailing fragment that might
/// still grow into one.
fn visible_len(text: &str) -> usize {
    if let Some(i) = text.find(SUGGESTIONS_START) {
        return i;
    }
    for len in (1..SUGGESTIONS_START.len()).rev() {
        if text.ends_with(&SUGGESTIONS_START[..len]) {
            return text.len() - len;
        }
    }
    text.len()
}
