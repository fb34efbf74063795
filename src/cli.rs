use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "drip",
    about = "A smooth-pacing client for chat-completion event streams",
    version
)]
pub struct Cli {
    /// Capture file to replay (omit to read from stdin).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Maximum characters revealed per tick.
    #[arg(long, value_name = "N")]
    pub chars_per_tick: Option<usize>,

    /// Scheduler tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Replay chunk size in bytes.
    #[arg(long, value_name = "N")]
    pub chunk_bytes: Option<usize>,

    /// Replay pause between chunks in milliseconds.
    #[arg(long, value_name = "MS")]
    pub chunk_delay_ms: Option<u64>,

    /// Disable pacing: reveal everything as soon as it arrives.
    #[arg(long)]
    pub no_pace: bool,

    /// Show the raw sentinel region inline instead of holding it back.
    #[arg(long)]
    pub show_sidecar: bool,
}
