mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use drip::config;
use drip::display::TermSink;
use drip::error::StreamError;
use drip::pacing::PacingConfig;
use drip::replay;
use drip::session::controller::{SessionController, SessionOutcome};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(Path::new(".")).context("failed to load .drip.toml")?;
    if let Some(n) = cli.chars_per_tick {
        config.chars_per_tick = n;
    }
    if let Some(ms) = cli.tick_ms {
        config.tick_ms = ms;
    }
    if let Some(n) = cli.chunk_bytes {
        config.chunk_bytes = n;
    }
    if let Some(ms) = cli.chunk_delay_ms {
        config.chunk_delay_ms = ms;
    }

    let capture = read_capture(&cli)?;

    let mut pacing = config.pacing();
    if cli.no_pace {
        pacing = PacingConfig {
            chars_per_tick: usize::MAX,
            ..pacing
        };
    }

    let mut controller = SessionController::new(pacing);
    let token = controller.begin();

    // Ctrl+C cancels the in-flight session instead of killing the process,
    // so terminal state and the partial display are left intact.
    tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                token.cancel();
            }
        }
    });

    let chunks = replay::chunk_stream(capture, config.replay());
    let mut sink = TermSink::new();
    sink.set_hide_sidecar(!cli.show_sidecar);

    match controller.run(chunks, &mut sink).await {
        Ok(SessionOutcome::Completed { suggestions, .. }) => {
            // The body is already on screen — only the sidecar is left to render.
            sink.render_suggestions(&suggestions);
            sink.finish_line();
        }
        Ok(SessionOutcome::Cancelled) => {
            sink.render_cancelled();
        }
        Err(e @ StreamError::RateLimited) => {
            sink.render_error(&format!("{e} — try again shortly"));
            std::process::exit(1);
        }
        Err(e) => {
            sink.render_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Read the capture to replay from the given file or stdin.
fn read_capture(cli: &Cli) -> Result<Vec<u8>> {
    match cli.file {
        Some(ref path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut data = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("failed to read stdin")?;
            Ok(data)
        }
    }
}
