//! draw-me: show an image in the terminal.

mod commands;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use draw_me::DrawError;

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("DRAW_ME_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DRAW_ME_BUILD_DATE"),
    ")"
);

/// Render an image as 256-color half-block text sized to the terminal.
#[derive(Parser, Debug)]
#[command(name = "draw-me", version = VERSION, about)]
struct Cli {
    /// Image file to draw
    file: PathBuf,
}

fn init_logging() {
    // stdout carries the frame, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_args() -> Result<Cli> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(error = %e, "argument parsing failed");
            Err(DrawError::BadArgument.into())
        }
    }
}

fn run() -> Result<()> {
    let cli = parse_args()?;
    commands::draw::handle(&cli.file)
}

/// Print the one-line diagnostic on stdout, or stderr if stdout is gone.
fn report_failure(err: &anyhow::Error) {
    let line = format!("Failure: {}", err);
    if writeln!(io::stdout(), "{}", line).is_err() {
        let _ = writeln!(io::stderr(), "{}", line);
    }
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "fatal");
            report_failure(&err);
            ExitCode::from(1)
        }
    }
}
