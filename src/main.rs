// src/main.rs

mod backend;
mod command;
mod config;
mod error;

use backend::{ReportDevice, Session};
use command::Command;
use error::AdapterError;

use anyhow::{Context, Result};
use clap::Parser;
use hidapi::HidDevice;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::Write;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// GameCube adapter HID tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Open a session, run one command against it and release the device.
fn dispatch<D, F, W>(
    command: Command,
    open: F,
    stop: &AtomicBool,
    out: &mut W,
) -> Result<(), AdapterError>
where
    D: ReportDevice,
    F: FnOnce() -> Result<Session<D>, AdapterError>,
    W: Write,
{
    let session = open()?;

    match command.report() {
        Some(report) => session.send(&report),
        None => {
            let count = session.listen(stop, out)?;
            log::info!("Stopped listening after {} reports", count);
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    TermLogger::init(
        LevelFilter::Info,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialise logger")?;

    let stop = Arc::new(AtomicBool::new(false));
    if cli.command == Command::Listen {
        let stop_clone = Arc::clone(&stop);
        ctrlc::set_handler(move || {
            stop_clone.store(true, Ordering::Relaxed);
        })
        .map_err(AdapterError::from)?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, Session::<HidDevice>::open, &stop, &mut out)
        .with_context(|| format!("{} failed", cli.command.name()))?;

    Ok(())
}
