//! Interactive task tracker entry point.
//!
//! # Responsibility
//! - Resolve command line configuration and start core logging.
//! - Construct the registry and hand it to the menu loop over stdin/stdout.

mod config;
mod menu;

use anyhow::Context;
use clap::Parser;
use config::{CliArgs, CliConfig};
use log::info;
use std::io;
use taskdesk_core::{init_logging, FileTaskJournal, TaskManager};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = CliConfig::resolve(&args)?;

    init_logging(&config.log_level, &config.log_dir).context("failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok tasks_file={}",
        config.tasks_file.display()
    );

    let mut manager = TaskManager::new(FileTaskJournal::new(&config.tasks_file));
    menu::run(&mut manager, io::stdin().lock(), io::stdout().lock())
        .context("terminal i/o failed")?;

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}
