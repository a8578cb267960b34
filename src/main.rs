mod cli;
mod error;
mod logger;
mod metadata;
mod process;
mod progress;
mod scanner;
mod transfer;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    let folders = args.resolve()?;

    let mut log = logger::RunLog::create(Path::new(logger::LOG_DIR))?;
    if let Some(stats) = process::process_images(&folders.source, &folders.dest, &mut log) {
        log::info!(
            "{}/{} images copied, log at {}",
            stats.copied,
            stats.total,
            log.path().display()
        );
    }

    println!("Processing completed.");
    Ok(())
}
