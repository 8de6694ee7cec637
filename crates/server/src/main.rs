use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::Parser;
use filemgr_fs::FileStore;
use filemgr_runtime::logging;
use filemgr_server::{ServerArgs, ServerConfig, start_server};
use log::{error, info};
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;

fn main() -> ExitCode {
    logging::init().ok();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[filemgr-server] {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    let config = ServerConfig::from_args(&args);

    let store = FileStore::open(&args.base_dir).with_context(|| {
        format!(
            "Failed to open base directory {}",
            args.base_dir.display()
        )
    })?;
    if store.created_base_dir() {
        println!("Created base directory: {}", store.base_dir().display());
    }

    info!(
        "Starting filemgr server: base_dir={}, port={}",
        store.base_dir().display(),
        config.port
    );

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("Failed to register signal handlers")?;

    let handle = start_server(Arc::new(store), &config)?;
    println!("File Manager Server running at {}", handle.url());

    if let Some(sig) = signals.forever().next() {
        info!("Received signal {sig}; shutting down");
    }

    handle.shutdown()?;
    info!("Server shutdown complete.");
    Ok(())
}
