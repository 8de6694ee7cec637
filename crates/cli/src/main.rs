use std::{io, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::Parser;
use log::{error, info};

mod commands;
mod printer;

use commands::prompt::Prompt;
use filemgr_fs::FileStore;
use filemgr_runtime::{DEFAULT_BASE_DIR, DEFAULT_PORT, logging};
use filemgr_server::ServerConfig;
use printer::ConsolePrinter;

#[derive(Debug, Parser)]
#[command(name = "filemgr", version, about = "Interactive file management tool")]
pub struct Cli {
    /// Directory holding the managed files (created if missing)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Port used by `server` when none is given
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[filemgr] {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let store = FileStore::open(&cli.base_dir).with_context(|| {
        format!(
            "Failed to open base directory {}",
            cli.base_dir.display()
        )
    })?;
    if store.created_base_dir() {
        println!("Created base directory: {}", store.base_dir().display());
    }
    info!("Managing files in {}", store.base_dir().display());

    let mut prompt = Prompt::new(
        Arc::new(store),
        io::stdin().lock(),
        ConsolePrinter::stdout(),
        ServerConfig::with_port(cli.port),
    );

    prompt.run().context("Console I/O failed")
}
