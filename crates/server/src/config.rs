use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use filemgr_runtime::{DEFAULT_BASE_DIR, DEFAULT_BIND_ADDR, DEFAULT_PORT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    /// 0 picks an ephemeral port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Self::default()
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    pub fn from_args(args: &ServerArgs) -> Self {
        Self::with_port(args.port)
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "filemgr-server",
    version,
    about = "Serve a directory of files over a small JSON API"
)]
pub struct ServerArgs {
    /// Directory holding the managed files (created if missing)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BASE_DIR)]
    pub base_dir: PathBuf,

    /// Port to listen on
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,
}
