use std::net::{IpAddr, Ipv4Addr};

pub const PROGRAM_NAME: &str = "filemgr";
pub const PROGRAM_LOG_LEVEL: &str = "FILEMGR_LOG_LEVEL";

/// Directory managed when no `--base-dir` is given, relative to the working directory.
pub const DEFAULT_BASE_DIR: &str = "./files";

/// Port used by `server` when no port argument is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Loopback only. There is no authentication on the HTTP API.
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
