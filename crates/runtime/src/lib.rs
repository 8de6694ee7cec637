mod config;
pub mod logging;

pub use config::{DEFAULT_BASE_DIR, DEFAULT_BIND_ADDR, DEFAULT_PORT, PROGRAM_LOG_LEVEL, PROGRAM_NAME};

pub use logging::init;
