//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments. Every flag can also come from a `BINGO_*`
/// environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "bingo-server")]
#[command(about = "HTTP API for bingo prediction cards")]
#[command(version)]
pub struct Args {
    /// HTTP port
    #[arg(short, long, env = "BINGO_PORT", default_value = "8000")]
    pub port: u16,

    /// Bind address (overrides port)
    #[arg(short, long, env = "BINGO_ADDRESS")]
    pub address: Option<String>,

    /// Directory holding one JSON file per card
    #[arg(long, env = "BINGO_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory of frontend assets served at `/`
    #[arg(long, env = "BINGO_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Keep cards in memory only (nothing is written to disk)
    #[arg(long, env = "BINGO_IN_MEMORY")]
    pub in_memory: bool,

    /// Log level when RUST_LOG is unset (debug, info, warn, error)
    #[arg(long, env = "BINGO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Resolved gateway configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    /// Only set when the directory actually exists.
    pub assets_dir: Option<PathBuf>,
    pub in_memory: bool,
}

impl ServerConfig {
    pub fn from_args(args: &Args) -> Result<Self, String> {
        let bind: SocketAddr = match &args.address {
            Some(address) => address
                .parse()
                .map_err(|e| format!("failed to parse address '{}': {}", address, e))?,
            None => format!("0.0.0.0:{}", args.port)
                .parse()
                .map_err(|e| format!("failed to parse port {}: {}", args.port, e))?,
        };

        Ok(Self {
            bind,
            data_dir: args.data_dir.clone(),
            assets_dir: args.assets_dir.clone().filter(|dir| dir.is_dir()),
            in_memory: args.in_memory,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
            data_dir: PathBuf::from("data"),
            assets_dir: None,
            in_memory: false,
        }
    }
}
