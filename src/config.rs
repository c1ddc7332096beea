use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug, Clone)]
#[command(name = "blackjack-server", about = "Single-table blackjack over HTTP")]
pub struct Config {
    /// Interface to listen on.
    #[arg(long, env = "BLACKJACK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "BLACKJACK_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seed for the shuffler. Without one, shuffles come from OS entropy.
    #[arg(long, env = "BLACKJACK_SEED")]
    pub seed: Option<u64>,

    #[arg(long, env = "BLACKJACK_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,
}

impl Config {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
