use std::net::{Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::InputPolicy;

/// Server configuration. Every flag falls back to an environment variable,
/// so a `.env` file loaded before parsing works too.
#[derive(Debug, Clone, Parser)]
#[command(name = "stresscheck-server", about = "Exam stress prediction over HTTP")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "STRESSCHECK_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// tracing-subscriber filter directive
    #[arg(long = "log", env = "RUST_LOG", default_value = "info")]
    pub rust_log: String,

    /// How answers outside their declared range are treated
    #[arg(long, env = "STRESSCHECK_INPUT_POLICY", value_enum, default_value_t = InputPolicy::PassThrough)]
    pub input_policy: InputPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            rust_log: "info".to_string(),
            input_policy: InputPolicy::default(),
        }
    }
}
