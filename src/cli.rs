// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the API server to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// API server port
    #[arg(long, short, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log level filter (e.g. info, debug, passforge=trace)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}
