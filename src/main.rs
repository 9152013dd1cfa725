use clap::Parser;

mod api;
mod cli;
mod generators;
mod models;

use crate::cli::Args;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("Starting passforge - password generation service");

    api::start_server(&args.host, args.port).await
}
