use anyhow::Result;
use mftrim::arguments::cli;
use mftrim::{process_arguments, util};
use simple_logger::SimpleLogger;
use std::process::exit;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::app_arguments().get_matches();

    SimpleLogger::new()
        .with_level(util::log_level(&matches))
        .init()?;

    let code = process_arguments(matches).await?;
    exit(code)
}
