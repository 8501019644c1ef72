pub mod arguments;
pub mod config;
pub mod fetch;
pub mod sanitizer;
pub mod util;

use arguments::cli::{Action, Parameters};
use config::Config;

use anyhow::Result;
use clap::ArgMatches;
use std::str::FromStr;

pub async fn process_arguments(matches: ArgMatches) -> Result<i32> {
    let config_path = arguments::global_value(&matches, Parameters::config.as_ref());
    let context_arg =
        arguments::global_value(&matches, Parameters::context.as_ref()).map(|s| s.to_string());
    let format = arguments::output_format(&matches);

    let (command, submatches) = matches.subcommand().unwrap();

    match Action::from_str(command)? {
        Action::version => {
            println!("mftrim version: {}", util::VERSION);
            Ok(0)
        }
        Action::file => arguments::file::subcommand(submatches, format),
        Action::get => {
            // a config file is only needed to resolve paths and tokens
            let config = Config::from(config_path)
                .map_err(|e| log::debug!("No configuration loaded: {:#}", e))
                .ok();
            arguments::get::subcommand(submatches, config.as_ref(), &context_arg, format).await
        }
        Action::config => {
            let mut config = Config::from(config_path).unwrap_or_else(|e| {
                log::info!("Starting from an empty configuration: {:#}", e);
                Config::empty()
            });
            arguments::config::subcommand(submatches, &mut config, config_path, format)
        }
    }
}
