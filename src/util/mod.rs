mod display;
mod error;
mod outcome;

pub use display::*;
pub use error::*;
pub use outcome::*;

use crate::arguments::cli::Parameters;
use anyhow::{Context as AnyhowContext, Result};
use clap::crate_version;
use clap::ArgMatches;
use colored_json::write_colored_json;
use log::LevelFilter;
use std::fs;
use std::io::{stdin, stdout, Read};
use url::Url;

pub const VERSION: &str = crate_version!();

pub fn show_json<S: Into<String>>(payload: S) {
    let payload = payload.into();
    match serde_json::from_str::<serde_json::Value>(&payload) {
        // show as JSON
        Ok(json) => {
            write_colored_json(&json, &mut stdout().lock()).ok();
            println!();
        }
        // fall back to plain text output
        Err(_) => println!("{}", payload),
    }
}

pub fn url_validation(url: &str) -> Result<Url> {
    Url::parse(url).or_else(|_| {
        Url::parse(&format!("https://{}", url))
            .context(format!("URL args: \'{}\' is not valid", url))
    })
}

/// Reads a whole file, or stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<Vec<u8>, CliError> {
    if path == "-" {
        log::debug!("reading stdin");
        let mut buf = Vec::new();
        stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        log::debug!("reading {}", path);
        Ok(fs::read(path)?)
    }
}

fn verbosity(matches: &ArgMatches) -> u64 {
    let here = matches.occurrences_of(Parameters::verbose.as_ref());
    match matches.subcommand() {
        Some((_, m)) => here.max(verbosity(m)),
        None => here,
    }
}

pub fn log_level(matches: &ArgMatches) -> LevelFilter {
    match verbosity(matches) {
        0 => LevelFilter::Error,
        1 => {
            eprintln!("Log level: WARN");
            LevelFilter::Warn
        }
        2 => {
            eprintln!("Log level: INFO");
            LevelFilter::Info
        }
        _ => {
            eprintln!("Log level: DEBUG");
            LevelFilter::Debug
        }
    }
}
