pub mod cli;
pub mod config;
pub mod file;
pub mod get;

use crate::arguments::cli::Parameters;
use crate::util::{show_json, CliError, OutputFormat, Outcome};

use clap::ArgMatches;
use serde_json::Value;
use std::str::FromStr;

/// Value of a global argument, looked up from the deepest subcommand up.
pub fn global_value<'a>(matches: &'a ArgMatches, id: &str) -> Option<&'a str> {
    matches
        .subcommand()
        .and_then(|(_, m)| global_value(m, id))
        .or_else(|| matches.value_of(id))
}

pub fn output_format(matches: &ArgMatches) -> OutputFormat {
    global_value(matches, Parameters::output.as_ref())
        .and_then(|o| OutputFormat::from_str(o).ok())
        .unwrap_or_default()
}

/// Turns a sanitized body into something `display` can render.
pub fn sanitized_outcome(body: Vec<u8>) -> Result<Outcome<Value>, CliError> {
    if body.is_empty() {
        return Ok(Outcome::SuccessWithMessage("Empty response".to_string()));
    }
    Ok(Outcome::SuccessWithData(serde_json::from_slice(&body)?))
}

pub fn pretty_print(data: &Value) {
    show_json(data.to_string())
}
