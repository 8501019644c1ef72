use crate::arguments::{cli::Parameters, pretty_print, sanitized_outcome};
use crate::sanitizer::{self, RawResponse};
use crate::util::{self, display, CliError, OutputFormat};

use clap::ArgMatches;
use reqwest::StatusCode;

pub fn subcommand(matches: &ArgMatches, format: OutputFormat) -> anyhow::Result<i32> {
    let path = matches.value_of(Parameters::path.as_ref()).unwrap();

    let outcome = util::read_input(path)
        .and_then(|body| {
            // a saved response is a successful one
            sanitizer::sanitize_response(Some(RawResponse::new(StatusCode::OK, body)))
                .map_err(CliError::from)
        })
        .and_then(sanitized_outcome);

    display(outcome, format, pretty_print)
}
