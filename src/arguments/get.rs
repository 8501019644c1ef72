use crate::arguments::{cli::Parameters, pretty_print, sanitized_outcome};
use crate::config::{Config, Context};
use crate::util::{display, CliError, OutputFormat, Outcome};
use crate::{fetch, sanitizer};

use clap::ArgMatches;
use serde_json::Value;

pub async fn subcommand(
    matches: &ArgMatches,
    config: Option<&Config>,
    ctx_name: &Option<String>,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let target = matches.value_of(Parameters::target.as_ref()).unwrap();

    let context = config.and_then(|c| match c.get_context(ctx_name) {
        Ok(context) => Some(context),
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    });
    if let Some(context) = context {
        log::info!("Using context: {}", context.name);
    }

    let token = matches
        .value_of(Parameters::token.as_ref())
        .or_else(|| context.and_then(|c| c.token.as_deref()));

    display(get(target, token, context).await, format, pretty_print)
}

async fn get(
    target: &str,
    token: Option<&str>,
    context: Option<&Context>,
) -> Result<Outcome<Value>, CliError> {
    let url = fetch::resolve_target(target, context)?;
    let response = fetch::get(url, token, context).await?;
    let body = sanitizer::sanitize_response(Some(response))?;
    sanitized_outcome(body)
}
