use crate::arguments::cli::{ConfigSubcommands, Parameters};
use crate::config::{Config, Context};
use crate::util::{self, display, CliError, OutputFormat, Outcome};

use clap::ArgMatches;
use serde_json::Value;
use std::str::FromStr;

/// Runs a `config` subcommand, saving the file at `config_path` when it changed.
pub fn subcommand(
    matches: &ArgMatches,
    config: &mut Config,
    config_path: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let (v, c) = matches.subcommand().unwrap();
    let action = ConfigSubcommands::from_str(v)?;
    let read_only = matches!(action, ConfigSubcommands::show | ConfigSubcommands::list);

    let outcome = match action {
        ConfigSubcommands::show => serde_json::to_value(&*config)
            .map(Outcome::SuccessWithData)
            .map_err(CliError::from),
        ConfigSubcommands::list => Ok(Outcome::SuccessWithData(Value::from(
            config.list_contexts(),
        ))),
        ConfigSubcommands::add => add(c, config),
        ConfigSubcommands::set_active => {
            let name = context_name(c);
            config
                .set_active_context(name.clone())
                .map(|_| {
                    Outcome::SuccessWithMessage(format!("Switched active context to {}", name))
                })
                .map_err(config_issue)
        }
        ConfigSubcommands::delete => {
            let name = context_name(c);
            config
                .delete_context(&name)
                .map(|_| Outcome::SuccessWithMessage(format!("Context {} deleted", name)))
                .map_err(config_issue)
        }
        ConfigSubcommands::rename => {
            let name = context_name(c);
            let new_name = c
                .value_of(Parameters::new_name.as_ref())
                .unwrap()
                .to_string();
            let message = format!("Context {} renamed to {}", name, new_name);
            config
                .rename_context(name, new_name)
                .map(|_| Outcome::SuccessWithMessage(message))
                .map_err(config_issue)
        }
    };

    let outcome = match outcome {
        Ok(outcome) if !read_only => config
            .write(config_path)
            .map(|_| outcome)
            .map_err(config_issue),
        other => other,
    };

    display(outcome, format, |data: &Value| match data {
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .for_each(|n| println!("{n}")),
        other => match util::to_yaml(other) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => log::error!("Cannot serialize the configuration: {}", e),
        },
    })
}

fn add(matches: &ArgMatches, config: &mut Config) -> Result<Outcome<Value>, CliError> {
    let name = context_name(matches);
    let url = matches.value_of(Parameters::url.as_ref()).unwrap();
    let url = util::url_validation(url).map_err(config_issue)?;

    let mut context = Context::new(name.clone(), url);
    context.token = matches
        .value_of(Parameters::token.as_ref())
        .map(|t| t.to_string());
    // clap already validated it
    context.timeout_secs = matches
        .value_of(Parameters::timeout.as_ref())
        .and_then(|t| t.parse().ok());

    config.add_context(context);
    Ok(Outcome::SuccessWithMessage(format!("Context {} saved", name)))
}

fn context_name(matches: &ArgMatches) -> String {
    matches
        .value_of(Parameters::name.as_ref())
        .unwrap()
        .to_string()
}

fn config_issue(e: anyhow::Error) -> CliError {
    CliError::ConfigIssue(e.to_string())
}
