use crate::util::{self, OutputFormat};

use clap::{Arg, Command};
use strum_macros::{AsRefStr, EnumString};

#[derive(AsRefStr, EnumString)]
#[allow(non_camel_case_types)]
pub enum Action {
    get,
    file,
    config,
    version,
}

#[derive(AsRefStr, EnumString)]
#[allow(non_camel_case_types)]
pub enum Parameters {
    target,
    path,
    token,
    timeout,
    output,
    config,
    context,
    verbose,
    url,
    name,
    new_name,
}

#[derive(AsRefStr, EnumString)]
#[allow(non_camel_case_types)]
pub enum ConfigSubcommands {
    show,
    list,
    add,
    #[strum(serialize = "set-active")]
    set_active,
    delete,
    rename,
}

pub fn app_arguments() -> Command<'static> {
    let token_arg = Arg::new(Parameters::token.as_ref())
        .long(Parameters::token.as_ref())
        .short('t')
        .takes_value(true)
        .value_name("TOKEN")
        .help("Bearer token sent to the API server. Overrides the one stored in the context.");

    let context_name_arg = Arg::new(Parameters::name.as_ref())
        .required(true)
        .help("The name of the context");

    let config_file_arg = Arg::new(Parameters::config.as_ref())
        .long(Parameters::config.as_ref())
        .short('C')
        .takes_value(true)
        .global(true)
        .value_name("FILE")
        .help("Path to the mftrim config file. If not specified, reads $MFTRIMCFG environment variable or defaults to XDG config directory for mftrim_config.yaml");

    let context_arg = Arg::new(Parameters::context.as_ref())
        .long(Parameters::context.as_ref())
        .short('c')
        .takes_value(true)
        .global(true)
        .env("MFTRIM_CONTEXT")
        .help("The name of the context to use. Can be set with MFTRIM_CONTEXT environment variable.");

    let verbose = Arg::new(Parameters::verbose.as_ref())
        .short('v')
        .takes_value(false)
        .multiple_occurrences(true)
        .global(true)
        .help("Enable verbose output. Multiple occurences increase verbosity.");

    let output = Arg::new(Parameters::output.as_ref())
        .long(Parameters::output.as_ref())
        .short('o')
        .takes_value(true)
        .global(true)
        .possible_values([OutputFormat::json.as_ref(), OutputFormat::yaml.as_ref()])
        .help("Output format. Defaults to colored JSON.");

    Command::new("mftrim")
        .version(util::VERSION)
        .about("Strips managedFields from cluster API responses")
        .arg(config_file_arg)
        .arg(verbose)
        .arg(context_arg)
        .arg(output)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(Action::get.as_ref())
                .about("Fetch a resource or a resource list and print it without managedFields")
                .arg(
                    Arg::new(Parameters::target.as_ref())
                        .required(true)
                        .value_name("URL|PATH")
                        .help("Absolute URL, or API path relative to the context's server, e.g. /api/v1/namespaces/default/pods"),
                )
                .arg(&token_arg),
        )
        .subcommand(
            Command::new(Action::file.as_ref())
                .about("Sanitize a saved API response")
                .arg(
                    Arg::new(Parameters::path.as_ref())
                        .required(true)
                        .value_name("FILE")
                        .help("File containing the JSON response. Use - to read stdin."),
                ),
        )
        .subcommand(
            Command::new(Action::config.as_ref())
                .about("Manage contexts in the configuration file.")
                .alias("context")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new(ConfigSubcommands::show.as_ref())
                        .about("Show full configuration file"),
                )
                .subcommand(
                    Command::new(ConfigSubcommands::list.as_ref())
                        .about("List existing contexts names in configuration file"),
                )
                .subcommand(
                    Command::new(ConfigSubcommands::add.as_ref())
                        .about("Add a context, or replace an existing one")
                        .arg(&context_name_arg)
                        .arg(
                            Arg::new(Parameters::url.as_ref())
                                .required(true)
                                .help("The url of the API server"),
                        )
                        .arg(&token_arg)
                        .arg(
                            Arg::new(Parameters::timeout.as_ref())
                                .long(Parameters::timeout.as_ref())
                                .takes_value(true)
                                .value_name("SECONDS")
                                .validator(|s| s.parse::<u64>())
                                .help("Request timeout for this context"),
                        ),
                )
                .subcommand(
                    Command::new(ConfigSubcommands::set_active.as_ref())
                        .about("Set a context as the active context")
                        .arg(&context_name_arg),
                )
                .subcommand(
                    Command::new(ConfigSubcommands::delete.as_ref())
                        .alias("remove")
                        .about("Delete a context")
                        .arg(&context_name_arg),
                )
                .subcommand(
                    Command::new(ConfigSubcommands::rename.as_ref())
                        .about("Rename a context.")
                        .arg(&context_name_arg)
                        .arg(
                            Arg::new(Parameters::new_name.as_ref())
                                .required(true)
                                .help("The new context name"),
                        ),
                ),
        )
        .subcommand(Command::new(Action::version.as_ref()).about("Print version information."))
}
