use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use confp_cli::commands::{run_convert, run_diff, run_forks};
use confp_cli::{init_tracing, LogFormat, OutputFormat, ReconcileConfig};
use confp_schemas::SchemaKind;

fn schema_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .required(true)
        .value_parser(value_parser!(SchemaKind))
        .help(help)
}

fn input_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help(help)
}

fn cli() -> Command {
    Command::new("confp")
        .version(confp_cli::VERSION)
        .about("Convert, compare and inspect chain configurations across client schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("interface")
                .long("interface")
                .global(true)
                .default_value("Configurator")
                .help("Capability interface to operate over"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .global(true)
                .default_value("json")
                .value_parser(value_parser!(OutputFormat))
                .help("Document output format: json or yaml"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("pretty")
                .value_parser(value_parser!(LogFormat))
                .help("Log format: pretty or json"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("info")
                .help("Log filter used when RUST_LOG is unset"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document into another schema")
                .arg(schema_arg("from", "Schema of the input"))
                .arg(schema_arg("to", "Schema to produce"))
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail when a shared capability is not preserved"),
                )
                .arg(input_arg("input", "Input document")),
        )
        .subcommand(
            Command::new("diff")
                .about("List capability differences between two documents")
                .arg(schema_arg("a", "Schema of the first document"))
                .arg(schema_arg("b", "Schema of the second document"))
                .arg(input_arg("file-a", "First document"))
                .arg(input_arg("file-b", "Second document")),
        )
        .subcommand(
            Command::new("forks")
                .about("Print the fork-activation schedule")
                .arg(schema_arg("schema", "Schema of the input"))
                .arg(input_arg("input", "Input document")),
        )
}

fn config_from(matches: &ArgMatches) -> Result<ReconcileConfig> {
    let mut config = ReconcileConfig::new();
    if let Some(name) = matches.get_one::<String>("interface") {
        config = config.with_interface_name(name)?;
    }
    if let Some(output) = matches.get_one::<OutputFormat>("output") {
        config = config.with_output(*output);
    }
    if let Some(format) = matches.get_one::<LogFormat>("log-format") {
        config = config.with_log_format(*format);
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config = config.with_log_level(level);
    }
    Ok(config)
}

fn required<'a, T>(args: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(id)
        .with_context(|| format!("missing argument '{id}'"))
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = config_from(&matches)?;
    init_tracing(&config)?;

    let out = match matches.subcommand() {
        Some(("convert", args)) => {
            let config = config.with_strict(args.get_flag("strict"));
            let from = *required::<SchemaKind>(args, "from")?;
            let to = *required::<SchemaKind>(args, "to")?;
            run_convert(&config, from, to, required::<PathBuf>(args, "input")?)?
        }
        Some(("diff", args)) => {
            let a = *required::<SchemaKind>(args, "a")?;
            let b = *required::<SchemaKind>(args, "b")?;
            let file_a = required::<PathBuf>(args, "file-a")?;
            let file_b = required::<PathBuf>(args, "file-b")?;
            run_diff(&config, (a, file_a.as_path()), (b, file_b.as_path()))?
        }
        Some(("forks", args)) => {
            let kind = *required::<SchemaKind>(args, "schema")?;
            run_forks(kind, required::<PathBuf>(args, "input")?)?
        }
        _ => bail!("no subcommand given"),
    };
    print!("{out}");
    Ok(())
}
