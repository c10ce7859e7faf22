//! Command-line definition

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use upskill_thermo::Fahrenheit;

/// Build the `thermo` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("thermo")
        .version(crate::VERSION)
        .about("Convert Fahrenheit readings to Celsius")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with a [converter] table"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (overridden by RUST_LOG)"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert one or more Fahrenheit readings")
                .arg(
                    Arg::new("values")
                        .value_name("VALUE")
                        .required(true)
                        .num_args(1..)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(Fahrenheit))
                        .help("Readings in Fahrenheit, e.g. 212 or 105.6F"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("decimals")
                        .long("decimals")
                        .value_name("N")
                        .value_parser(value_parser!(u32))
                        .help("Decimal places of the result"),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .value_name("FAHRENHEIT")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Reject readings above this limit"),
                ),
        )
        .subcommand(Command::new("limits").about("Show the effective input limits and precision"))
}

/// Options of the `convert` subcommand
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertArgs {
    /// Readings to convert, in command-line order
    pub readings: Vec<Fahrenheit>,
    /// Emit JSON instead of text
    pub json: bool,
    /// Precision override
    pub decimals: Option<u32>,
    /// Upper limit override
    pub max_fahrenheit: Option<f64>,
}

impl ConvertArgs {
    /// Extract from `convert` subcommand matches
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            readings: matches
                .get_many::<Fahrenheit>("values")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
            json: matches.get_flag("json"),
            decimals: matches.get_one::<u32>("decimals").copied(),
            max_fahrenheit: matches.get_one::<f64>("max").copied(),
        }
    }
}

/// Global options, read from the subcommand so they may appear on either side of it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalArgs {
    /// Config file path
    pub config: Option<PathBuf>,
    /// Count of `-v` flags
    pub verbosity: u8,
}

impl GlobalArgs {
    /// Extract from top-level matches
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let scoped = matches.subcommand().map_or(matches, |(_, sub)| sub);
        Self {
            config: scoped.get_one::<PathBuf>("config").cloned(),
            verbosity: scoped.get_count("verbose"),
        }
    }
}
