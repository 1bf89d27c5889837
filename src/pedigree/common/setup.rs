use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command, ValueEnum, builder::EnumValueParser};
use serde::Deserialize;

use super::logging::init_logging;
use crate::pedigree::inference::enumerate::{DEFAULT_MAX_INDIVIDUALS, MAX_ENUMERABLE};

/// How posteriors are printed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// Indented per-person table
    #[serde(rename = "table")]
    Table,

    /// Pretty-printed JSON report
    #[serde(rename = "json")]
    Json,
}

/// These options define the inputs from the user.
#[derive(Deserialize, Clone, Debug)]
pub struct CommandLineOptions {
    pub data_file: Option<String>,
    pub scenario_name: Option<String>,
    pub tables_file: Option<String>,
    /// Extra observations, each `NAME=0` or `NAME=1`
    pub observations: Vec<String>,
    pub output_format: OutputFormat,
    pub output_file: Option<String>,
    pub max_individuals: usize,
    pub precision: usize,
    pub seed: u64,
}

impl CommandLineOptions {
    /// Label for the family source, used in logs and reports.
    pub fn source_label(&self) -> String {
        match (&self.data_file, &self.scenario_name) {
            (Some(path), _) => path.clone(),
            (None, Some(name)) => format!("scenario:{}", name),
            (None, None) => "unknown".to_string(),
        }
    }
}

pub fn build_command() -> Command {
    Command::new("HEREDITY")
        .version("1.0")
        .about("Exact gene and trait posteriors for a family tree.")
        .arg(
            Arg::new("data_file")
                .value_name("DATA_CSV")
                .help("CSV with columns name,mother,father,trait"),
        )
        .arg(
            Arg::new("scenario_name")
                .long("scenario")
                .value_name("STRING")
                .help("Built-in family: family0, family1, family2 or random"),
        )
        .group(
            ArgGroup::new("family_source")
                .args(["data_file", "scenario_name"])
                .required(true)
                .multiple(false),
        )
        .arg(
            Arg::new("tables_file")
                .long("tables")
                .value_name("FILE")
                .help("JSON file overriding the default probability tables"),
        )
        .arg(
            Arg::new("observe")
                .long("observe")
                .value_name("NAME=0|1")
                .help("Additional trait observation, may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(EnumValueParser::<OutputFormat>::new())
                .help("Output format: 'table' or 'json'")
                .default_value("table"),
        )
        .arg(
            Arg::new("output_file")
                .long("output_file")
                .value_name("FILE")
                .help("Write the JSON report to this file as well"),
        )
        .arg(
            Arg::new("max_individuals")
                .long("max_individuals")
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(usize))
                .help(format!(
                    "Refuse families larger than this (hard cap {})",
                    MAX_ENUMERABLE
                ))
                .default_value("15"),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(usize))
                .help("Decimals printed in the table output")
                .default_value("4"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NUMBER")
                .value_parser(clap::value_parser!(u64))
                .help("Seed for the random scenario")
                .default_value("42"),
        )
}

fn options_from_matches(matches: &ArgMatches) -> CommandLineOptions {
    let observations = matches
        .get_many::<String>("observe")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    CommandLineOptions {
        data_file: matches.get_one::<String>("data_file").cloned(),
        scenario_name: matches.get_one::<String>("scenario_name").cloned(),
        tables_file: matches.get_one::<String>("tables_file").cloned(),
        observations,
        output_format: matches
            .get_one::<OutputFormat>("format")
            .copied()
            .unwrap_or(OutputFormat::Table),
        output_file: matches.get_one::<String>("output_file").cloned(),
        max_individuals: matches
            .get_one::<usize>("max_individuals")
            .copied()
            .unwrap_or(DEFAULT_MAX_INDIVIDUALS),
        precision: matches.get_one::<usize>("precision").copied().unwrap_or(4),
        seed: matches.get_one::<u64>("seed").copied().unwrap_or(42),
    }
}

/// Parses options from an explicit argument list.
pub fn parse_configuration_options_from<I, T>(args: I) -> Result<CommandLineOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_command().try_get_matches_from(args)?;
    Ok(options_from_matches(&matches))
}

/// Initializes logging and parses the process arguments, exiting with usage on error.
pub fn parse_configuration_options() -> CommandLineOptions {
    init_logging("info");
    let matches = build_command().get_matches();
    options_from_matches(&matches)
}
