//! Parsing command-line arguments.

use crate::error::CliError;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::Result as ClapResult,
    value_parser, Arg, ArgAction, ArgMatches, Command,
};
use lifeboard_lib::Config;
use std::{ffi::OsString, path::PathBuf};

/// How the board is filled before it starts running.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Seed {
    /// Leave the board empty.
    Empty,
    /// Load a preset pattern.
    Pattern(String),
    /// Fill the board at random with the given probability.
    Random(f64),
    /// Load a JSON snapshot from a file.
    Load(PathBuf),
}

/// A struct to store the parse results.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Args {
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) grid: Option<String>,
    pub(crate) speed: Option<u64>,
    pub(crate) seed: Seed,
    pub(crate) generations: u64,
    pub(crate) save: Option<PathBuf>,
    pub(crate) quiet: bool,
    pub(crate) list: bool,
}

fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a sparse board\n\
             \n\
             Each generation is printed in Plaintext format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n\
             \n\
             The final board is printed as a JSON snapshot, \
             mapping each row index to the columns of its living cells.\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Configuration file")
                .long_help(
                    "Configuration file\n\
                     The format is chosen by the extension: .toml, .yaml, .yml or .json.\n\
                     Missing fields take their default values.\n",
                )
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GRID")
                .help("Size of the board, as RxC")
                .long_help(
                    "Size of the board, as RxC\n\
                     A side that is not a number keeps its configured value.\n",
                )
                .short('g')
                .long("grid")
                .value_name("RxC"),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Loads a preset pattern (see --list)")
                .short('p')
                .long("pattern")
                .value_name("ID")
                .conflicts_with_all(["RANDOM", "LOAD"]),
        )
        .arg(
            Arg::new("RANDOM")
                .help("Fills the board at random, each cell alive with probability P")
                .short('r')
                .long("random")
                .value_name("P")
                .num_args(0..=1)
                .default_missing_value("0.5")
                .value_parser(value_parser!(f64))
                .conflicts_with("LOAD"),
        )
        .arg(
            Arg::new("LOAD")
                .help("Loads a JSON snapshot")
                .short('l')
                .long("load")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to run")
                .short('n')
                .long("generations")
                .value_name("N")
                .default_value("1")
                .value_parser(value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("SPEED")
                .help("Interval between two generations, in milliseconds")
                .short('s')
                .long("speed")
                .value_name("MS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("SAVE")
                .help("Writes the final snapshot to a file instead of printing it")
                .long("save")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("QUIET")
                .help("Does not print each generation")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("LIST")
                .help("Lists the preset patterns and exits")
                .long("list")
                .action(ArgAction::SetTrue),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the given arguments. The first one is the program name.
    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let seed = if let Some(id) = matches.get_one::<String>("PATTERN") {
            Seed::Pattern(id.clone())
        } else if let Some(&probability) = matches.get_one::<f64>("RANDOM") {
            Seed::Random(probability)
        } else if let Some(path) = matches.get_one::<PathBuf>("LOAD") {
            Seed::Load(path.clone())
        } else {
            Seed::Empty
        };

        Args {
            config_file: matches.get_one::<PathBuf>("CONFIG").cloned(),
            grid: matches.get_one::<String>("GRID").cloned(),
            speed: matches.get_one::<u64>("SPEED").copied(),
            seed,
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(1),
            save: matches.get_one::<PathBuf>("SAVE").cloned(),
            quiet: matches.get_flag("QUIET"),
            list: matches.get_flag("LIST"),
        }
    }

    /// Applies the size and speed given on the command line to `config`.
    pub(crate) fn apply(&self, mut config: Config) -> Config {
        if let Some(grid) = &self.grid {
            let dimensions = config.dimensions().parse_or_keep(grid);
            config = config.set_dimensions(dimensions);
        }
        if let Some(speed) = self.speed {
            config = config.set_speed(speed);
        }
        config
    }
}

/// Parses a configuration file, choosing the format by its extension.
pub(crate) fn parse_config(text: &str, extension: &str) -> Result<Config, CliError> {
    match extension.to_ascii_lowercase().as_str() {
        "toml" => Ok(toml::from_str(text)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(text)?),
        "json" => Ok(serde_json::from_str(text)?),
        other => Err(CliError::ConfigFormat(other.to_owned())),
    }
}
