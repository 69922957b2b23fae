use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "parkit")]
#[command(about = "Simulate a parking lot from a file of commands")]
#[command(long_about = "parkit - a parking lot simulator

Reads one command per line from FILE and prints one result per command.
The first command must create the lot.

COMMANDS:
  create_parking_lot <capacity>   Create (or reset) a lot with numbered slots
  park <registration>             Park in the free slot nearest the entrance
  leave <registration> <hours>    Free a slot and print the charge
  status                          List occupied slots

CHARGES:
  $10 covers the first 2 hours, then $10 for every further hour.
  Use --config to change the tariff.

OUTPUT FORMATS:
  --output pretty    Plain result messages (default)
  --output json      One JSON object per command for scripting")]
#[command(version)]
pub struct Cli {
    /// File of commands to process, one per line
    pub input: PathBuf,

    /// Output format for command results
    ///
    /// Overrides `general.output` from the config file.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// YAML configuration file
    ///
    /// Sets the tariff, default output format, colors, log level and number
    /// handling. Nothing is read unless this flag is given.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject commands whose capacity or hours is not an integer
    ///
    /// Without this flag such values are read as zero.
    #[arg(long)]
    pub strict: bool,

    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain result messages.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "parkit", "input.txt", "-o", "json", "--strict", "-vv", "-c", "lot.yaml",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.strict);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("lot.yaml")));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["parkit"]).is_err());
    }

    #[test]
    fn test_extra_argument_rejected() {
        assert!(Cli::try_parse_from(["parkit", "a.txt", "b.txt"]).is_err());
    }
}
