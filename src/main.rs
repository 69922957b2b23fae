use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use parkit::cli::args::Cli;
use parkit::config::{ColorSetting, Config};
use parkit::error::ParkitError;
use parkit::{driver, logging};

const USAGE_MESSAGE: &str = "Please provide input file name";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
            ) =>
        {
            let usage = ParkitError::Usage(format!(
                "{USAGE_MESSAGE}\n\n{}",
                Cli::command().render_usage()
            ));
            eprintln!("{usage}");
            std::process::exit(1);
        }
        Err(e) => {
            // Usage errors exit with 1, not clap's 2.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli) {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::for_cli(cli)?;
    let settings = config.settings(cli.output, cli.strict, cli.verbose);

    match settings.color {
        ColorSetting::Auto => {}
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
    }
    logging::init(settings.log_level);

    let file = File::open(&cli.input)
        .with_context(|| format!("Error opening file: {}", cli.input.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(BufReader::new(file), &mut out, settings)?;
    Ok(())
}
