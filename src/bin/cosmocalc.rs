//! Cosmology calculator CLI.
//!
//! `cosmocalc z` reads `key = value` cosmology lines from standard input,
//! `cosmocalc z H0 Om Ol` takes them positionally.

use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use log::{debug, LevelFilter};

use cosmocalc::config::parse_config;
use cosmocalc::report::{write_report, ReportFormat};
use cosmocalc::Cosmology;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Commented,
    Table,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Commented => ReportFormat::Commented,
            OutputFormat::Table => ReportFormat::Table,
        }
    }
}

#[derive(Parser)]
#[command(name = "cosmocalc")]
#[command(about = "Cosmology Calculator from Ned Wright (www.astro.ucla.edu/~wright)")]
#[command(
    after_help = "With only z given, the cosmology is read from standard input as `key = value` lines (H0, Om, Ol)."
)]
#[command(version, disable_help_flag = true)]
struct Cli {
    /// Help and quit
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,

    /// Output format [default: commented for standard input, table for positional parameters]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Log the derived densities and raw integrals
    #[arg(short, long)]
    verbose: bool,

    /// Redshift
    #[arg(allow_negative_numbers = true)]
    z: f64,

    /// Hubble constant [km/s/Mpc], matter and dark energy density
    #[arg(value_names = ["H0", "Om", "Ol"], num_args = 0..=3, allow_negative_numbers = true)]
    cosmology: Vec<f64>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) if !cli.help => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => err.exit(),
        _ => return usage(),
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (cosmo, default_format) = match cli.cosmology.as_slice() {
        [] => match read_stdin()? {
            Some(input) => (
                parse_config(&input).context("Invalid cosmology configuration on standard input")?,
                OutputFormat::Commented,
            ),
            None => return Ok(usage()),
        },
        [h0, omega_m, omega_l] => (Cosmology::new(*h0, *omega_m, *omega_l)?, OutputFormat::Table),
        _ => return Ok(usage()),
    };
    debug!("Resolved cosmology:\n{cosmo}");

    let result = cosmo
        .distances(cli.z)
        .with_context(|| format!("Unable to compute distances at z = {}", cli.z))?;

    let format = cli.format.unwrap_or(default_format);
    write_report(io::stdout().lock(), &result, format.into())?;
    Ok(ExitCode::SUCCESS)
}

// An interactive terminal or an empty stream means no configuration was supplied.
fn read_stdin() -> io::Result<Option<String>> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut input = String::new();
    stdin.read_to_string(&mut input)?;
    Ok((!input.is_empty()).then_some(input))
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn usage() -> ExitCode {
    eprintln!("{}", Cli::command().render_help());
    ExitCode::FAILURE
}
