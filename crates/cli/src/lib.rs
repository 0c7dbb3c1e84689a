pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rigsmith_core::config::{AppConfig, LoadOptions, LogFormat};

use crate::commands::input::BuildInput;
use crate::commands::suggest::SuggestRequest;

#[derive(Debug, Parser)]
#[command(
    name = "rigsmith",
    about = "Rigsmith PC build CLI",
    long_about = "Check PC builds for compatibility, size their power supply, and suggest compatible parts from a catalog snapshot.",
    after_help = "Examples:\n  rigsmith suggest --catalog parts.json --part cpu-9800x3d\n  rigsmith check --catalog parts.json --part cpu-9800x3d --part mb-b650\n  rigsmith profile \"4k gaming\""
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct BuildArgs {
    #[arg(long, value_name = "FILE", help = "JSON catalog snapshot (defaults to catalog.path)")]
    catalog: Option<PathBuf>,
    #[arg(long = "part", value_name = "ID", required = true, help = "Selected part ID; repeatable")]
    parts: Vec<String>,
}

impl From<BuildArgs> for BuildInput {
    fn from(args: BuildArgs) -> Self {
        BuildInput { catalog: args.catalog, parts: args.parts }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank compatible catalog parts for the selected parts")]
    Suggest {
        #[command(flatten)]
        build: BuildArgs,
        #[arg(long, value_name = "FILE", help = "JSON object of part ID to co-occurrence weight")]
        weights: Option<PathBuf>,
        #[arg(long, value_name = "LABEL", help = "Only suggest parts inside this profile's budget")]
        profile: Option<String>,
    },
    #[command(about = "Report compatibility issues across the selected parts")]
    Check(BuildArgs),
    #[command(about = "Estimate the recommended PSU wattage for the selected parts")]
    Wattage(BuildArgs),
    #[command(about = "Show the budget and badge criteria for a use-case label")]
    Profile {
        #[arg(value_name = "LABEL")]
        label: String,
    },
    #[command(about = "List the badges the selected build earns")]
    Badges(BuildArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Suggest { build, weights, profile } => {
            commands::suggest::run(SuggestRequest { input: build.into(), weights, profile })
        }
        Command::Check(build) => commands::check::run(build.into()),
        Command::Wattage(build) => commands::wattage::run(build.into()),
        Command::Profile { label } => commands::profile::run(&label),
        Command::Badges(build) => commands::badges::run(build.into()),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logs go to stderr so stdout stays a single JSON document. A broken config
/// falls back to defaults here; the command itself reports the failure.
fn init_logging() {
    use tracing::Level;

    let config = AppConfig::load(LoadOptions::default()).unwrap_or_default();
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
