use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ur2ud_cli::commands::config_ops;
use ur2ud_cli::commands::convert_ops::{self, ConvertOptions};
use ur2ud_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(
    name = "ur2ud",
    version,
    about = "Convert romanized Indic text (ISO 15919 or IAST) on stdin to Devanagari"
)]
struct Cli {
    /// Read the input as IAST instead of ISO 15919
    #[arg(long)]
    iast: bool,
    /// Settings TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Custom table TOML file (overrides tables.path in the settings)
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,
    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Export or validate transliteration tables
    Tables {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Export or validate settings
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in TOML
    Export,
    /// Check a custom TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        None => convert_ops::convert_stdin(&ConvertOptions {
            iast: cli.iast,
            config: cli.config,
            tables: cli.tables,
        }),
        Some(Command::Tables { action }) => match action {
            ConfigAction::Export => config_ops::tables_export(),
            ConfigAction::Validate { file } => config_ops::tables_validate(&file),
        },
        Some(Command::Settings { action }) => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
