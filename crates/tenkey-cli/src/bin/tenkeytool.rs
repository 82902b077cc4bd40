use clap::{Parser, Subcommand};

use tenkey_cli::commands::decode_ops::StrategyArg;
use tenkey_cli::commands::{compose_ops, config_ops, decode_ops};

#[derive(Parser)]
#[command(name = "tenkeytool", about = "Tenkey multi-tap decoder diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a press timeline (`row delay_ms` per line, `-` for stdin)
    Decode {
        /// Timeline file
        timeline: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Override split.min_threshold_ms
        #[arg(long)]
        threshold: Option<u64>,
        /// Override ranking.strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// Row table TOML
    Rows {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Settings TOML
    Settings {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Run the separator-key composer over key tokens (s, rs, b, -, c)
    Compose {
        /// Whitespace-separated key tokens
        ops: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the embedded default
    Export,
    /// Validate a custom TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode {
            timeline,
            json,
            threshold,
            strategy,
        } => decode_ops::decode_cmd(&timeline, json, threshold, strategy),
        Command::Rows { action } => match action {
            ConfigAction::Export => config_ops::rows_export(),
            ConfigAction::Validate { file } => config_ops::rows_validate(&file),
        },
        Command::Settings { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
        Command::Compose { ops } => compose_ops::compose_cmd(&ops),
    }
}
