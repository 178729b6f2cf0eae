//! tinted-counter CLI
//!
//! A counter button and a color dropdown driving a derived background.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use tinted_counter::config::Config;
use tinted_counter::error::Result;
use tinted_counter::logging::init_tracing;
use tinted_counter::report::{format_colors, format_snapshot};
use tinted_counter::script::Script;
use tinted_counter::tui;
use tinted_counter::types::OutputFormat;

#[derive(Parser)]
#[command(name = "tinted-counter")]
#[command(about = "Counter button and color dropdown with a derived background")]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/tinted-counter/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Initial color id, overriding the config file
    #[arg(long, global = true)]
    color: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive view (default)
    Run,

    /// Replay clicks and selections without a terminal, then print the state
    Script {
        /// Number of button activations, applied first
        #[arg(long, default_value_t = 0)]
        clicks: u64,

        /// Color id to select; repeat for several, applied in order
        #[arg(long = "select")]
        selections: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the dropdown's colors and their background tokens
    Colors {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Route to a command handler. Only commands that mount a view read config.
fn dispatch(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Run);
    if let Commands::Colors { format } = command {
        return cmd_colors(format.into());
    }

    let config = load_config(cli.config, cli.color)?;
    match command {
        Commands::Run => cmd_run(&config),
        Commands::Script { clicks, selections, format } => {
            cmd_script(&config, Script { clicks, selections }, format.into())
        }
        Commands::Colors { format } => cmd_colors(format.into()),
    }
}

fn load_config(path: Option<PathBuf>, color: Option<String>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    Ok(config.with_initial_color(color))
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(config: &Config) -> Result<()> {
    let snapshot = tui::run::run(config)?;
    info!(
        counter = snapshot.counter,
        selection = %snapshot.selection,
        presentation = %snapshot.presentation,
        "session ended"
    );
    Ok(())
}

fn cmd_script(config: &Config, script: Script, format: OutputFormat) -> Result<()> {
    let snapshot = script.run(&config.initial_color);
    print!("{}", format_snapshot(&snapshot, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn cmd_colors(format: OutputFormat) -> Result<()> {
    print!("{}", format_colors(format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn broken_config() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"initial_color = \n").unwrap();
        file
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn colors_ignores_broken_config() {
        let file = broken_config();
        let path = file.path().to_str().unwrap();
        let cli = parse(&["tinted-counter", "--config", path, "colors", "--format", "json"]);
        assert!(dispatch(cli).is_ok());
    }

    #[test]
    fn script_reports_broken_config() {
        let file = broken_config();
        let path = file.path().to_str().unwrap();
        let cli = parse(&["tinted-counter", "--config", path, "script", "--clicks", "1"]);
        let err = dispatch(cli).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn script_with_readable_config_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = parse(&[
            "tinted-counter",
            "--config",
            path.to_str().unwrap(),
            "script",
            "--select",
            "purple",
        ]);
        assert!(dispatch(cli).is_ok());
    }
}
