use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pennywise::commands::CommandOutcome;
use pennywise::config::{PennywisePaths, Settings};
use pennywise::parser::PennyParser;
use pennywise::storage::Storage;
use pennywise::PennyError;

#[derive(Parser)]
#[command(
    name = "pennywise",
    version,
    about = "Track income and expenditure from the command line",
    long_about = "PennyWise records tagged income and expenditure entries and \
                  summarizes them. Pass a command line to run it once, or run \
                  without arguments for an interactive session.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Directory holding settings, entries and the audit log
    #[arg(long, global = true, env = "PENNYWISE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Show debug output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Command to run once, e.g. `view t/e`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => PennywisePaths::with_base_dir(dir),
        None => PennywisePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    if let Some(Commands::Config) = cli.command {
        print_config(&paths, &settings);
        return Ok(());
    }

    let mut storage = Storage::new(paths, &settings)?;
    storage.load_all()?;

    if cli.words.is_empty() {
        run_interactive(&mut storage, &settings)
    } else {
        let outcome = run_line(&cli.words.join(" "), &mut storage, &settings)?;
        println!("{}", outcome.feedback.trim_end());
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_line(line: &str, storage: &mut Storage, settings: &Settings) -> Result<CommandOutcome, PennyError> {
    let command = PennyParser::parse_command(line)?;
    command.execute(storage, settings)
}

fn run_interactive(storage: &mut Storage, settings: &Settings) -> Result<()> {
    println!("Welcome to PennyWise! Type 'help' to see what you can do.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match run_line(&line?, storage, settings) {
            Ok(outcome) => {
                println!("{}", outcome.feedback.trim_end());
                if outcome.exit {
                    return Ok(());
                }
            }
            Err(e) => {
                tracing::debug!(error = ?e, "command failed");
                println!("{}", e);
            }
        }
    }

    // EOF without `exit`
    println!();
    Ok(())
}

fn print_config(paths: &PennywisePaths, settings: &Settings) {
    println!("PennyWise Configuration");
    println!("=======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Entries file:   {}", paths.entries_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Audit enabled:   {}", settings.audit_enabled);
}
