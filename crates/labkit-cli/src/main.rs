mod config;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use labkit_menu::{run_session, Calculator, Console, Gradebook, MatrixLab, Program};
use labkit_store::{BoundedLedger, StudentTable};

use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "labkit",
    version,
    about = "Menu-driven calculator, matrix and grade-book console programs"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculator with operation history
    Calc,

    /// Matrix operations on fixed-size integer matrices
    Matrix,

    /// Student grade management
    Grades,

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Calc => {
            let ledger = BoundedLedger::new(config.history.capacity)
                .with_failed_division_logging(config.history.log_failed_division);
            run_console(Calculator::new(ledger, config.display.precision))
        }
        Commands::Matrix => run_console(MatrixLab::new(config.display.cell_width)),
        Commands::Grades => run_console(Gradebook::new(
            StudentTable::new(config.students.capacity),
            config.students.top_count,
            config.display.precision,
        )),
        Commands::Config => cmd_config(cli.config.as_deref(), &config),
    }
}

fn run_console<P: Program>(mut program: P) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    run_session(&mut program, &mut console).context("console session failed")
}

fn cmd_config(explicit: Option<&Path>, config: &Config) -> Result<()> {
    println!("Config: {}", config::show_config_path(explicit));
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
