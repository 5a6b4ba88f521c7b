use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// weekmenu - rule-driven weekly menu planning
#[derive(Parser)]
#[command(name = "weekmenu")]
#[command(about = "Plan a week of meals under dietary and nutrition constraints", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more weekly menus
    Plan(cli::plan::PlanArgs),
    /// Rebuild the fact snapshot from the catalog
    Facts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = weekmenu::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekmenu::observability::init_observability(&config.logging.level)?;

    match cli.command {
        Commands::Plan(args) => cli::plan::plan(config, args),
        Commands::Facts => cli::facts::rebuild(config),
    }
}
