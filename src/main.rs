mod actions;
mod cleanup;
mod config;
mod executor;
mod fs;
mod import;
mod paths;
mod report;
mod verify;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::actions::confirm_action;
use crate::executor::Plan;

#[derive(Parser)]
#[command(
    name = "sweep",
    about = "One-off maintenance sweeps for the Carbon Tracker frontend",
    version
)]
struct Cli {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long, global = true, default_value_t = false)]
    yes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Delete the superseded App variants and promote the corrected one
    Clean,
    /// Swap the rewritten App component into place
    Replace,
    /// Drop the history route and add the refresh dashboard route
    Patch,
    /// Seed the backend with a year of historical submissions
    Import,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Clean) {
        Commands::Clean => {
            if !confirmed(&paths::cleanup_plan(), cli.yes)? {
                return Ok(());
            }
            cleanup::run()?;
        }
        Commands::Replace => {
            let plan = paths::replace_plan();
            if !confirmed(&plan, cli.yes)? {
                return Ok(());
            }
            executor::execute_plan(&plan);
        }
        Commands::Patch => {
            let plan = paths::patch_plan();
            if !confirmed(&plan, cli.yes)? {
                return Ok(());
            }
            executor::execute_plan(&plan);
        }
        Commands::Import => {
            let backend = config::resolve_backend()?;
            import::run(&backend)?;
        }
    }
    Ok(())
}

fn confirmed(plan: &Plan, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    plan.display();
    let proceed = confirm_action::execute("Proceed with these steps?")?;
    if !proceed {
        println!("Aborted.");
    }
    Ok(proceed)
}
