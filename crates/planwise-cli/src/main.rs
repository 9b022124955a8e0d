use anyhow::Context;
use clap::Parser;
use planwise_core::{CostOutlook, UsageAssumptions, compare};
use planwise_store::{MemCatalog, PlanSource, fixtures};
use tracing::info;

mod cli;
mod display;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => MemCatalog::from_json_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => MemCatalog::new(fixtures::sample_plans())?,
    };

    match cli.command {
        Command::Plans => {
            let plans = catalog.plans()?;
            display::print_plan_list(&plans);
        }
        Command::Show { id } => {
            let plan = catalog.plan(&id)?;
            display::print_plan_card(&plan);
        }
        Command::Compare {
            ids,
            diff_only,
            no_costs,
        } => {
            let plans = catalog.select(&ids)?;
            info!(count = plans.len(), "comparing plans");

            let grid = compare(&plans);
            display::print_comparison(&plans, &grid, diff_only);

            if !no_costs {
                let usage = UsageAssumptions::default();
                if let Some(outlook) = CostOutlook::compute(&plans, &usage) {
                    println!();
                    display::print_cost_summary(&outlook, &usage);
                }
            }
        }
        Command::Costs { ids, json } => {
            let plans = catalog.select(&ids)?;
            let usage = UsageAssumptions::default();
            let Some(outlook) = CostOutlook::compute(&plans, &usage) else {
                println!("No plans selected.");
                return Ok(());
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&outlook.projections)?);
            } else {
                display::print_cost_summary(&outlook, &usage);
            }
        }
    }

    Ok(())
}
