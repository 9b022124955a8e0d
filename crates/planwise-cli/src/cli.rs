//! CLI argument parsing for planwise.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "planwise")]
#[command(version, about = "Benefit plan comparison reports", long_about = None)]
pub struct Cli {
    /// Path to a JSON plan catalog (defaults to the built-in sample catalog)
    #[arg(short, long, env = "PLANWISE_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the plans in the catalog
    Plans,

    /// Show one plan as a detail card
    Show {
        /// Plan id
        #[arg(required = true)]
        id: String,
    },

    /// Compare selected plans side by side
    Compare {
        /// Plan ids, in the column order to display
        #[arg(required = true)]
        ids: Vec<String>,

        /// Only show rows where plans differ
        #[arg(long)]
        diff_only: bool,

        /// Skip the estimated annual cost summary
        #[arg(long)]
        no_costs: bool,
    },

    /// Estimated annual cost projection for selected plans
    Costs {
        /// Plan ids, in display order
        #[arg(required = true)]
        ids: Vec<String>,

        /// Emit the projections as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
