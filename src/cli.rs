use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drivetrain - bicycle gear selection and shift planning
#[derive(Parser)]
#[command(name = "drivetrain")]
#[command(about = "Find gear combinations and plan shift sequences for a bicycle drivetrain")]
#[command(version)]
pub struct Cli {
    /// Path to a drivetrain configuration file (JSON).
    ///
    /// When omitted, the built-in demo drivetrain is used
    /// (front cogs 30/38, rear cogs 16/19/23/28).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the gear combination closest to a target ratio without exceeding it
    Find {
        /// Maximum allowed gear ratio
        #[arg(short, long)]
        target_ratio: f64,
    },
    /// Plan a step-by-step shift sequence from an initial gear to the target ratio
    Plan {
        /// Maximum allowed gear ratio
        #[arg(short, long)]
        target_ratio: f64,
        /// Tooth count of the current front cog
        #[arg(short, long)]
        front: u32,
        /// Tooth count of the current rear cog
        #[arg(short, long)]
        rear: u32,
    },
    /// Validate a drivetrain configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}
