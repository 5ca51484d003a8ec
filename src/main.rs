//! Drivetrain CLI - Main entry point
//!
//! A small command-line front end over the drivetrain library: find the best
//! gear combination for a target ratio, plan a shift sequence, or validate a
//! drivetrain configuration file. With no subcommand it runs the demo
//! scenario.

use log::{debug, error, info};

use drivetrain::cli::{Cli, Commands};
use drivetrain::{format_sequence, Drivetrain, DrivetrainConfig, DrivetrainError};

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    debug!("drivetrain CLI starting up");

    let cli = Cli::parse_args();

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match DrivetrainConfig::load_from_file(&config) {
                Ok(loaded) => match loaded.validate() {
                    Ok(_) => {
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {}", e);
                    eprintln!("✗ Failed to load configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Find { target_ratio }) => {
            let drivetrain = load_drivetrain(cli.config.as_deref())?;
            run_find(&drivetrain, target_ratio);
        }
        Some(Commands::Plan {
            target_ratio,
            front,
            rear,
        }) => {
            let drivetrain = load_drivetrain(cli.config.as_deref())?;
            run_plan(&drivetrain, target_ratio, front, rear);
        }
        None => {
            let drivetrain = load_drivetrain(cli.config.as_deref())?;
            run_demo(&drivetrain);
        }
    }

    Ok(())
}

/// Load a drivetrain from the given config path, or fall back to the demo
/// drivetrain when no path is supplied. Config files are validated before a
/// drivetrain is built from them.
fn load_drivetrain(
    config_path: Option<&std::path::Path>,
) -> Result<Drivetrain, Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => {
            info!("Loading drivetrain configuration from {:?}", path);
            let config = DrivetrainConfig::load_from_file(path)?;
            config.validate()?;
            config
        }
        None => DrivetrainConfig::default(),
    };
    Ok(config.to_drivetrain())
}

fn run_find(drivetrain: &Drivetrain, target_ratio: f64) {
    match drivetrain.find_closest_combination(target_ratio) {
        Ok(combo) => {
            println!("Best gear combination: {}", combo);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn run_plan(drivetrain: &Drivetrain, target_ratio: f64, front: u32, rear: u32) {
    match drivetrain.plan_shift_sequence(target_ratio, front, rear) {
        Ok(sequence) => {
            println!("Shift sequence:");
            println!("{}", format_sequence(&sequence));
        }
        Err(e @ DrivetrainError::InvalidInitialGear { .. }) => {
            eprintln!("✗ {}", e);
            eprintln!(
                "  Configured front cogs: {:?}, rear cogs: {:?}",
                drivetrain.front_cogs(),
                drivetrain.rear_cogs()
            );
            std::process::exit(1);
        }
        Err(e @ DrivetrainError::GearRatioNotFound { .. }) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

/// Demo scenario: front cogs 30/38, rear cogs 16/19/23/28, target ratio 1.6,
/// starting from the (38, 28) combination.
fn run_demo(drivetrain: &Drivetrain) {
    let target_ratio = 1.6;
    let (initial_front, initial_rear) = (38, 28);

    run_find(drivetrain, target_ratio);
    println!();
    run_plan(drivetrain, target_ratio, initial_front, initial_rear);
}
