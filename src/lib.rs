//! Drivetrain Library
//!
//! Models a bicycle drivetrain as a fixed set of front and rear cog tooth
//! counts and answers two questions: which front/rear combination yields the
//! gear ratio closest to (but not exceeding) a target ratio, and what ordered
//! sequence of single-cog shifts reaches it from a given starting gear.

pub mod cli;
pub mod config_file;
pub mod drivetrain;
pub mod error;
pub mod format;
pub mod types;

// Re-export main types for convenience
pub use config_file::DrivetrainConfig;
pub use drivetrain::Drivetrain;
pub use error::{DrivetrainError, Result};
pub use format::format_sequence;
pub use types::{GearCombination, ShiftDirection};
