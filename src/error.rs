//! Error handling module for the drivetrain library
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Both error kinds are recoverable and input-driven: callers are expected to
//! branch on the variant rather than treat them as fatal.

use thiserror::Error;

/// Main error type for drivetrain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrivetrainError {
    /// No front/rear pair produces a ratio at or below the requested target.
    /// Also raised when either cog set is empty (the cross product is empty).
    #[error("no gear ratio found that is <= {target_ratio}")]
    GearRatioNotFound { target_ratio: f64 },

    /// The supplied starting gear is not part of the configured drivetrain.
    #[error("initial gear ({front}, {rear}) is not in the configured cog sets")]
    InvalidInitialGear { front: u32, rear: u32 },
}

/// Result type alias for drivetrain operations
pub type Result<T> = std::result::Result<T, DrivetrainError>;
