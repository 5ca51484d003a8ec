//! Core types for gear combinations and shift planning
//!
//! This module keeps the plan vocabulary typed: a step in a shift sequence is
//! a `GearCombination`, and the rear traversal direction is a proper enum
//! rather than a boolean flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// A single gear selection: front cog, rear cog, and the ratio they produce.
///
/// The ratio is always derived from the pair at construction time, never
/// stored independently of it. A shift sequence is an ordered `Vec` of these,
/// where consecutive entries differ in exactly one of front/rear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearCombination {
    /// Tooth count on the selected front cog
    pub front: u32,
    /// Tooth count on the selected rear cog
    pub rear: u32,
    /// front / rear as a floating-point value
    pub ratio: f64,
}

impl fmt::Display for GearCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Front: {}, Rear: {}, Ratio: {:.3}",
            self.front, self.rear, self.ratio
        )
    }
}

/// Direction of travel through the rear cog list during a shift sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ShiftDirection {
    /// Moving toward larger rear cogs (smaller ratios)
    #[strum(serialize = "ascending")]
    Ascending,
    /// Moving toward smaller rear cogs (larger ratios)
    #[strum(serialize = "descending")]
    Descending,
}
