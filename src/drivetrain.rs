//! Drivetrain gear search and shift sequence planning
//!
//! Models a bicycle drivetrain as two sorted cog lists and answers two
//! questions: which front/rear pair gets closest to a target ratio without
//! exceeding it, and what single-cog-at-a-time shift sequence reaches it
//! from a given starting gear.
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects — only searches and plans
//! - **Immutable after construction**: Both cog lists are sorted once and
//!   never mutated, so every operation is a pure function of its inputs
//! - **Exhaustive search**: The cross product is tens of pairs at most;
//!   no pruning is worth the complexity
//!
//! # Shift Rules
//!
//! | Shift | Behavior |
//! |-------|----------|
//! | Front | One atomic jump straight to the target front cog |
//! | Rear  | One cog at a time through the sorted rear list, no skipping |

use crate::error::{DrivetrainError, Result};
use crate::types::{GearCombination, ShiftDirection};
use log::debug;

// ============================================================================
// Drivetrain
// ============================================================================

/// A fixed set of front and rear cog tooth counts.
///
/// Both lists are stored sorted ascending and are read-only for the lifetime
/// of the value. Empty lists are accepted; the search then fails naturally
/// with [`DrivetrainError::GearRatioNotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drivetrain {
    front_cogs: Vec<u32>,
    rear_cogs: Vec<u32>,
}

impl Drivetrain {
    /// Create a drivetrain from front and rear cog tooth counts.
    ///
    /// Input order does not matter — both lists are sorted ascending here so
    /// the shift planner can walk them in tooth-count order. Tooth counts are
    /// expected to be positive and distinct within each list; use
    /// [`crate::config_file::DrivetrainConfig::validate`] to enforce that at
    /// the configuration boundary.
    pub fn new(mut front_cogs: Vec<u32>, mut rear_cogs: Vec<u32>) -> Self {
        front_cogs.sort_unstable();
        rear_cogs.sort_unstable();
        Self {
            front_cogs,
            rear_cogs,
        }
    }

    /// Front cog tooth counts, sorted ascending.
    pub fn front_cogs(&self) -> &[u32] {
        &self.front_cogs
    }

    /// Rear cog tooth counts, sorted ascending.
    pub fn rear_cogs(&self) -> &[u32] {
        &self.rear_cogs
    }

    /// Gear ratio for a front/rear tooth-count pair.
    ///
    /// A rear tooth count of zero is a caller error: values are expected to
    /// come from a configured cog set, which never contains zero.
    pub fn gear_ratio(front_teeth: u32, rear_teeth: u32) -> f64 {
        f64::from(front_teeth) / f64::from(rear_teeth)
    }

    // ========================================================================
    // Combination Search
    // ========================================================================

    /// Find the combination whose ratio is closest to `target_ratio` without
    /// exceeding it.
    ///
    /// Enumerates the full cross product of front × rear cogs, keeps pairs
    /// with ratio ≤ target, and selects the maximum ratio among them. When
    /// several pairs share the maximum ratio, the pair encountered first in
    /// front-ascending, rear-ascending order wins.
    ///
    /// # Errors
    ///
    /// Returns [`DrivetrainError::GearRatioNotFound`] when either cog list is
    /// empty or no pair satisfies the bound (target below the minimum
    /// achievable ratio included).
    pub fn find_closest_combination(&self, target_ratio: f64) -> Result<GearCombination> {
        let mut best: Option<GearCombination> = None;

        for &front in &self.front_cogs {
            for &rear in &self.rear_cogs {
                let ratio = Self::gear_ratio(front, rear);
                // Positive <= filter: a NaN target qualifies nothing. The
                // strictly-greater comparison below keeps the first pair seen
                // in front-major, rear-minor order when ratios tie.
                if ratio <= target_ratio {
                    match best {
                        Some(current) if ratio <= current.ratio => {}
                        _ => best = Some(GearCombination { front, rear, ratio }),
                    }
                }
            }
        }

        match best {
            Some(combo) => {
                debug!(
                    "closest combination to target {}: ({}, {}) ratio {:.3}",
                    target_ratio, combo.front, combo.rear, combo.ratio
                );
                Ok(combo)
            }
            None => Err(DrivetrainError::GearRatioNotFound { target_ratio }),
        }
    }

    // ========================================================================
    // Shift Sequence Planning
    // ========================================================================

    /// Plan the shift sequence from `(initial_front, initial_rear)` to the
    /// combination closest to `target_ratio`.
    ///
    /// The returned sequence starts with the initial combination and ends at
    /// the search result. The front cog changes in one atomic jump; the rear
    /// cog steps through every intermediate cog in sorted order, one at a
    /// time, the way a derailleur actually moves. Intermediate ratios may
    /// briefly exceed the target — only the final step is bound by it.
    ///
    /// # Errors
    ///
    /// - [`DrivetrainError::InvalidInitialGear`] when either initial cog is
    ///   not a member of its configured set (checked before the search runs)
    /// - [`DrivetrainError::GearRatioNotFound`] propagated unchanged from the
    ///   combination search
    pub fn plan_shift_sequence(
        &self,
        target_ratio: f64,
        initial_front: u32,
        initial_rear: u32,
    ) -> Result<Vec<GearCombination>> {
        if !self.front_cogs.contains(&initial_front) || !self.rear_cogs.contains(&initial_rear) {
            return Err(DrivetrainError::InvalidInitialGear {
                front: initial_front,
                rear: initial_rear,
            });
        }

        let target = self.find_closest_combination(target_ratio)?;

        let mut current_front = initial_front;
        let mut current_rear = initial_rear;
        let mut sequence = vec![Self::combination(current_front, current_rear)];

        // Front shift is a single discrete jump; intermediate front cogs are
        // not meaningful waypoints.
        if current_front != target.front {
            current_front = target.front;
            sequence.push(Self::combination(current_front, current_rear));
        }

        if current_rear != target.rear {
            let direction = if target.rear > current_rear {
                ShiftDirection::Ascending
            } else {
                ShiftDirection::Descending
            };
            debug!(
                "rear traversal {} from {} to {}",
                direction, current_rear, target.rear
            );

            // Candidate window: every rear cog on the target's side of the
            // current cog, ordered away from it. Filter-then-locate rather
            // than index arithmetic on the full list, so the walk always
            // starts at the current cog regardless of where it sits.
            let candidates: Vec<u32> = match direction {
                ShiftDirection::Ascending => self
                    .rear_cogs
                    .iter()
                    .copied()
                    .filter(|&r| r >= current_rear)
                    .collect(),
                ShiftDirection::Descending => self
                    .rear_cogs
                    .iter()
                    .rev()
                    .copied()
                    .filter(|&r| r <= current_rear)
                    .collect(),
            };

            let start = candidates.iter().position(|&r| r == current_rear);
            let end = candidates.iter().position(|&r| r == target.rear);

            // Membership was checked above and the window is ordered away
            // from the current cog, so both positions exist and the target
            // never lies before the start.
            if let (Some(start), Some(end)) = (start, end) {
                for &rear in &candidates[start..=end] {
                    if rear != current_rear {
                        current_rear = rear;
                        sequence.push(Self::combination(current_front, current_rear));
                    }
                }
            }
        }

        Ok(sequence)
    }

    fn combination(front: u32, rear: u32) -> GearCombination {
        GearCombination {
            front,
            rear,
            ratio: Self::gear_ratio(front, rear),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
