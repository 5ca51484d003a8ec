//! Text rendering for shift sequences
//!
//! Pure formatting, no decisions: one line per step, in input order.

use crate::types::GearCombination;

/// Render a shift sequence as a multiline string, one step per line in the
/// form `Front: {f}, Rear: {r}, Ratio: {ratio:.3}`.
pub fn format_sequence(sequence: &[GearCombination]) -> String {
    sequence
        .iter()
        .map(GearCombination::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
