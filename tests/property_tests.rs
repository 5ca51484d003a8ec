//! Property-Based Tests for the drivetrain crate
//!
//! Uses proptest for testing invariants across randomly generated cog sets:
//! - Search results are maximal among ratios at or below the target
//! - Search failures mean no pair qualifies
//! - Shift sequences start, end, and step exactly as specified
//! - Rendering emits one line per step with three decimal places

use proptest::prelude::*;
use proptest::sample::Index;

use drivetrain::{format_sequence, Drivetrain, DrivetrainError, GearCombination};

/// Strategy for a nonempty cog set: distinct tooth counts in a realistic range
fn cog_set_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::hash_set(1u32..=60, 1..=8).prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Search: any returned combination is at or below the target, and no
    /// pair in the cross product does better while staying below it. A
    /// failure means nothing in the cross product qualifies.
    #[test]
    fn search_is_maximal_or_justifiably_empty(
        front in cog_set_strategy(),
        rear in cog_set_strategy(),
        target in 0.1f64..5.0,
    ) {
        let drivetrain = Drivetrain::new(front, rear);

        match drivetrain.find_closest_combination(target) {
            Ok(combo) => {
                prop_assert!(combo.ratio <= target);
                prop_assert!(drivetrain.front_cogs().contains(&combo.front));
                prop_assert!(drivetrain.rear_cogs().contains(&combo.rear));
                for &f in drivetrain.front_cogs() {
                    for &r in drivetrain.rear_cogs() {
                        let ratio = Drivetrain::gear_ratio(f, r);
                        if ratio <= target {
                            prop_assert!(ratio <= combo.ratio);
                        }
                    }
                }
            }
            Err(DrivetrainError::GearRatioNotFound { .. }) => {
                for &f in drivetrain.front_cogs() {
                    for &r in drivetrain.rear_cogs() {
                        prop_assert!(Drivetrain::gear_ratio(f, r) > target);
                    }
                }
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    /// Planning: the sequence starts at the initial gear, ends at the search
    /// result, stays within the configured cog sets, and never changes more
    /// than one cog per step.
    #[test]
    fn plan_sequence_invariants(
        front in cog_set_strategy(),
        rear in cog_set_strategy(),
        front_pick: Index,
        rear_pick: Index,
        target in 0.1f64..5.0,
    ) {
        let drivetrain = Drivetrain::new(front, rear);
        let initial_front = *front_pick.get(drivetrain.front_cogs());
        let initial_rear = *rear_pick.get(drivetrain.rear_cogs());

        match drivetrain.plan_shift_sequence(target, initial_front, initial_rear) {
            Ok(sequence) => {
                prop_assert!(!sequence.is_empty());

                let first = sequence[0];
                prop_assert_eq!((first.front, first.rear), (initial_front, initial_rear));

                let expected = drivetrain.find_closest_combination(target).unwrap();
                let last = *sequence.last().unwrap();
                prop_assert_eq!((last.front, last.rear), (expected.front, expected.rear));
                prop_assert!(last.ratio <= target);

                for step in &sequence {
                    prop_assert!(drivetrain.front_cogs().contains(&step.front));
                    prop_assert!(drivetrain.rear_cogs().contains(&step.rear));
                    prop_assert!((step.ratio
                        - Drivetrain::gear_ratio(step.front, step.rear)).abs() < 1e-12);
                }

                for pair in sequence.windows(2) {
                    let changed = usize::from(pair[0].front != pair[1].front)
                        + usize::from(pair[0].rear != pair[1].rear);
                    prop_assert!(changed <= 1);
                }
            }
            Err(DrivetrainError::GearRatioNotFound { .. }) => {
                prop_assert!(drivetrain.find_closest_combination(target).is_err());
            }
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    /// Planning: an initial gear outside the configured sets always reports
    /// InvalidInitialGear, regardless of the target.
    #[test]
    fn plan_rejects_foreign_initial_gear(
        front in cog_set_strategy(),
        rear in cog_set_strategy(),
        rear_pick: Index,
        target in 0.1f64..5.0,
    ) {
        let drivetrain = Drivetrain::new(front, rear);
        let initial_rear = *rear_pick.get(drivetrain.rear_cogs());

        // 100 lies outside the 1..=60 generation range, so it is never a member.
        let err = drivetrain
            .plan_shift_sequence(target, 100, initial_rear)
            .unwrap_err();
        prop_assert!(
            matches!(err, DrivetrainError::InvalidInitialGear { .. }),
            "expected InvalidInitialGear, got {:?}",
            err
        );
    }

    /// Rendering: one line per step, in input order, three decimal places.
    #[test]
    fn format_emits_one_exact_line_per_step(
        pairs in prop::collection::vec((1u32..=60, 1u32..=60), 0..6),
    ) {
        let steps: Vec<GearCombination> = pairs
            .iter()
            .map(|&(front, rear)| GearCombination {
                front,
                rear,
                ratio: Drivetrain::gear_ratio(front, rear),
            })
            .collect();

        let rendered = format_sequence(&steps);
        let lines: Vec<&str> = rendered.lines().collect();
        prop_assert_eq!(lines.len(), steps.len());

        for (line, step) in lines.iter().zip(&steps) {
            let expected = format!(
                "Front: {}, Rear: {}, Ratio: {:.3}",
                step.front, step.rear, step.ratio
            );
            prop_assert_eq!(*line, expected);
        }
    }
}
