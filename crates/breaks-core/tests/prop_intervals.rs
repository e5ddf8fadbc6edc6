//! Property-based tests for the clock and interval algebra using proptest.
//!
//! These verify the laws the rest of the engine leans on: clock strings
//! round-trip exactly, merging is idempotent and order-independent, and gaps
//! are insensitive to pre-merging.

use breaks_core::{gaps_between, merge_intervals, ClockTime, Interval};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_minutes() -> impl Strategy<Value = u16> {
    0u16..1440
}

/// A valid half-open interval within the day.
fn arb_interval() -> impl Strategy<Value = Interval> {
    (0u16..1439)
        .prop_flat_map(|start| (Just(start), (start + 1)..=1439))
        .prop_map(|(start, end)| Interval::new(start, end))
}

fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(arb_interval(), 0..24)
}

// ---------------------------------------------------------------------------
// Clock laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn clock_roundtrips_for_all_day_minutes(m in arb_minutes()) {
        let formatted = ClockTime::from_minutes(m).to_string();
        let parsed: ClockTime = formatted.parse().unwrap();
        prop_assert_eq!(parsed.minutes(), m);
    }

    #[test]
    fn formatted_clock_reparses_to_itself(m in arb_minutes()) {
        let s = ClockTime::from_minutes(m).to_string();
        let reparsed: ClockTime = s.parse().unwrap();
        prop_assert_eq!(reparsed.to_string(), s);
    }
}

// ---------------------------------------------------------------------------
// Merge laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn merge_is_idempotent(intervals in arb_intervals()) {
        let once = merge_intervals(&intervals);
        let twice = merge_intervals(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_ignores_input_order(intervals in arb_intervals()) {
        let mut reversed = intervals.clone();
        reversed.reverse();
        prop_assert_eq!(merge_intervals(&intervals), merge_intervals(&reversed));
    }

    #[test]
    fn merged_output_is_sorted_and_pairwise_disjoint(intervals in arb_intervals()) {
        let merged = merge_intervals(&intervals);
        for pair in merged.windows(2) {
            // Strictly apart: equal bounds would have been coalesced.
            prop_assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn merging_preserves_membership(intervals in arb_intervals(), t in arb_minutes()) {
        let raw_busy = intervals.iter().any(|iv| iv.contains(t));
        let merged_busy = merge_intervals(&intervals).iter().any(|iv| iv.contains(t));
        prop_assert_eq!(raw_busy, merged_busy);
    }

    #[test]
    fn gaps_are_insensitive_to_premerging(intervals in arb_intervals()) {
        prop_assert_eq!(
            gaps_between(&intervals),
            gaps_between(&merge_intervals(&intervals))
        );
    }

    #[test]
    fn gaps_never_touch_busy_time(intervals in arb_intervals(), t in arb_minutes()) {
        let busy = merge_intervals(&intervals).iter().any(|iv| iv.contains(t));
        let in_gap = gaps_between(&intervals).iter().any(|g| g.contains(t));
        prop_assert!(!(busy && in_gap), "minute {} is both busy and in a gap", t);
    }
}
