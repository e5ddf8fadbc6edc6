//! Tests for interval merging and gap computation.

use breaks_core::{gaps_between, merge_intervals, Interval};

fn iv(start: u16, end: u16) -> Interval {
    Interval::new(start, end)
}

#[test]
fn disjoint_intervals_stay_separate() {
    let merged = merge_intervals(&[iv(540, 600), iv(660, 720)]);
    assert_eq!(merged, vec![iv(540, 600), iv(660, 720)]);
}

#[test]
fn overlapping_intervals_coalesce() {
    // 09:00-10:30 and 10:00-11:00 -> 09:00-11:00
    let merged = merge_intervals(&[iv(540, 630), iv(600, 660)]);
    assert_eq!(merged, vec![iv(540, 660)]);
}

#[test]
fn touching_intervals_coalesce() {
    // 09:00-10:00 and 10:00-11:30 touch at 10:00 and merge into one span.
    let merged = merge_intervals(&[iv(540, 600), iv(600, 690)]);
    assert_eq!(merged, vec![iv(540, 690)]);
}

#[test]
fn containment_collapses_to_outer_span() {
    let merged = merge_intervals(&[iv(540, 720), iv(600, 660)]);
    assert_eq!(merged, vec![iv(540, 720)]);
}

#[test]
fn unsorted_input_merges_the_same() {
    let merged = merge_intervals(&[iv(660, 720), iv(540, 600), iv(590, 670)]);
    assert_eq!(merged, vec![iv(540, 720)]);
}

#[test]
fn empty_input_merges_to_empty() {
    assert!(merge_intervals(&[]).is_empty());
    assert!(gaps_between(&[]).is_empty());
}

#[test]
fn gap_between_two_spans() {
    // 09:00-10:00 and 11:00-12:00 -> one 10:00-11:00 gap.
    let gaps = gaps_between(&[iv(540, 600), iv(660, 720)]);
    assert_eq!(gaps, vec![iv(600, 660)]);
}

#[test]
fn no_gap_between_touching_spans() {
    let gaps = gaps_between(&[iv(540, 600), iv(600, 690)]);
    assert!(gaps.is_empty(), "touching spans leave no break");
}

#[test]
fn no_leading_or_trailing_gaps() {
    // A single busy span has free time on both sides, but breaks only exist
    // between occupied spans.
    let gaps = gaps_between(&[iv(540, 600)]);
    assert!(gaps.is_empty());
}

#[test]
fn gaps_ignore_input_order_and_overlap() {
    let gaps = gaps_between(&[iv(660, 720), iv(540, 600), iv(550, 590)]);
    assert_eq!(gaps, vec![iv(600, 660)]);
}

#[test]
fn half_open_containment() {
    let span = iv(540, 600);
    assert!(span.contains(540), "start minute is inside");
    assert!(span.contains(599));
    assert!(!span.contains(600), "end minute is outside");
    assert_eq!(span.duration_minutes(), 60);
}
