// Host-side tests for the loader phase schedule.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}

use timeline::*;

#[test]
fn nothing_is_due_before_the_first_offset() {
    let mut t = PhaseTimeline::new();
    assert!(t.poll(0.0).is_empty());
    assert!(t.poll(499.9).is_empty());
    assert!(!t.is_complete());
}

#[test]
fn phases_fire_at_absolute_offsets() {
    let mut t = PhaseTimeline::new();
    assert_eq!(t.poll(500.0).as_slice(), &[Phase::Explode]);
    assert!(t.poll(2499.0).is_empty());
    assert_eq!(t.poll(2500.0).as_slice(), &[Phase::FormText]);
    assert_eq!(t.poll(5400.0).as_slice(), &[Phase::Return]);
    assert!(t.poll(7599.0).is_empty());
    assert_eq!(t.poll(7600.0).as_slice(), &[Phase::Complete]);
    assert!(t.is_complete());
}

#[test]
fn late_poll_emits_everything_in_order() {
    let mut t = PhaseTimeline::new();
    assert_eq!(t.poll(60_000.0).as_slice(), &Phase::ALL);
}

#[test]
fn completion_is_emitted_exactly_once() {
    let mut t = PhaseTimeline::new();
    let mut completions = 0;
    for ms in (0..20_000).step_by(100) {
        completions += t
            .poll(ms as f64)
            .iter()
            .filter(|p| **p == Phase::Complete)
            .count();
    }
    assert_eq!(completions, 1);
}

#[test]
fn cancelled_timeline_emits_nothing() {
    let mut t = PhaseTimeline::new();
    assert_eq!(t.poll(600.0).as_slice(), &[Phase::Explode]);
    t.cancel();
    assert!(t.is_cancelled());
    assert!(t.poll(10_000.0).is_empty());
    assert!(!t.is_complete());
}

#[test]
fn offsets_and_transitions_match_schedule() {
    let offsets: Vec<u32> = Phase::ALL.iter().map(|p| p.at_ms()).collect();
    assert_eq!(offsets, vec![500, 2500, 5400, 7600]);
    assert_eq!(Phase::Explode.transition(), Some("1.4s ease-out"));
    assert_eq!(Phase::FormText.transition(), Some("2s ease-in-out"));
    assert_eq!(Phase::Return.transition(), Some("2s ease-in-out"));
    assert_eq!(Phase::Complete.transition(), None);
}
