// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn phase_offsets_are_increasing_from_start() {
    assert!(EXPLODE_AT_MS > 0);
    assert!(FORM_TEXT_AT_MS > EXPLODE_AT_MS);
    assert!(RETURN_AT_MS > FORM_TEXT_AT_MS);
    assert!(COMPLETE_AT_MS > RETURN_AT_MS);
    assert_eq!(COMPLETE_AT_MS, 7600);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn return_transition_settles_before_completion() {
    assert!(EXPLODE_TRANSITION.starts_with("1.4s"));
    assert!(FORM_TEXT_TRANSITION.starts_with("2s"));
    assert!(RETURN_TRANSITION.starts_with("2s"));
    assert!(COMPLETE_AT_MS - RETURN_AT_MS >= 2000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sampling_constants_are_sane() {
    assert!(SAMPLE_STRIDE > 0);
    assert!(TEXT_ALPHA_THRESHOLD <= LOGO_ALPHA_THRESHOLD);
    assert!(EXPLODE_RADIUS > 0.0);
    assert!(WORDMARK_FONT_NARROW_PX < WORDMARK_FONT_WIDE_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn front_arc_leaves_a_half_turn_dead_zone() {
    let dead_zone = FRONT_ARC_START_DEG - FRONT_ARC_END_DEG;
    assert_eq!(dead_zone, 180.0);
    assert!(SPIN_STEP_DEG < 0.0);
    assert!(SPIN_INTERVAL_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn card_presets_fit_inside_their_radius_order() {
    assert!(COMPACT_CARD.0 < WIDE_CARD.0);
    assert!(COMPACT_CARD.1 < WIDE_CARD.1);
    assert!(COMPACT_CARD.2 < WIDE_CARD.2);
    assert!(DIMMED_OPACITY > 0.0 && DIMMED_OPACITY < 1.0);
    assert!(DIMMED_SCALE > 0.0 && DIMMED_SCALE < 1.0);
}

#[test]
fn page_ids_are_distinct() {
    let ids = [
        LOADER_ID,
        LOADER_STAGE_ID,
        APP_ROOT_ID,
        CAROUSEL_ID,
        CAROUSEL_PREV_ID,
        CAROUSEL_NEXT_ID,
        SPOTLIGHT_GRID_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(SPOTLIGHT_CARD_SELECTOR.starts_with('.'));
}
