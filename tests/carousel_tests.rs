// Host-side tests for carousel geometry and rotation state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod carousel {
    include!("../src/core/carousel.rs");
}

use carousel::*;

/// Reference front-facing test computed independently in f64.
fn expected_front(rotation: f64, index: usize, n: usize) -> bool {
    let a = (rotation + index as f64 * 360.0 / n as f64) % 360.0;
    let a = if a < 0.0 { a + 360.0 } else { a };
    a <= 135.0 || a >= 315.0
}

/// A carousel after `ticks` auto-spin steps of -0.25 degrees.
fn spun(card_count: usize, ticks: usize) -> Carousel {
    let mut c = Carousel::new(card_count);
    for _ in 0..ticks {
        c.tick();
    }
    c
}

#[test]
fn four_cards_at_rest_show_first_two() {
    let c = Carousel::new(4);
    assert_eq!(c.angle_step(), 90.0);
    // facing angles 0, 90, 180, 270
    assert_eq!(c.front_facing().as_slice(), &[0, 1]);
}

#[test]
fn arc_boundaries_are_inclusive() {
    assert!(is_front_facing(0.0));
    assert!(is_front_facing(135.0));
    assert!(!is_front_facing(135.5));
    assert!(!is_front_facing(314.5));
    assert!(is_front_facing(315.0));
    assert!(is_front_facing(359.75));
    assert!(is_front_facing(-45.0));
    assert!(!is_front_facing(-46.0));

    // -315: facing angles 45, 135, 225, 315
    let c = spun(4, 1260);
    assert_eq!(c.front_facing().as_slice(), &[0, 1, 3]);
    // -45: facing angles 315, 45, 135, 225
    let c = spun(4, 180);
    assert_eq!(c.front_facing().as_slice(), &[0, 1, 2]);
}

#[test]
fn front_facing_set_matches_reference_over_full_sweep() {
    for n in [1usize, 2, 4, 6] {
        let mut c = Carousel::new(n);
        // two full turns in quarter-degree steps
        for _ in 0..=2880 {
            let r = c.rotation();
            let expected: Vec<usize> = (0..n).filter(|&i| expected_front(r as f64, i, n)).collect();
            assert_eq!(
                c.front_facing().to_vec(),
                expected,
                "n={} rotation={}",
                n,
                r
            );
            c.tick();
        }
    }
}

#[test]
fn normalize_maps_into_half_open_turn() {
    assert_eq!(normalize_deg(0.0), 0.0);
    assert_eq!(normalize_deg(360.0), 0.0);
    assert_eq!(normalize_deg(720.0), 0.0);
    assert_eq!(normalize_deg(-90.0), 270.0);
    assert_eq!(normalize_deg(450.0), 90.0);
    let tiny = normalize_deg(-1e-9);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn auto_spin_decreases_rotation_while_running() {
    let mut c = Carousel::new(4);
    let mut prev = c.rotation();
    for _ in 0..100 {
        assert!(c.tick());
        assert!(c.rotation() < prev);
        prev = c.rotation();
    }
    assert_eq!(c.rotation(), -25.0);
}

/// Angle swept by one tick, measured on the circle.
fn swept(before: f32, after: f32) -> f32 {
    normalize_deg(before - after)
}

#[test]
fn spin_crosses_whole_turns_without_stalling() {
    let mut c = spun(4, 1438);
    assert_eq!(c.rotation(), -359.5);
    for _ in 0..8 {
        let before = c.rotation();
        assert!(c.tick());
        assert!(c.rotation().abs() < 360.0);
        assert!((swept(before, c.rotation()) - 0.25).abs() < 1e-3);
    }
    // -721.5 on the circle: facing angles 358.5, 88.5, 178.5, 268.5
    assert_eq!(c.front_facing().as_slice(), &[0, 1]);
}

#[test]
fn spin_keeps_moving_for_days() {
    let mut c = Carousel::new(4);
    // ~80 hours at one tick per 16ms
    for _ in 0..18_000_000u32 {
        c.tick();
    }
    let before = c.rotation();
    assert!(before.abs() < 360.0);
    assert!(c.tick());
    assert!((swept(before, c.rotation()) - 0.25).abs() < 1e-3);
    let expected: Vec<usize> = (0..4)
        .filter(|&i| expected_front(c.rotation() as f64, i, 4))
        .collect();
    assert_eq!(c.front_facing().to_vec(), expected);
}

#[test]
fn manual_steps_stay_within_one_turn() {
    let mut c = Carousel::new(4);
    for _ in 0..9 {
        c.next();
    }
    // -810 is -90 on the circle
    assert_eq!(c.rotation(), -90.0);
    assert_eq!(c.front_facing().as_slice(), &[1, 2]);
    for _ in 0..10 {
        c.prev();
    }
    assert_eq!(c.rotation(), 90.0);
    assert_eq!(wrap_turns(-360.0), 0.0);
    assert_eq!(wrap_turns(725.0), 5.0);
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut c = Carousel::new(6);
    c.tick();
    c.pause();
    let frozen = c.rotation();
    for _ in 0..10 {
        assert!(!c.tick());
    }
    assert_eq!(c.rotation(), frozen);
    assert!(c.is_paused());

    c.resume();
    assert!(c.tick());
    assert_eq!(c.rotation(), frozen - 0.25);
}

#[test]
fn manual_steps_move_one_slot_in_opposite_directions() {
    let mut c = Carousel::new(4);
    c.pause();
    c.prev();
    assert_eq!(c.rotation(), 90.0);
    c.next();
    c.next();
    assert_eq!(c.rotation(), -90.0);
    // -90: facing angles 270, 0, 90, 180
    assert_eq!(c.front_facing().as_slice(), &[1, 2]);
}

#[test]
fn transforms_place_cards_on_cylinder() {
    let mut c = Carousel::new(4);
    assert_eq!(c.card_transform(1, CardLayout::WIDE), "rotateY(90deg) translateZ(240px)");
    assert_eq!(c.card_transform(0, CardLayout::COMPACT), "rotateY(0deg) translateZ(190px)");
    c.prev();
    assert_eq!(c.group_transform(), "rotateY(90deg)");
    assert_eq!(c.slot(3), 270.0);
    // 90 + 270 is a whole turn
    assert!(c.is_front(3));
}

#[test]
fn focus_styles_dim_back_cards() {
    let c = Carousel::new(4);
    assert_eq!(c.focus(0), CardFocus::Front);
    assert_eq!(c.focus(2), CardFocus::Back);
    let back = CardFocus::Back.css();
    assert!(back.contains("opacity: 0.2"));
    assert!(back.contains("blur(3px)"));
    assert!(back.contains("scale(0.9)"));
    assert!(back.contains("pointer-events: none"));
    assert!(CardFocus::Front.css().contains("opacity: 1"));
}

#[test]
fn layout_switches_at_breakpoint() {
    assert_eq!(CardLayout::for_viewport(375.0), CardLayout::COMPACT);
    assert_eq!(CardLayout::for_viewport(768.0), CardLayout::COMPACT);
    assert_eq!(CardLayout::for_viewport(769.0), CardLayout::WIDE);
    assert_eq!(CardLayout::WIDE.width, 260.0);
    assert_eq!(CardLayout::WIDE.height, 320.0);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = Carousel::new(0);
    assert_eq!(c.angle_step(), 0.0);
    c.prev();
    assert_eq!(c.rotation(), 0.0);
    assert!(c.front_facing().is_empty());
}

#[test]
fn default_cards_are_the_four_services() {
    let cards = default_cards();
    let titles: Vec<&str> = cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Web Development", "Branding", "App Design", "Automation"]);
}
