// Host-side tests for the page UI flags and the reveal machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod ui {
    include!("../src/core/ui.rs");
}

use ui::*;

#[test]
fn scroll_flag_follows_threshold() {
    let mut page = PageUi::default();
    let offsets = [0.0, 10.0, 60.0, 40.0];
    let expected = [false, false, true, false];
    for (offset, want) in offsets.iter().zip(expected) {
        page.observe_scroll(*offset);
        assert_eq!(page.scrolled, want, "offset {offset}");
    }
}

#[test]
fn scroll_flag_is_false_at_the_boundary() {
    let mut page = PageUi::default();
    page.observe_scroll(SCROLL_THRESHOLD);
    assert!(!page.scrolled);
    page.observe_scroll(SCROLL_THRESHOLD + 0.1);
    assert!(page.scrolled);
    page.observe_scroll(0.0);
    assert!(!page.scrolled);
}

#[test]
fn menu_flag_parity_over_toggles() {
    let mut page = PageUi::default();
    assert!(!page.menu_open);
    for n in 1..=10 {
        let now_open = page.toggle_menu();
        assert_eq!(now_open, n % 2 == 1);
        assert_eq!(page.menu_open, n % 2 == 1);
    }
}

#[test]
fn close_menu_is_idempotent() {
    let mut page = PageUi::default();
    page.toggle_menu();
    page.close_menu();
    assert!(!page.menu_open);
    page.close_menu();
    assert!(!page.menu_open);
}

#[test]
fn once_reveal_fires_exactly_once() {
    let mut reveal = Reveal::new(RevealPolicy::Once);
    assert!(!reveal.is_shown());

    // Not yet intersecting: nothing happens
    assert_eq!(reveal.on_intersection(false), None);

    assert_eq!(reveal.on_intersection(true), Some(true));
    assert!(reveal.is_shown());
    assert!(reveal.is_settled());

    // Scrolling away and back never hides or re-fires
    assert_eq!(reveal.on_intersection(false), None);
    assert_eq!(reveal.on_intersection(true), None);
    assert!(reveal.is_shown());
}

#[test]
fn every_entry_reveal_reverts() {
    let mut reveal = Reveal::new(RevealPolicy::EveryEntry);
    assert_eq!(reveal.on_intersection(true), Some(true));
    assert!(!reveal.is_settled());
    assert_eq!(reveal.on_intersection(false), Some(false));
    assert!(!reveal.is_shown());
    assert_eq!(reveal.on_intersection(true), Some(true));
}

#[test]
fn stagger_delay_is_linear_in_index() {
    assert_eq!(stagger_delay(0), 0.0);
    assert!((stagger_delay(1) - STAGGER_STEP).abs() < 1e-6);
    // Third record in a list waits exactly twice the base delay
    assert!((stagger_delay(2) - 2.0 * stagger_delay(1)).abs() < 1e-6);
}
