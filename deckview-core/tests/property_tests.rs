//! Property tests for navigator invariants.
//!
//! Uses proptest to verify:
//! 1. Cycle closure — advancing `n` times returns to the start
//! 2. Retreat is the inverse of advance
//! 3. Self-jumps are no-ops
//! 4. Requests during a transition are dropped, not queued
//! 5. Progress after settling is `(i + 1) / n`
//! 6. The index always stays inside the deck

mod common;

use std::num::NonZeroUsize;

use common::FakeSurface;
use deckview_core::{NavAction, SlideNavigator, TransitionTiming};
use proptest::prelude::*;

fn navigator_at(n: usize, start: usize) -> (SlideNavigator, FakeSurface) {
    let mut nav = SlideNavigator::new(NonZeroUsize::new(n).unwrap(), TransitionTiming::default());
    let mut surface = FakeSurface::new(n);
    nav.initialize(&mut surface);
    nav.jump_to(start, &mut surface);
    nav.settle(&mut surface);
    (nav, surface)
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_deck_and_index() -> impl Strategy<Value = (usize, usize)> {
    (2usize..40).prop_flat_map(|n| (Just(n), 0..n))
}

fn arb_action(n: usize) -> impl Strategy<Value = NavAction> {
    prop_oneof![
        Just(NavAction::Next),
        Just(NavAction::Previous),
        (0..n).prop_map(NavAction::JumpTo),
    ]
}

fn arb_session() -> impl Strategy<Value = (usize, Vec<(NavAction, bool)>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((arb_action(n), any::<bool>()), 0..60),
        )
    })
}

fn apply(nav: &mut SlideNavigator, surface: &mut FakeSurface, action: NavAction) {
    match action {
        NavAction::Next => nav.advance(surface),
        NavAction::Previous => nav.retreat(surface),
        NavAction::JumpTo(i) => nav.jump_to(i, surface),
    };
}

proptest! {
    #[test]
    fn advance_cycle_closes((n, start) in arb_deck_and_index()) {
        let (mut nav, mut surface) = navigator_at(n, start);
        for _ in 0..n {
            prop_assert!(nav.advance(&mut surface).started());
            nav.settle(&mut surface);
        }
        prop_assert_eq!(nav.current_index(), start);
    }

    #[test]
    fn retreat_inverts_advance((n, start) in arb_deck_and_index()) {
        let (mut nav, mut surface) = navigator_at(n, start);
        nav.advance(&mut surface);
        nav.settle(&mut surface);
        nav.retreat(&mut surface);
        nav.settle(&mut surface);
        prop_assert_eq!(nav.current_index(), start);
    }

    #[test]
    fn self_jump_is_noop((n, start) in arb_deck_and_index()) {
        let (mut nav, mut surface) = navigator_at(n, start);
        let before = nav.state();
        let animations = surface.animations.len();
        prop_assert!(!nav.jump_to(start, &mut surface).started());
        prop_assert_eq!(nav.state(), before);
        nav.settle(&mut surface);
        prop_assert_eq!(surface.animations.len(), animations);
    }

    #[test]
    fn requests_during_transition_are_dropped(
        (n, start) in arb_deck_and_index(),
        first in any::<prop::sample::Index>(),
        burst in prop::collection::vec(any::<prop::sample::Index>(), 1..10),
    ) {
        let (mut nav, mut surface) = navigator_at(n, start);
        let target = (start + 1 + first.index(n - 1)) % n;
        prop_assert!(nav.jump_to(target, &mut surface).started());
        let in_flight = nav.state();

        for (k, idx) in burst.iter().enumerate() {
            match k % 3 {
                0 => { nav.advance(&mut surface); }
                1 => { nav.retreat(&mut surface); }
                _ => { nav.jump_to(idx.index(n), &mut surface); }
            }
            prop_assert_eq!(nav.state(), in_flight);
        }

        nav.settle(&mut surface);
        prop_assert_eq!(nav.current_index(), target);
        prop_assert!(!nav.is_transitioning());
    }

    #[test]
    fn progress_matches_index((n, target) in arb_deck_and_index()) {
        let (nav, surface) = navigator_at(n, target);
        let expected = (target + 1) as f64 / n as f64;
        prop_assert!((nav.progress() - expected).abs() < 1e-12);
        prop_assert!((surface.progress - expected).abs() < 1e-12);
    }

    #[test]
    fn index_stays_in_range((n, session) in arb_session()) {
        let (mut nav, mut surface) = navigator_at(n, 0);
        for (action, settle_after) in session {
            apply(&mut nav, &mut surface, action);
            prop_assert!(nav.current_index() < n);
            if settle_after {
                nav.settle(&mut surface);
                prop_assert_eq!(surface.active_slides(), vec![nav.current_index()]);
            }
        }
    }
}
