mod common;

use termfolio::site::NAV_LINKS;
use termfolio::ui::mvi::Reducer;
use termfolio::ui::nav::{NavIntent, NavReducer, NavState, SCROLL_THRESHOLD};

fn reduce(state: NavState, intent: NavIntent) -> NavState {
    NavReducer::reduce(state, intent)
}

#[test]
fn scrolled_flips_crossing_the_threshold_in_both_directions() {
    let state = reduce(NavState::default(), NavIntent::ScrollChanged { offset: 49 });
    assert!(!state.scrolled);
    let state = reduce(state, NavIntent::ScrollChanged { offset: 51 });
    assert!(state.scrolled);
    let state = reduce(state, NavIntent::ScrollChanged { offset: 49 });
    assert!(!state.scrolled);
}

#[test]
fn the_flag_is_pure_in_the_offset() {
    // Same offset, any history: same answer.
    for offset in [0, SCROLL_THRESHOLD, SCROLL_THRESHOLD + 1, 500] {
        let from_default = reduce(NavState::default(), NavIntent::ScrollChanged { offset });
        let mut noisy = NavState::default();
        for step in [10, 400, 3] {
            noisy = reduce(noisy, NavIntent::ScrollChanged { offset: step });
        }
        let from_noisy = reduce(noisy, NavIntent::ScrollChanged { offset });
        assert_eq!(from_default.scrolled, from_noisy.scrolled);
        assert_eq!(from_default.scrolled, offset > SCROLL_THRESHOLD);
    }
}

#[test]
fn link_activation_closes_the_menu_whatever_its_state() {
    let open = reduce(NavState::default(), NavIntent::ToggleMenu);
    assert!(open.menu_open);
    let closed = reduce(open, NavIntent::Activate);
    assert!(!closed.menu_open);

    let still_closed = reduce(closed, NavIntent::Activate);
    assert!(!still_closed.menu_open);
}

#[test]
fn menu_selection_walks_the_link_list() {
    let mut state = reduce(NavState::default(), NavIntent::ToggleMenu);
    assert_eq!(state.menu_selection, 0);
    for expected in 1..NAV_LINKS.len() {
        state = reduce(state, NavIntent::MenuDown);
        assert_eq!(state.menu_selection, expected);
    }
    state = reduce(state, NavIntent::MenuDown);
    assert_eq!(state.menu_selection, 0);
}

#[test]
fn reopening_the_menu_resets_the_selection() {
    let mut state = reduce(NavState::default(), NavIntent::ToggleMenu);
    state = reduce(state, NavIntent::MenuDown);
    state = reduce(state, NavIntent::CloseMenu);
    state = reduce(state, NavIntent::ToggleMenu);
    assert_eq!(state.menu_selection, 0);
}
