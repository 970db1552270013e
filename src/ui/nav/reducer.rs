use crate::site::NAV_LINKS;
use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::{NavState, SCROLL_THRESHOLD};

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::ScrollChanged { offset } => {
                state.scrolled = offset > SCROLL_THRESHOLD;
                state
            }
            NavIntent::ToggleMenu => {
                state.menu_open = !state.menu_open;
                if state.menu_open {
                    state.menu_selection = 0;
                }
                state
            }
            NavIntent::CloseMenu => {
                state.menu_open = false;
                state
            }
            NavIntent::MenuUp => {
                if state.menu_open {
                    state.menu_selection = if state.menu_selection == 0 {
                        NAV_LINKS.len() - 1
                    } else {
                        state.menu_selection - 1
                    };
                }
                state
            }
            NavIntent::MenuDown => {
                if state.menu_open {
                    state.menu_selection = (state.menu_selection + 1) % NAV_LINKS.len();
                }
                state
            }
            NavIntent::Activate => {
                state.menu_open = false;
                state
            }
        }
    }
}
