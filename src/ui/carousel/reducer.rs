use crate::ui::carousel::intent::CarouselIntent;
use crate::ui::carousel::state::CarouselState;
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::AutoAdvance => {
                if state.autoplay() {
                    state.advanced()
                } else {
                    // Stale timer tick after a manual action.
                    state
                }
            }
            CarouselIntent::Next => state.advanced().manual(),
            CarouselIntent::Prev => state.retreated().manual(),
            CarouselIntent::Select(index) => {
                // Dot controls are generated 1:1 with items, so an
                // out-of-range index is a programming error.
                debug_assert!(index < state.len(), "carousel index out of range");
                if index < state.len() {
                    state.jumped_to(index).manual()
                } else {
                    state
                }
            }
        }
    }
}
