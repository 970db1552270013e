use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::{ContactFormState, Submission};
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::Type(ch) => {
                // No form is on screen while the success notice shows.
                if state.submission != Submission::Succeeded {
                    state.fields.get_mut(state.focused).push(ch);
                }
                state
            }
            ContactIntent::Backspace => {
                if state.submission != Submission::Succeeded {
                    state.fields.get_mut(state.focused).pop();
                }
                state
            }
            ContactIntent::FocusNext => {
                state.focused = state.focused.next();
                state
            }
            ContactIntent::FocusPrev => {
                state.focused = state.focused.prev();
                state
            }
            ContactIntent::Submit => {
                if state.can_submit() {
                    state.submission = Submission::Pending;
                }
                state
            }
            ContactIntent::SendSucceeded => {
                if state.submission == Submission::Pending {
                    state.fields.clear();
                    state.submission = Submission::Succeeded;
                }
                state
            }
            ContactIntent::SendFailed { message } => {
                if state.submission == Submission::Pending {
                    state.submission = Submission::Failed(message);
                }
                state
            }
            ContactIntent::NoticeElapsed => {
                if state.submission == Submission::Succeeded {
                    state.submission = Submission::Idle;
                }
                state
            }
        }
    }
}
