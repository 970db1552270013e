//! Footer newsletter signup: a miniature latch with a timed notice.

use std::time::Duration;

use crate::ui::mvi::{Intent, Reducer, UiState};

/// How long the thank-you notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterState {
    pub email: String,
    pub subscribed: bool,
}

impl UiState for NewsletterState {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterIntent {
    Type(char),
    Backspace,
    /// Empty input is a no-op; anything else latches the notice and clears
    /// the input.
    Subscribe,
    NoticeElapsed,
}

impl Intent for NewsletterIntent {}

pub struct NewsletterReducer;

impl Reducer for NewsletterReducer {
    type State = NewsletterState;
    type Intent = NewsletterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NewsletterIntent::Type(ch) => {
                state.email.push(ch);
                state
            }
            NewsletterIntent::Backspace => {
                state.email.pop();
                state
            }
            NewsletterIntent::Subscribe => {
                if !state.email.trim().is_empty() {
                    state.email.clear();
                    state.subscribed = true;
                }
                state
            }
            NewsletterIntent::NoticeElapsed => {
                state.subscribed = false;
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NewsletterState, intent: NewsletterIntent) -> NewsletterState {
        NewsletterReducer::reduce(state, intent)
    }

    #[test]
    fn subscribe_with_email_latches_and_clears() {
        let mut state = NewsletterState::default();
        for ch in "a@b.co".chars() {
            state = reduce(state, NewsletterIntent::Type(ch));
        }
        let state = reduce(state, NewsletterIntent::Subscribe);
        assert!(state.subscribed);
        assert_eq!(state.email, "");
    }

    #[test]
    fn subscribe_with_empty_email_is_noop() {
        let state = reduce(NewsletterState::default(), NewsletterIntent::Subscribe);
        assert!(!state.subscribed);
    }

    #[test]
    fn notice_reverts_on_deadline() {
        let mut state = NewsletterState::default();
        state = reduce(state, NewsletterIntent::Type('x'));
        state = reduce(state, NewsletterIntent::Subscribe);
        let state = reduce(state, NewsletterIntent::NoticeElapsed);
        assert!(!state.subscribed);
    }
}
