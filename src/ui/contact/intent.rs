use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIntent {
    /// Character typed into the focused field.
    Type(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Submit attempt. Honored only from Idle or Failed with complete
    /// fields; a retry clears the previous error here, not on keystroke.
    Submit,
    /// Async outcome: the provider accepted the message.
    SendSucceeded,
    /// Async outcome: the send failed; `message` is the generic user-facing
    /// line (the cause is logged, never displayed).
    SendFailed { message: String },
    /// The success-notice deadline elapsed.
    NoticeElapsed,
}

impl Intent for ContactIntent {}
