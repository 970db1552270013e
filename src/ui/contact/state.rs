use std::time::Duration;

use crate::ui::mvi::UiState;

/// How long the success notice stays up before the form returns.
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// The four required inputs, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Subject => "Project Inquiry",
            Field::Message => "Tell me about your project...",
        }
    }

    pub fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Subject,
            Field::Subject => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Subject => Field::Email,
            Field::Message => Field::Subject,
        }
    }
}

/// Field values; last write wins per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Fields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub(super) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Required-field validation: all four non-empty.
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| !self.get(field).trim().is_empty())
    }

    pub(super) fn clear(&mut self) {
        for field in Field::ALL {
            self.get_mut(field).clear();
        }
    }
}

/// Outcome lifecycle of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub fields: Fields,
    pub submission: Submission,
    pub focused: Field,
}

impl UiState for ContactFormState {}

impl ContactFormState {
    pub fn is_pending(&self) -> bool {
        self.submission == Submission::Pending
    }

    pub fn error(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a submit would be honored right now.
    ///
    /// Pending disables the control outright; Succeeded has no form on
    /// screen; otherwise completeness of the fields decides.
    pub fn can_submit(&self) -> bool {
        matches!(self.submission, Submission::Idle | Submission::Failed(_))
            && self.fields.is_complete()
    }
}
