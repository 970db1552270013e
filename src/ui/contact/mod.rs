//! Contact form fields and submission state machine.
//!
//! One pipeline instance owns the four fields and a submission lifecycle of
//! Idle → Pending → Succeeded | Failed. While Pending the submit control is
//! disabled, so at most one send is ever in flight. Success clears the
//! fields and auto-reverts to Idle on a deadline; failure preserves the
//! fields for a retry.

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactFormState, Field, Fields, Submission, SUCCESS_NOTICE_DURATION};
