//! One-time reveal machinery shared by every section.
//!
//! Each section owns a [`VisibilityTrigger`] that latches the first time
//! enough of the section is visible. From that single boolean every child
//! element derives its own staggered entrance via [`stagger`]; a section
//! that never scrolls into view simply stays in its initial pose.

mod stagger;
mod trigger;

pub use stagger::{stagger, Reveal, StaggerPose, STAGGER_STEP};
pub use trigger::VisibilityTrigger;
