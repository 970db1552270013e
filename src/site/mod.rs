//! Static page content and section identity.
//!
//! Everything here is fixed data: the components consume it read-only and
//! none of it changes across the life of the process.

mod content;
mod section;

pub use content::*;
pub use section::SectionId;
