//! Testimonial carousel state machine.
//!
//! Autoplay advances the active card on a fixed interval until the first
//! manual navigation, which disables it for the life of the instance.
//! All index arithmetic wraps modulo the item count.

mod intent;
mod reducer;
mod state;

pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, AUTOPLAY_INTERVAL};
