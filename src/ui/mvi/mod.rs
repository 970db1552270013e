//! Intent → reducer → state primitives.
//!
//! Every stateful surface on the page (nav bar, carousel, contact form,
//! newsletter) is built the same way: a plain state value, an intent enum
//! naming everything that can happen to it, and a pure reducer mapping the
//! two to the next state. The render pass reads states; the key router and
//! timer code dispatch intents; nothing else touches them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
