/// Marker for the actions a reducer consumes.
///
/// Key presses routed by focus, timer deadlines, and async send outcomes
/// all arrive as intents; a reducer never learns where one came from.
pub trait Intent: Send + 'static {}
