/// Marker for reducer-owned state values.
///
/// `Default` lets the dispatch site take the value out, run the reducer,
/// and store the result without cloning; `PartialEq` lets tests compare
/// whole states instead of picking at fields.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
