/// Marker trait for UI state.
///
/// `Default` lets the app swap state out with `std::mem::take` before
/// handing it to a reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
