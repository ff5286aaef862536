/// Marker trait for intents: user actions (typing, submitting) and
/// system events (a finished request).
pub trait Intent: Send + 'static {}
