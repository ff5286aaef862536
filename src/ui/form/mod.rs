//! The "New Cat Fact" form: input buffer, submission lifecycle and view.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormState, FormStatus};
pub use view::FactForm;
