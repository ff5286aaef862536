//! Random fact banner shown under the form (Ctrl+R).

mod intent;
mod reducer;
mod state;

pub use intent::RandomFactIntent;
pub use reducer::RandomFactReducer;
pub use state::RandomFactState;
