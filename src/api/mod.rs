//! HTTP client for the cat facts backend.
//!
//! Three endpoints are consumed:
//!
//! ```text
//! GET  /catfacts          -> [CatFact]
//! POST /catfacts          fact=<text> (x-www-form-urlencoded) -> CatFact | {detail}
//! GET  /catfacts/random   -> {fact}
//! ```

mod client;
mod error;
mod types;

pub use client::{CatFactsApi, CatFactsClient};
pub use error::ApiError;
pub use types::{CatFact, NewFact, RandomFact};
