//! Terminal client for a "cat facts" REST backend.
//!
//! The crate is split the same way the running program is:
//!
//! - [`api`]: typed HTTP client for `/catfacts` endpoints
//! - [`store`]: the shared fact list and the operations that mutate it
//! - [`form`]: fact validation and the submission path
//! - [`ui`]: ratatui components, MVI state machines and the event loop
//! - [`cli`]: command-line flags and one-shot commands
//! - [`config`]: TOML configuration with env/CLI overrides
//! - [`logging`]: tracing subscriber setup

pub mod api;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
pub mod shutdown;
pub mod store;
pub mod ui;
