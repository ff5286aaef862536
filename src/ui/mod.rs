//! Terminal front end: a form for new facts above the list of stored ones.

pub mod app;
pub mod events;
pub mod fact_list;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod random;
pub mod render;
pub mod runtime;
pub mod submit;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
