//! Shared fact state.
//!
//! [`FactStore`] owns the in-memory list of facts and is the only thing
//! that mutates it. Components receive a clone of the store (or just the
//! [`FactSink`] seam) instead of reaching for global state.

mod facts;

pub use facts::{
    AddFactOutcome, FactSink, FactStore, RandomFactOutcome, ADD_FACT_FAILED, RANDOM_FACT_FAILED,
    SUBMIT_FAILED,
};
