//! Fact validation and the submission path shared by the TUI form and the CLI.

use crate::store::{AddFactOutcome, FactSink};

/// Minimum fact length, counted in characters after trimming.
pub const MIN_FACT_LEN: usize = 5;

pub const FACT_TOO_SHORT: &str = "Fact must be at least 5 characters long.";

/// Check a raw form value. Returns the list of problems, empty when valid.
pub fn validate_fact(raw: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    match raw {
        Some(text) if text.trim().chars().count() >= MIN_FACT_LEN => {}
        _ => errors.push(FACT_TOO_SHORT.to_string()),
    }
    errors
}

/// Gate a raw form value before anything is sent.
///
/// Returns the text to persist, untrimmed, or the rejection to show with the
/// entered value preserved. Both the TUI and the CLI go through here.
pub fn prepare_fact(raw: Option<&str>) -> Result<String, AddFactOutcome> {
    let errors = validate_fact(raw);
    let entered = raw.unwrap_or_default().to_string();
    if errors.is_empty() {
        Ok(entered)
    } else {
        Err(AddFactOutcome::Rejected { errors, entered })
    }
}

/// Validate `raw` and hand it to `sink`.
///
/// Invalid input short-circuits: the sink is not called. Valid input is
/// passed through untrimmed, exactly once. Server errors come back with the
/// entered value attached.
pub async fn submit_fact(sink: &dyn FactSink, raw: Option<&str>) -> AddFactOutcome {
    let text = match prepare_fact(raw) {
        Ok(text) => text,
        Err(rejected) => return rejected,
    };

    match sink.add_fact(&text).await {
        AddFactOutcome::Rejected { errors, .. } => AddFactOutcome::Rejected {
            errors,
            entered: text,
        },
        saved => saved,
    }
}
