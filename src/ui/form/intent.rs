use crate::store::AddFactOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Append a typed character.
    Insert(char),
    /// Delete the last character.
    Backspace,
    /// Empty the input.
    Clear,
    /// Local validation failed; nothing was sent.
    Invalid { errors: Vec<String> },
    /// A valid fact was handed to the store.
    Submitted,
    /// The store answered.
    Finished(AddFactOutcome),
}

impl Intent for FormIntent {}
