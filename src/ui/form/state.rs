use crate::ui::mvi::UiState;

/// Submission lifecycle of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    /// A fact is with the store; the submit control is disabled.
    Submitting,
    /// The last submission was stored.
    Succeeded,
    /// The last submission failed. Errors stay visible until the next submit.
    Failed { errors: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub input: String,
    pub status: FormStatus,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_pending(&self) -> bool {
        matches!(self.status, FormStatus::Submitting)
    }

    pub fn errors(&self) -> &[String] {
        match &self.status {
            FormStatus::Failed { errors } => errors,
            _ => &[],
        }
    }
}
