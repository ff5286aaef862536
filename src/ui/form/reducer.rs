use crate::store::AddFactOutcome;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, FormStatus};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Insert(_) | FormIntent::Backspace | FormIntent::Clear
                if state.is_pending() =>
            {
                // Input is frozen while the store is working on it.
                state
            }
            FormIntent::Insert(ch) => {
                let FormState { mut input, status } = state;
                input.push(ch);
                FormState {
                    input,
                    status: after_edit(status),
                }
            }
            FormIntent::Backspace => {
                let FormState { mut input, status } = state;
                input.pop();
                FormState {
                    input,
                    status: after_edit(status),
                }
            }
            FormIntent::Clear => FormState {
                input: String::new(),
                status: after_edit(state.status),
            },
            FormIntent::Invalid { errors } => FormState {
                input: state.input,
                status: FormStatus::Failed { errors },
            },
            FormIntent::Submitted => FormState {
                input: state.input,
                status: FormStatus::Submitting,
            },
            FormIntent::Finished(AddFactOutcome::Saved(_)) => FormState {
                input: String::new(),
                status: FormStatus::Succeeded,
            },
            FormIntent::Finished(AddFactOutcome::Rejected { errors, entered }) => FormState {
                input: entered,
                status: FormStatus::Failed { errors },
            },
        }
    }
}

/// Editing clears a success notice but keeps errors on screen.
fn after_edit(status: FormStatus) -> FormStatus {
    match status {
        FormStatus::Succeeded => FormStatus::Idle,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CatFact;

    fn typed(text: &str) -> FormState {
        text.chars().fold(FormState::default(), |state, ch| {
            FormReducer::reduce(state, FormIntent::Insert(ch))
        })
    }

    #[test]
    fn typing_builds_input() {
        let state = typed("Cats");
        assert_eq!(state.input, "Cats");
        let state = FormReducer::reduce(state, FormIntent::Backspace);
        assert_eq!(state.input, "Cat");
        let state = FormReducer::reduce(state, FormIntent::Clear);
        assert_eq!(state.input, "");
        assert_eq!(state.status, FormStatus::Idle);
    }

    #[test]
    fn invalid_keeps_input_and_shows_errors() {
        let state = FormReducer::reduce(
            typed("cat"),
            FormIntent::Invalid {
                errors: vec!["Fact must be at least 5 characters long.".into()],
            },
        );
        assert_eq!(state.input, "cat");
        assert_eq!(
            state.errors(),
            ["Fact must be at least 5 characters long.".to_string()]
        );
    }

    #[test]
    fn submitted_is_pending_and_freezes_input() {
        let state = FormReducer::reduce(typed("Cats are cool."), FormIntent::Submitted);
        assert!(state.is_pending());

        let state = FormReducer::reduce(state, FormIntent::Insert('!'));
        let state = FormReducer::reduce(state, FormIntent::Backspace);
        assert_eq!(state.input, "Cats are cool.");
        assert!(state.is_pending());
    }

    #[test]
    fn saved_clears_input() {
        let state = FormReducer::reduce(typed("Cats are cool."), FormIntent::Submitted);
        let state = FormReducer::reduce(
            state,
            FormIntent::Finished(AddFactOutcome::Saved(CatFact {
                id: 4,
                fact: "Cats are cool.".into(),
                created_at: "2024-07-13".into(),
            })),
        );
        assert_eq!(state.input, "");
        assert_eq!(state.status, FormStatus::Succeeded);
        assert!(!state.is_pending());

        let state = FormReducer::reduce(state, FormIntent::Insert('A'));
        assert_eq!(state.status, FormStatus::Idle);
    }

    #[test]
    fn rejected_restores_entered_value() {
        let state = FormReducer::reduce(typed("Cats are cool."), FormIntent::Submitted);
        let state = FormReducer::reduce(
            state,
            FormIntent::Finished(AddFactOutcome::Rejected {
                errors: vec!["Duplicate fact.".into()],
                entered: "Cats are cool.".into(),
            }),
        );
        assert_eq!(state.input, "Cats are cool.");
        assert_eq!(state.errors(), ["Duplicate fact.".to_string()]);
        assert!(!state.is_pending());
    }

    #[test]
    fn errors_survive_editing_until_next_submit() {
        let state = FormReducer::reduce(
            typed("cat"),
            FormIntent::Invalid {
                errors: vec!["too short".into()],
            },
        );
        let state = FormReducer::reduce(state, FormIntent::Insert('s'));
        assert_eq!(state.errors(), ["too short".to_string()]);

        let state = FormReducer::reduce(state, FormIntent::Submitted);
        assert!(state.errors().is_empty());
    }
}
