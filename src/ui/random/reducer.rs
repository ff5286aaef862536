use crate::store::RandomFactOutcome;
use crate::ui::mvi::Reducer;

use super::intent::RandomFactIntent;
use super::state::RandomFactState;

pub struct RandomFactReducer;

impl Reducer for RandomFactReducer {
    type State = RandomFactState;
    type Intent = RandomFactIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RandomFactIntent::Requested => RandomFactState::Loading,
            RandomFactIntent::Finished(RandomFactOutcome::Fact(fact)) => {
                RandomFactState::Shown { fact }
            }
            RandomFactIntent::Finished(RandomFactOutcome::Error(error)) => {
                RandomFactState::Failed { error }
            }
            RandomFactIntent::Dismiss => RandomFactState::Hidden,
        }
    }
}
