use crate::store::RandomFactOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RandomFactIntent {
    Requested,
    Finished(RandomFactOutcome),
    Dismiss,
}

impl Intent for RandomFactIntent {}
