//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::state::Battle;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the two-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - check preconditions before any mutation
/// 2. `apply` - mutate the battle state
///
/// Returns whether the action passes the turn on success.
#[inline]
fn drive_transition<T>(
    transition: &T,
    battle: &mut Battle,
) -> Result<bool, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(battle)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(battle)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    Ok(transition.ends_turn())
}

/// Routes an action to its transition and reports whether the turn passes.
///
/// This is the internal implementation used by `BattleEngine::execute()`.
pub(super) fn execute_transition(
    action: &Action,
    battle: &mut Battle,
) -> Result<bool, ExecuteError> {
    match action {
        Action::Move(transition) => {
            drive_transition(transition, battle).map_err(ExecuteError::Move)
        }
        Action::Rotate(transition) => {
            drive_transition(transition, battle).map_err(ExecuteError::Rotate)
        }
        Action::Swap(transition) => {
            drive_transition(transition, battle).map_err(ExecuteError::Swap)
        }
        Action::Surrender(transition) => {
            drive_transition(transition, battle).map_err(ExecuteError::Surrender)
        }
    }
}
