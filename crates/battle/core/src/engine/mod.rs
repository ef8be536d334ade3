//! Action execution pipeline and turn advancement.
//!
//! The [`BattleEngine`] is the authoritative reducer for [`Battle`]. It
//! enforces turn ownership, drives each action through its validate-then-apply
//! transition, and performs the post-turn side swap. A rejected action leaves
//! the battle untouched.

mod errors;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::Action;
use crate::state::{Battle, UserId};

/// Complete outcome of a successful action execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the turn passed to the opponent.
    pub turn_passed: bool,
    /// Action nonce after execution (unique per accepted action).
    pub nonce: u64,
}

/// Battle engine that manages action execution and turn bookkeeping.
///
/// All state mutation flows through [`execute`](Self::execute):
/// actor validation, then pre_validate → apply, then turn advancement.
pub struct BattleEngine<'a> {
    battle: &'a mut Battle,
}

impl<'a> BattleEngine<'a> {
    /// Creates a new engine over the given battle.
    pub fn new(battle: &'a mut Battle) -> Self {
        Self { battle }
    }

    /// Executes an action submitted by `actor`.
    ///
    /// Enforces mandatory actor validation before dispatch:
    /// - the battle must not have ended,
    /// - `actor` must be one of the two participants,
    /// - once a turn holder is established, `actor` must be it. Before the
    ///   first turn either participant may open the battle.
    ///
    /// On success the action nonce increments; turn-ending actions then pass
    /// the turn to the opponent and swap arena occupancy.
    pub fn execute(
        &mut self,
        actor: &UserId,
        action: &Action,
    ) -> Result<ActionOutcome, ExecuteError> {
        self.validate_actor(actor)?;

        let ends_turn = transition::execute_transition(action, self.battle)?;

        self.battle.turn.action_nonce += 1;
        if ends_turn {
            turns::advance_turn(self.battle, actor);
        }

        Ok(ActionOutcome {
            turn_passed: ends_turn,
            nonce: self.battle.turn.action_nonce,
        })
    }

    /// Validates that `actor` may act on the battle right now.
    fn validate_actor(&self, actor: &UserId) -> Result<(), ExecuteError> {
        if self.battle.has_ended() {
            return Err(ExecuteError::BattleOver);
        }
        if !self.battle.is_participant(actor) {
            return Err(ExecuteError::NotAParticipant {
                actor: actor.clone(),
            });
        }
        if let Some(holder) = &self.battle.turn.holder {
            if holder != actor {
                return Err(ExecuteError::NotYourTurn {
                    actor: actor.clone(),
                    holder: holder.clone(),
                });
            }
        }
        Ok(())
    }
}
