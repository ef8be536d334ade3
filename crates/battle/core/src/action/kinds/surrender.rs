use crate::action::ActionTransition;
use crate::state::{Battle, BattlePhase, UserId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurrenderError {
    #[error("user {user} is not the current turn holder")]
    NotYourTurn { user: UserId },
}

/// Concedes the battle.
///
/// Only the current turn holder may surrender; the opponent wins and the
/// battle moves to its terminal phase. No board state changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurrenderAction {
    pub user: UserId,
}

impl SurrenderAction {
    pub fn new(user: UserId) -> Self {
        Self { user }
    }
}

impl ActionTransition for SurrenderAction {
    type Error = SurrenderError;

    fn pre_validate(&self, battle: &Battle) -> Result<(), Self::Error> {
        if battle.turn.holder.as_ref() != Some(&self.user) {
            return Err(SurrenderError::NotYourTurn {
                user: self.user.clone(),
            });
        }
        Ok(())
    }

    fn apply(&self, battle: &mut Battle) -> Result<(), Self::Error> {
        let winner = battle
            .opponent_of(&self.user)
            .ok_or(SurrenderError::NotYourTurn {
                user: self.user.clone(),
            })?
            .clone();
        battle.phase = BattlePhase::Ended { winner };
        Ok(())
    }

    fn ends_turn(&self) -> bool {
        false
    }
}
