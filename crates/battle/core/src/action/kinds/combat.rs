use crate::action::ActionTransition;
use crate::state::{Battle, MoveId, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no spirit at target position {0}")]
    TargetNotFound(Position),
}

/// Offensive action: a move launched from one position against another.
///
/// Targeting is data-driven: the supplied `target` position is authoritative.
/// The conventional pairing (acting frontline-center against the opposing
/// frontline-center) is a caller convention, not engine logic. `attacker` and
/// `move_id` are carried for the move catalog but do not vary damage yet;
/// every landed move deals the battle's flat base damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub attacker: Position,
    pub target: Position,
    pub move_id: MoveId,
}

impl MoveAction {
    pub fn new(attacker: Position, target: Position, move_id: MoveId) -> Self {
        Self {
            attacker,
            target,
            move_id,
        }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, battle: &Battle) -> Result<(), Self::Error> {
        if !battle.board.is_occupied(self.target) {
            return Err(MoveError::TargetNotFound(self.target));
        }
        Ok(())
    }

    fn apply(&self, battle: &mut Battle) -> Result<(), Self::Error> {
        let damage = battle.config.base_move_damage;
        let target = battle
            .board
            .spirit_mut(self.target)
            .ok_or(MoveError::TargetNotFound(self.target))?;
        target.hit_points.damage(damage);
        Ok(())
    }

    fn ends_turn(&self) -> bool {
        true
    }
}
