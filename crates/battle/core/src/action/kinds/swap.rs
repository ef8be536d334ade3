use crate::action::ActionTransition;
use crate::state::{Battle, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    #[error("no spirit at swap position {0}")]
    SwapTargetNotFound(Position),
}

/// Exchanges the occupants of two positions.
///
/// Both slots must currently hold spirits. The processor is otherwise
/// position-agnostic: any two occupied slots may be exchanged, bench to
/// bench included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapAction {
    pub swap_in: Position,
    pub swap_out: Position,
}

impl SwapAction {
    pub fn new(swap_in: Position, swap_out: Position) -> Self {
        Self { swap_in, swap_out }
    }
}

impl ActionTransition for SwapAction {
    type Error = SwapError;

    fn pre_validate(&self, battle: &Battle) -> Result<(), Self::Error> {
        for slot in [self.swap_in, self.swap_out] {
            if !battle.board.is_occupied(slot) {
                return Err(SwapError::SwapTargetNotFound(slot));
            }
        }
        Ok(())
    }

    fn apply(&self, battle: &mut Battle) -> Result<(), Self::Error> {
        battle.board.swap(self.swap_in, self.swap_out);
        Ok(())
    }

    fn ends_turn(&self) -> bool {
        true
    }
}
