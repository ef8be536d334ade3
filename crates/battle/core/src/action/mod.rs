//! Action domain: the four player-submittable action kinds.
//!
//! Each kind lives in its own module under [`kinds`] and implements
//! [`ActionTransition`], the validate-then-apply seam the engine drives.
//! Actions are transient inputs; they are never persisted as entities.
pub mod kinds;

pub use kinds::{
    MoveAction, MoveError, RotateAction, SurrenderAction, SurrenderError, SwapAction, SwapError,
};

use crate::state::Battle;

/// Defines how a concrete action variant mutates battle state.
///
/// All validation happens in `pre_validate`, against the state **before**
/// mutation; a rejected action must leave the battle untouched. `apply` runs
/// only after validation passed.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _battle: &Battle) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the battle state directly.
    fn apply(&self, battle: &mut Battle) -> Result<(), Self::Error>;

    /// Whether a successful application passes the turn to the opponent.
    fn ends_turn(&self) -> bool;
}

/// Top-level tagged action submitted by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Attack with a move from one position against another.
    Move(MoveAction),
    /// Cycle the acting side's frontline and middle occupants.
    Rotate(RotateAction),
    /// Exchange the occupants of two positions.
    Swap(SwapAction),
    /// Concede the battle.
    Surrender(SurrenderAction),
}

impl Action {
    /// Returns the snake_case name of the action kind, for logging.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Move(_) => "move",
            Action::Rotate(_) => "rotate",
            Action::Swap(_) => "swap",
            Action::Surrender(_) => "surrender",
        }
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<RotateAction> for Action {
    fn from(action: RotateAction) -> Self {
        Self::Rotate(action)
    }
}

impl From<SwapAction> for Action {
    fn from(action: SwapAction) -> Self {
        Self::Swap(action)
    }
}

impl From<SurrenderAction> for Action {
    fn from(action: SurrenderAction) -> Self {
        Self::Surrender(action)
    }
}
