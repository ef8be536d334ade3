//! Error types for the action execution pipeline.

use crate::action::{ActionTransition, MoveAction, RotateAction, SurrenderAction, SwapAction};
use crate::state::UserId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the battle engine.
///
/// All variants are local validation failures raised before any state
/// mutation; none are transient or retryable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("rotate action failed: {0}")]
    Rotate(TransitionPhaseError<<RotateAction as ActionTransition>::Error>),

    #[error("swap action failed: {0}")]
    Swap(TransitionPhaseError<<SwapAction as ActionTransition>::Error>),

    #[error("surrender action failed: {0}")]
    Surrender(TransitionPhaseError<<SurrenderAction as ActionTransition>::Error>),

    #[error("invalid actor: {actor} does not match current turn holder {holder}")]
    NotYourTurn { actor: UserId, holder: UserId },

    #[error("invalid actor: {actor} is not a participant in this battle")]
    NotAParticipant { actor: UserId },

    #[error("battle has already ended")]
    BattleOver,
}
