//! Error types surfaced by the runtime layer.

use battle_core::{BattleId, ExecuteError, TeamId};

use crate::repository::RepositoryError;

/// Errors raised while orchestrating battle creation and action submission.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("battle {0} not found")]
    BattleNotFound(BattleId),

    #[error("team {0} not found")]
    TeamNotFound(TeamId),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
