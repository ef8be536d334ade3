//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe the board, spirits,
//! rosters, and turn bookkeeping. Runtime layers clone or query this state
//! but mutate it exclusively through the engine.
mod battle;
mod board;
mod common;
mod position;
mod spirit;
mod team;
mod turn;

pub use battle::{Battle, BattlePhase};
pub use board::Board;
pub use common::{BattleId, HitPoints, MoveId, SpiritId, TeamId, UserId};
pub use position::{
    BENCH_POSITIONS, BOTTOM_ARENA, BOTTOM_BENCH, BOTTOM_MIDDLE, Position, Side, TOP_ARENA,
    TOP_BENCH, TOP_MIDDLE,
};
pub use spirit::{Spirit, SpiritData, SpiritStats, ValidationError};
pub use team::{Team, TeamError};
pub use turn::TurnState;
