//! Deterministic battle rules and data types shared across clients.
//!
//! `battle-core` defines the canonical rules (actions, engine, board state)
//! and exposes pure APIs that can be reused by both the runtime and offline
//! tools. All state mutation flows through [`engine::BattleEngine`], and
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{
    Action, ActionTransition, MoveAction, MoveError, RotateAction, SurrenderAction, SurrenderError,
    SwapAction, SwapError,
};
pub use config::BattleConfig;
pub use engine::{
    ActionOutcome, BattleEngine, ExecuteError, TransitionPhase, TransitionPhaseError,
};
pub use state::{
    BOTTOM_ARENA, BOTTOM_BENCH, BOTTOM_MIDDLE, BENCH_POSITIONS, Battle, BattleId, BattlePhase,
    Board, HitPoints, MoveId, Position, Side, Spirit, SpiritData, SpiritId, SpiritStats, TOP_ARENA,
    TOP_BENCH, TOP_MIDDLE, Team, TeamError, TeamId, TurnState, UserId, ValidationError,
};
