//! Runtime orchestration around the deterministic battle core.
//!
//! This crate wires the roster provider, battle persistence, and the engine
//! into a cohesive API. Callers embed [`BattleService`] to create battles
//! from team selections and to submit actions; the service loads the battle,
//! drives the engine, and persists the result as a whole replacement value.
//!
//! Modules are organized by responsibility:
//! - [`oracle`] provides read-only access to externally managed rosters
//! - [`repository`] persists battles between actions
//! - [`codec`] flattens battles into a JSON-friendly record shape
//! - [`service`] hosts the caller-facing façade
pub mod codec;
pub mod error;
pub mod oracle;
pub mod repository;
pub mod service;

pub use codec::{BattleRecord, PositionEntry};
pub use error::{Result, RuntimeError};
pub use oracle::{InMemoryTeamOracle, TeamOracle};
pub use repository::{
    BattleRepository, FileBattleRepository, InMemoryBattleRepo, RepositoryError,
};
pub use service::BattleService;
