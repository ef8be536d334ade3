//! Read-only providers for externally managed data.
//!
//! Rosters are created and edited outside this workspace (team CRUD lives in
//! the surrounding application); the runtime only reads them, once, when a
//! battle is created.
mod teams;

pub use teams::{InMemoryTeamOracle, TeamOracle};
