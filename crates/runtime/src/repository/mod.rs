//! Repository layer for battle persistence.
//!
//! Repositories store the dynamic battle records that change with every
//! action. Static content (rosters) is handled by oracles, not repositories.
mod error;
mod file;
mod memory;
mod traits;

pub use error::RepositoryError;
pub use file::FileBattleRepository;
pub use memory::InMemoryBattleRepo;
pub use traits::BattleRepository;
