//! Repository contracts for saving and loading battles.

use battle_core::{Battle, BattleId};

use super::error::Result;

/// Repository for battle persistence, keyed by battle id.
///
/// Battles are stored as whole replacement values: the service writes the
/// complete updated record after every successful action.
pub trait BattleRepository: Send + Sync {
    /// Save a battle, overwriting any previous record with the same id.
    fn save(&self, battle: &Battle) -> Result<()>;

    /// Load a battle by id.
    fn load(&self, id: &BattleId) -> Result<Option<Battle>>;

    /// Check whether a battle record exists.
    fn exists(&self, id: &BattleId) -> bool;

    /// Delete a battle record. Deleting a missing record is not an error.
    fn delete(&self, id: &BattleId) -> Result<()>;
}
