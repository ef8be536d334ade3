//! In-memory BattleRepository implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use battle_core::{Battle, BattleId};

use super::error::{RepositoryError, Result};
use super::traits::BattleRepository;

/// In-memory battle store for tests and embedded single-process use.
#[derive(Debug, Default)]
pub struct InMemoryBattleRepo {
    battles: RwLock<HashMap<BattleId, Battle>>,
}

impl InMemoryBattleRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BattleRepository for InMemoryBattleRepo {
    fn save(&self, battle: &Battle) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.insert(battle.id.clone(), battle.clone());
        Ok(())
    }

    fn load(&self, id: &BattleId) -> Result<Option<Battle>> {
        let battles = self
            .battles
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(battles.get(id).cloned())
    }

    fn exists(&self, id: &BattleId) -> bool {
        self.battles
            .read()
            .map(|battles| battles.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &BattleId) -> Result<()> {
        let mut battles = self
            .battles
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        battles.remove(id);
        Ok(())
    }
}
