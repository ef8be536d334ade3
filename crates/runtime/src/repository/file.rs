//! File-based BattleRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use battle_core::{Battle, BattleId};

use super::error::{RepositoryError, Result};
use super::traits::BattleRepository;
use crate::codec::BattleRecord;

/// File-based implementation of BattleRepository.
///
/// Stores each battle as `battle_{id}.json`. JSON keeps records inspectable
/// and matches the document shape the legacy store persisted; the position
/// map is flattened through [`BattleRecord`] before writing.
pub struct FileBattleRepository {
    base_dir: PathBuf,
}

impl FileBattleRepository {
    /// Create a new file-based battle repository rooted at `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn battle_path(&self, id: &BattleId) -> PathBuf {
        self.base_dir.join(format!("battle_{id}.json"))
    }
}

impl BattleRepository for FileBattleRepository {
    fn save(&self, battle: &Battle) -> Result<()> {
        let path = self.battle_path(&battle.id);
        let temp_path = path.with_extension("json.tmp");

        let record = BattleRecord::from(battle);
        let bytes = serde_json::to_vec_pretty(&record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        // Write to temp file, then atomic rename
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved battle[{}] to {}", battle.id, path.display());

        Ok(())
    }

    fn load(&self, id: &BattleId) -> Result<Option<Battle>> {
        let path = self.battle_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let record: BattleRecord = serde_json::from_slice(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!("Loaded battle[{}] from {}", id, path.display());

        Ok(Some(record.into_battle()?))
    }

    fn exists(&self, id: &BattleId) -> bool {
        self.battle_path(id).exists()
    }

    fn delete(&self, id: &BattleId) -> Result<()> {
        let path = self.battle_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
        }
        Ok(())
    }
}
