//! JSON record shape for persisted battles.
//!
//! The core's position map is keyed by an enum, which does not survive every
//! JSON tooling path cleanly, so the stored record flattens it into an
//! ordered list of `(position, spirit)` entries. Field names keep the
//! camelCase of the legacy store so existing documents stay readable.

use battle_core::{
    Battle, BattleConfig, BattleId, BattlePhase, Board, Position, Spirit, TeamId, TurnState,
    UserId,
};
use serde::{Deserialize, Serialize};

use crate::repository::RepositoryError;

/// One occupied slot in the stored position map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub position: Position,
    pub spirit: Spirit,
}

/// Serialized battle as written to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub id: BattleId,
    pub player_one_user_id: UserId,
    pub player_two_user_id: UserId,
    pub player_one_team_id: TeamId,
    pub player_two_team_id: TeamId,
    pub current_turn_user_id: Option<UserId>,
    #[serde(default)]
    pub action_nonce: u64,
    #[serde(default)]
    pub phase: BattlePhase,
    #[serde(default)]
    pub config: BattleConfig,
    pub position_map: Vec<PositionEntry>,
}

impl From<&Battle> for BattleRecord {
    fn from(battle: &Battle) -> Self {
        Self {
            id: battle.id.clone(),
            player_one_user_id: battle.player_one.clone(),
            player_two_user_id: battle.player_two.clone(),
            player_one_team_id: battle.player_one_team.clone(),
            player_two_team_id: battle.player_two_team.clone(),
            current_turn_user_id: battle.turn.holder.clone(),
            action_nonce: battle.turn.action_nonce,
            phase: battle.phase.clone(),
            config: battle.config.clone(),
            position_map: battle
                .board
                .entries()
                .map(|(position, spirit)| PositionEntry {
                    position,
                    spirit: spirit.clone(),
                })
                .collect(),
        }
    }
}

impl BattleRecord {
    /// Rebuilds the in-memory battle, rejecting duplicate positions.
    pub fn into_battle(self) -> Result<Battle, RepositoryError> {
        let mut board = Board::empty();
        for entry in self.position_map {
            if board.place(entry.position, entry.spirit).is_some() {
                return Err(RepositoryError::CorruptedData(format!(
                    "duplicate position {} in battle {}",
                    entry.position, self.id
                )));
            }
        }

        Ok(Battle {
            id: self.id,
            player_one: self.player_one_user_id,
            player_two: self.player_two_user_id,
            player_one_team: self.player_one_team_id,
            player_two_team: self.player_two_team_id,
            turn: TurnState {
                holder: self.current_turn_user_id,
                action_nonce: self.action_nonce,
            },
            phase: self.phase,
            board,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{HitPoints, SpiritId, SpiritStats, Team};

    fn team(id: &str, size: usize) -> Team {
        let mut team = Team::new(TeamId::from(id), id);
        for index in 0..size {
            team.push_spirit(Spirit {
                id: SpiritId::from(format!("{id}-{index}")),
                name: format!("{id}-{index}"),
                description: String::new(),
                primary_type: "Normal".into(),
                secondary_type: None,
                original_image_url: String::new(),
                generated_image_url: String::new(),
                stats: SpiritStats::default(),
                hit_points: HitPoints::new(30),
            })
            .unwrap();
        }
        team
    }

    fn battle() -> Battle {
        Battle::new(
            BattleId::from("battle-1"),
            UserId::from("alice"),
            UserId::from("bob"),
            &team("t1", 6),
            &team("t2", 5),
        )
    }

    #[test]
    fn record_round_trips_through_json() {
        let battle = battle();
        let json = serde_json::to_string(&BattleRecord::from(&battle)).unwrap();
        let decoded: BattleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.into_battle().unwrap(), battle);
    }

    #[test]
    fn positions_use_legacy_wire_names() {
        let record = BattleRecord::from(&battle());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"BOTTOM_FRONTLINE_CENTER\""));
        assert!(json.contains("\"currentTurnUserId\":null"));
    }

    #[test]
    fn duplicate_positions_are_rejected() {
        let mut record = BattleRecord::from(&battle());
        let duplicate = record.position_map[0].clone();
        record.position_map.push(duplicate);
        assert!(matches!(
            record.into_battle(),
            Err(RepositoryError::CorruptedData(_))
        ));
    }
}
