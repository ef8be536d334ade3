use arrayvec::ArrayVec;

use super::common::TeamId;
use super::spirit::Spirit;
use crate::config::BattleConfig;

/// Raised when roster edits violate team limits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    #[error("team already holds the maximum of {} spirits", BattleConfig::TEAM_SIZE)]
    Full,
}

/// An identified, named, ordered roster of up to six spirits.
///
/// Teams are created and edited outside the battle core; the engine only
/// reads roster membership at battle-creation time, cloning the members so
/// battle damage never mutates the persisted roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    spirits: ArrayVec<Spirit, { BattleConfig::TEAM_SIZE }>,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            spirits: ArrayVec::new(),
        }
    }

    /// Appends a spirit to the roster.
    pub fn push_spirit(&mut self, spirit: Spirit) -> Result<(), TeamError> {
        self.spirits.try_push(spirit).map_err(|_| TeamError::Full)
    }

    /// Roster members in deployment order.
    pub fn spirits(&self) -> &[Spirit] {
        &self.spirits
    }

    pub fn len(&self) -> usize {
        self.spirits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spirits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HitPoints, SpiritId, SpiritStats};

    fn spirit(id: &str) -> Spirit {
        Spirit {
            id: SpiritId::from(id),
            name: id.to_owned(),
            description: String::new(),
            primary_type: "Normal".into(),
            secondary_type: None,
            original_image_url: String::new(),
            generated_image_url: String::new(),
            stats: SpiritStats::default(),
            hit_points: HitPoints::new(30),
        }
    }

    #[test]
    fn push_fails_once_roster_is_full() {
        let mut team = Team::new(TeamId::from("team-1"), "Sprouts");
        for index in 0..BattleConfig::TEAM_SIZE {
            team.push_spirit(spirit(&format!("s{index}"))).unwrap();
        }
        assert_eq!(team.push_spirit(spirit("overflow")), Err(TeamError::Full));
        assert_eq!(team.len(), BattleConfig::TEAM_SIZE);
    }
}
