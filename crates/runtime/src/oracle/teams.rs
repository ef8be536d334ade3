use std::collections::HashMap;

use battle_core::{Team, TeamId};

/// Read-only access to team rosters.
///
/// The battle service consumes this once per battle creation; the returned
/// team is cloned into the battle's board, so later roster edits never
/// affect a running battle.
pub trait TeamOracle: Send + Sync {
    /// Returns the team with the given id, if it exists.
    fn team(&self, id: &TeamId) -> Option<Team>;
}

/// In-memory team oracle backed by a map, for tests and embedded use.
#[derive(Debug, Default)]
pub struct InMemoryTeamOracle {
    teams: HashMap<TeamId, Team>,
}

impl InMemoryTeamOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a team, replacing any previous roster with the same id.
    pub fn insert(&mut self, team: Team) {
        self.teams.insert(team.id.clone(), team);
    }
}

impl TeamOracle for InMemoryTeamOracle {
    fn team(&self, id: &TeamId) -> Option<Team> {
        self.teams.get(id).cloned()
    }
}
