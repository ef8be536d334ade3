//! Caller-facing battle orchestration.

use battle_core::{Action, Battle, BattleEngine, BattleId, BattlePhase, TeamId, UserId};

use crate::error::{Result, RuntimeError};
use crate::oracle::TeamOracle;
use crate::repository::BattleRepository;

/// Façade tying the roster oracle, the engine, and the repository together.
///
/// One action is processed at a time; callers embedding this in a server with
/// concurrent battles must serialize submissions per battle id, since the
/// engine is not designed for concurrent mutation of the same board.
pub struct BattleService<R, T> {
    repository: R,
    teams: T,
}

impl<R, T> BattleService<R, T>
where
    R: BattleRepository,
    T: TeamOracle,
{
    pub fn new(repository: R, teams: T) -> Self {
        Self { repository, teams }
    }

    /// Creates a battle from two team selections and persists it.
    ///
    /// Player one's roster seeds the bottom arena, player two's the top.
    pub fn create_battle(
        &self,
        id: BattleId,
        player_one: UserId,
        player_two: UserId,
        team_one: &TeamId,
        team_two: &TeamId,
    ) -> Result<Battle> {
        let team_one = self
            .teams
            .team(team_one)
            .ok_or_else(|| RuntimeError::TeamNotFound(team_one.clone()))?;
        let team_two = self
            .teams
            .team(team_two)
            .ok_or_else(|| RuntimeError::TeamNotFound(team_two.clone()))?;

        let battle = Battle::new(id, player_one, player_two, &team_one, &team_two);
        self.repository.save(&battle)?;

        tracing::info!(
            battle = %battle.id,
            player_one = %battle.player_one,
            player_two = %battle.player_two,
            "battle created"
        );
        Ok(battle)
    }

    /// Loads a battle, executes one action, and persists the result.
    ///
    /// On any engine error the stored battle is left untouched and the error
    /// propagates synchronously to the caller.
    pub fn submit_action(
        &self,
        battle_id: &BattleId,
        actor: &UserId,
        action: &Action,
    ) -> Result<Battle> {
        let mut battle = self
            .repository
            .load(battle_id)?
            .ok_or_else(|| RuntimeError::BattleNotFound(battle_id.clone()))?;

        let outcome = BattleEngine::new(&mut battle).execute(actor, action)?;
        self.repository.save(&battle)?;

        tracing::debug!(
            battle = %battle.id,
            actor = %actor,
            kind = action.as_snake_case(),
            nonce = outcome.nonce,
            turn_passed = outcome.turn_passed,
            "action applied"
        );
        if let BattlePhase::Ended { winner } = &battle.phase {
            tracing::info!(battle = %battle.id, winner = %winner, "battle ended");
        }

        Ok(battle)
    }

    /// Reads a battle back from the repository.
    pub fn battle(&self, battle_id: &BattleId) -> Result<Battle> {
        self.repository
            .load(battle_id)?
            .ok_or_else(|| RuntimeError::BattleNotFound(battle_id.clone()))
    }
}
