use super::board::Board;
use super::common::{BattleId, TeamId, UserId};
use super::position::{BOTTOM_ARENA, TOP_ARENA};
use super::team::Team;
use super::turn::TurnState;
use crate::config::BattleConfig;

/// Lifecycle phase of a battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    /// Waiting for the turn holder (or, before the first turn, either
    /// participant) to submit an action.
    #[default]
    AwaitingAction,
    /// Terminal state. Reached when a participant surrenders.
    Ended { winner: UserId },
}

/// The match aggregate: participants, roster references, turn bookkeeping,
/// and the live board.
///
/// Created once from two rosters and thereafter mutated exclusively through
/// [`crate::engine::BattleEngine`]. Persisting the result between actions is
/// the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    pub id: BattleId,
    pub player_one: UserId,
    pub player_two: UserId,
    pub player_one_team: TeamId,
    pub player_two_team: TeamId,
    pub turn: TurnState,
    pub phase: BattlePhase,
    pub board: Board,
    pub config: BattleConfig,
}

impl Battle {
    /// Creates a battle, seeding the board from both rosters.
    ///
    /// Player one's roster fills [`BOTTOM_ARENA`] in deployment order,
    /// player two's fills [`TOP_ARENA`]. Spirits are cloned so battle damage
    /// never touches the persisted teams; short rosters leave their trailing
    /// slots empty.
    pub fn new(
        id: BattleId,
        player_one: UserId,
        player_two: UserId,
        team_one: &Team,
        team_two: &Team,
    ) -> Self {
        let mut board = Board::empty();
        for (slot, spirit) in BOTTOM_ARENA.iter().zip(team_one.spirits()) {
            board.place(*slot, spirit.clone());
        }
        for (slot, spirit) in TOP_ARENA.iter().zip(team_two.spirits()) {
            board.place(*slot, spirit.clone());
        }

        Self {
            id,
            player_one,
            player_two,
            player_one_team: team_one.id.clone(),
            player_two_team: team_two.id.clone(),
            turn: TurnState::new(),
            phase: BattlePhase::default(),
            board,
            config: BattleConfig::default(),
        }
    }

    /// Whether `user` is one of the two participants.
    pub fn is_participant(&self, user: &UserId) -> bool {
        *user == self.player_one || *user == self.player_two
    }

    /// The opponent of `user`, if `user` participates in this battle.
    pub fn opponent_of(&self, user: &UserId) -> Option<&UserId> {
        if *user == self.player_one {
            Some(&self.player_two)
        } else if *user == self.player_two {
            Some(&self.player_one)
        } else {
            None
        }
    }

    pub fn has_ended(&self) -> bool {
        matches!(self.phase, BattlePhase::Ended { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HitPoints, Position, Spirit, SpiritId, SpiritStats};

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

    fn team(id: &str, members: &[&str]) -> Team {
        let mut team = Team::new(TeamId::from(id), id);
        for member in members {
            team.push_spirit(spirit(member)).unwrap();
        }
        team
    }

    #[test]
    fn seeding_follows_deployment_order() {
        let team_one = team("t1", &["a0", "a1", "a2", "a3", "a4", "a5"]);
        let team_two = team("t2", &["b0", "b1", "b2", "b3", "b4", "b5"]);
        let battle = Battle::new(
            BattleId::from("battle-1"),
            UserId::from("alice"),
            UserId::from("bob"),
            &team_one,
            &team_two,
        );

        let expected_bottom = [
            (Position::BottomFrontlineCenter, "a0"),
            (Position::BottomMiddleLeft, "a1"),
            (Position::BottomMiddleRight, "a2"),
            (Position::BottomBenchLeft, "a3"),
            (Position::BottomBenchCenter, "a4"),
            (Position::BottomBenchRight, "a5"),
        ];
        for (slot, name) in expected_bottom {
            assert_eq!(battle.board.spirit(slot).unwrap().name, name);
        }
        assert_eq!(
            battle.board.spirit(Position::TopFrontlineCenter).unwrap().name,
            "b0"
        );
        assert_eq!(
            battle.board.spirit(Position::TopBenchRight).unwrap().name,
            "b5"
        );
        assert_eq!(battle.turn.holder, None);
        assert!(!battle.has_ended());
    }

    #[test]
    fn short_roster_leaves_trailing_slots_empty() {
        let team_one = team("t1", &["a0", "a1", "a2", "a3", "a4"]);
        let team_two = team("t2", &["b0"]);
        let battle = Battle::new(
            BattleId::from("battle-1"),
            UserId::from("alice"),
            UserId::from("bob"),
            &team_one,
            &team_two,
        );

        assert!(!battle.board.is_occupied(Position::BottomBenchRight));
        assert!(battle.board.is_occupied(Position::TopFrontlineCenter));
        assert!(!battle.board.is_occupied(Position::TopMiddleLeft));
        assert_eq!(battle.board.len(), 6);
    }

    #[test]
    fn battle_damage_does_not_touch_the_roster() {
        let team_one = team("t1", &["a0"]);
        let team_two = team("t2", &["b0"]);
        let mut battle = Battle::new(
            BattleId::from("battle-1"),
            UserId::from("alice"),
            UserId::from("bob"),
            &team_one,
            &team_two,
        );

        battle
            .board
            .spirit_mut(Position::BottomFrontlineCenter)
            .unwrap()
            .hit_points
            .damage(10);
        assert_eq!(team_one.spirits()[0].hit_points.current(), 30);
    }
}
