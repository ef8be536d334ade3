/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Flat damage applied by a move. The move identifier is carried on the
    /// action but does not vary damage yet; every landed move deals this
    /// amount, floored at zero hit points.
    pub base_move_damage: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum spirits per team roster.
    pub const TEAM_SIZE: usize = 6;
    /// Slots in one player's arena (frontline-center, two middle, three bench).
    pub const ARENA_SLOTS: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_MOVE_DAMAGE: u32 = 10;

    pub fn new() -> Self {
        Self {
            base_move_damage: Self::DEFAULT_BASE_MOVE_DAMAGE,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
