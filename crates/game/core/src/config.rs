/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Health each combatant starts with (50 for a 1v1 duel).
    pub starting_health: i32,
    /// Combat points each combatant starts with.
    pub starting_combat_points: u32,
    /// Roll budget granted at the top of an offensive roll phase.
    pub rolls_per_turn: u8,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Dice in a combatant's pool.
    pub const DICE_POOL: usize = 5;
    /// Upper bound on simultaneous condition tokens on one combatant.
    /// The shipped kinds stack to at most 6 (1 + 1 + 1 + 3).
    pub const MAX_CONDITIONS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HEALTH: i32 = 50;
    pub const DEFAULT_STARTING_COMBAT_POINTS: u32 = 2;
    pub const DEFAULT_ROLLS_PER_TURN: u8 = 3;

    pub fn new() -> Self {
        Self {
            starting_health: Self::DEFAULT_STARTING_HEALTH,
            starting_combat_points: Self::DEFAULT_STARTING_COMBAT_POINTS,
            rolls_per_turn: Self::DEFAULT_ROLLS_PER_TURN,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
