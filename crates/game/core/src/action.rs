//! Action system - atomic, composable effects that abilities apply.
//!
//! An ability is simply a sequence of actions executed in order against a
//! resolved target. The full roster of effects is fixed game content, so
//! the set is closed: an enum wrapping per-variant structs, dispatched by
//! pattern match in the engine.

use std::fmt;

use crate::condition::ConditionKind;
use crate::dice::Face;

/// Reroll-the-pool effect with face-dependent payoff (Exploding Arrow).
///
/// Rerolls the dealer's unlocked dice, then counts faces: each die showing
/// one of `bonus_faces` adds 1 damage, each die showing `drain_face` drains
/// one combat point from the target. The total lands as a plain defendable
/// attack, followed by `inflicts` on the target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollEffect {
    /// Damage dealt before any faces are counted.
    pub base_damage: u32,
    pub bonus_faces: Vec<Face>,
    pub drain_face: Face,
    pub inflicts: ConditionKind,
}

/// Defensive pool roll (Missed Me).
///
/// Rolls the defender's pool: two or more `block_face` results block half of
/// the incoming damage (rounded down), and every pair of `retaliate_face`
/// results deals 1 undefendable damage straight back to the attacker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseRoll {
    pub block_face: Face,
    pub retaliate_face: Face,
}

/// The actual effect to apply.
///
/// Each variant delegates to the engine's dispatch; `Display` renders the
/// card text shown in ability listings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Flat damage, subject to the target's defense and conditions.
    Damage(u32),
    /// Flat damage that bypasses the target's defensive ability.
    UndefendableDamage(u32),
    /// Puts a fresh condition token on the target (or on the actor, for
    /// self-granted kinds).
    Inflict(ConditionKind),
    RollEffect(RollEffect),
    DefenseRoll(DefenseRoll),
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Damage(amount) => write!(f, "Deal {amount} damage."),
            Self::UndefendableDamage(amount) => {
                write!(f, "Deal {amount} undefendable damage.")
            }
            Self::Inflict(kind) => write!(f, "Inflict {kind}."),
            Self::RollEffect(effect) => {
                write!(f, "Roll effect ({} base damage).", effect.base_damage)
            }
            Self::DefenseRoll(_) => write!(f, "Defense roll."),
        }
    }
}
