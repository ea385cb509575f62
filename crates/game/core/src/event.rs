//! Typed narration of engine activity.
//!
//! The engine appends events as it resolves abilities and the hosting loop
//! drains and renders them. This replaces ambient output flags: the core
//! never prints, and a headless harness can assert on the stream instead.

use crate::combatant::CombatantId;
use crate::condition::ConditionKind;

/// One observable step of combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    /// An ability began resolving. Defensive uses are responses inside an
    /// opponent's attack.
    AbilityUsed {
        actor: CombatantId,
        target: CombatantId,
        ability: String,
        defensive: bool,
    },
    /// Health changed by `delta` (negative means damage), leaving `health`.
    HealthChanged {
        combatant: CombatantId,
        delta: i32,
        health: i32,
    },
    /// A condition token landed. Stack-limit rejections emit nothing - the
    /// unchanged token count is their only observable.
    ConditionInflicted {
        combatant: CombatantId,
        kind: ConditionKind,
    },
    /// A `DamageTaken` condition cancelled the pending damage outright.
    DamageNullified { combatant: CombatantId },
    /// A mid-resolution pool reroll (roll effects, defense rolls), with the
    /// dice as they landed.
    PoolRolled { combatant: CombatantId, dice: String },
    /// A defense roll blocked half of the incoming damage.
    HalfDamageBlocked { combatant: CombatantId },
    /// A defense roll struck back at the attacker.
    Retaliated { combatant: CombatantId, amount: u32 },
    /// A roll effect drained one of the target's combat points.
    CombatPointDrained { combatant: CombatantId },
    /// A Blind token was checked at the top of the roll phase.
    BlindResolved {
        combatant: CombatantId,
        roll: u8,
        skipped: bool,
    },
    /// An Evasive token was spent against incoming damage.
    EvasiveResolved {
        combatant: CombatantId,
        roll: u8,
        avoided: bool,
    },
    /// Pre-roll conditions cancelled the entire offensive roll phase.
    RollPhaseSkipped { combatant: CombatantId },
}
