//! Text rendering of engine events.

use dicebound_core::{CombatEvent, Engine};

/// One narration line per event, in the voice of the original table game.
/// Defensive responses are prefixed with `>` to read as interruptions.
pub fn event_line(engine: &Engine, event: &CombatEvent) -> String {
    match event {
        CombatEvent::AbilityUsed {
            actor,
            target,
            ability,
            defensive,
        } => {
            let actor = engine.combatant(*actor).name();
            let target = engine.combatant(*target).name();
            if *defensive {
                format!("> {actor}: Using defensive ability {ability} on {target}.")
            } else {
                format!("{actor}: Using ability {ability} on {target}.")
            }
        }
        CombatEvent::HealthChanged {
            combatant, delta, ..
        } => {
            let name = engine.combatant(*combatant).name();
            if *delta <= 0 {
                format!("{name} lost {} health!", -delta)
            } else {
                format!("{name} gained {delta} health!")
            }
        }
        CombatEvent::ConditionInflicted { combatant, kind } => {
            format!(
                "{}: Received {kind} condition.",
                engine.combatant(*combatant).name()
            )
        }
        CombatEvent::DamageNullified { combatant } => {
            format!(
                "> {}: All damage avoided!",
                engine.combatant(*combatant).name()
            )
        }
        CombatEvent::PoolRolled { combatant, dice } => {
            format!("> {}: Rolled: {dice}", engine.combatant(*combatant).name())
        }
        CombatEvent::HalfDamageBlocked { .. } => "> Half of incoming damage blocked!".to_string(),
        CombatEvent::Retaliated { amount, .. } => {
            format!("> {amount} damage retaliated!")
        }
        CombatEvent::CombatPointDrained { combatant } => {
            format!(
                "{} lost a combat point!",
                engine.combatant(*combatant).name()
            )
        }
        CombatEvent::BlindResolved {
            combatant, roll, ..
        } => {
            format!(
                "> {}: {roll} rolled for blindness effect.",
                engine.combatant(*combatant).name()
            )
        }
        CombatEvent::EvasiveResolved {
            combatant, roll, ..
        } => {
            format!(
                "> {}: {roll} rolled for evasive effect.",
                engine.combatant(*combatant).name()
            )
        }
        CombatEvent::RollPhaseSkipped { combatant } => {
            format!(
                "> {}: Offensive roll skipped!",
                engine.combatant(*combatant).name()
            )
        }
    }
}
