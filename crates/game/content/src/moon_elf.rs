//! The Moon Elf kit.
//!
//! Die faces: three Arrow, two Foot, one Moon. The ability table mirrors
//! the printed card set - the Longbow ladder, the token-laying shots,
//! Missed Me as the defensive response and Lunar Eclipse as the ultimate.

use dicebound_core::{
    Ability, ActionKind, Combatant, ConditionKind, DefenseRoll, Die, Face, FaceSet, GameConfig,
    Requirement, RollEffect, SetupError, StraightLen,
};

pub fn arrow() -> Face {
    Face::new("Arrow")
}

pub fn foot() -> Face {
    Face::new("Foot")
}

pub fn moon() -> Face {
    Face::new("Moon")
}

/// The Moon Elf die: values 1-3 show Arrow, 4-5 Foot, 6 Moon.
pub fn moon_elf_faces() -> FaceSet {
    [arrow(), arrow(), arrow(), foot(), foot(), moon()]
}

/// Builds a full Moon Elf combatant.
pub fn moon_elf(name: impl Into<String>, config: &GameConfig) -> Result<Combatant, SetupError> {
    let dice = (0..GameConfig::DICE_POOL)
        .map(|_| Die::new(moon_elf_faces()))
        .collect();
    Combatant::new(name, dice, abilities(), config)
}

fn abilities() -> Vec<Ability> {
    vec![
        Ability::new(
            "Longbow 3",
            Requirement::Faces(vec![arrow(); 3]),
            vec![ActionKind::Damage(4)],
        ),
        Ability::new(
            "Longbow 4",
            Requirement::Faces(vec![arrow(); 4]),
            vec![ActionKind::Damage(5)],
        ),
        Ability::new(
            "Longbow 5",
            Requirement::Faces(vec![arrow(); 5]),
            vec![ActionKind::Damage(7)],
        ),
        Ability::new(
            "Demising Shot",
            Requirement::Faces(vec![arrow(), arrow(), arrow(), moon(), moon()]),
            vec![
                ActionKind::Inflict(ConditionKind::Targeted),
                ActionKind::Damage(4),
            ],
        ),
        Ability::new(
            "Covered Shot",
            Requirement::Faces(vec![arrow(), arrow(), foot(), foot(), foot()]),
            vec![
                ActionKind::Inflict(ConditionKind::Evasive),
                ActionKind::Damage(7),
            ],
        ),
        Ability::new(
            "Exploding Arrow",
            Requirement::Faces(vec![arrow(), moon(), moon(), moon()]),
            vec![ActionKind::RollEffect(RollEffect {
                base_damage: 3,
                bonus_faces: vec![arrow(), foot()],
                drain_face: moon(),
                inflicts: ConditionKind::Blind,
            })],
        ),
        Ability::new(
            "Entangling Shot",
            Requirement::Straight(StraightLen::Four),
            vec![
                ActionKind::Inflict(ConditionKind::Entangle),
                ActionKind::Damage(7),
            ],
        ),
        Ability::new(
            "Eclipse",
            Requirement::Faces(vec![moon(); 4]),
            vec![
                ActionKind::Inflict(ConditionKind::Blind),
                ActionKind::Inflict(ConditionKind::Entangle),
                ActionKind::Inflict(ConditionKind::Targeted),
                ActionKind::Damage(7),
            ],
        ),
        Ability::new(
            "Blinding Shot",
            Requirement::Straight(StraightLen::Five),
            vec![
                ActionKind::Inflict(ConditionKind::Blind),
                ActionKind::Inflict(ConditionKind::Evasive),
                ActionKind::Damage(8),
            ],
        ),
        Ability::defensive(
            "Missed Me",
            vec![ActionKind::DefenseRoll(DefenseRoll {
                block_face: foot(),
                retaliate_face: arrow(),
            })],
        ),
        Ability::new(
            "Lunar Eclipse",
            Requirement::Faces(vec![moon(); 5]),
            vec![
                ActionKind::Inflict(ConditionKind::Evasive),
                ActionKind::Inflict(ConditionKind::Blind),
                ActionKind::Inflict(ConditionKind::Entangle),
                ActionKind::Inflict(ConditionKind::Targeted),
                ActionKind::UndefendableDamage(12),
            ],
        )
        .ultimate(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kit_builds_and_validates() {
        let config = GameConfig::new();
        let elf = moon_elf("Good Moon Elf", &config).expect("kit is valid");

        assert_eq!(elf.abilities().len(), 11);
        assert_eq!(elf.health, GameConfig::DEFAULT_STARTING_HEALTH);
        assert_eq!(
            elf.abilities().iter().filter(|a| a.defense).count(),
            1,
            "exactly one defensive ability"
        );
        assert!(elf.ability_named("Lunar Eclipse").is_some_and(|a| a.ultimate));
    }

    #[test]
    fn longbow_ladder_gates_on_arrow_count() {
        let config = GameConfig::new();
        let mut elf = moon_elf("Elf", &config).expect("kit is valid");

        // Three arrows, a foot and a moon.
        for (index, value) in [1, 2, 3, 4, 6].iter().enumerate() {
            if let Some(die) = elf.die_mut(index) {
                die.set_value(*value);
            }
        }

        let names: Vec<&str> = elf
            .valid_abilities()
            .iter()
            .map(|(_, ability)| ability.name.as_str())
            .collect();
        assert!(names.contains(&"Longbow 3"));
        assert!(!names.contains(&"Longbow 4"));
        assert!(!names.contains(&"Missed Me"));
    }

    #[test]
    fn eclipse_needs_four_moons() {
        let config = GameConfig::new();
        let mut elf = moon_elf("Elf", &config).expect("kit is valid");

        for (index, value) in [6, 6, 6, 6, 1].iter().enumerate() {
            if let Some(die) = elf.die_mut(index) {
                die.set_value(*value);
            }
        }

        let names: Vec<&str> = elf
            .valid_abilities()
            .iter()
            .map(|(_, ability)| ability.name.as_str())
            .collect();
        assert!(names.contains(&"Eclipse"));
        assert!(!names.contains(&"Lunar Eclipse"));
    }
}
