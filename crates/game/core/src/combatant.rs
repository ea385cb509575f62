//! Combatants and the state they exclusively own.
//!
//! A combatant owns its dice pool and condition tokens; abilities are
//! read-mostly kit data. Anything that needs the *other* side of the duel
//! (defense, retaliation, infliction routing) lives in
//! [`crate::engine::Engine`] - combatants never hold references to each
//! other.

use std::fmt;

use arrayvec::ArrayVec;

use crate::ability::Ability;
use crate::condition::ConditionKind;
use crate::config::GameConfig;
use crate::dice::Die;
use crate::rng::DiceRng;

/// Non-owning handle to a combatant in the engine's registry.
///
/// Handles are only minted by the engine ([`crate::engine::Engine::PLAYER_ONE`]
/// and friends), so holding one is proof the combatant exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CombatantId(pub(crate) usize);

impl CombatantId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Errors detected while assembling a combatant.
///
/// A broken kit fails here, at setup, instead of on the first incoming
/// attack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("combatant has no defensive ability")]
    NoDefensiveAbility,
    #[error("combatant has {0} defensive abilities, expected exactly one")]
    MultipleDefensiveAbilities(usize),
    #[error("dice pool holds {0} dice, expected 5")]
    WrongDiceCount(usize),
}

/// A player-controlled entity: health, combat points, a dice pool, a kit of
/// abilities and any active condition tokens.
#[derive(Clone, Debug)]
pub struct Combatant {
    name: String,
    /// Not clamped; at or below zero the duel is over for this combatant.
    pub health: i32,
    pub combat_points: u32,
    dice: ArrayVec<Die, { GameConfig::DICE_POOL }>,
    abilities: Vec<Ability>,
    conditions: ArrayVec<ConditionKind, { GameConfig::MAX_CONDITIONS }>,
    /// Remaining rolls this phase; the turn loop decrements it directly.
    pub rolls_remaining: u8,
}

impl Combatant {
    /// Assembles a combatant, validating the kit: a full dice pool and
    /// exactly one defensive ability.
    pub fn new(
        name: impl Into<String>,
        dice: Vec<Die>,
        abilities: Vec<Ability>,
        config: &GameConfig,
    ) -> Result<Self, SetupError> {
        match abilities.iter().filter(|ability| ability.defense).count() {
            1 => {}
            0 => return Err(SetupError::NoDefensiveAbility),
            n => return Err(SetupError::MultipleDefensiveAbilities(n)),
        }

        let count = dice.len();
        let dice: ArrayVec<Die, { GameConfig::DICE_POOL }> = dice
            .into_iter()
            .take(GameConfig::DICE_POOL)
            .collect();
        if count != GameConfig::DICE_POOL {
            return Err(SetupError::WrongDiceCount(count));
        }

        Ok(Self {
            name: name.into(),
            health: config.starting_health,
            combat_points: config.starting_combat_points,
            dice,
            abilities,
            conditions: ArrayVec::new(),
            rolls_remaining: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    // ========================================================================
    // Dice
    // ========================================================================

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Mutable access for the turn loop's lock/unlock selection.
    pub fn die_mut(&mut self, index: usize) -> Option<&mut Die> {
        self.dice.get_mut(index)
    }

    /// Rolls every unlocked die in the pool.
    pub fn roll_pool(&mut self, rng: &mut dyn DiceRng) {
        for die in &mut self.dice {
            die.roll(rng);
        }
    }

    pub fn unlock_all(&mut self) {
        for die in &mut self.dice {
            die.locked = false;
        }
    }

    /// One-line pool display, sorted by value so runs are easy to read.
    pub fn dice_line(&self) -> String {
        let mut sorted: Vec<&Die> = self.dice.iter().collect();
        sorted.sort_by_key(|die| die.value());
        let rendered: Vec<String> = sorted.iter().map(|die| die.to_string()).collect();
        rendered.join(", ")
    }

    // ========================================================================
    // Abilities
    // ========================================================================

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }

    pub fn ability_named(&self, name: &str) -> Option<&Ability> {
        self.abilities.iter().find(|ability| ability.name == name)
    }

    /// Index of the defensive ability. Guaranteed present by construction.
    pub(crate) fn defensive_ability_index(&self) -> usize {
        self.abilities
            .iter()
            .position(|ability| ability.defense)
            .unwrap_or(0)
    }

    /// Offensive abilities usable with the current pool, paired with their
    /// kit index, in kit order (stable - no sorting by cost or value).
    pub fn valid_abilities(&self) -> Vec<(usize, &Ability)> {
        self.valid_abilities_with(&self.dice)
    }

    /// Same check against an arbitrary pool.
    pub fn valid_abilities_with<'a>(&'a self, dice: &[Die]) -> Vec<(usize, &'a Ability)> {
        self.abilities
            .iter()
            .enumerate()
            .filter(|(_, ability)| ability.is_usable_with(dice))
            .collect()
    }

    // ========================================================================
    // Conditions
    // ========================================================================

    pub fn conditions(&self) -> &[ConditionKind] {
        &self.conditions
    }

    pub fn condition_count(&self, kind: ConditionKind) -> usize {
        self.conditions.iter().filter(|&&c| c == kind).count()
    }

    /// Adds a token, silently rejecting at the kind's stack limit. Returns
    /// whether the token landed.
    pub fn add_condition(&mut self, kind: ConditionKind) -> bool {
        if self.condition_count(kind) >= kind.stack_limit() {
            return false;
        }
        if self.conditions.is_full() {
            return false;
        }
        self.conditions.push(kind);
        true
    }

    /// Removes one token of `kind`, if present.
    pub(crate) fn remove_one_condition(&mut self, kind: ConditionKind) -> bool {
        match self.conditions.iter().position(|&c| c == kind) {
            Some(index) => {
                self.conditions.remove(index);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        write!(f, "\nHealth: {}", self.health)?;
        write!(f, "\nCombat Points: {}", self.combat_points)?;
        write!(f, "\nConditions: ")?;
        if self.conditions.is_empty() {
            write!(f, "None")?;
        } else {
            let names: Vec<&str> = self.conditions.iter().map(|c| c.as_ref()).collect();
            f.write_str(&names.join(", "))?;
        }
        Ok(())
    }
}
