//! Cross-combatant combat resolution.
//!
//! Ability use, the damage-modifier pipeline and trigger dispatch all need
//! both sides of the duel, so they live here rather than on [`Combatant`].
//! The engine owns the combatant registry, the dice RNG, the decision
//! provider and the event log; everything else refers to combatants through
//! [`CombatantId`] handles.

use crate::action::{ActionKind, DefenseRoll, RollEffect};
use crate::combatant::{Combatant, CombatantId};
use crate::condition::{ConditionKind, ConditionOutcome, Trigger, TriggerReport};
use crate::config::GameConfig;
use crate::decision::DecisionProvider;
use crate::event::CombatEvent;
use crate::rng::DiceRng;

/// Damage source classification for the health pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageKind {
    /// Normal attack: modifiers sum, then the defense transforms, then
    /// nullification is checked.
    Attack,
    /// Bypasses the target's defensive ability; modifiers and nullification
    /// still apply.
    UndefendableAttack,
}

/// Errors from driving the engine with invalid input.
///
/// Well-behaved frontends never see these: offering only
/// [`Combatant::valid_abilities`] prevents them by construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{0} has no ability at index {1}")]
    UnknownAbility(String, usize),
    #[error("defensive ability {0} cannot be used offensively")]
    DefensiveAbility(String),
}

/// Resolves combat between two combatants.
pub struct Engine {
    config: GameConfig,
    combatants: Vec<Combatant>,
    rng: Box<dyn DiceRng>,
    decisions: Box<dyn DecisionProvider>,
    events: Vec<CombatEvent>,
}

impl Engine {
    pub const PLAYER_ONE: CombatantId = CombatantId(0);
    pub const PLAYER_TWO: CombatantId = CombatantId(1);

    /// Creates an engine over a pair of combatants.
    pub fn duel(
        config: GameConfig,
        first: Combatant,
        second: Combatant,
        rng: Box<dyn DiceRng>,
        decisions: Box<dyn DecisionProvider>,
    ) -> Self {
        Self {
            config,
            combatants: vec![first, second],
            rng,
            decisions,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        &self.combatants[id.0]
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> &mut Combatant {
        &mut self.combatants[id.0]
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn opponent(&self, id: CombatantId) -> CombatantId {
        CombatantId(1 - id.0)
    }

    /// Drains the accumulated narration events.
    pub fn take_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // Turn phases
    // ========================================================================

    /// Starts `actor`'s offensive roll phase: restores the roll budget,
    /// unlocks the pool and fires pre-roll conditions. Returns false when a
    /// condition cancelled the phase outright.
    pub fn begin_offensive_phase(&mut self, actor: CombatantId) -> bool {
        {
            let combatant = &mut self.combatants[actor.0];
            combatant.rolls_remaining = self.config.rolls_per_turn;
            combatant.unlock_all();
        }

        let report = self.fire_trigger(actor, Trigger::PreOffensiveRoll);
        if report.skip_roll_phase {
            self.combatants[actor.0].rolls_remaining = 0;
            self.events.push(CombatEvent::RollPhaseSkipped { combatant: actor });
            return false;
        }
        true
    }

    /// Rolls `actor`'s unlocked dice. The roll budget itself belongs to the
    /// turn loop, which decrements [`Combatant::rolls_remaining`] directly.
    pub fn roll_pool(&mut self, actor: CombatantId) {
        let Self { combatants, rng, .. } = self;
        combatants[actor.0].roll_pool(rng.as_mut());
    }

    /// Uses an offensive ability on `target`, running its actions in order.
    pub fn use_ability(
        &mut self,
        actor: CombatantId,
        ability_index: usize,
        target: CombatantId,
    ) -> Result<(), EngineError> {
        let combatant = &self.combatants[actor.0];
        let ability = combatant.ability(ability_index).ok_or_else(|| {
            EngineError::UnknownAbility(combatant.name().to_string(), ability_index)
        })?;
        if ability.defense {
            return Err(EngineError::DefensiveAbility(ability.name.clone()));
        }

        let name = ability.name.clone();
        let actions = ability.actions.clone();
        self.events.push(CombatEvent::AbilityUsed {
            actor,
            target,
            ability: name,
            defensive: false,
        });
        for action in &actions {
            self.apply_action(actor, target, action);
        }
        Ok(())
    }

    // ========================================================================
    // Action dispatch
    // ========================================================================

    fn apply_action(&mut self, dealer: CombatantId, target: CombatantId, action: &ActionKind) {
        match action {
            ActionKind::Damage(amount) => {
                self.modify_health(target, -(*amount as i32), dealer, DamageKind::Attack);
            }
            ActionKind::UndefendableDamage(amount) => {
                self.modify_health(
                    target,
                    -(*amount as i32),
                    dealer,
                    DamageKind::UndefendableAttack,
                );
            }
            ActionKind::Inflict(kind) => self.inflict(dealer, target, *kind),
            ActionKind::RollEffect(effect) => self.roll_effect(dealer, target, effect),
            // Response-only; inert when sequenced into an offensive use.
            ActionKind::DefenseRoll(_) => {}
        }
    }

    /// Creates a fresh token and routes it to the afflicted side. Each
    /// infliction is an independent instance; templates are never shared.
    fn inflict(&mut self, dealer: CombatantId, target: CombatantId, kind: ConditionKind) {
        let afflicted = if kind.given_to_self() { dealer } else { target };
        if self.combatants[afflicted.0].add_condition(kind) {
            self.events.push(CombatEvent::ConditionInflicted {
                combatant: afflicted,
                kind,
            });
        }
        // Stack-limit rejections stay silent; the unchanged token count is
        // the only observable.
    }

    fn roll_effect(&mut self, dealer: CombatantId, target: CombatantId, effect: &RollEffect) {
        self.roll_pool(dealer);
        let line = self.combatants[dealer.0].dice_line();
        self.events.push(CombatEvent::PoolRolled {
            combatant: dealer,
            dice: line,
        });

        let (bonus, drains) = {
            let dice = self.combatants[dealer.0].dice();
            let bonus = dice
                .iter()
                .filter(|die| effect.bonus_faces.iter().any(|face| die.shows(face)))
                .count() as u32;
            let drains = dice.iter().filter(|die| die.shows(&effect.drain_face)).count();
            (bonus, drains)
        };

        for _ in 0..drains {
            let combatant = &mut self.combatants[target.0];
            if combatant.combat_points > 0 {
                combatant.combat_points -= 1;
                self.events
                    .push(CombatEvent::CombatPointDrained { combatant: target });
            }
        }

        let damage = effect.base_damage + bonus;
        self.modify_health(target, -(damage as i32), dealer, DamageKind::Attack);
        self.inflict(dealer, target, effect.inflicts);
    }

    // ========================================================================
    // Health pipeline
    // ========================================================================

    /// The health modification pipeline.
    ///
    /// Fixed order: attack modifiers compose additively, the defensive
    /// ability transforms the result, nullification is all-or-nothing and
    /// checked last, then the delta lands. Health is never clamped.
    pub fn modify_health(
        &mut self,
        target: CombatantId,
        mut amount: i32,
        source: CombatantId,
        kind: DamageKind,
    ) {
        match kind {
            DamageKind::Attack => {
                amount += self.fire_trigger(target, Trigger::AttackDamage).modifier;
                amount = self.apply_defense(target, source, amount);
            }
            DamageKind::UndefendableAttack => {
                amount += self.fire_trigger(target, Trigger::AttackDamage).modifier;
            }
        }

        if self.fire_trigger(target, Trigger::DamageTaken).nullified {
            amount = 0;
            self.events.push(CombatEvent::DamageNullified { combatant: target });
        }

        let combatant = &mut self.combatants[target.0];
        combatant.health += amount;
        let health = combatant.health;
        self.events.push(CombatEvent::HealthChanged {
            combatant: target,
            delta: amount,
            health,
        });
    }

    /// Folds the incoming amount through the defender's defensive ability.
    /// May deal side-effect damage back to the attacker.
    fn apply_defense(&mut self, defender: CombatantId, attacker: CombatantId, amount: i32) -> i32 {
        let index = self.combatants[defender.0].defensive_ability_index();
        let ability = &self.combatants[defender.0].abilities()[index];
        let name = ability.name.clone();
        let actions = ability.actions.clone();

        self.events.push(CombatEvent::AbilityUsed {
            actor: defender,
            target: attacker,
            ability: name,
            defensive: true,
        });

        let mut amount = amount;
        for action in &actions {
            amount = self.apply_defensive_action(defender, attacker, action, amount);
        }
        amount
    }

    fn apply_defensive_action(
        &mut self,
        defender: CombatantId,
        attacker: CombatantId,
        action: &ActionKind,
        amount: i32,
    ) -> i32 {
        match action {
            ActionKind::DefenseRoll(roll) => self.defense_roll(defender, attacker, roll, amount),
            // Only roll responses transform damage; anything else sequenced
            // into a defensive kit passes the amount through.
            _ => amount,
        }
    }

    fn defense_roll(
        &mut self,
        defender: CombatantId,
        attacker: CombatantId,
        roll: &DefenseRoll,
        mut amount: i32,
    ) -> i32 {
        self.roll_pool(defender);
        let line = self.combatants[defender.0].dice_line();
        self.events.push(CombatEvent::PoolRolled {
            combatant: defender,
            dice: line,
        });

        let (blocks, retaliations) = {
            let dice = self.combatants[defender.0].dice();
            let blocks = dice.iter().filter(|die| die.shows(&roll.block_face)).count();
            let retaliations = dice
                .iter()
                .filter(|die| die.shows(&roll.retaliate_face))
                .count();
            (blocks, retaliations)
        };

        if blocks >= 2 && amount < 0 {
            // `amount` is negative-signed damage: block half of the
            // magnitude, rounded down.
            let damage = -amount;
            amount = -(damage - damage / 2);
            self.events
                .push(CombatEvent::HalfDamageBlocked { combatant: defender });
        }

        let retaliation = (retaliations / 2) as u32;
        if retaliation > 0 {
            self.events.push(CombatEvent::Retaliated {
                combatant: defender,
                amount: retaliation,
            });
            self.modify_health(
                attacker,
                -(retaliation as i32),
                defender,
                DamageKind::UndefendableAttack,
            );
        }

        amount
    }

    // ========================================================================
    // Trigger dispatch
    // ========================================================================

    /// Fires every condition on `owner` matching `trigger`, folding their
    /// outcomes and removing spent tokens.
    pub fn fire_trigger(&mut self, owner: CombatantId, trigger: Trigger) -> TriggerReport {
        let mut report = TriggerReport::default();

        // Snapshot the matching tokens up front; activation may mutate the
        // owner's state or remove tokens.
        let matching: Vec<ConditionKind> = self.combatants[owner.0]
            .conditions()
            .iter()
            .copied()
            .filter(|kind| kind.trigger() == trigger)
            .collect();

        for kind in matching {
            let (outcome, spent) = self.activate_condition(owner, kind, &report);
            report.absorb(outcome);
            if spent {
                self.combatants[owner.0].remove_one_condition(kind);
            }
        }
        report
    }

    /// Runs one token's activation. Returns its outcome and whether the
    /// token was spent (and must be removed).
    fn activate_condition(
        &mut self,
        owner: CombatantId,
        kind: ConditionKind,
        report_so_far: &TriggerReport,
    ) -> (ConditionOutcome, bool) {
        match kind {
            ConditionKind::Targeted => (ConditionOutcome::Modifier(-2), !kind.persistent()),
            ConditionKind::Entangle => {
                let combatant = &mut self.combatants[owner.0];
                combatant.rolls_remaining = combatant.rolls_remaining.saturating_sub(1);
                (ConditionOutcome::Nothing, true)
            }
            ConditionKind::Blind => {
                let roll = self.rng.roll_d6();
                let skipped = roll <= 2;
                self.events.push(CombatEvent::BlindResolved {
                    combatant: owner,
                    roll,
                    skipped,
                });
                let outcome = if skipped {
                    ConditionOutcome::SkipRollPhase
                } else {
                    ConditionOutcome::Nothing
                };
                (outcome, true)
            }
            ConditionKind::Evasive => {
                // No point spending another token once this damage is
                // already cancelled.
                if report_so_far.nullified {
                    return (ConditionOutcome::Nothing, false);
                }
                let name = self.combatants[owner.0].name().to_string();
                if !self.decisions.spend_evasive(&name) {
                    return (ConditionOutcome::Nothing, false);
                }
                let roll = self.rng.roll_d6();
                let avoided = roll <= 2;
                self.events.push(CombatEvent::EvasiveResolved {
                    combatant: owner,
                    roll,
                    avoided,
                });
                let outcome = if avoided {
                    ConditionOutcome::NullifyDamage
                } else {
                    ConditionOutcome::Nothing
                };
                (outcome, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{Ability, Requirement, StraightLen};
    use crate::decision::{AlwaysSpend, NeverSpend};
    use crate::dice::{Die, Face, FaceSet};
    use crate::rng::{PcgRng, ScriptedRng};

    // Moon Elf face layout: values 1-3 show Arrow, 4-5 Foot, 6 Moon.
    fn faces() -> FaceSet {
        ["Arrow", "Arrow", "Arrow", "Foot", "Foot", "Moon"].map(Face::from)
    }

    fn pool() -> Vec<Die> {
        (0..GameConfig::DICE_POOL).map(|_| Die::new(faces())).collect()
    }

    fn kit() -> Vec<Ability> {
        vec![
            Ability::new(
                "Strike",
                Requirement::Faces(Vec::new()),
                vec![ActionKind::Damage(3)],
            ),
            Ability::new(
                "Piercing Strike",
                Requirement::Faces(Vec::new()),
                vec![ActionKind::UndefendableDamage(4)],
            ),
            Ability::new(
                "Mark",
                Requirement::Faces(Vec::new()),
                vec![ActionKind::Inflict(ConditionKind::Targeted)],
            ),
            Ability::defensive("Brace", Vec::new()),
        ]
    }

    fn combatant(name: &str) -> Combatant {
        Combatant::new(name, pool(), kit(), &GameConfig::new()).expect("valid test kit")
    }

    fn duel(rng: Box<dyn DiceRng>, decisions: Box<dyn DecisionProvider>) -> Engine {
        Engine::duel(GameConfig::new(), combatant("Attacker"), combatant("Defender"), rng, decisions)
    }

    fn scripted(values: impl Into<Vec<u8>>) -> Box<dyn DiceRng> {
        Box::new(ScriptedRng::new(values))
    }

    const A: CombatantId = Engine::PLAYER_ONE;
    const B: CombatantId = Engine::PLAYER_TWO;

    #[test]
    fn plain_attack_lands_at_face_value() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        // Strike for 3 against an empty-handed defense: 50 - 3 = 47.
        engine.use_ability(A, 0, B).expect("strike resolves");
        assert_eq!(engine.combatant(B).health, 47);
        assert_eq!(engine.combatant(A).health, 50);
    }

    #[test]
    fn targeted_adds_two_to_every_attack_and_persists() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        engine.use_ability(A, 2, B).expect("mark resolves");
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Targeted), 1);

        // Undefendable 4 becomes 6 with the Targeted modifier.
        engine.use_ability(A, 1, B).expect("pierce resolves");
        assert_eq!(engine.combatant(B).health, 50 - 6);

        // Targeted is persistent: it is still there and still biting.
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Targeted), 1);
        engine.use_ability(A, 0, B).expect("strike resolves");
        assert_eq!(engine.combatant(B).health, 50 - 6 - 5);
    }

    #[test]
    fn evasive_spent_on_a_low_roll_nullifies_everything() {
        let mut engine = duel(scripted([2]), Box::new(AlwaysSpend));

        engine.combatant_mut(B).add_condition(ConditionKind::Evasive);
        engine.use_ability(A, 1, B).expect("pierce resolves");

        // Rolled a 2: all damage avoided, token spent.
        assert_eq!(engine.combatant(B).health, 50);
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Evasive), 0);
        assert!(engine
            .take_events()
            .iter()
            .any(|event| matches!(event, CombatEvent::DamageNullified { .. })));
    }

    #[test]
    fn evasive_spent_on_a_high_roll_changes_nothing() {
        let mut engine = duel(scripted([5]), Box::new(AlwaysSpend));

        engine.combatant_mut(B).add_condition(ConditionKind::Evasive);
        engine.use_ability(A, 1, B).expect("pierce resolves");

        assert_eq!(engine.combatant(B).health, 46);
        // Spent even though the roll failed.
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Evasive), 0);
    }

    #[test]
    fn declined_evasive_is_kept_for_later() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        engine.combatant_mut(B).add_condition(ConditionKind::Evasive);
        engine.use_ability(A, 1, B).expect("pierce resolves");

        assert_eq!(engine.combatant(B).health, 46);
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Evasive), 1);
    }

    #[test]
    fn entangle_costs_one_roll_and_expires() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        engine.combatant_mut(A).add_condition(ConditionKind::Entangle);
        assert!(engine.begin_offensive_phase(A));

        assert_eq!(engine.combatant(A).rolls_remaining, 2);
        assert_eq!(engine.combatant(A).condition_count(ConditionKind::Entangle), 0);

        // Next phase is back to the full budget.
        assert!(engine.begin_offensive_phase(A));
        assert_eq!(engine.combatant(A).rolls_remaining, 3);
    }

    #[test]
    fn blind_on_a_low_roll_skips_the_phase() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        engine.combatant_mut(A).add_condition(ConditionKind::Blind);
        assert!(!engine.begin_offensive_phase(A));

        assert_eq!(engine.combatant(A).rolls_remaining, 0);
        assert_eq!(engine.combatant(A).condition_count(ConditionKind::Blind), 0);
        assert!(engine
            .take_events()
            .iter()
            .any(|event| matches!(event, CombatEvent::RollPhaseSkipped { .. })));
    }

    #[test]
    fn blind_on_a_high_roll_is_spent_harmlessly() {
        let mut engine = duel(scripted([6]), Box::new(NeverSpend));

        engine.combatant_mut(A).add_condition(ConditionKind::Blind);
        assert!(engine.begin_offensive_phase(A));

        assert_eq!(engine.combatant(A).rolls_remaining, 3);
        assert_eq!(engine.combatant(A).condition_count(ConditionKind::Blind), 0);
    }

    #[test]
    fn begin_phase_unlocks_the_pool() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        for index in 0..GameConfig::DICE_POOL {
            if let Some(die) = engine.combatant_mut(A).die_mut(index) {
                die.locked = true;
            }
        }
        engine.begin_offensive_phase(A);

        assert!(engine.combatant(A).dice().iter().all(|die| !die.locked));
    }

    #[test]
    fn defense_roll_halves_and_retaliates() {
        // Defender's five defense dice: 4, 4 (two Foot - block), 1, 1 (two
        // Arrow - one retaliation), 6.
        let mut engine = Engine::duel(
            GameConfig::new(),
            combatant("Attacker"),
            Combatant::new(
                "Defender",
                pool(),
                vec![Ability::defensive(
                    "Missed Me",
                    vec![ActionKind::DefenseRoll(DefenseRoll {
                        block_face: Face::from("Foot"),
                        retaliate_face: Face::from("Arrow"),
                    })],
                )],
                &GameConfig::new(),
            )
            .expect("valid defender kit"),
            scripted([4, 4, 1, 1, 6]),
            Box::new(NeverSpend),
        );

        engine.modify_health(B, -7, A, DamageKind::Attack);

        // 7 incoming, half (3) blocked: defender takes 4.
        assert_eq!(engine.combatant(B).health, 46);
        // One undefendable point retaliated at the attacker.
        assert_eq!(engine.combatant(A).health, 49);

        let events = engine.take_events();
        assert!(events
            .iter()
            .any(|event| matches!(event, CombatEvent::HalfDamageBlocked { .. })));
        assert!(events
            .iter()
            .any(|event| matches!(event, CombatEvent::Retaliated { amount: 1, .. })));
    }

    #[test]
    fn defense_roll_without_blocks_passes_damage_through() {
        // All Moon: no blocks, no retaliation.
        let mut engine = Engine::duel(
            GameConfig::new(),
            combatant("Attacker"),
            Combatant::new(
                "Defender",
                pool(),
                vec![Ability::defensive(
                    "Missed Me",
                    vec![ActionKind::DefenseRoll(DefenseRoll {
                        block_face: Face::from("Foot"),
                        retaliate_face: Face::from("Arrow"),
                    })],
                )],
                &GameConfig::new(),
            )
            .expect("valid defender kit"),
            scripted([6, 6, 6, 6, 6]),
            Box::new(NeverSpend),
        );

        engine.modify_health(B, -7, A, DamageKind::Attack);
        assert_eq!(engine.combatant(B).health, 43);
        assert_eq!(engine.combatant(A).health, 50);
    }

    #[test]
    fn roll_effect_counts_faces_drains_and_blinds() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        // Lock the dealer's pool on 3 Arrow, 1 Foot, 1 Moon so the reroll
        // inside the effect changes nothing.
        for (index, value) in [1, 2, 3, 4, 6].iter().enumerate() {
            if let Some(die) = engine.combatant_mut(A).die_mut(index) {
                die.set_value(*value);
                die.locked = true;
            }
        }

        let effect = RollEffect {
            base_damage: 3,
            bonus_faces: vec![Face::from("Arrow"), Face::from("Foot")],
            drain_face: Face::from("Moon"),
            inflicts: ConditionKind::Blind,
        };
        engine.roll_effect(A, B, &effect);

        // 3 base + 4 face bonuses (3 Arrow + 1 Foot) = 7 damage.
        assert_eq!(engine.combatant(B).health, 43);
        // One Moon drains one combat point.
        assert_eq!(engine.combatant(B).combat_points, 1);
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Blind), 1);
    }

    #[test]
    fn roll_effect_never_drains_below_zero() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));
        engine.combatant_mut(B).combat_points = 0;

        for (index, value) in [6, 6, 6, 6, 6].iter().enumerate() {
            if let Some(die) = engine.combatant_mut(A).die_mut(index) {
                die.set_value(*value);
                die.locked = true;
            }
        }

        let effect = RollEffect {
            base_damage: 3,
            bonus_faces: vec![Face::from("Arrow")],
            drain_face: Face::from("Moon"),
            inflicts: ConditionKind::Blind,
        };
        engine.roll_effect(A, B, &effect);

        assert_eq!(engine.combatant(B).combat_points, 0);
    }

    #[test]
    fn use_ability_rejects_bad_selections() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));

        let missing = engine.use_ability(A, 99, B);
        assert!(matches!(missing, Err(EngineError::UnknownAbility(_, 99))));

        // Index 3 is the defensive ability in the test kit.
        let defensive = engine.use_ability(A, 3, B);
        assert!(matches!(defensive, Err(EngineError::DefensiveAbility(_))));
    }

    #[test]
    fn health_goes_negative_without_clamping() {
        let mut engine = duel(scripted([1]), Box::new(NeverSpend));
        engine.combatant_mut(B).health = 2;

        engine.use_ability(A, 1, B).expect("pierce resolves");
        assert_eq!(engine.combatant(B).health, -2);
        assert!(engine.combatant(B).is_defeated());
    }

    #[test]
    fn straight_gated_ability_flows_end_to_end() {
        // Sanity check the whole surface with a real RNG: roll until the
        // straight-gated ability shows up as valid, then use it.
        let mut engine = Engine::duel(
            GameConfig::new(),
            Combatant::new(
                "Attacker",
                pool(),
                vec![
                    Ability::new(
                        "Entangling Shot",
                        Requirement::Straight(StraightLen::Four),
                        vec![
                            ActionKind::Inflict(ConditionKind::Entangle),
                            ActionKind::Damage(7),
                        ],
                    ),
                    Ability::defensive("Brace", Vec::new()),
                ],
                &GameConfig::new(),
            )
            .expect("valid attacker kit"),
            combatant("Defender"),
            Box::new(PcgRng::seed_from_u64(1234)),
            Box::new(NeverSpend),
        );

        let mut used = false;
        for _ in 0..200 {
            engine.roll_pool(A);
            let usable: Vec<usize> = engine
                .combatant(A)
                .valid_abilities()
                .iter()
                .map(|(index, _)| *index)
                .collect();
            if let Some(&index) = usable.first() {
                engine.use_ability(A, index, B).expect("ability resolves");
                used = true;
                break;
            }
        }

        assert!(used, "a four-straight never appeared in 200 rolls");
        assert_eq!(engine.combatant(B).health, 43);
        assert_eq!(engine.combatant(B).condition_count(ConditionKind::Entangle), 1);
    }
}
