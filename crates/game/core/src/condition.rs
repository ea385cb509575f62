//! Status conditions and their activation triggers.
//!
//! A condition is a token sitting on a combatant until one of its hook
//! points fires. The roster is fixed game content, so kinds form a closed
//! enum and the activation logic is pattern-matched in the engine's trigger
//! dispatch - no string keys, no open hierarchy.

/// Hook points at which conditions activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// An incoming attack against the owner is being resolved.
    AttackDamage,
    /// The owner is about to take damage, from any source.
    DamageTaken,
    /// The owner is about to start their offensive roll phase.
    PreOffensiveRoll,
}

/// Closed set of condition tokens.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    /// +2 incoming attack damage while held.
    Targeted,
    /// One fewer roll attempt next offensive roll phase.
    Entangle,
    /// Next offensive roll phase fails outright on a 1-2.
    Blind,
    /// May be spent when damaged: on a 1-2 the damage is nullified.
    Evasive,
}

impl ConditionKind {
    /// Hook point this token activates on.
    pub fn trigger(self) -> Trigger {
        match self {
            Self::Targeted => Trigger::AttackDamage,
            Self::Entangle | Self::Blind => Trigger::PreOffensiveRoll,
            Self::Evasive => Trigger::DamageTaken,
        }
    }

    /// Whether the token survives its own activation.
    ///
    /// Evasive is special-cased in the engine: its owner decides whether to
    /// spend it, and it is only removed when actually spent.
    pub fn persistent(self) -> bool {
        matches!(self, Self::Targeted)
    }

    /// Maximum simultaneous tokens of this kind on one combatant.
    pub fn stack_limit(self) -> usize {
        match self {
            Self::Evasive => 3,
            _ => 1,
        }
    }

    /// Whether infliction lands on the acting combatant instead of the
    /// target (Evasive is a self-buff).
    pub fn given_to_self(self) -> bool {
        matches!(self, Self::Evasive)
    }
}

/// Result of activating a single condition.
///
/// Damage modifiers and control signals are distinct variants; nothing in
/// the pipeline ever interprets a magic damage number as a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionOutcome {
    /// Additive damage modifier (negative means more damage taken).
    Modifier(i32),
    /// The pending damage is cancelled entirely.
    NullifyDamage,
    /// The owner's offensive roll phase is skipped.
    SkipRollPhase,
    /// No observable effect.
    Nothing,
}

/// Folded result of firing every matching condition for one trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TriggerReport {
    /// Sum of all `Modifier` outcomes.
    pub modifier: i32,
    /// At least one condition nullified the pending damage.
    pub nullified: bool,
    /// At least one condition cancelled the roll phase.
    pub skip_roll_phase: bool,
}

impl TriggerReport {
    /// Folds one activation outcome into the report.
    pub fn absorb(&mut self, outcome: ConditionOutcome) {
        match outcome {
            ConditionOutcome::Modifier(modifier) => self.modifier += modifier,
            ConditionOutcome::NullifyDamage => self.nullified = true,
            ConditionOutcome::SkipRollPhase => self.skip_roll_phase = true,
            ConditionOutcome::Nothing => {}
        }
    }
}
