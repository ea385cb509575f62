//! Deterministic combat resolution for dice-driven duels.
//!
//! `dicebound-core` defines the canonical rules (dice, abilities, conditions
//! and the damage pipeline) and exposes pure APIs that can be reused by
//! frontends and offline tools. All cross-combatant mutation flows through
//! [`engine::Engine`]; the console loop and the hero content tables live in
//! sibling crates and only talk to the types re-exported here.
pub mod ability;
pub mod action;
pub mod combatant;
pub mod condition;
pub mod config;
pub mod decision;
pub mod dice;
pub mod engine;
pub mod event;
pub mod rng;

pub use ability::{Ability, Requirement, StraightLen};
pub use action::{ActionKind, DefenseRoll, RollEffect};
pub use combatant::{Combatant, CombatantId, SetupError};
pub use condition::{ConditionKind, ConditionOutcome, Trigger, TriggerReport};
pub use config::GameConfig;
pub use decision::{AlwaysSpend, DecisionProvider, NeverSpend};
pub use dice::{Die, Face, FaceSet};
pub use engine::{DamageKind, Engine, EngineError};
pub use event::CombatEvent;
pub use rng::{DiceRng, PcgRng, ScriptedRng};
