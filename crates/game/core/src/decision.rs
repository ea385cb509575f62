//! Decisions the engine needs from outside.
//!
//! Evasive asks its owner whether to spend a token before rolling. The core
//! stays headless by delegating that choice to an injected provider:
//! interactive frontends prompt, tests and simulations script the answer.

/// Supplies player choices that interrupt combat resolution.
pub trait DecisionProvider {
    /// Whether `owner` spends an Evasive token against incoming damage.
    fn spend_evasive(&mut self, owner: &str) -> bool;
}

/// Always spends. Suitable for unattended simulation.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysSpend;

impl DecisionProvider for AlwaysSpend {
    fn spend_evasive(&mut self, _owner: &str) -> bool {
        true
    }
}

/// Never spends.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverSpend;

impl DecisionProvider for NeverSpend {
    fn spend_evasive(&mut self, _owner: &str) -> bool {
        false
    }
}
