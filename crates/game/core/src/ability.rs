//! Abilities - dice-gated bundles of actions.

use std::fmt;

use crate::action::ActionKind;
use crate::dice::{Die, Face};

/// Length of a straight requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StraightLen {
    Four,
    Five,
}

impl StraightLen {
    /// Contiguous value windows a straight of this length can cover.
    pub fn windows(self) -> &'static [&'static [u8]] {
        match self {
            Self::Four => &[&[1, 2, 3, 4], &[2, 3, 4, 5], &[3, 4, 5, 6]],
            Self::Five => &[&[1, 2, 3, 4, 5], &[2, 3, 4, 5, 6]],
        }
    }

    pub fn len(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }
}

/// What a roll must show before an ability may be used.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Requirement {
    /// Explicit multiset of face labels, each matched to a distinct die.
    /// An empty list is trivially satisfied.
    Faces(Vec<Face>),
    /// Any run of consecutive die values of the given length.
    Straight(StraightLen),
}

impl Requirement {
    /// Checks the requirement against a rolled pool.
    ///
    /// Both forms are multiset matches: each die is consumed at most once,
    /// so `[Arrow, Arrow]` needs two distinct Arrow dice.
    pub fn satisfied_by(&self, dice: &[Die]) -> bool {
        match self {
            Self::Faces(required) => {
                let mut used = vec![false; dice.len()];
                required.iter().all(|face| claim(dice, &mut used, |die| die.shows(face)))
            }
            Self::Straight(length) => length.windows().iter().any(|window| {
                let mut used = vec![false; dice.len()];
                window
                    .iter()
                    .all(|&value| claim(dice, &mut used, |die| die.value() == value))
            }),
        }
    }
}

/// Marks the first unused die matching the predicate as consumed.
fn claim(dice: &[Die], used: &mut [bool], matches: impl Fn(&Die) -> bool) -> bool {
    for (index, die) in dice.iter().enumerate() {
        if !used[index] && matches(die) {
            used[index] = true;
            return true;
        }
    }
    false
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Faces(faces) => {
                let labels: Vec<&str> = faces.iter().map(Face::as_str).collect();
                f.write_str(&labels.join(", "))
            }
            Self::Straight(length) => write!(f, "{} dice straight", length.len()),
        }
    }
}

/// A named bundle of actions gated by a dice requirement.
///
/// Exactly one ability per combatant is defensive; it is never selectable
/// from a roll and only fires in response to an incoming attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub name: String,
    pub requirement: Requirement,
    pub actions: Vec<ActionKind>,
    pub defense: bool,
    pub ultimate: bool,
}

impl Ability {
    /// Creates an offensive ability.
    pub fn new(
        name: impl Into<String>,
        requirement: Requirement,
        actions: Vec<ActionKind>,
    ) -> Self {
        Self {
            name: name.into(),
            requirement,
            actions,
            defense: false,
            ultimate: false,
        }
    }

    /// Creates the defensive response ability. It has no dice requirement
    /// of its own - it fires whenever the combatant is attacked.
    pub fn defensive(name: impl Into<String>, actions: Vec<ActionKind>) -> Self {
        Self {
            name: name.into(),
            requirement: Requirement::Faces(Vec::new()),
            actions,
            defense: true,
            ultimate: false,
        }
    }

    /// Builder: mark as the kit's ultimate.
    pub fn ultimate(mut self) -> Self {
        self.ultimate = true;
        self
    }

    /// Whether the current roll allows using this ability.
    ///
    /// Defensive abilities always report false; they are response-only and
    /// never appear in the offensive selection.
    pub fn is_usable_with(&self, dice: &[Die]) -> bool {
        if self.defense {
            return false;
        }
        self.requirement.satisfied_by(dice)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ability Name: {}", self.name)?;
        write!(f, "\nRequirements: {}", self.requirement)?;
        write!(f, "\nActions: ")?;
        for action in &self.actions {
            write!(f, "\n - {action}")?;
        }
        Ok(())
    }
}
