//! Dice - the unit of randomness.
//!
//! Each die carries its own six face labels; different hero kits print
//! different symbols. `value` is the numeric result (1-6) and `side()` the
//! label on the face that landed up.

use std::fmt;

use crate::rng::DiceRng;

/// A printed face label on a die (`Arrow`, `Foot`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Face(String);

impl Face {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Face {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// The six labels of a die, indexed by `value - 1`.
pub type FaceSet = [Face; 6];

/// A six-sided die with kit-specific face labels.
///
/// Invariant: `side()` is always the label at index `value - 1`. A locked
/// die ignores `roll()` entirely; the turn loop toggles `locked` to keep
/// dice across rerolls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Die {
    value: u8,
    faces: FaceSet,
    pub locked: bool,
}

impl Die {
    /// Creates a die showing its first face.
    pub fn new(faces: FaceSet) -> Self {
        Self {
            value: 1,
            faces,
            locked: false,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn faces(&self) -> &FaceSet {
        &self.faces
    }

    /// Label currently face up, or `None` when the value was forced out of
    /// range with [`set_value`](Self::set_value).
    pub fn side(&self) -> Option<&Face> {
        let index = self.value.checked_sub(1)? as usize;
        self.faces.get(index)
    }

    /// Whether the die currently shows `face`.
    ///
    /// An out-of-range die shows nothing and matches no face.
    pub fn shows(&self, face: &Face) -> bool {
        self.side() == Some(face)
    }

    /// Rolls the die. No-op while locked.
    pub fn roll(&mut self, rng: &mut dyn DiceRng) {
        if !self.locked {
            self.value = rng.roll_d6();
        }
    }

    /// Forces a value directly, for tests and scripted scenarios.
    ///
    /// Out-of-range values are kept as-is: `side()` reports no label and the
    /// die matches no requirement until it is rolled or set again.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }
}

impl fmt::Display for Die {
    // Locked dice render in angle brackets so reroll selection can tell
    // them apart at a glance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = self.side().map(Face::as_str).unwrap_or("NULL");
        if self.locked {
            write!(f, "<{} - {}>", self.value, side)
        } else {
            write!(f, "[{} - {}]", self.value, side)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    fn numbered_faces() -> FaceSet {
        ["One", "Two", "Three", "Four", "Five", "Six"].map(Face::from)
    }

    #[test]
    fn side_tracks_value_across_rolls() {
        let mut die = Die::new(numbered_faces());
        let mut rng = PcgRng::seed_from_u64(99);

        for _ in 0..200 {
            die.roll(&mut rng);
            let value = die.value();
            assert!((1..=6).contains(&value));
            assert_eq!(die.side(), die.faces().get(value as usize - 1));
        }
    }

    #[test]
    fn locked_die_never_changes() {
        let mut die = Die::new(numbered_faces());
        die.set_value(4);
        die.locked = true;

        let mut rng = PcgRng::seed_from_u64(5);
        for _ in 0..50 {
            die.roll(&mut rng);
        }

        assert_eq!(die.value(), 4);
        assert_eq!(die.side().map(Face::as_str), Some("Four"));
    }

    #[test]
    fn out_of_range_value_degrades_to_sentinel() {
        let mut die = Die::new(numbered_faces());

        die.set_value(9);
        assert_eq!(die.side(), None);
        assert!(!die.shows(&Face::from("Six")));
        assert_eq!(die.to_string(), "[9 - NULL]");

        die.set_value(0);
        assert_eq!(die.side(), None);

        // A later roll recovers the invariant.
        let mut rng = PcgRng::seed_from_u64(1);
        die.roll(&mut rng);
        assert!(die.side().is_some());
    }

    #[test]
    fn display_marks_locked_dice() {
        let mut die = Die::new(numbered_faces());
        die.set_value(2);
        assert_eq!(die.to_string(), "[2 - Two]");

        die.locked = true;
        assert_eq!(die.to_string(), "<2 - Two>");
    }
}
