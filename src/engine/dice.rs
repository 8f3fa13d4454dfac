//! Dice sources.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// A pair of six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    /// Create a roll.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Sum of both dice.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.first + self.second
    }

    /// Both dice show the same face.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.first == self.second
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}={}", self.first, self.second, self.total())
    }
}

/// Source of die faces.
///
/// Movement rolls and service-fee rolls both draw from the engine's roller.
pub trait DiceRoller {
    /// Roll one die, 1 to 6.
    fn roll_die(&mut self) -> u8;

    /// Roll two dice.
    fn roll_pair(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll::new(first, second)
    }
}

impl DiceRoller for GameRng {
    fn roll_die(&mut self) -> u8 {
        GameRng::roll_die(self)
    }
}

/// Dice that replay a fixed sequence of faces, then fall back to a seeded RNG.
///
/// ```
/// use spaceopoly::engine::{DiceRoller, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([3, 4]);
/// let roll = dice.roll_pair();
///
/// assert_eq!(roll.total(), 7);
/// assert!(!roll.is_doubles());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Replay `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            fallback: GameRng::new(0).for_context("scripted"),
        }
    }

    /// Replay the given pairs in order.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self::new(pairs.into_iter().flat_map(|(a, b)| [a, b]))
    }

    /// Faces not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceRoller for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }
}
