//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The game is played by exactly two seats,
//! `PlayerId(0)` and `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a `Vec` for O(1) access, indexable by `PlayerId`.
//!
//! ## PlayerRecord
//!
//! The mutable financial and positional data of one seat.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::board::TileId;

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    ///
    /// ```
    /// use spaceopoly::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).other(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).other(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Check that this ID names a seat at the table.
    #[must_use]
    pub const fn is_seated(self) -> bool {
        (self.0 as usize) < SEAT_COUNT
    }

    /// Iterate over both seats.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use spaceopoly::core::{PlayerId, PlayerMap};
///
/// let mut cash: PlayerMap<i64> = PlayerMap::with_value(1500);
/// cash[PlayerId::new(1)] -= 200;
///
/// assert_eq!(cash[PlayerId::new(0)], 1500);
/// assert_eq!(cash[PlayerId::new(1)], 1300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all().map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data. Panics if the seat is not at the table.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Financial and positional data for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Display name.
    pub name: String,

    /// Cash on hand. Goes negative only on the way to bankruptcy.
    pub cash: i64,

    /// Current tile.
    pub position: TileId,

    /// Stranded in deep space.
    pub in_jail: bool,

    /// Failed doubles attempts while jailed (0-3).
    pub jail_attempts: u8,

    /// Doubles rolled in a row (0-3).
    pub consecutive_doubles: u8,

    /// Tiles this seat owns.
    pub owned_tiles: OrdSet<TileId>,

    /// Rescue beacons held.
    pub rescue_cards: u32,
}

impl PlayerRecord {
    /// Create a fresh record standing on Launch.
    pub fn new(name: impl Into<String>, starting_cash: i64) -> Self {
        Self {
            name: name.into(),
            cash: starting_cash,
            position: TileId::LAUNCH,
            in_jail: false,
            jail_attempts: 0,
            consecutive_doubles: 0,
            owned_tiles: OrdSet::new(),
            rescue_cards: 0,
        }
    }

    /// Release from jail, clearing the attempt counter.
    pub fn release(&mut self) {
        self.in_jail = false;
        self.jail_attempts = 0;
    }

    /// Check if this seat owns a tile.
    #[must_use]
    pub fn owns(&self, tile: TileId) -> bool {
        self.owned_tiles.contains(&tile)
    }
}
