//! Card decks.
//!
//! - `Card`: display text plus a `CardAction`
//! - `CardDeck`: a fixed-size ring; drawing cycles the front card to the back
//! - `data`: the built-in Nav Alert and Mission Control decks
//!
//! Decks are shuffled once per new game. Interpreting a drawn card is the
//! engine's job; a deck only hands cards out in ring order.

mod card;
mod deck;
pub mod data;

pub use card::{Card, CardAction, DeckId};
pub use deck::CardDeck;
