//! Cyclic card decks.
//!
//! A deck is a fixed ring with a read cursor. Drawing returns the card under
//! the cursor and advances it, which is the same as moving the front card to
//! the back: after `len()` draws every card has surfaced once, in order, and
//! the deck is back where it started.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::GameRng;

/// A ring of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeck {
    cards: Vec<Card>,
    cursor: usize,
}

impl CardDeck {
    /// Create a deck in the given order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Create a deck from a definition, shuffled once.
    #[must_use]
    pub fn shuffled(definition: &[Card], rng: &mut GameRng) -> Self {
        let mut cards = definition.to_vec();
        rng.shuffle(&mut cards);
        Self::new(cards)
    }

    /// Draw the front card and cycle it to the back.
    ///
    /// Returns `None` only for an empty deck.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor)?.clone();
        self.cursor = (self.cursor + 1) % self.cards.len();
        Some(card)
    }

    /// The card the next draw will return.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Cards in draw order, front first.
    pub fn order(&self) -> impl Iterator<Item = &Card> {
        let (back, front) = self.cards.split_at(self.cursor);
        front.iter().chain(back.iter())
    }

    /// Number of cards in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardAction;

    fn numbered(n: i64) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(format!("card {}", i), CardAction::Gain { amount: i }))
            .collect()
    }

    #[test]
    fn test_draw_cycles_front_to_back() {
        let mut deck = CardDeck::new(numbered(3));

        assert_eq!(deck.draw().unwrap().text, "card 1");
        let order: Vec<_> = deck.order().map(|c| c.text.as_str()).collect();
        assert_eq!(order, vec!["card 2", "card 3", "card 1"]);
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_full_cycle_restores_order() {
        let mut deck = CardDeck::new(numbered(5));
        let before: Vec<Card> = deck.order().cloned().collect();

        let drawn: Vec<Card> = (0..5).map(|_| deck.draw().unwrap()).collect();
        let after: Vec<Card> = deck.order().cloned().collect();

        assert_eq!(drawn, before);
        assert_eq!(after, before);
    }

    #[test]
    fn test_peek_matches_draw() {
        let mut deck = CardDeck::new(numbered(2));
        deck.draw();

        let peeked = deck.peek().cloned();
        assert_eq!(peeked, deck.draw());
    }

    #[test]
    fn test_empty_deck() {
        let mut deck = CardDeck::new(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.order().count(), 0);
    }

    #[test]
    fn test_shuffled_keeps_cards() {
        let definition = numbered(10);
        let mut rng = GameRng::new(42);
        let deck = CardDeck::shuffled(&definition, &mut rng);

        let mut texts: Vec<_> = deck.order().map(|c| c.text.clone()).collect();
        assert_eq!(texts.len(), 10);
        texts.sort();
        let mut expected: Vec<_> = definition.iter().map(|c| c.text.clone()).collect();
        expected.sort();
        assert_eq!(texts, expected);
    }
}
