//! Cash primitives and bankruptcy.
//!
//! Every debit that can push a seat below zero runs the bankruptcy check.
//! Bankruptcy is terminal: the other seat wins and nothing is liquidated.

use serde::{Deserialize, Serialize};

use crate::core::{money, GameState, PlayerId};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub bankrupt: PlayerId,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

fn with_reason(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(" ({})", reason)
    }
}

impl GameState {
    /// Debit a seat to the bank. Cash may go negative.
    pub fn pay(&mut self, player: PlayerId, amount: i64, reason: &str) {
        let record = self.player_mut(player);
        record.cash -= amount;
        let message = format!("{} paid {}{}.", record.name, money(amount), with_reason(reason));
        self.log(message);
        self.check_bankruptcy(player);
    }

    /// Credit a seat from the bank.
    pub fn receive(&mut self, player: PlayerId, amount: i64, reason: &str) {
        let record = self.player_mut(player);
        record.cash += amount;
        let message = format!("{} received {}{}.", record.name, money(amount), with_reason(reason));
        self.log(message);
    }

    /// Move cash between seats. Only the payer is checked for bankruptcy.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: i64, reason: &str) {
        self.player_mut(from).cash -= amount;
        self.player_mut(to).cash += amount;
        let message = format!(
            "{} paid {} {}{}.",
            self.player(from).name,
            self.player(to).name,
            money(amount),
            with_reason(reason)
        );
        self.log(message);
        self.check_bankruptcy(from);
    }

    /// Grow the Deep Space Station cache.
    pub fn add_to_pot(&mut self, amount: i64) {
        self.pot += amount;
        let message = format!(
            "{} added to Deep Space Station cache → now {}.",
            money(amount),
            money(self.pot)
        );
        self.log(message);
    }

    /// End the game if `player` is below zero.
    ///
    /// Returns true only on the call that declared bankruptcy.
    pub fn check_bankruptcy(&mut self, player: PlayerId) -> bool {
        if self.outcome.is_some() || self.player(player).cash >= 0 {
            return false;
        }
        let winner = player.other();
        self.outcome = Some(GameResult {
            winner,
            bankrupt: player,
        });
        let message = format!(
            "{} is bankrupt. {} wins!",
            self.player(player).name,
            self.player(winner).name
        );
        self.log(message);
        true
    }
}
