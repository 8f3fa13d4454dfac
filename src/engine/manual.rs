//! Manual cash adjustments.
//!
//! Table-administration moves that bypass the queue. None of them can
//! bankrupt a seat.

use super::Engine;
use crate::core::{money, Command, PlayerId};
use crate::error::CommandError;

impl Engine {
    fn require_funds(&self, player: PlayerId, amount: i64) -> Result<(), CommandError> {
        if amount <= 0 {
            return Err(CommandError::InvalidAmount);
        }
        let available = self.state.player(player).cash;
        if available < amount {
            return Err(CommandError::InsufficientCash {
                needed: amount,
                available,
            });
        }
        Ok(())
    }

    /// Hand cash to the other seat.
    pub fn give_cash(&mut self, from: PlayerId, amount: i64) -> Result<(), CommandError> {
        self.run(Command::GiveCash { from, amount }, |engine| {
            engine.require_funds(from, amount)?;
            let to = from.other();
            engine.state.player_mut(from).cash -= amount;
            engine.state.player_mut(to).cash += amount;
            let message = format!(
                "{} gave {} to {}.",
                engine.state.player(from).name,
                money(amount),
                engine.state.player(to).name
            );
            engine.state.log(message);
            Ok(())
        })
    }

    /// Pay cash to the bank.
    pub fn pay_bank(&mut self, player: PlayerId, amount: i64) -> Result<(), CommandError> {
        self.run(Command::PayBank { player, amount }, |engine| {
            engine.require_funds(player, amount)?;
            let record = engine.state.player_mut(player);
            record.cash -= amount;
            let message = format!("{} paid {} to Bank.", record.name, money(amount));
            engine.state.log(message);
            Ok(())
        })
    }

    /// Take cash from the bank.
    pub fn collect_from_bank(&mut self, player: PlayerId, amount: i64) -> Result<(), CommandError> {
        self.run(Command::CollectFromBank { player, amount }, |engine| {
            if amount <= 0 {
                return Err(CommandError::InvalidAmount);
            }
            let record = engine.state.player_mut(player);
            record.cash += amount;
            let message = format!("{} collected {} from Bank.", record.name, money(amount));
            engine.state.log(message);
            Ok(())
        })
    }
}
