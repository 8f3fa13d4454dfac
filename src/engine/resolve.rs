//! Running queued effects, and what drawn cards do.

use std::sync::Arc;

use super::Engine;
use crate::cards::{CardAction, DeckId};
use crate::core::{money, Command, PlayerId};
use crate::error::CommandError;
use crate::queue::{Effect, QueuedAction};

impl Engine {
    /// Run the front entry of `player`'s queue. Exactly one entry runs per
    /// call. Returns the entry that ran.
    pub fn confirm_next_action(&mut self, player: PlayerId) -> Result<QueuedAction, CommandError> {
        self.run(Command::ConfirmNextAction { player }, |engine| {
            engine.require_no_movement()?;
            let action = engine.state.queues[player]
                .pop_next()
                .ok_or(CommandError::NothingQueued(player))?;
            engine.execute(player, &action.effect);
            Ok(action)
        })
    }

    fn execute(&mut self, player: PlayerId, effect: &Effect) {
        match effect {
            Effect::Receive { amount, reason } => self.state.receive(player, *amount, reason),
            Effect::Pay {
                amount,
                reason,
                to_pot,
            } => {
                self.state.pay(player, *amount, reason);
                if *to_pot {
                    self.state.add_to_pot(*amount);
                }
            }
            Effect::PayRent {
                owner,
                amount,
                reason,
            } => self.state.transfer(player, *owner, *amount, reason),
            Effect::UtilityFee { owner } => {
                let dice = self.dice.roll_pair();
                let multiplier =
                    self.state
                        .ledger
                        .utility_multiplier(&self.catalog, &self.config, *owner);
                let fee = i64::from(dice.total()) * multiplier;
                self.state.transfer(player, *owner, fee, "service fee");
                self.state.log(format!(
                    "Service fee: rolled {} × {} = {}.",
                    dice,
                    multiplier,
                    money(fee)
                ));
            }
            Effect::CollectPot { amount } => {
                self.state.receive(player, *amount, "Deep Space Station cache");
                self.state.pot = self.config.pot_reset;
                self.state.log(format!(
                    "Deep Space Station cache collected. Pot resets to {}.",
                    money(self.config.pot_reset)
                ));
            }
            Effect::GoToJail => self.send_to_jail(player),
            Effect::DrawCard { deck } => self.draw_card(player, *deck),
            Effect::AdvanceTo { tile } => {
                self.state.player_mut(player).position = *tile;
                self.land(player);
            }
        }
    }

    /// Draw the front card of `deck` and act on it.
    ///
    /// Money and movement cards queue a follow-up entry; a rescue beacon is
    /// kept at once. Cards with no engine behavior only log their text.
    fn draw_card(&mut self, player: PlayerId, deck: DeckId) {
        let Some(card) = self.state.deck_mut(deck).draw() else {
            return;
        };
        self.state.log(format!("Card drawn: {}", card.text));

        let catalog = Arc::clone(&self.catalog);
        let position = self.state.player(player).position;
        let bonus = self.config.pass_launch_bonus;
        let queue = &mut self.state.queues[player];

        match card.action {
            CardAction::Gain { amount } => queue.enqueue_effect(Effect::receive(amount, "Card")),
            CardAction::Pay { amount } => queue.enqueue(
                format!("Pay {}", money(amount)),
                Effect::pay_to_pot(amount, "Card"),
            ),
            CardAction::MoveTo { tile } => {
                // Numeric comparison, not ring distance.
                if tile < position {
                    queue.enqueue_effect(Effect::receive(bonus, "passing Launch"));
                }
                let name = catalog.get(tile).map_or("destination", |t| t.name.as_str());
                queue.enqueue(format!("Advance to {}", name), Effect::AdvanceTo { tile });
            }
            CardAction::GoToJail => {
                queue.enqueue("Go to Deep Space (Lost in Space)", Effect::GoToJail);
            }
            CardAction::GrantRescueCard => {
                let record = self.state.player_mut(player);
                record.rescue_cards += 1;
                let message = format!("{} keeps a Rescue Beacon.", record.name);
                self.state.log(message);
            }
            CardAction::AdvanceToNearestSpaceport
            | CardAction::AdvanceToNearestUtility
            | CardAction::MoveBack { .. }
            | CardAction::AssessedRepairs { .. }
            | CardAction::CollectFromEachPlayer { .. }
            | CardAction::PayEachPlayer { .. } => {}
        }
    }
}
