//! Rolling, deep space (jail), and the end of a turn.

use super::events::RollOutcome;
use super::Engine;
use crate::core::{Command, PlayerId};
use crate::error::CommandError;

impl Engine {
    /// Roll for `player` and start the resulting move.
    ///
    /// ## Rules
    ///
    /// - Rejected while any token is moving or `player` has queued actions
    /// - Stranded: doubles release and move; otherwise count the attempt,
    ///   and on the last allowed attempt pay bail, release and move
    /// - Free: the third doubles in a row goes straight to deep space
    ///   without moving; a non-double resets the doubles count
    ///
    /// Doubles never grant an extra roll.
    pub fn roll_for_player(&mut self, player: PlayerId) -> Result<RollOutcome, CommandError> {
        self.run(Command::Roll { player }, |engine| {
            engine.require_no_movement()?;
            if !engine.state.queue(player).is_empty() {
                return Err(CommandError::ActionsPending(player));
            }

            engine.state.current_player = player;
            let dice = engine.dice.roll_pair();
            let name = engine.state.player(player).name.clone();
            engine.state.log(format!("{} rolled {}.", name, dice));

            if engine.state.player(player).in_jail {
                if dice.is_doubles() {
                    let record = engine.state.player_mut(player);
                    record.release();
                    record.consecutive_doubles = 0;
                    engine
                        .state
                        .log(format!("{} rolled doubles and returns from Deep Space.", name));
                } else {
                    let record = engine.state.player_mut(player);
                    record.jail_attempts += 1;
                    let attempts = record.jail_attempts;
                    let limit = engine.config.max_jail_attempts;
                    engine.state.log(format!(
                        "{} did not roll doubles ({}/{}).",
                        name, attempts, limit
                    ));
                    if attempts < limit {
                        return Ok(RollOutcome::StayedInJail { dice, attempts });
                    }
                    engine
                        .state
                        .pay(player, engine.config.bail, "rescue fee after 3rd try");
                    engine.state.player_mut(player).release();
                }
                engine.move_by(player, dice.total());
                return Ok(RollOutcome::Moved { dice });
            }

            let record = engine.state.player_mut(player);
            if dice.is_doubles() {
                record.consecutive_doubles += 1;
                if record.consecutive_doubles >= engine.config.doubles_limit {
                    engine
                        .state
                        .log(format!("{} rolled three doubles → Lost in Space.", name));
                    engine.send_to_jail(player);
                    return Ok(RollOutcome::SentToJail { dice });
                }
            } else {
                record.consecutive_doubles = 0;
            }
            engine.move_by(player, dice.total());
            Ok(RollOutcome::Moved { dice })
        })
    }

    /// Strand `player` in deep space.
    pub(crate) fn send_to_jail(&mut self, player: PlayerId) {
        let jail = self.config.jail_tile;
        let record = self.state.player_mut(player);
        record.position = jail;
        record.in_jail = true;
        record.jail_attempts = 0;
        record.consecutive_doubles = 0;
        let message = format!("{} is now Lost in Deep Space.", record.name);
        self.state.log(message);
    }

    /// Pay the rescue fee to leave deep space.
    pub fn pay_bail(&mut self, player: PlayerId) -> Result<(), CommandError> {
        self.run(Command::PayBail { player }, |engine| {
            let record = engine.state.player(player);
            if !record.in_jail {
                return Err(CommandError::NotInJail(player));
            }
            let bail = engine.config.bail;
            if record.cash < bail {
                return Err(CommandError::InsufficientCash {
                    needed: bail,
                    available: record.cash,
                });
            }
            engine.state.pay(player, bail, "rescue fee");
            engine.state.player_mut(player).release();
            Ok(())
        })
    }

    /// Spend a rescue beacon to leave deep space.
    pub fn use_rescue_card(&mut self, player: PlayerId) -> Result<(), CommandError> {
        self.run(Command::UseRescueCard { player }, |engine| {
            let record = engine.state.player(player);
            if !record.in_jail {
                return Err(CommandError::NotInJail(player));
            }
            if record.rescue_cards == 0 {
                return Err(CommandError::NoRescueCard(player));
            }
            let record = engine.state.player_mut(player);
            record.rescue_cards -= 1;
            record.release();
            let message = format!("{} used a Rescue Beacon.", record.name);
            engine.state.log(message);
            Ok(())
        })
    }

    /// Close the turn: any unbought offer lapses.
    pub fn end_turn(&mut self) -> Result<(), CommandError> {
        self.run(Command::EndTurn, |engine| {
            engine.state.pending_purchase = None;
            engine.state.log("Turn ended (manual mode).");
            Ok(())
        })
    }
}
