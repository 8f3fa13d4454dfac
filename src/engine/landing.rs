//! Landing dispatch.
//!
//! Landing never moves cash. It either opens a purchase offer, logs, or
//! queues an effect for the lander to confirm.

use std::sync::Arc;

use super::events::EngineEvent;
use super::Engine;
use crate::board::{TileFeature, TileId, TileKind};
use crate::cards::DeckId;
use crate::core::{money, PlayerId};
use crate::queue::Effect;

impl Engine {
    /// Resolve the tile `player` stands on and notify subscribers.
    pub(crate) fn land(&mut self, player: PlayerId) {
        let tile = self.state.player(player).position;
        self.resolve_landing(player, tile);
        self.emit(EngineEvent::Landed { player, tile });
    }

    fn resolve_landing(&mut self, player: PlayerId, tile: TileId) {
        let catalog = Arc::clone(&self.catalog);
        let found = catalog.tile(tile);
        self.state.pending_purchase = None;

        let queue = &mut self.state.queues[player];
        match &found.feature {
            TileFeature::Launch | TileFeature::DeepSpace => {}
            TileFeature::DeepSpaceStation => {
                if self.state.pot > 0 {
                    queue.enqueue_effect(Effect::CollectPot {
                        amount: self.state.pot,
                    });
                }
            }
            TileFeature::LostInSpace => queue.enqueue_effect(Effect::GoToJail),
            TileFeature::Tax { cost } => queue.enqueue(
                format!("Pay {}", money(*cost)),
                Effect::pay_to_pot(*cost, found.name.clone()),
            ),
            TileFeature::MissionControl => queue.enqueue_effect(Effect::DrawCard {
                deck: DeckId::MissionControl,
            }),
            TileFeature::NavAlert => queue.enqueue_effect(Effect::DrawCard {
                deck: DeckId::NavAlert,
            }),
            TileFeature::Property(_) | TileFeature::Spaceport(_) | TileFeature::Utility(_) => {
                self.land_on_ownable(player, tile);
            }
        }
    }

    /// Offer, ignore, or charge, depending on who owns the tile.
    fn land_on_ownable(&mut self, player: PlayerId, tile: TileId) {
        let catalog = Arc::clone(&self.catalog);
        let found = catalog.tile(tile);
        let kind = found.kind();

        let Some(owner) = self.state.ledger.owner(tile) else {
            self.state.pending_purchase = Some(tile);
            let message = format!(
                "{} may buy {} for {}.",
                self.state.player(player).name,
                found.name,
                money(found.purchase_price().unwrap_or_default())
            );
            self.state.log(message);
            return;
        };

        if owner == player {
            self.state.log(match kind {
                TileKind::Spaceport => "Your own spaceport.",
                TileKind::Utility => "Your own service.",
                _ => "Your own site.",
            });
            return;
        }
        if self.state.ledger.is_mortgaged(tile) {
            self.state.log(match kind {
                TileKind::Spaceport => "Spaceport is decommissioned — no fee.",
                TileKind::Utility => "Service is decommissioned — no fee.",
                _ => "Site is decommissioned — no rent.",
            });
            return;
        }

        let queue = &mut self.state.queues[player];
        match (kind, self.state.ledger.rent(&catalog, tile, owner)) {
            (TileKind::Spaceport, Some(fee)) => queue.enqueue(
                format!("Pay spaceport fee, {}", money(fee)),
                Effect::pay_rent(owner, fee, "spaceport fee"),
            ),
            (TileKind::Property, Some(rent)) => {
                queue.enqueue_effect(Effect::pay_rent(owner, rent, "rent"));
            }
            _ => queue.enqueue_effect(Effect::UtilityFee { owner }),
        }
    }
}
