use crate::card::Card;
use crate::error::ActionError;
use crate::result::RoundResult;

use super::{DealerStep, Phase, Round};

impl Round {
    /// Player action: hit (draw one card into the player's hand).
    ///
    /// On a bust the round resolves immediately to a dealer win and the
    /// dealer does not play; the hole card stays hidden. Otherwise the
    /// phase remains [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is
    /// empty. A failed hit leaves the round unchanged.
    pub fn player_hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        let card = self.deck.draw().map_err(|_| ActionError::DeckExhausted)?;
        self.player.add_card(card);

        log::debug!(
            "player hits: {} (score {})",
            card.texture_id(),
            self.player.score()
        );

        if self.player.is_bust() {
            self.resolve_player_bust();
        }

        Ok(card)
    }

    /// Player action: stand.
    ///
    /// Reveals the dealer's hole card and plays the dealer's hand out to
    /// resolution. Callers that want to animate each dealer draw should use
    /// [`Round::begin_dealer_turn`] and [`Round::dealer_draw_step`] instead;
    /// this method is exactly that pair run to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// while the dealer must draw.
    pub fn player_stand(&mut self) -> Result<RoundResult, ActionError> {
        self.begin_dealer_turn()?;

        loop {
            match self.dealer_draw_step()? {
                DealerStep::Drew(_) => {}
                DealerStep::Finished(result) => return Ok(result),
            }
        }
    }
}
