use crate::card::Card;
use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round};

/// The dealer draws while below this score and stands at or above it,
/// hard or soft.
const DEALER_STAND_SCORE: u8 = 17;

/// One step of the dealer's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card and may draw again.
    Drew(Card),
    /// The dealer is done and the round is resolved.
    Finished(RoundResult),
}

impl Round {
    /// Reveals the hole card and enters the dealer's turn.
    ///
    /// This is the first half of [`Round::player_stand`], split out for
    /// callers that animate dealer draws one at a time with
    /// [`Round::dealer_draw_step`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPhase`] if it is not the player's turn.
    pub fn begin_dealer_turn(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        self.dealer.reveal_hole();
        self.phase = Phase::DealerTurn;

        log::debug!("player stands: dealer reveals {}", self.dealer.score());

        Ok(())
    }

    /// Performs one step of the dealer's turn.
    ///
    /// The dealer draws one card while below 17. Once at 17 or higher the
    /// round resolves and the result is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw.
    pub fn dealer_draw_step(&mut self) -> Result<DealerStep, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidPhase);
        }

        if self.dealer.score() < DEALER_STAND_SCORE {
            let card = self.deck.draw().map_err(|_| ActionError::DeckExhausted)?;
            self.dealer.add_card(card);

            log::debug!(
                "dealer draws: {} (score {})",
                card.texture_id(),
                self.dealer.score()
            );

            return Ok(DealerStep::Drew(card));
        }

        Ok(DealerStep::Finished(self.resolve()))
    }

    /// Resolves the round by comparing final scores.
    ///
    /// Only reached once the dealer has finished drawing; a player bust
    /// never gets here because [`Round::player_hit`] resolves it eagerly.
    fn resolve(&mut self) -> RoundResult {
        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        let outcome = if dealer_score > 21 {
            Outcome::PlayerWins
        } else if player_score > dealer_score {
            Outcome::PlayerWins
        } else if dealer_score > player_score {
            Outcome::DealerWins
        } else {
            Outcome::Push
        };

        self.finish(outcome);

        RoundResult {
            outcome,
            player_score,
            dealer_score,
        }
    }

    /// Resolves an immediate dealer win on a player bust. The hole card
    /// stays hidden.
    pub(super) fn resolve_player_bust(&mut self) {
        self.finish(Outcome::DealerWins);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Resolved;
        self.outcome = Some(outcome);

        log::debug!("round resolved: {outcome:?}");
    }
}
