//! Round state machine and queries.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::StartError;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use dealer::DealerStep;
pub use state::Phase;

/// Cards dealt before the player's turn: two per side.
const INITIAL_DEAL: usize = 4;

/// A single-player blackjack round engine.
///
/// The round owns the deck and both hands and is their sole mutator.
/// Presentation layers drive it with [`Round::start`], [`Round::player_hit`],
/// and [`Round::player_stand`] (or the step-wise dealer primitives) and read
/// state back through the query methods after each call.
pub struct Round {
    /// Cards remaining this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Current phase.
    phase: Phase,
    /// Terminal outcome, set on resolution.
    outcome: Option<Outcome>,
    /// Random number generator used to shuffle fresh decks.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new round engine with the given seed.
    ///
    /// The seed fixes the shuffle sequence, so an entire session is
    /// reproducible from it.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Phase, Round};
    ///
    /// let mut round = Round::new(42);
    /// assert_eq!(round.phase(), Phase::Idle);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Deck::standard(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: Phase::Idle,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new round with a freshly shuffled deck.
    ///
    /// Clears both hands, shuffles a full deck, and deals two cards to each
    /// side, dealer first, alternating. The dealer's first card is the up
    /// card; the second stays hidden until the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::RoundInProgress`] if a round is being played.
    pub fn start(&mut self) -> Result<(), StartError> {
        // Checked here as well so a rejected start does not advance the rng.
        self.ensure_can_start()?;

        let deck = Deck::shuffled(&mut self.rng);
        self.start_with(deck)
    }

    /// Starts a new round from a prepared deck, without shuffling.
    ///
    /// Cards are dealt from the end of the deck's sequence. Useful for
    /// deterministic replays.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::RoundInProgress`] if a round is being played,
    /// or [`StartError::DeckExhausted`] if the deck cannot cover the
    /// initial deal (in which case the round is left untouched).
    pub fn start_with(&mut self, deck: Deck) -> Result<(), StartError> {
        self.ensure_can_start()?;

        if deck.len() < INITIAL_DEAL {
            return Err(StartError::DeckExhausted);
        }

        self.phase = Phase::Dealing;
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;

        // Dealer first, alternating. The dealer's first card is the up card.
        for _ in 0..2 {
            let card = self.deck.draw().map_err(|_| StartError::DeckExhausted)?;
            self.dealer.add_card(card);
            let card = self.deck.draw().map_err(|_| StartError::DeckExhausted)?;
            self.player.add_card(card);
        }

        log::debug!(
            "round started: dealer shows {}, player has {}",
            self.dealer.visible_score(),
            self.player.score()
        );

        self.phase = Phase::PlayerTurn;

        Ok(())
    }

    fn ensure_can_start(&self) -> Result<(), StartError> {
        match self.phase {
            Phase::Idle | Phase::Resolved => Ok(()),
            Phase::Dealing | Phase::PlayerTurn | Phase::DealerTurn => {
                Err(StartError::RoundInProgress)
            }
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the dealer's score under the visibility rule: the up card's
    /// base value alone until the hole card is revealed, the full hand
    /// afterwards.
    #[must_use]
    pub fn dealer_visible_score(&self) -> u8 {
        self.dealer.visible_score()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
