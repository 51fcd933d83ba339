//! Deck construction, shuffling, and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards.
///
/// Cards are drawn from the end of the sequence, so the last element is the
/// next card dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, bottom first.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the 52 canonical cards in suit-major, rank-minor order.
    ///
    /// This pre-shuffle order is deterministic and reproducible.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a standard deck already shuffled with the given generator.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The last element is the first card dealt. Useful for deterministic
    /// replays together with [`crate::Round::start_with`].
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place with a Fisher-Yates pass, so every
    /// permutation is equally likely given an unbiased generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
