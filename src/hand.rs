//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut score: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        score = score.saturating_add(card.base_value());
    }

    while score > 21 && aces > 0 {
        score -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && score <= 21;
    (score, is_soft)
}

/// The player's hand.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// The hand enforces no upper bound; bust detection is the round's
    /// responsibility via [`Hand::score`].
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, first dealt first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// Aces are counted as 11 where possible without busting, otherwise as 1.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
///
/// The first dealt card is the up card; the second is the hole card, hidden
/// until [`DealerHand::reveal_hole`] is called.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand, in deal order.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand, first dealt first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card (first dealt card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible score: the up card's base value alone until
    /// the hole card is revealed, the full hand afterwards.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        if self.hole_revealed {
            self.score()
        } else {
            self.cards.first().map_or(0, |card| card.base_value())
        }
    }

    /// Calculates the full score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (score over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand and hides the hole card for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
