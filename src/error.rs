//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Draw attempted on an empty deck.
    #[error("draw attempted on an empty deck")]
    Exhausted,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// The deck cannot cover the initial deal.
    #[error("the deck cannot cover the initial deal")]
    DeckExhausted,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase.
    #[error("action is not legal in the current phase")]
    InvalidPhase,
    /// The deck ran out of cards.
    #[error("the deck ran out of cards")]
    DeckExhausted,
}
