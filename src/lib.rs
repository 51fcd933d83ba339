//! A blackjack round engine for driving table front-ends, with optional
//! `no_std` support.
//!
//! The crate provides a [`Round`] type that owns the deck and both hands
//! and sequences one round of play: dealing, player actions, dealer play,
//! and outcome resolution. Presentation layers (a 3D scene, a text harness)
//! drive it through its commands and query state back after each call; they
//! never decide game outcomes.
//!
//! # Example
//!
//! ```
//! use twentyone::{Phase, Round};
//!
//! let mut round = Round::new(42);
//! round.start()?;
//! assert_eq!(round.phase(), Phase::PlayerTurn);
//!
//! let result = round.player_stand()?;
//! println!("{:?}", result.outcome);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, StartError};
pub use hand::{DealerHand, Hand};
pub use result::{Outcome, RoundResult};
pub use round::{DealerStep, Phase, Round};
