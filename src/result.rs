//! Round outcome types.

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or the player has the higher score).
    PlayerWins,
    /// Dealer wins (player busts or the dealer has the higher score).
    DealerWins,
    /// Push (tie).
    Push,
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}
