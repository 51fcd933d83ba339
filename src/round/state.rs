//! Round phase types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round has been started yet.
    Idle,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is available.
    Resolved,
}
