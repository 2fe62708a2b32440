//! Game state types.

/// Stage of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No round in progress; the next call should be a deal.
    #[default]
    WaitingForDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Both hands are final and the round can be settled.
    RoundOver,
}
