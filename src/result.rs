//! Round outcomes, the running tally, and round resolution.

use crate::hand::Hand;

/// Outcome of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21.
    Bust,
    /// Player has 21 and the dealer does not.
    Blackjack,
    /// Dealer went over 21.
    DealerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Dealer has the higher total.
    DealerWins,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Classifies final scores.
    ///
    /// Rules are checked in order and the first match wins, so a busted
    /// player loses even when the dealer busts too.
    #[must_use]
    pub const fn classify(player_score: u32, dealer_score: u32) -> Self {
        if player_score > 21 {
            Self::Bust
        } else if player_score == 21 && dealer_score != 21 {
            Self::Blackjack
        } else if dealer_score > 21 {
            Self::DealerBust
        } else if player_score > dealer_score {
            Self::PlayerWins
        } else if player_score < dealer_score {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Returns whether the outcome counts as a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::DealerBust | Self::PlayerWins)
    }

    /// Returns whether the outcome counts as a loss.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::Bust | Self::DealerWins)
    }

    /// Returns whether the outcome is a push.
    #[must_use]
    pub const fn is_push(self) -> bool {
        matches!(self, Self::Push)
    }
}

/// Wins, losses and draws across the rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: u32,
    losses: u32,
    draws: u32,
}

impl Tally {
    /// Creates an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wins: 0,
            losses: 0,
            draws: 0,
        }
    }

    /// Records one finished round.
    pub const fn record(&mut self, outcome: Outcome) {
        if outcome.is_win() {
            self.wins = self.wins.saturating_add(1);
        } else if outcome.is_loss() {
            self.losses = self.losses.saturating_add(1);
        } else {
            self.draws = self.draws.saturating_add(1);
        }
    }

    /// Rounds won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    /// Rounds pushed.
    #[must_use]
    pub const fn draws(&self) -> u32 {
        self.draws
    }

    /// Total recorded rounds.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.draws)
    }
}

/// Resolves a finished round and records it in `tally`.
///
/// Exactly one counter of `tally` is incremented per call. Calling this twice
/// for the same round counts it twice; [`crate::Game::showdown`] only calls it
/// once per round.
///
/// ```
/// use blackjack_table::{Card, Hand, Outcome, Rank, Suit, Tally, resolve_round};
///
/// let player: Hand = [Card::new(Rank::King, Suit::Hearts), Card::new(Rank::Ten, Suit::Clubs)]
///     .into_iter()
///     .collect();
/// let dealer: Hand = [Card::new(Rank::Nine, Suit::Spades), Card::new(Rank::Nine, Suit::Hearts)]
///     .into_iter()
///     .collect();
///
/// let mut tally = Tally::new();
/// assert_eq!(resolve_round(&player, &dealer, &mut tally), Outcome::PlayerWins);
/// assert_eq!(tally.wins(), 1);
/// ```
pub fn resolve_round(player: &Hand, dealer: &Hand, tally: &mut Tally) -> Outcome {
    let player_score = player.score();
    let dealer_score = dealer.score();
    let outcome = Outcome::classify(player_score, dealer_score);
    tally.record(outcome);

    log::info!(
        "round resolved: player {player_score}, dealer {dealer_score} -> {outcome:?} \
         (W {} / L {} / D {})",
        tally.wins,
        tally.losses,
        tally.draws
    );

    outcome
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u32,
    /// The dealer's final score.
    pub dealer_score: u32,
    /// The tally after this round was recorded.
    pub tally: Tally,
}
