//! Game engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{RoundResult, Tally};

mod actions;
mod dealer;
pub mod state;

pub use state::GameState;

/// A single-player blackjack session.
///
/// The game owns the deck, both hands and the win/loss tally. A round runs
/// [`Game::deal`], then [`Game::hit`]/[`Game::stand`], [`Game::dealer_play`]
/// and finally [`Game::showdown`], which records the round exactly once.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    /// Game options.
    pub options: GameOptions,
    state: GameState,
    player_hand: Hand,
    dealer_hand: DealerHand,
    tally: Tally,
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForDeal);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates a new game that draws from the given deck.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: GameState::WaitingForDeal,
            player_hand: Hand::new(),
            dealer_hand: DealerHand::new(),
            tally: Tally::new(),
            last_result: None,
        }
    }

    /// Draws a card from the deck.
    fn draw(&mut self) -> Card {
        self.deck.draw()
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("{:?} -> {state:?}", self.state);
        self.state = state;
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand for the current or last round.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand for the current or last round.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the session tally.
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    /// Returns the result of the most recently settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }
}
