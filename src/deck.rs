//! A single 52-card deck that reshuffles itself when exhausted.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A shuffled deck of cards.
///
/// The top of the deck is the end of the internal vector, so drawing is a
/// `pop`. An empty deck is replaced by a fresh shuffled one on the next draw,
/// which makes [`Deck::draw`] infallible.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    regenerations: usize,
}

impl Deck {
    /// Creates a full shuffled deck using the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(7);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Self::fresh_cards(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            regenerations: 0,
        };
        deck.shuffle();
        deck
    }

    /// Creates a deck whose next draws are exactly `draws`, in order.
    ///
    /// Once those cards are used up the deck regenerates like any other.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
            regenerations: 0,
        }
    }

    /// Returns all 52 cards in generation order (suit-major), unshuffled.
    #[must_use]
    pub fn fresh_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Shuffles the remaining cards uniformly.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws the top card.
    ///
    /// If the deck is empty it is first replaced by a fresh shuffled deck.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                log::trace!("drew {card}, {} left", self.cards.len());
                return card;
            }
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        self.cards = Self::fresh_cards();
        self.shuffle();
        self.regenerations += 1;
        log::debug!("deck exhausted, regenerated ({} times)", self.regenerations);
    }

    /// Returns the number of cards left before the next regeneration.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the deck has been regenerated after running out.
    #[must_use]
    pub const fn regenerations(&self) -> usize {
        self.regenerations
    }
}
