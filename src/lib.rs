//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides the card model ([`Card`], [`Deck`], [`Hand`]), round
//! resolution ([`resolve_round`], [`Tally`]) and a [`Game`] session that
//! drives the deal, player turn, dealer turn and showdown.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal().unwrap();
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//!     game.dealer_play().unwrap();
//! }
//! let result = game.showdown().unwrap();
//! assert_eq!(result.tally.rounds(), 1);
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
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, ShowdownError};
pub use game::{Game, GameState};
pub use hand::{DealerHand, Hand};
pub use options::{DealerRule, GameOptions};
pub use result::{Outcome, RoundResult, Tally, resolve_round};
