use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::options::DealerRule;
use crate::result::{RoundResult, resolve_round};

use super::{Game, GameState};

impl Game {
    /// Whether the dealer takes another card given the current hands.
    fn dealer_should_draw(&self) -> bool {
        let player_value = self.player_hand.score();
        if player_value > 21 {
            return false;
        }

        let value = self.dealer_hand.score();

        match self.options.dealer_rule {
            DealerRule::Standard => {
                if value > 17 {
                    return false;
                }
                if value == 17 {
                    return self.dealer_hand.is_soft() && !self.options.stand_on_soft_17;
                }
                true
            }
            DealerRule::StopWhenAhead => 21 > player_value && player_value > value && value < 17,
        }
    }

    /// Dealer plays their hand according to the configured rule.
    ///
    /// The dealer reveals their hole card and draws while
    /// [`GameOptions::dealer_rule`](crate::GameOptions::dealer_rule) says so.
    /// Nothing is drawn against a busted player.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer_hand.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_should_draw() {
            let card = self.draw();
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }

        self.set_state(GameState::RoundOver);

        Ok(drawn_cards)
    }

    /// Settles the round and records it in the tally.
    ///
    /// The game returns to [`GameState::WaitingForDeal`]; both hands stay
    /// readable until the next deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state, including a
    /// second call for a round that was already settled.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let outcome = resolve_round(
            &self.player_hand,
            self.dealer_hand.hand(),
            &mut self.tally,
        );

        let result = RoundResult {
            outcome,
            player_score: self.player_hand.score(),
            dealer_score: self.dealer_hand.score(),
            tally: self.tally,
        };
        self.last_result = Some(result);
        self.set_state(GameState::WaitingForDeal);

        Ok(result)
    }
}
