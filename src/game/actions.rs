use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::hand::{DealerHand, Hand};

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Starts a round with fresh hands and deals two cards to each side.
    ///
    /// Cards go player, dealer, player, dealer. A player natural ends the
    /// round at once: the hole card is revealed and the game moves straight
    /// to [`GameState::RoundOver`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::WaitingForDeal {
            return Err(DealError::InvalidState);
        }

        self.player_hand = Hand::new();
        self.dealer_hand = DealerHand::new();

        for _ in 0..2 {
            let card = self.draw();
            self.player_hand.add_card(card);
            let card = self.draw();
            self.dealer_hand.add_card(card);
        }

        if self.player_hand.is_natural() {
            self.dealer_hand.reveal_hole();
            self.set_state(GameState::RoundOver);
        } else {
            self.set_state(GameState::PlayerTurn);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting or reaching 21 ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.player_hand.add_card(card);

        if self.player_hand.score() >= 21 {
            self.set_state(GameState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.set_state(GameState::DealerTurn);
        Ok(())
    }
}
