use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::participant::Seat;

use super::{Round, RoundState};

impl Round<'_> {
    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        self.expect_state(RoundState::PlayerTurn)?;

        let card = self.draw()?;
        self.player.take(card);

        let value = self.player.hand_value();
        tracing::debug!(target: "round", %card, value, "player hits");

        if self.player.is_bust() {
            self.transition(RoundState::HouseTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.expect_state(RoundState::PlayerTurn)?;

        tracing::debug!(target: "round", value = self.player.hand_value(), "player stands");
        self.transition(RoundState::HouseTurn);

        Ok(())
    }

    /// House plays its hand.
    ///
    /// The house draws while its value is below its stand value. If the
    /// player has busted the house keeps the hand it was dealt.
    ///
    /// Returns the cards drawn by the house.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the house-turn state or the
    /// deck runs out.
    pub fn house_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.expect_state(RoundState::HouseTurn)?;

        let mut drawn_cards = Vec::new();

        while self.house.must_draw() && !self.player.is_bust() {
            let card = self.draw()?;
            self.house.take(card);
            drawn_cards.push(card);
        }

        tracing::debug!(
            target: "round",
            drawn = drawn_cards.len(),
            value = self.house.hand_value(),
            "house done"
        );
        self.transition(RoundState::Resolution);

        Ok(drawn_cards)
    }
}
