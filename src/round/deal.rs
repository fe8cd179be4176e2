use crate::error::RoundError;
use crate::participant::Seat;

use super::{Round, RoundState};

impl Round<'_> {
    /// Places the player's bet.
    ///
    /// The bet is recorded but not taken from the credits; settlement applies
    /// the whole credit change.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting state or the bet is
    /// outside `1..=credits`.
    pub fn place_bet(&mut self, bet: usize) -> Result<(), RoundError> {
        self.expect_state(RoundState::Betting)?;

        let credits = self.player.credits();
        if bet == 0 || bet > credits {
            tracing::error!(target: "round", bet, credits, "bet outside the allowed range");
            self.state = RoundState::Aborted;
            return Err(RoundError::InvalidBet { bet, credits });
        }

        self.player.set_bet(bet);
        tracing::debug!(target: "round", player = self.player.name(), bet, credits, "bet placed");
        self.transition(RoundState::InitialDeal);

        Ok(())
    }

    /// Deals two cards each, alternating player, house, player, house.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the initial-deal state or the
    /// deck runs out.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        self.expect_state(RoundState::InitialDeal)?;

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.take(card);

            let card = self.draw()?;
            self.house.take(card);
        }

        tracing::debug!(
            target: "round",
            player_value = self.player.hand_value(),
            house_value = self.house.hand_value(),
            "initial cards dealt"
        );
        self.transition(RoundState::PlayerTurn);

        Ok(())
    }
}
