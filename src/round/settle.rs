use core::cmp::Ordering;

use crate::error::RoundError;
use crate::participant::Seat;
use crate::result::{Outcome, RoundResult};

use super::{Round, RoundState};

/// Decides the winner from the final hand values.
///
/// A house bust is checked before a player bust, so it wins the round for
/// the player even when both hands are over 21.
const fn decide(
    player_value: u16,
    player_bust: bool,
    house_value: u16,
    house_bust: bool,
) -> Outcome {
    if house_bust {
        return Outcome::PlayerWins;
    }
    if player_bust {
        return Outcome::HouseWins;
    }
    if house_value < player_value {
        Outcome::PlayerWins
    } else if house_value > player_value {
        Outcome::HouseWins
    } else {
        Outcome::Push
    }
}

impl Round<'_> {
    /// Determines the winner of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the resolution state.
    pub fn resolve(&mut self) -> Result<Outcome, RoundError> {
        self.expect_state(RoundState::Resolution)?;

        let outcome = decide(
            self.player.hand_value(),
            self.player.is_bust(),
            self.house.hand_value(),
            self.house.is_bust(),
        );

        self.outcome = Some(outcome);
        self.transition(RoundState::Settlement);

        Ok(outcome)
    }

    /// Settles the player's credits.
    ///
    /// A win adds twice the bet, a loss removes the bet and a push changes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the settlement state.
    pub fn settle(&mut self) -> Result<RoundResult, RoundError> {
        self.expect_state(RoundState::Settlement)?;
        let outcome = self.outcome.ok_or(RoundError::InvalidState)?;

        let bet = self.player.bet();
        let before = self.player.credits();
        let after = match outcome {
            Outcome::PlayerWins => before.saturating_add(bet.saturating_mul(2)),
            Outcome::HouseWins => before.saturating_sub(bet),
            Outcome::Push => before,
        };
        self.player.set_credits(after);

        #[expect(clippy::cast_possible_wrap, reason = "credit values fit in isize")]
        let net = match after.cmp(&before) {
            Ordering::Greater => (after - before) as isize,
            Ordering::Less => -((before - after) as isize),
            Ordering::Equal => 0,
        };

        let result = RoundResult {
            outcome,
            bet,
            player_value: self.player.hand_value(),
            house_value: self.house.hand_value(),
            player_bust: self.player.is_bust(),
            house_bust: self.house.is_bust(),
            credits: after,
            net,
        };

        tracing::info!(
            target: "round",
            outcome = ?outcome,
            bet,
            net,
            credits = after,
            "round settled"
        );
        self.transition(RoundState::RoundOver);

        Ok(result)
    }
}
