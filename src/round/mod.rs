//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::participant::{House, Player, Reveal, Seat};
use crate::result::{Outcome, RoundResult};
use crate::table::{Event, HIT_PROMPT, Table};

mod deal;
mod settle;
pub mod state;
mod turns;

pub use state::RoundState;

/// One round of blackjack between a player and the house.
///
/// A round owns its deck and borrows both participants. It moves through
/// [`RoundState`] one step at a time; each step checks the state it expects
/// and returns [`RoundError::InvalidState`] otherwise. Any error moves the
/// round to [`RoundState::Aborted`].
///
/// # Example
///
/// ```
/// use bjsolo::{Card, Deck, House, Outcome, Player, Rank, Round, Suit};
///
/// let mut player = Player::new("Henry".into(), 100);
/// let mut house = House::new("Dealer".into());
///
/// // The last card is drawn first.
/// let deck = Deck::from_cards(vec![
///     Card::new(Suit::Spades, Rank::Seven), // house
///     Card::new(Suit::Clubs, Rank::Nine), // player
///     Card::new(Suit::Hearts, Rank::Queen), // house
///     Card::new(Suit::Hearts, Rank::King), // player
/// ]);
///
/// let mut round = Round::new(deck, &mut player, &mut house);
/// round.place_bet(10)?;
/// round.deal()?;
/// round.stand()?;
/// round.house_play()?;
/// assert_eq!(round.resolve()?, Outcome::PlayerWins);
/// let result = round.settle()?;
/// assert_eq!(result.credits, 120);
/// # Ok::<(), bjsolo::RoundError>(())
/// ```
pub struct Round<'a> {
    deck: Deck,
    player: &'a mut Player,
    house: &'a mut House,
    state: RoundState,
    outcome: Option<Outcome>,
}

impl<'a> Round<'a> {
    /// Starts a round with the given deck.
    ///
    /// Both hands are emptied and the player's bet is reset.
    pub fn new(deck: Deck, player: &'a mut Player, house: &'a mut House) -> Self {
        player.clear_hand();
        player.set_bet(0);
        house.clear_hand();

        Self {
            deck,
            player,
            house,
            state: RoundState::Betting,
            outcome: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        self.player
    }

    /// Returns the house.
    #[must_use]
    pub const fn house(&self) -> &House {
        self.house
    }

    /// Returns the outcome once the round has been resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    fn expect_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    fn transition(&mut self, next: RoundState) {
        tracing::debug!(target: "round", from = ?self.state, to = ?next, "round state change");
        self.state = next;
    }

    /// Draws from the deck, aborting the round when it is empty.
    fn draw(&mut self) -> Result<Card, RoundError> {
        self.deck.draw().map_err(|err| {
            tracing::error!(target: "round", state = ?self.state, "deck exhausted, aborting round");
            self.state = RoundState::Aborted;
            RoundError::from(err)
        })
    }

    /// Plays the whole round through the given table.
    ///
    /// Asks for the bet, deals, shows both hands (the house with its first
    /// card hidden), asks the player to hit until they stand or bust, plays
    /// the house, then shows the showdown and the settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting state, the table
    /// returns a bet outside `1..=credits`, the deck runs out, or the table
    /// is interrupted. Once the bet has been requested, any error aborts the
    /// round.
    pub fn play<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<RoundResult, RoundError> {
        self.expect_state(RoundState::Betting)?;

        let result = self.play_inner(table);
        if result.is_err() {
            self.state = RoundState::Aborted;
        }
        result
    }

    fn play_inner<T: Table + ?Sized>(&mut self, table: &mut T) -> Result<RoundResult, RoundError> {
        let bet = table.request_bet(self.player.credits())?;
        self.place_bet(bet)?;
        self.deal()?;

        table.display(&Event::Hand(self.player.view(Reveal::All)));
        table.display(&Event::Hand(self.house.view(Reveal::HideFirst)));

        while self.state == RoundState::PlayerTurn {
            if table.request_yes_no(HIT_PROMPT)? {
                self.hit()?;
                table.display(&Event::Hand(self.player.view(Reveal::All)));
            } else {
                self.stand()?;
            }
        }

        self.house_play()?;
        self.resolve()?;

        table.display(&Event::Showdown {
            player: self.player.view(Reveal::All),
            house: self.house.view(Reveal::All),
        });

        let result = self.settle()?;
        table.display(&Event::Settled {
            player: self.player.name().into(),
            house: self.house.name().into(),
            result,
        });

        Ok(result)
    }
}
