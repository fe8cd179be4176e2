//! Round participants: the player and the house.
//!
//! Both roles hold a [`Participant`] (a name and a hand) and share behaviour
//! through the [`Seat`] trait. How a hand is shown is decided by the
//! [`Reveal`] policy passed to [`Seat::view`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{BLACKJACK, Hand};

/// Default value at which the house stops drawing.
pub const HOUSE_STANDS_ON: u16 = 17;

/// Caps a house stand value at 21.
pub(crate) const fn cap_stands_on(value: u16) -> u16 {
    if value > BLACKJACK { BLACKJACK } else { value }
}

/// How much of a hand is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    /// All cards and the value are shown.
    #[default]
    All,
    /// The first card and the value are hidden.
    HideFirst,
}

/// A named holder of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            hand: Hand::new(),
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the participant's hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// A rendered hand, as handed to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Owner of the hand.
    pub name: String,
    /// Cards in order; `None` for a hidden card.
    pub cards: Vec<Option<Card>>,
    /// Hand value, `None` while a card is hidden.
    pub value: Option<u16>,
}

/// Behaviour shared by everything that holds a hand.
pub trait Seat {
    /// Returns the underlying participant.
    fn participant(&self) -> &Participant;

    /// Returns the underlying participant mutably.
    fn participant_mut(&mut self) -> &mut Participant;

    /// Returns the name.
    fn name(&self) -> &str {
        self.participant().name()
    }

    /// Returns the hand.
    fn hand(&self) -> &Hand {
        self.participant().hand()
    }

    /// Returns the hand value.
    fn hand_value(&self) -> u16 {
        self.hand().value()
    }

    /// Returns whether the hand is bust.
    fn is_bust(&self) -> bool {
        self.hand().is_bust()
    }

    /// Adds a card to the hand.
    fn take(&mut self, card: Card) {
        self.participant_mut().hand_mut().add_card(card);
    }

    /// Empties the hand.
    fn clear_hand(&mut self) {
        self.participant_mut().hand_mut().clear();
    }

    /// Renders the hand under the given policy.
    fn view(&self, reveal: Reveal) -> HandView {
        let hand = self.hand();
        let hide_first = reveal == Reveal::HideFirst && !hand.is_empty();

        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!(hide_first && index == 0)).then_some(*card))
            .collect();

        HandView {
            name: String::from(self.name()),
            cards,
            value: (!hide_first).then(|| hand.value()),
        }
    }
}

/// The human player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    seat: Participant,
    credits: usize,
    bet: usize,
}

impl Player {
    /// Creates a player with the given starting credits.
    #[must_use]
    pub const fn new(name: String, credits: usize) -> Self {
        Self {
            seat: Participant::new(name),
            credits,
            bet: 0,
        }
    }

    /// Returns the current credits.
    #[must_use]
    pub const fn credits(&self) -> usize {
        self.credits
    }

    /// Returns the bet for the current round (0 before betting).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    pub(crate) const fn set_bet(&mut self, bet: usize) {
        self.bet = bet;
    }

    pub(crate) const fn set_credits(&mut self, credits: usize) {
        self.credits = credits;
    }
}

impl Seat for Player {
    fn participant(&self) -> &Participant {
        &self.seat
    }

    fn participant_mut(&mut self) -> &mut Participant {
        &mut self.seat
    }
}

/// The house: draws below a fixed value and stands otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    seat: Participant,
    stands_on: u16,
}

impl House {
    /// Creates a house that stands on 17.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            seat: Participant::new(name),
            stands_on: HOUSE_STANDS_ON,
        }
    }

    /// Sets the value at which the house stops drawing.
    ///
    /// Values above 21 are capped at 21, so the house never draws on a
    /// hand that already counts 21.
    #[must_use]
    pub const fn with_stands_on(mut self, value: u16) -> Self {
        self.stands_on = cap_stands_on(value);
        self
    }

    /// Returns the value at which the house stops drawing.
    #[must_use]
    pub const fn stands_on(&self) -> u16 {
        self.stands_on
    }

    /// Returns whether the house draws another card.
    #[must_use]
    pub fn must_draw(&self) -> bool {
        self.hand_value() < self.stands_on
    }
}

impl Seat for House {
    fn participant(&self) -> &Participant {
        &self.seat
    }

    fn participant_mut(&mut self) -> &mut Participant {
        &mut self.seat
    }
}
