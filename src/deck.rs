//! The per-round deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered stack of cards. The last card is the top of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the standard 52-card deck in base order.
    ///
    /// Cards are ordered by suit (hearts, diamonds, clubs, spades) and then by
    /// rank (2 through 10, jack, queen, king, ace).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck holding exactly the given cards.
    ///
    /// The last card of `cards` is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards with the given random source.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        tracing::debug!(target: "deck", remaining = self.cards.len(), "deck shuffled");
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Exhausted)?;
        tracing::trace!(target: "deck", %card, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Returns the cards left in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
