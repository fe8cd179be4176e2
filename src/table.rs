//! The boundary between the engine and whoever talks to the player.
//!
//! The engine never parses input. A [`Table`] implementation prompts, validates
//! and reprompts until it has a conforming value, then hands it over. The
//! helpers in this module hold the validation rules so every implementation
//! applies the same ones.

use alloc::string::String;

use crate::error::{BetInputError, Interrupted, NameError};
use crate::participant::HandView;
use crate::result::{RoundResult, SessionSummary};

/// Longest accepted player name, in characters.
pub const NAME_MAX_LEN: usize = 20;

/// Question asked on every player decision.
pub const HIT_PROMPT: &str = "Do you want to draw a card?";

/// Question asked after every round the player can still afford.
pub const CONTINUE_PROMPT: &str = "Do you want to play another round?";

/// Something worth showing to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A hand during play.
    Hand(HandView),
    /// Both hands, fully revealed, once the house is done.
    Showdown {
        /// The player's hand.
        player: HandView,
        /// The house's hand.
        house: HandView,
    },
    /// The round has been settled.
    Settled {
        /// The player's name.
        player: String,
        /// The house's name.
        house: String,
        /// The settlement.
        result: RoundResult,
    },
    /// The session is over.
    SessionOver(SessionSummary),
}

/// Collaborator contract used by [`Round`](crate::Round) and
/// [`Session`](crate::Session).
///
/// Every request blocks until a valid answer is available. Return
/// [`Interrupted`] only when no answer will ever come.
pub trait Table {
    /// Asks for a bet in `1..=limit`.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if the input source is gone.
    fn request_bet(&mut self, limit: usize) -> Result<usize, Interrupted>;

    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if the input source is gone.
    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, Interrupted>;

    /// Asks for the player's name (letters only, 1 to [`NAME_MAX_LEN`] characters).
    ///
    /// # Errors
    ///
    /// Returns [`Interrupted`] if the input source is gone.
    fn request_name(&mut self) -> Result<String, Interrupted>;

    /// Shows an event. Has no effect on the engine.
    fn display(&mut self, event: &Event);
}

/// Checks a player name.
///
/// # Errors
///
/// Returns a [`NameError`] if the name is empty, longer than
/// [`NAME_MAX_LEN`] characters, or contains anything but letters.
///
/// # Example
///
/// ```
/// use bjsolo::{NameError, validate_name};
///
/// assert!(validate_name("Ronaldo").is_ok());
/// assert_eq!(validate_name("R2D2"), Err(NameError::InvalidCharacter));
/// ```
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(NameError::TooLong { max: NAME_MAX_LEN });
    }
    if !name.chars().all(char::is_alphabetic) {
        return Err(NameError::InvalidCharacter);
    }
    Ok(())
}

/// Parses a typed bet and checks it against `1..=limit`.
///
/// # Errors
///
/// Returns a [`BetInputError`] if the input is not a whole number or is out
/// of range.
pub fn validate_bet(input: &str, limit: usize) -> Result<usize, BetInputError> {
    let bet = input
        .trim()
        .parse::<usize>()
        .map_err(|_| BetInputError::NotANumber)?;

    if !(1..=limit).contains(&bet) {
        return Err(BetInputError::OutOfRange { min: 1, max: limit });
    }
    Ok(bet)
}

/// Parses a yes/no answer, ignoring case and surrounding whitespace.
///
/// Returns `None` for anything else.
#[must_use]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    let answer = input.trim();
    if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("no") || answer.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}
