//! Error types for engine and collaborator operations.

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("deck exhausted")]
    Exhausted,
}

/// The collaborator's input source closed before a response was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input closed before a response was given")]
pub struct Interrupted;

/// Errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The operation is not valid in the current round state.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// The bet is outside `1..=credits`.
    #[error("bet of {bet} is outside 1..={credits}")]
    InvalidBet {
        /// The rejected bet.
        bet: usize,
        /// The player's credits when the bet was placed.
        credits: usize,
    },
    /// The deck ran out of cards mid-round.
    #[error("deck exhausted mid-round")]
    DeckExhausted,
    /// The collaborator stopped answering.
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Exhausted => Self::DeckExhausted,
        }
    }
}

/// Errors that end a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The collaborator returned a name that breaks the naming rules.
    #[error("invalid player name: {0}")]
    InvalidName(NameError),
    /// A round was aborted.
    #[error(transparent)]
    Round(#[from] RoundError),
    /// The collaborator stopped answering.
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

/// Reasons a player name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is empty.
    #[error("name is empty")]
    Empty,
    /// The name is longer than the allowed maximum.
    #[error("name is longer than {max} characters")]
    TooLong {
        /// Maximum number of characters.
        max: usize,
    },
    /// The name contains something other than letters.
    #[error("name may only contain letters")]
    InvalidCharacter,
}

/// Reasons a typed bet is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetInputError {
    /// The input is not a whole number.
    #[error("bet is not a whole number")]
    NotANumber,
    /// The bet is outside the allowed range.
    #[error("bet must be between {min} and {max}")]
    OutOfRange {
        /// Smallest allowed bet.
        min: usize,
        /// Largest allowed bet.
        max: usize,
    },
}
