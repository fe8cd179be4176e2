//! A single-player blackjack session engine with optional `no_std` support.
//!
//! A [`Session`] seats one player against the house and plays [`Round`]s
//! until the player is out of credits or stops. All player interaction goes
//! through the [`Table`] trait; [`Console`] implements it for a terminal.
//!
//! # Example
//!
//! ```no_run
//! use bjsolo::{Console, Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default(), 42);
//! let summary = session.run(&mut Console::stdio())?;
//! println!("{} credits left", summary.credits);
//! # Ok::<(), bjsolo::SessionError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod round;
pub mod session;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
#[cfg(feature = "std")]
pub use console::Console;
pub use deck::Deck;
pub use error::{BetInputError, DeckError, Interrupted, NameError, RoundError, SessionError};
pub use hand::{BLACKJACK, Hand};
pub use options::SessionOptions;
pub use participant::{HOUSE_STANDS_ON, HandView, House, Participant, Player, Reveal, Seat};
pub use result::{EndReason, Outcome, RoundResult, SessionSummary};
pub use round::{Round, RoundState};
pub use session::Session;
pub use table::{
    CONTINUE_PROMPT, Event, HIT_PROMPT, NAME_MAX_LEN, Table, parse_yes_no, validate_bet,
    validate_name,
};
