//! Repeated rounds for a single player.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::SessionOptions;
use crate::participant::{House, Player, Seat};
use crate::result::{EndReason, SessionSummary};
use crate::round::Round;
use crate::table::{CONTINUE_PROMPT, Event, Table, validate_name};

/// A single-player session: the player keeps their credits from round to
/// round until they run out or decide to stop.
///
/// # Example
///
/// ```no_run
/// use bjsolo::{Session, SessionOptions};
///
/// let session = Session::new(SessionOptions::default(), 42);
/// let _ = session;
/// ```
pub struct Session<R = ChaCha8Rng> {
    options: SessionOptions,
    rng: R,
    player: Option<Player>,
    house: House,
    rounds_played: usize,
}

impl Session<ChaCha8Rng> {
    /// Creates a new session with the given seed.
    #[must_use]
    pub fn new(options: SessionOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Session<R> {
    /// Creates a new session that shuffles with the given random source.
    #[must_use]
    pub fn with_rng(options: SessionOptions, rng: R) -> Self {
        let name = options.house_name.clone();
        let house = House::new(name).with_stands_on(options.house_stands_on);

        Self {
            options,
            rng,
            player: None,
            house,
            rounds_played: 0,
        }
    }

    /// Returns the player, once seated.
    #[must_use]
    pub const fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Returns the house.
    #[must_use]
    pub const fn house(&self) -> &House {
        &self.house
    }

    /// Returns the number of rounds settled so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Runs rounds until the player is out of credits or declines to continue.
    ///
    /// The first call asks the table for the player's name and seats the
    /// player with the starting credits; later calls keep playing with the
    /// same player. Every round uses a freshly built and shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the table supplies an invalid name, a round is
    /// aborted, or the table is interrupted.
    pub fn run<T: Table + ?Sized>(
        &mut self,
        table: &mut T,
    ) -> Result<SessionSummary, SessionError> {
        let player = if let Some(player) = self.player.as_mut() {
            player
        } else {
            let name = table.request_name()?;
            validate_name(&name).map_err(SessionError::InvalidName)?;
            tracing::info!(
                target: "session",
                player = %name,
                credits = self.options.starting_credits,
                "player seated"
            );
            self.player
                .insert(Player::new(name, self.options.starting_credits))
        };

        let reason = loop {
            if player.credits() == 0 {
                break EndReason::OutOfCredits;
            }

            let mut deck = Deck::new();
            deck.shuffle(&mut self.rng);

            Round::new(deck, player, &mut self.house).play(table)?;
            self.rounds_played += 1;

            if player.credits() == 0 {
                break EndReason::OutOfCredits;
            }
            if !table.request_yes_no(CONTINUE_PROMPT)? {
                break EndReason::PlayerQuit;
            }
        };

        let summary = SessionSummary {
            name: player.name().into(),
            rounds_played: self.rounds_played,
            credits: player.credits(),
            reason,
        };

        tracing::info!(
            target: "session",
            rounds = summary.rounds_played,
            credits = summary.credits,
            reason = ?summary.reason,
            "session over"
        );
        table.display(&Event::SessionOver(summary.clone()));

        Ok(summary)
    }
}
