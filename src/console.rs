//! Terminal implementation of [`Table`].

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::error::Interrupted;
use crate::participant::HandView;
use crate::result::{EndReason, Outcome};
use crate::table::{Event, Table, parse_yes_no, validate_bet, validate_name};

/// A [`Table`] that talks to the player through text streams.
///
/// Malformed answers are reported and asked again; the engine only ever sees
/// valid values. End of input is reported as [`Interrupted`].
///
/// # Example
///
/// ```
/// use bjsolo::{Console, Table};
///
/// let input = "abc\n25\n".as_bytes();
/// let mut console = Console::new(input, Vec::new());
/// assert_eq!(console.request_bet(100), Ok(25));
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Creates a console on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            tracing::warn!(target: "console", error = %err, "failed to write output");
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, Interrupted> {
        if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
            tracing::warn!(target: "console", error = %err, "failed to write prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                tracing::debug!(target: "console", "input closed");
                Err(Interrupted)
            }
            Ok(_) => Ok(line.trim().to_string()),
            Err(err) => {
                tracing::warn!(target: "console", error = %err, "failed to read input");
                Err(Interrupted)
            }
        }
    }
}

impl<R: BufRead, W: Write> Table for Console<R, W> {
    fn request_bet(&mut self, limit: usize) -> Result<usize, Interrupted> {
        loop {
            self.say(&format!(
                "How much do you want to bet this round?\nYou can bet a total of {limit} $"
            ));
            let answer = self.ask("Enter your bet: ")?;
            match validate_bet(&answer, limit) {
                Ok(bet) => return Ok(bet),
                Err(err) => self.say(&format!("Invalid input: {err}.")),
            }
        }
    }

    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, Interrupted> {
        loop {
            let answer = self.ask(&format!("{prompt} (yes/no): "))?;
            match parse_yes_no(&answer) {
                Some(choice) => return Ok(choice),
                None => self.say("Invalid input. Please enter 'yes' or 'no'.\n"),
            }
        }
    }

    fn request_name(&mut self) -> Result<String, Interrupted> {
        loop {
            let answer = self.ask("Enter your name: ")?;
            match validate_name(&answer) {
                Ok(()) => return Ok(answer),
                Err(err) => self.say(&format!("Invalid name: {err}.")),
            }
        }
    }

    fn display(&mut self, event: &Event) {
        if let Err(err) = write_event(&mut self.output, event) {
            tracing::warn!(target: "console", error = %err, "failed to write event");
        }
    }
}

fn write_hand(out: &mut impl Write, view: &HandView) -> io::Result<()> {
    writeln!(out, "\n{}'s hand:", view.name)?;
    for card in &view.cards {
        match card {
            Some(card) => writeln!(out, "Card: {card}")?,
            None => writeln!(out, "Card: Hidden Card")?,
        }
    }
    if let Some(value) = view.value {
        writeln!(out, "Value: {value}")?;
    }
    Ok(())
}

fn write_event(out: &mut impl Write, event: &Event) -> io::Result<()> {
    match event {
        Event::Hand(view) => write_hand(out, view),
        Event::Showdown { player, house } => {
            writeln!(out, "\nRESULTS:")?;
            write_hand(out, player)?;
            write_hand(out, house)
        }
        Event::Settled {
            player,
            house,
            result,
        } => {
            match result.outcome {
                Outcome::PlayerWins => {
                    writeln!(out, "\nPlayer: {player} won!")?;
                    writeln!(out, "{player} has won {} $.", result.net)?;
                }
                Outcome::HouseWins => {
                    writeln!(out, "\nHouse: {house} won!")?;
                    writeln!(out, "{player} has lost {} $.", result.net.unsigned_abs())?;
                }
                Outcome::Push => writeln!(out, "\nIt's a draw!")?,
            }
            writeln!(out, "{player} has {} $ left in the bank.\n", result.credits)
        }
        Event::SessionOver(summary) => match summary.reason {
            EndReason::OutOfCredits => writeln!(
                out,
                "{} is out of credits after {} round(s). Game over.",
                summary.name, summary.rounds_played
            ),
            EndReason::PlayerQuit => writeln!(
                out,
                "{} leaves the table with {} $ after {} round(s).",
                summary.name, summary.credits, summary.rounds_played
            ),
        },
    }
}
