//! CLI blackjack example.

use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{Console, RoundError, Session, SessionError, SessionOptions};
use clap::Parser;

/// Play blackjack against the house in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Shuffle seed (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Credits to start with.
    #[arg(long, default_value_t = bjsolo::options::DEFAULT_STARTING_CREDITS)]
    credits: usize,
    /// Name of the house.
    #[arg(long, default_value = bjsolo::options::DEFAULT_HOUSE_NAME)]
    house_name: String,
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = SessionOptions::default()
        .with_starting_credits(args.credits)
        .with_house_name(args.house_name);

    println!("Blackjack against the house. Good luck!\n");

    let mut session = Session::new(options, seed);
    match session.run(&mut Console::stdio()) {
        Ok(_) => {}
        Err(SessionError::Interrupted(_) | SessionError::Round(RoundError::Interrupted(_))) => {
            println!("\nInput closed. Goodbye.");
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
