//! Round and session result types.

use alloc::string::String;

/// Winner of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (house busts or player has the higher value).
    PlayerWins,
    /// House wins (player busts or house has the higher value).
    HouseWins,
    /// Push (equal values).
    Push,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The bet placed this round.
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u16,
    /// The house's final hand value.
    pub house_value: u16,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the house busted.
    pub house_bust: bool,
    /// Credits after settlement.
    pub credits: usize,
    /// Net change in credits (positive = profit, negative = loss).
    pub net: isize,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player has no credits left.
    OutOfCredits,
    /// The player chose not to continue.
    PlayerQuit,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// The player's name.
    pub name: String,
    /// Number of rounds settled in the session.
    pub rounds_played: usize,
    /// Credits left at the end.
    pub credits: usize,
    /// Why the session ended.
    pub reason: EndReason,
}
