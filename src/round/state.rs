//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player's bet.
    Betting,
    /// Bet accepted; initial cards not dealt yet.
    InitialDeal,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// House plays out its hand.
    HouseTurn,
    /// Hands are final; the winner is not decided yet.
    Resolution,
    /// Winner decided; credits not settled yet.
    Settlement,
    /// Round has been settled.
    RoundOver,
    /// Round was abandoned after a fatal error.
    Aborted,
}
