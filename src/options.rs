//! Session configuration options.

use alloc::string::String;

use crate::participant::{HOUSE_STANDS_ON, cap_stands_on};

/// Credits a new player starts with by default.
pub const DEFAULT_STARTING_CREDITS: usize = 1000;

/// Name the house plays under by default.
pub const DEFAULT_HOUSE_NAME: &str = "Dealer";

/// Configuration options for a session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsolo::SessionOptions;
///
/// let options = SessionOptions::default()
///     .with_starting_credits(250)
///     .with_house_name("Bestdealer");
/// assert_eq!(options.starting_credits, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Credits the player starts the session with.
    pub starting_credits: usize,
    /// Name shown for the house.
    pub house_name: String,
    /// Value at which the house stops drawing (at most 21).
    pub house_stands_on: u16,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_STARTING_CREDITS,
            house_name: String::from(DEFAULT_HOUSE_NAME),
            house_stands_on: HOUSE_STANDS_ON,
        }
    }
}

impl SessionOptions {
    /// Sets the starting credits.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_starting_credits(50);
    /// assert_eq!(options.starting_credits, 50);
    /// ```
    #[must_use]
    pub const fn with_starting_credits(mut self, credits: usize) -> Self {
        self.starting_credits = credits;
        self
    }

    /// Sets the house name.
    #[must_use]
    pub fn with_house_name(mut self, name: impl Into<String>) -> Self {
        self.house_name = name.into();
        self
    }

    /// Sets the value at which the house stops drawing, capped at 21.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsolo::SessionOptions;
    ///
    /// let options = SessionOptions::default().with_house_stands_on(16);
    /// assert_eq!(options.house_stands_on, 16);
    ///
    /// let options = SessionOptions::default().with_house_stands_on(30);
    /// assert_eq!(options.house_stands_on, 21);
    /// ```
    #[must_use]
    pub const fn with_house_stands_on(mut self, value: u16) -> Self {
        self.house_stands_on = cap_stands_on(value);
        self
    }
}
