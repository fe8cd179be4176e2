//! Helpers shared by the integration tests.

#![expect(dead_code, reason = "each test binary uses a different subset")]

extern crate alloc;

use alloc::collections::VecDeque;

use bjsolo::{CONTINUE_PROMPT, Card, Deck, Event, HIT_PROMPT, Interrupted, Rank, Suit, Table};

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck that yields `draws` in the given order.
pub fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

/// A table that answers from prepared scripts and records what it was shown.
///
/// An exhausted script falls back to the matching default; with no default
/// the table reports [`Interrupted`].
#[derive(Debug, Default)]
pub struct ScriptedTable {
    pub name: Option<String>,
    pub bets: VecDeque<usize>,
    pub all_in: bool,
    pub hits: VecDeque<bool>,
    pub default_hit: Option<bool>,
    pub continues: VecDeque<bool>,
    pub default_continue: Option<bool>,
    pub continue_asked: usize,
    pub events: Vec<Event>,
}

impl ScriptedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_bets(mut self, bets: &[usize]) -> Self {
        self.bets.extend(bets);
        self
    }

    pub fn all_in(mut self) -> Self {
        self.all_in = true;
        self
    }

    pub fn with_hits(mut self, hits: &[bool]) -> Self {
        self.hits.extend(hits);
        self
    }

    pub fn always_stand(mut self) -> Self {
        self.default_hit = Some(false);
        self
    }

    pub fn with_continues(mut self, answers: &[bool]) -> Self {
        self.continues.extend(answers);
        self
    }

    pub fn always_continue(mut self) -> Self {
        self.default_continue = Some(true);
        self
    }
}

impl Table for ScriptedTable {
    fn request_bet(&mut self, limit: usize) -> Result<usize, Interrupted> {
        self.bets
            .pop_front()
            .or_else(|| self.all_in.then_some(limit))
            .ok_or(Interrupted)
    }

    fn request_yes_no(&mut self, prompt: &str) -> Result<bool, Interrupted> {
        match prompt {
            HIT_PROMPT => {
                let answer = self.hits.pop_front().or(self.default_hit);
                answer.ok_or(Interrupted)
            }
            CONTINUE_PROMPT => {
                self.continue_asked += 1;
                self.continues
                    .pop_front()
                    .or(self.default_continue)
                    .ok_or(Interrupted)
            }
            other => panic!("unexpected prompt: {other}"),
        }
    }

    fn request_name(&mut self) -> Result<String, Interrupted> {
        self.name.take().ok_or(Interrupted)
    }

    fn display(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}
