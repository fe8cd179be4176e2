//! Card, deck and hand tests.

use std::collections::HashSet;

use bjsolo::{Card, DECK_SIZE, Deck, DeckError, Hand, House, Player, Rank, Reveal, Seat, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for (index, &rank) in ranks.iter().enumerate() {
        hand.add_card(card(Suit::ALL[index % 4], rank));
    }
    hand
}

#[test]
fn hand_values_soften_aces_only_as_needed() {
    assert_eq!(hand_of(&[Rank::Ace, Rank::Six]).value(), 17);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).value(), 21);
    assert_eq!(
        hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Eight]).value(),
        21
    );
    assert_eq!(hand_of(&[Rank::King, Rank::Queen]).value(), 20);
    assert_eq!(hand_of(&[Rank::Ace, Rank::King, Rank::Queen]).value(), 21);
    assert_eq!(hand_of(&[Rank::Ace, Rank::Ace]).value(), 12);
}

#[test]
fn hand_busts_without_aces_to_soften() {
    let hand = hand_of(&[Rank::Ten, Rank::Nine, Rank::Five]);
    assert_eq!(hand.value(), 24);
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn hand_value_saturates_instead_of_overflowing() {
    let hand = hand_of(&[Rank::King; 7000]);
    assert_eq!(hand.value(), u16::MAX);
    assert!(hand.is_bust());
}

#[test]
fn hand_soft_flag_tracks_aces_counted_as_eleven() {
    assert!(hand_of(&[Rank::Ace, Rank::Six]).is_soft());
    assert!(!hand_of(&[Rank::Ace, Rank::Six, Rank::Ten]).is_soft());
    assert!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).is_soft());
}

#[test]
fn hand_clear_empties_hand() {
    let mut hand = hand_of(&[Rank::Two, Rank::Three]);
    assert_eq!(hand.len(), 2);
    hand.clear();
    assert!(hand.is_empty());
    assert_eq!(hand.value(), 0);
}

#[test]
fn card_values_and_labels() {
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert_eq!(Rank::Ace.value(), 11);
    assert_eq!(Rank::Queen.label(), "Queen");
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "Hearts Ace");
    assert_eq!(card(Suit::Clubs, Rank::Seven).to_string(), "Clubs 7");
}

#[test]
fn deck_builds_52_distinct_cards_in_base_order() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);

    assert_eq!(deck.cards()[0], card(Suit::Hearts, Rank::Two));
    assert_eq!(deck.cards()[12], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[13], card(Suit::Diamonds, Rank::Two));
    assert_eq!(deck.cards()[51], card(Suit::Spades, Rank::Ace));
}

#[test]
fn deck_draws_from_the_top_until_exhausted() {
    let mut deck = Deck::new();
    assert_eq!(deck.draw(), Ok(card(Suit::Spades, Rank::Ace)));

    for _ in 1..DECK_SIZE {
        deck.draw().unwrap();
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Exhausted));
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

    assert_eq!(deck.len(), DECK_SIZE);
    let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
    let base: HashSet<Card> = Deck::new().cards().iter().copied().collect();
    assert_eq!(shuffled, base);
}

#[test]
fn shuffle_changes_order_across_trials() {
    let base = Deck::new();
    let mut orders = HashSet::new();

    for seed in 0..32 {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        assert_ne!(deck, base);
        orders.insert(deck.cards().to_vec());
    }

    assert_eq!(orders.len(), 32);
}

#[test]
fn shuffle_is_reproducible_with_the_same_seed() {
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    second.shuffle(&mut ChaCha8Rng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn house_view_hides_first_card_and_value() {
    let mut house = House::new("Dealer".to_string());
    house.take(card(Suit::Hearts, Rank::King));
    house.take(card(Suit::Clubs, Rank::Seven));

    let hidden = house.view(Reveal::HideFirst);
    assert_eq!(hidden.name, "Dealer");
    assert_eq!(
        hidden.cards,
        vec![None, Some(card(Suit::Clubs, Rank::Seven))]
    );
    assert_eq!(hidden.value, None);

    let shown = house.view(Reveal::All);
    assert_eq!(shown.cards.len(), 2);
    assert!(shown.cards.iter().all(Option::is_some));
    assert_eq!(shown.value, Some(17));
}

#[test]
fn player_view_shows_everything() {
    let mut player = Player::new("Henry".to_string(), 100);
    player.take(card(Suit::Hearts, Rank::Ace));
    player.take(card(Suit::Spades, Rank::Six));

    let view = player.view(Reveal::All);
    assert_eq!(view.value, Some(17));
    assert_eq!(view.cards[0], Some(card(Suit::Hearts, Rank::Ace)));
    assert_eq!(player.credits(), 100);
    assert_eq!(player.bet(), 0);
}

#[test]
fn house_draws_below_its_stand_value() {
    let mut house = House::new("Dealer".to_string());
    house.take(card(Suit::Hearts, Rank::Ten));
    house.take(card(Suit::Clubs, Rank::Six));
    assert!(house.must_draw());

    let mut soft_seventeen = House::new("Dealer".to_string());
    soft_seventeen.take(card(Suit::Hearts, Rank::Ace));
    soft_seventeen.take(card(Suit::Clubs, Rank::Six));
    assert!(!soft_seventeen.must_draw());

    let cautious = House::new("Dealer".to_string()).with_stands_on(18);
    assert_eq!(cautious.stands_on(), 18);
}

#[test]
fn house_stand_value_is_capped_at_21() {
    let house = House::new("Dealer".to_string()).with_stands_on(200);
    assert_eq!(house.stands_on(), 21);

    let mut twenty_one = house;
    twenty_one.take(card(Suit::Hearts, Rank::King));
    twenty_one.take(card(Suit::Clubs, Rank::Ace));
    assert!(!twenty_one.must_draw());
}
