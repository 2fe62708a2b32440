//! Property tests for scoring, the deck and the tally.

use std::collections::HashSet;

use blackjack_table::{Card, DECK_SIZE, Deck, Hand, Outcome, Rank, Suit, Tally};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (
        prop::sample::select(Rank::ALL.to_vec()),
        prop::sample::select(Suit::ALL.to_vec()),
    )
        .prop_map(|(rank, suit)| Card::new(rank, suit))
}

fn non_ace_card() -> impl Strategy<Value = Card> {
    any_card().prop_filter("no aces", |card| !card.is_ace())
}

proptest! {
    #[test]
    fn score_without_aces_is_plain_sum(cards in prop::collection::vec(non_ace_card(), 0..400)) {
        let expected: u32 = cards.iter().map(|card| u32::from(card.point_value())).sum();
        let hand: Hand = cards.into_iter().collect();
        prop_assert_eq!(hand.score(), expected);
    }

    #[test]
    fn aces_only_downgrade_when_needed(cards in prop::collection::vec(any_card(), 0..400)) {
        let hard: u32 = cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { u32::from(card.point_value()) })
            .sum();
        let hand: Hand = cards.into_iter().collect();
        let score = hand.score();

        prop_assert!(score >= hard);
        if hard <= 21 {
            prop_assert!(score <= 21);
        } else {
            prop_assert_eq!(score, hard);
        }
    }

    #[test]
    fn new_deck_is_a_full_unique_deck(seed in any::<u64>()) {
        let mut deck = Deck::new(seed);
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let cards: HashSet<Card> = (0..DECK_SIZE).map(|_| deck.draw()).collect();
        prop_assert_eq!(cards.len(), DECK_SIZE);
    }

    #[test]
    fn tally_is_monotonic_and_counts_every_round(
        rounds in prop::collection::vec((4u32..=30, 4u32..=30), 0..64),
    ) {
        let mut tally = Tally::new();

        for (index, &(player, dealer)) in rounds.iter().enumerate() {
            let before = tally;
            tally.record(Outcome::classify(player, dealer));

            prop_assert!(tally.wins() >= before.wins());
            prop_assert!(tally.losses() >= before.losses());
            prop_assert!(tally.draws() >= before.draws());
            prop_assert_eq!(tally.rounds() as usize, index + 1);
        }
    }
}
