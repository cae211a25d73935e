// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Each detector looks at the hand groupings and returns the cards that make
//! the category, or `None` if the hand doesn't have the category. Detectors
//! take the first matching group, as groups are listed from the highest rank
//! this selects the highest cards for the category.
use showdown_cards::{Card, Rank};

use crate::{EvaluatedHand, group::Groupings};

/// A hand category detector.
pub(crate) type Detector = fn(&Groupings<'_>) -> Option<EvaluatedHand>;

/// The detectors from the strongest to the weakest category, the high card
/// category always matches and is not in this list.
pub(crate) const DETECTORS: [Detector; 9] = [
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    pair,
];

/// Collects the first N cards, returns `None` if there are less than N cards.
fn take<const N: usize>(cards: impl IntoIterator<Item = Card>) -> Option<[Card; N]> {
    let mut out = [Card::default(); N];
    let mut cards = cards.into_iter();
    for slot in &mut out {
        *slot = cards.next()?;
    }

    Some(out)
}

/// Finds the highest straight flush in any of the runs.
fn best_straight_flush(g: &Groupings<'_>) -> Option<[Card; 5]> {
    g.runs().iter().find_map(|run| run.straight_flush())
}

pub(crate) fn royal_flush(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    best_straight_flush(g)
        .filter(|cards| cards[0].rank() == Rank::Ace)
        .map(EvaluatedHand::RoyalFlush)
}

pub(crate) fn straight_flush(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    best_straight_flush(g).map(EvaluatedHand::StraightFlush)
}

pub(crate) fn four_of_a_kind(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    g.rank_groups()
        .iter()
        .find(|group| group.len() >= 4)
        .and_then(|group| take(group.cards().iter().copied()))
        .map(EvaluatedHand::FourOfAKind)
}

pub(crate) fn full_house(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    let groups = g.rank_groups();

    let (trips_idx, trips) = groups
        .iter()
        .enumerate()
        .find(|(_, group)| group.len() >= 3)?;

    // The pair can come from any other group, including a second trips.
    let pair = groups
        .iter()
        .enumerate()
        .find(|(idx, group)| *idx != trips_idx && group.len() >= 2)
        .map(|(_, group)| group)?;

    let cards = trips.cards()[..3].iter().chain(&pair.cards()[..2]).copied();
    take(cards).map(EvaluatedHand::FullHouse)
}

pub(crate) fn flush(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    g.suits()
        .iter()
        .find(|cards| cards.len() >= 5)
        .and_then(|cards| take(cards.iter().copied()))
        .map(EvaluatedHand::Flush)
}

pub(crate) fn straight(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    g.runs()
        .iter()
        .find(|run| run.len() >= 5)
        .and_then(|run| take(run.top_cards()))
        .map(EvaluatedHand::Straight)
}

pub(crate) fn three_of_a_kind(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    g.rank_groups()
        .iter()
        .find(|group| group.len() >= 3)
        .and_then(|group| take(group.cards().iter().copied()))
        .map(EvaluatedHand::ThreeOfAKind)
}

pub(crate) fn two_pair(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    let mut pairs = g.rank_groups().iter().filter(|group| group.len() >= 2);
    let (high, low) = (pairs.next()?, pairs.next()?);

    let cards = high.cards()[..2].iter().chain(&low.cards()[..2]).copied();
    take(cards).map(EvaluatedHand::TwoPair)
}

pub(crate) fn pair(g: &Groupings<'_>) -> Option<EvaluatedHand> {
    g.rank_groups()
        .first()
        .and_then(|group| take(group.cards().iter().copied()))
        .map(EvaluatedHand::Pair)
}

/// The highest card in the hand.
pub(crate) fn high_card(g: &Groupings<'_>) -> EvaluatedHand {
    // Groupings are built from a hand that has at least 5 cards.
    EvaluatedHand::HighCard(g.cards()[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hand;

    fn detect(detector: Detector, hand: &str) -> Option<String> {
        let hand = hand.parse::<Hand>().unwrap();
        detector(&Groupings::new(&hand)).map(|h| h.to_string())
    }

    #[test]
    fn take_cards() {
        let cards = Card::parse_list("AH KH QH").unwrap();
        assert_eq!(take::<2>(cards.iter().copied()), Some([cards[0], cards[1]]));
        assert_eq!(take::<3>(cards.iter().copied()), Some([cards[0], cards[1], cards[2]]));
        assert_eq!(take::<4>(cards.iter().copied()), None);
    }

    #[test]
    fn detectors_match_independently() {
        // A royal flush also satisfies the weaker straight and flush detectors.
        let hand = "AH KH QH JH TH";
        assert_eq!(
            detect(royal_flush, hand).as_deref(),
            Some("Royal Flush: AH KH QH JH TH")
        );
        assert_eq!(
            detect(straight_flush, hand).as_deref(),
            Some("Straight Flush: AH KH QH JH TH")
        );
        assert_eq!(detect(flush, hand).as_deref(), Some("Flush: AH KH QH JH TH"));
        assert_eq!(detect(straight, hand).as_deref(), Some("Straight: AH KH QH JH TH"));
        assert_eq!(detect(pair, hand), None);
        assert_eq!(detect(full_house, hand), None);
    }

    #[test]
    fn royal_flush_needs_ace() {
        assert_eq!(detect(royal_flush, "KH QH JH TH 9H AS 2C"), None);
        assert_eq!(
            detect(straight_flush, "KH QH JH TH 9H AS 2C").as_deref(),
            Some("Straight Flush: KH QH JH TH 9H")
        );
    }

    #[test]
    fn full_house_two_trips() {
        assert_eq!(
            detect(full_house, "KS KH KD 7C 7D 7H 2C").as_deref(),
            Some("Full House: KS KH KD 7H 7D")
        );

        // The pair rank can be higher than the trips rank.
        assert_eq!(
            detect(full_house, "7S 7H 7D QC QD 3H 2C").as_deref(),
            Some("Full House: 7S 7H 7D QD QC")
        );

        // The trips can't be reused as the pair.
        assert_eq!(detect(full_house, "7S 7H 7D QC JD 3H 2C"), None);
    }

    #[test]
    fn two_pair_needs_two_groups() {
        assert_eq!(detect(two_pair, "7S 7H QD JC 3H 2C 9D"), None);
        assert_eq!(
            detect(two_pair, "7S 7H QD QC 3H 3C 9D").as_deref(),
            Some("Two Pair: QD QC 7S 7H")
        );
    }

    #[test]
    fn straight_takes_top_five() {
        assert_eq!(
            detect(straight, "4C 5D 6H 7S 8C 9D TH").as_deref(),
            Some("Straight: TH 9D 8C 7S 6H")
        );
        assert_eq!(detect(straight, "4C 5D 6H 7S 9C TD JH"), None);
    }

    #[test]
    fn high_card_is_highest() {
        let hand = "2H 7D 9S JH 4C".parse::<Hand>().unwrap();
        assert_eq!(high_card(&Groupings::new(&hand)).to_string(), "High Card: JH");
    }
}
