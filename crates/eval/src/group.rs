// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards groupings used by the hand detectors.
//!
//! All groupings borrow slices of the hand cards that are already sorted from
//! the highest to the lowest card, so a single scan of the hand builds every
//! group and lists groups from the highest rank to the lowest.
use showdown_cards::{Card, Suit};

use crate::Hand;

/// Cards sharing the same rank, at least two.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RankGroup<'a>(&'a [Card]);

impl<'a> RankGroup<'a> {
    /// The group cards, same rank cards are listed by descending suit.
    pub fn cards(&self) -> &'a [Card] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A sequence of consecutive ranks, at least two.
///
/// Each step holds all the hand cards with that rank so that suits can be
/// matched for straight flushes. Steps are in ascending rank order.
#[derive(Debug, Clone)]
pub(crate) struct ConsecutiveRun<'a> {
    steps: Vec<&'a [Card]>,
}

impl<'a> ConsecutiveRun<'a> {
    /// The number of distinct ranks in this run.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The highest card for each rank starting from the highest rank.
    pub fn top_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.steps.iter().rev().map(|step| step[0])
    }

    /// Finds the highest five consecutive ranks in this run that have all a
    /// card with the same suit.
    pub fn straight_flush(&self) -> Option<[Card; 5]> {
        Suit::suits()
            .filter_map(|suit| self.suited_straight(suit))
            .max_by_key(|cards| cards[0].rank())
    }

    fn suited_straight(&self, suit: Suit) -> Option<[Card; 5]> {
        let mut streak = [Card::default(); 5];
        let mut len = 0;

        for step in self.steps.iter().rev() {
            match step.iter().find(|c| c.suit() == suit) {
                Some(&card) => {
                    streak[len] = card;
                    len += 1;
                    if len == streak.len() {
                        return Some(streak);
                    }
                }
                None => len = 0,
            }
        }

        None
    }
}

/// The rank groups, consecutive runs, and suit groups for a hand.
#[derive(Debug)]
pub(crate) struct Groupings<'a> {
    cards: &'a [Card],
    rank_groups: Vec<RankGroup<'a>>,
    runs: Vec<ConsecutiveRun<'a>>,
    suits: [Vec<Card>; 4],
}

impl<'a> Groupings<'a> {
    /// Computes all groupings for a hand.
    pub fn new(hand: &'a Hand) -> Self {
        let cards = hand.cards();

        // One slice per distinct rank, from the highest rank.
        let ranks = cards
            .chunk_by(|a, b| a.rank() == b.rank())
            .collect::<Vec<_>>();

        let rank_groups = ranks
            .iter()
            .copied()
            .filter(|cards| cards.len() >= 2)
            .map(RankGroup)
            .collect();

        let mut runs = Vec::new();
        for chunk in ranks.chunk_by(|hi, lo| lo[0].rank().next() == Some(hi[0].rank())) {
            if chunk.len() >= 2 {
                let steps = chunk.iter().rev().copied().collect();
                runs.push(ConsecutiveRun { steps });
            }
        }

        let mut suits: [Vec<Card>; 4] = Default::default();
        for card in cards {
            suits[card.suit() as usize].push(*card);
        }

        Self {
            cards,
            rank_groups,
            runs,
            suits,
        }
    }

    /// All the hand cards from the highest to the lowest.
    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }

    /// Groups of cards with the same rank, from the highest rank.
    pub fn rank_groups(&self) -> &[RankGroup<'a>] {
        &self.rank_groups
    }

    /// Runs of consecutive ranks, from the highest starting run.
    pub fn runs(&self) -> &[ConsecutiveRun<'a>] {
        &self.runs
    }

    /// Cards grouped by suit, each group from the highest card.
    pub fn suits(&self) -> &[Vec<Card>] {
        &self.suits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(cards: &[Card]) -> String {
        cards.iter().map(|c| c.rank().to_string()).collect()
    }

    #[test]
    fn rank_groups_highest_first() {
        let hand = "5H 5D 9C 9S 2H 2D KS".parse::<Hand>().unwrap();
        let groups = Groupings::new(&hand);

        let groups = groups
            .rank_groups()
            .iter()
            .map(|g| g.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        assert_eq!(
            groups,
            vec![vec!["9S", "9C"], vec!["5H", "5D"], vec!["2H", "2D"]]
        );
    }

    #[test]
    fn rank_groups_skip_singletons() {
        let hand = "2H 7D 9S JH 4C".parse::<Hand>().unwrap();
        assert!(Groupings::new(&hand).rank_groups().is_empty());

        let hand = "4S 4H 4D 4C 9C".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);
        assert_eq!(groupings.rank_groups().len(), 1);
        assert_eq!(groupings.rank_groups()[0].len(), 4);
    }

    #[test]
    fn consecutive_runs() {
        let hand = "9H 8H 7H 6H 5H 2C 3D".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);

        let runs = groupings
            .runs()
            .iter()
            .map(|r| ranks(&r.top_cards().collect::<Vec<_>>()))
            .collect::<Vec<_>>();

        // Highest run first, each listed from its highest rank.
        assert_eq!(runs, vec!["98765", "32"]);

        // Steps are stored in ascending order.
        let run = &groupings.runs()[0];
        assert_eq!(run.len(), 5);
        assert_eq!(ranks(&run.steps.iter().map(|s| s[0]).collect::<Vec<_>>()), "56789");
    }

    #[test]
    fn runs_dedup_ranks() {
        let hand = "TH TD JC QS QH KD 2C".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);
        assert_eq!(groupings.runs().len(), 1);

        let run = &groupings.runs()[0];
        assert_eq!(run.len(), 4);

        // Each step keeps all the cards for that rank.
        let step_sizes = run.steps.iter().map(|s| s.len()).collect::<Vec<_>>();
        assert_eq!(step_sizes, vec![2, 1, 2, 1]);
        assert_eq!(ranks(&run.top_cards().collect::<Vec<_>>()), "KQJT");
        assert_eq!(run.top_cards().nth(1).unwrap().to_string(), "QS");
    }

    #[test]
    fn runs_no_ace_wrap() {
        let hand = "AH 2D 3C 4S 9H".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);

        let runs = groupings
            .runs()
            .iter()
            .map(|r| ranks(&r.top_cards().collect::<Vec<_>>()))
            .collect::<Vec<_>>();
        assert_eq!(runs, vec!["432"]);
    }

    #[test]
    fn runs_straight_flush() {
        // Five hearts in a seven ranks run but not consecutive.
        let hand = "3H 4H 5H 6H 8H 7C 9D".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);
        assert_eq!(groupings.runs().len(), 1);
        assert_eq!(groupings.runs()[0].len(), 7);
        assert!(groupings.runs()[0].straight_flush().is_none());

        let hand = "3H 4H 5H 6H 7H 8C 9D".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);
        let sf = groupings.runs()[0].straight_flush().unwrap();
        assert_eq!(ranks(&sf), "76543");
        assert!(sf.iter().all(|c| c.suit() == Suit::Hearts));
    }

    #[test]
    fn suit_groups() {
        let hand = "AH 2H 7H 9S KH 5H 5D".parse::<Hand>().unwrap();
        let groupings = Groupings::new(&hand);

        let hearts = &groupings.suits()[Suit::Hearts as usize];
        assert_eq!(ranks(hearts), "AK752");
        assert_eq!(groupings.suits()[Suit::Clubs as usize].len(), 0);
        assert_eq!(groupings.cards().len(), 7);
    }
}
