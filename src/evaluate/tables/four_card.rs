use itertools::Itertools;
use std::collections::{HashMap, HashSet};

use super::{all_one_suit, straight_window_patterns};
use crate::evaluate::bit_sequence::BitSequence;
use crate::models::card::{cards_from_rank_bits, prime_product_from_hand, Card, PRIMES};

/// Number of distinct 4-card combos that can still reach each class with one
/// card to come:
///
/// Straight Flush   10       one per straight window
/// Four of a Kind   156      13*12 made sets with kicker
/// Full Houses      312      13*12 sets with kicker + 13*12 two-pair shapes
/// Flush            674      (13 choose 4) - 41 straight-flush window patterns
/// Straight         10       one per straight window
/// Three of a Kind  858      pair plus two kickers
/// Two Pair         858      pair plus two kickers
/// One Pair         715      (13 choose 4) unpaired
pub const MAX_STRAIGHT_FLUSH: u16 = 10;
pub const MAX_FOUR_OF_A_KIND: u16 = 166;
pub const MAX_FULL_HOUSE: u16 = 478;
pub const MAX_FLUSH: u16 = 1152;
pub const MAX_STRAIGHT: u16 = 1162;
pub const MAX_THREE_OF_A_KIND: u16 = 2020;
pub const MAX_TWO_PAIR: u16 = 2878;
pub const MAX_PAIR: u16 = 3593;

/// Maps a 4-card (turn) hand's prime product to the ordered list of final
/// ranks one more card can complete it into. Same append-on-reappearance
/// contract as the 3-card table.
pub struct FourCardTable {
    flush: HashMap<u64, Vec<u16>>,
    unsuited: HashMap<u64, Vec<u16>>,
}

impl FourCardTable {
    pub fn new() -> FourCardTable {
        let mut table = FourCardTable {
            flush: HashMap::new(),
            unsuited: HashMap::new(),
        };
        table.build_flushes();
        table.build_multiples();
        table
    }

    /// Reachable final ranks for four concrete cards, or `None` when the
    /// signature has no tabulated improvement in the consulted map.
    pub fn outcomes(&self, cards: &[Card]) -> Option<&[u16]> {
        debug_assert_eq!(cards.len(), 4);
        let product = prime_product_from_hand(cards);
        let map = if all_one_suit(cards) { &self.flush } else { &self.unsuited };
        map.get(&product).map(|ranks| ranks.as_slice())
    }

    fn build_flushes(&mut self) {
        let windows = straight_window_patterns(4);

        let mut rank = 1;
        for window in &windows {
            for &pattern in window {
                let (_, product) = cards_from_rank_bits(pattern);
                self.flush.entry(product).or_default().push(rank);
            }
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_STRAIGHT_FLUSH);

        let window_patterns: HashSet<u16> = windows.iter().flatten().copied().collect();
        let mut flushes: Vec<u16> = std::iter::once(0b1111u32)
            .chain(BitSequence::new(0b1111))
            .take_while(|&w| w < (1 << 13))
            .map(|w| w as u16)
            .filter(|p| !window_patterns.contains(p))
            .collect();
        flushes.reverse();

        let mut rank = MAX_FULL_HOUSE + 1;
        for &pattern in &flushes {
            let (_, product) = cards_from_rank_bits(pattern);
            self.flush.entry(product).or_default().push(rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_FLUSH);

        self.build_straights(&windows);
    }

    fn build_straights(&mut self, windows: &[Vec<u16>]) {
        let mut rank = MAX_FLUSH + 1;
        for window in windows {
            for &pattern in window {
                let (_, product) = cards_from_rank_bits(pattern);
                self.unsuited.entry(product).or_default().push(rank);
            }
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_STRAIGHT);
    }

    fn build_multiples(&mut self) {
        let desc: Vec<usize> = (0..13).rev().collect();

        // 1) four of a kind: a made set with its kicker
        let mut rank = MAX_STRAIGHT_FLUSH + 1;
        for &trip in &desc {
            for &kicker in desc.iter().filter(|&&k| k != trip) {
                let product = PRIMES[trip].pow(3) * PRIMES[kicker];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_FOUR_OF_A_KIND);

        // 2) full house: a made set pairing its kicker, or two pair filling
        //    either way; the unordered two-pair product shows up twice and
        //    accumulates both outcome ranks
        let mut rank = MAX_FOUR_OF_A_KIND + 1;
        for &trip in &desc {
            for &kicker in desc.iter().filter(|&&k| k != trip) {
                let product = PRIMES[trip].pow(3) * PRIMES[kicker];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        for &hi in &desc {
            for &lo in desc.iter().filter(|&&l| l != hi) {
                let product = PRIMES[hi].pow(2) * PRIMES[lo].pow(2);
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_FULL_HOUSE);

        // 3) three of a kind: a pair plus two kickers
        let mut rank = MAX_STRAIGHT + 1;
        for &pair in &desc {
            for kickers in desc.iter().copied().filter(|&k| k != pair).combinations(2) {
                let product = PRIMES[pair].pow(2) * PRIMES[kickers[0]] * PRIMES[kickers[1]];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_THREE_OF_A_KIND);

        // 4) two pair: the same pair-plus-kickers shapes, pairing a kicker
        let mut rank = MAX_THREE_OF_A_KIND + 1;
        for &pair in &desc {
            for kickers in desc.iter().copied().filter(|&k| k != pair).combinations(2) {
                let product = PRIMES[pair].pow(2) * PRIMES[kickers[0]] * PRIMES[kickers[1]];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_TWO_PAIR);

        // 5) one pair: from four unpaired ranks
        let mut rank = MAX_TWO_PAIR + 1;
        for ranks in desc.iter().copied().combinations(4) {
            let product =
                PRIMES[ranks[0]] * PRIMES[ranks[1]] * PRIMES[ranks[2]] * PRIMES[ranks[3]];
            self.unsuited.entry(product).or_default().push(rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_PAIR);
    }
}

impl Default for FourCardTable {
    fn default() -> Self {
        FourCardTable::new()
    }
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;
    use super::*;
    use crate::models::card::{Rank, Suit};

    lazy_static! {
        static ref TABLE: FourCardTable = FourCardTable::new();
    }

    fn suited(ranks: [Rank; 4]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Diamonds, r)).collect()
    }

    fn offsuit(ranks: [Rank; 4]) -> Vec<Card> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, &r)| Card::new(Suit::from_int((i % 4) as u8), r))
            .collect()
    }

    #[test]
    fn entry_totals() {
        let flush_total: usize = TABLE.flush.values().map(|v| v.len()).sum();
        assert_eq!(flush_total, 50 + 674);

        let unsuited_total: usize = TABLE.unsuited.values().map(|v| v.len()).sum();
        assert_eq!(unsuited_total, 50 + 156 + 312 + 858 + 858 + 715);
    }

    #[test]
    fn set_with_kicker_reaches_quads_and_full_house() {
        let hand = vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Diamonds, Rank::Ace),
            Card::new(Suit::Spades, Rank::King),
        ];
        assert_eq!(TABLE.outcomes(&hand), Some(&[11, 167][..]));
    }

    #[test]
    fn two_pair_shape_fills_either_way() {
        let hand = vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Diamonds, Rank::King),
            Card::new(Suit::Spades, Rank::King),
        ];
        // aces full first (hi=A, lo=K is the first two-pair entry), then
        // kings full when the loop reaches hi=K, lo=A
        assert_eq!(TABLE.outcomes(&hand), Some(&[323, 335][..]));
    }

    #[test]
    fn pair_with_kickers_reaches_trips_and_two_pair() {
        let hand = vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Diamonds, Rank::King),
            Card::new(Suit::Spades, Rank::Queen),
        ];
        assert_eq!(
            TABLE.outcomes(&hand),
            Some(&[MAX_STRAIGHT + 1, MAX_THREE_OF_A_KIND + 1][..])
        );
    }

    #[test]
    fn royal_draw_is_window_one() {
        let hand = suited([Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert_eq!(TABLE.outcomes(&hand), Some(&[1][..]));
    }

    #[test]
    fn open_ended_run_accumulates_two_windows() {
        let hand = suited([Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert_eq!(TABLE.outcomes(&hand), Some(&[1, 2][..]));
    }

    #[test]
    fn weakest_plain_flush_draw() {
        // 2 3 4 7 suited lies in no straight window and is the lowest pattern
        let hand = suited([Rank::Seven, Rank::Four, Rank::Three, Rank::Two]);
        assert_eq!(TABLE.outcomes(&hand), Some(&[MAX_FLUSH][..]));
    }

    #[test]
    fn unpaired_hand_only_reaches_pair() {
        let hand = offsuit([Rank::Nine, Rank::Seven, Rank::Three, Rank::Two]);
        let outcomes = TABLE.outcomes(&hand).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0] > MAX_TWO_PAIR && outcomes[0] <= MAX_PAIR);
    }

    #[test]
    fn rebuild_is_identical() {
        let other = FourCardTable::new();
        assert_eq!(TABLE.flush, other.flush);
        assert_eq!(TABLE.unsuited, other.unsuited);
    }
}
