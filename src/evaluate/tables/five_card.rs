use itertools::Itertools;
use std::collections::HashMap;

use super::all_one_suit;
use crate::evaluate::bit_sequence::BitSequence;
use crate::models::card::{cards_from_rank_bits, prime_product_from_hand, Card, PRIMES};

/// Number of distinct hand values:
///
/// Straight Flush   10
/// Four of a Kind   156      [(13 choose 2) * (2 choose 1)]
/// Full Houses      156      [(13 choose 2) * (2 choose 1)]
/// Flush            1277     [(13 choose 5) - 10 straight flushes]
/// Straight         10
/// Three of a Kind  858      [(13 choose 3) * (3 choose 1)]
/// Two Pair         858      [(13 choose 3) * (3 choose 2)]
/// One Pair         2860     [(13 choose 4) * (4 choose 1)]
/// High Card      + 1277     [(13 choose 5) - 10 straights]
/// -------------------------
/// TOTAL            7462
///
/// Rank 1 is a royal flush, rank 7462 is 7-5-4-3-2 unsuited.
pub const MAX_STRAIGHT_FLUSH: u16 = 10;
pub const MAX_FOUR_OF_A_KIND: u16 = 166;
pub const MAX_FULL_HOUSE: u16 = 322;
pub const MAX_FLUSH: u16 = 1599;
pub const MAX_STRAIGHT: u16 = 1609;
pub const MAX_THREE_OF_A_KIND: u16 = 2467;
pub const MAX_TWO_PAIR: u16 = 3325;
pub const MAX_PAIR: u16 = 6185;
pub const MAX_HIGH_CARD: u16 = 7462;

/// The ten straight runs as 13-bit rank masks, royal first, wheel last.
/// Suited they are the straight flushes; unsuited, the straights.
pub(crate) const STRAIGHT_PATTERNS: [u16; 10] = [
    0b1111100000000, // A K Q J T (royal)
    0b0111110000000,
    0b0011111000000,
    0b0001111100000,
    0b0000111110000,
    0b0000011111000,
    0b0000001111100,
    0b0000000111110,
    0b0000000011111,
    0b1000000001111, // 5 4 3 2 A (wheel)
];

/// Maps a 5-card hand's prime product to its rank in [1, 7462], lower is
/// stronger. The `flush` map answers when all five cards share a suit, the
/// `unsuited` map covers everything else. Built once, immutable after.
pub struct FiveCardTable {
    flush: HashMap<u64, u16>,
    unsuited: HashMap<u64, u16>,
}

impl FiveCardTable {
    pub fn new() -> FiveCardTable {
        let mut table = FiveCardTable {
            flush: HashMap::new(),
            unsuited: HashMap::new(),
        };
        table.build_flushes();
        table.build_multiples();
        table
    }

    /// Rank of five concrete cards.
    pub fn rank_of(&self, cards: &[Card]) -> u16 {
        debug_assert_eq!(cards.len(), 5);
        let product = prime_product_from_hand(cards);
        if all_one_suit(cards) {
            self.flush[&product]
        } else {
            self.unsuited[&product]
        }
    }

    /// Straight flushes and flushes, plus the unsuited reuse of the same bit
    /// sequences for straights and high cards.
    fn build_flushes(&mut self) {
        // 1277 plain flush patterns: every 5-bit word above the lowest
        // straight, minus the remaining nine straight runs
        let mut flushes: Vec<u16> = BitSequence::new(0b11111)
            .take_while(|&w| w < (1 << 13))
            .map(|w| w as u16)
            .filter(|p| !STRAIGHT_PATTERNS.contains(p))
            .collect();
        // generated ascending; ranking starts from the most powerful hand
        flushes.reverse();
        assert_eq!(flushes.len(), 1277);

        let mut rank = 1;
        for pattern in STRAIGHT_PATTERNS {
            let (_, product) = cards_from_rank_bits(pattern);
            self.flush.insert(product, rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_STRAIGHT_FLUSH);

        // plain flushes pick up right after the worst full house
        let mut rank = MAX_FULL_HOUSE + 1;
        for &pattern in &flushes {
            let (_, product) = cards_from_rank_bits(pattern);
            self.flush.insert(product, rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_FLUSH);

        self.build_straights_and_high_cards(&flushes);
    }

    /// Unique five-rank sets looked up without suit context: the same runs
    /// become straights, the same scattered patterns become high cards.
    fn build_straights_and_high_cards(&mut self, high_cards: &[u16]) {
        let mut rank = MAX_FLUSH + 1;
        for pattern in STRAIGHT_PATTERNS {
            let (_, product) = cards_from_rank_bits(pattern);
            self.unsuited.insert(product, rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_STRAIGHT);

        let mut rank = MAX_PAIR + 1;
        for &pattern in high_cards {
            let (_, product) = cards_from_rank_bits(pattern);
            self.unsuited.insert(product, rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_HIGH_CARD);
    }

    /// Pair, two pair, three of a kind, full house and four of a kind. The
    /// nested descending iteration is the ordering contract: the primary
    /// multiple rank dominates, kickers break ties in descending significance.
    fn build_multiples(&mut self) {
        let desc: Vec<usize> = (0..13).rev().collect();

        // 1) four of a kind
        let mut rank = MAX_STRAIGHT_FLUSH + 1;
        for &quad in &desc {
            for &kicker in desc.iter().filter(|&&k| k != quad) {
                let product = PRIMES[quad].pow(4) * PRIMES[kicker];
                self.unsuited.insert(product, rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_FOUR_OF_A_KIND);

        // 2) full house
        let mut rank = MAX_FOUR_OF_A_KIND + 1;
        for &trip in &desc {
            for &pair in desc.iter().filter(|&&p| p != trip) {
                let product = PRIMES[trip].pow(3) * PRIMES[pair].pow(2);
                self.unsuited.insert(product, rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_FULL_HOUSE);

        // 3) three of a kind
        let mut rank = MAX_STRAIGHT + 1;
        for &trip in &desc {
            for kickers in desc.iter().copied().filter(|&k| k != trip).combinations(2) {
                let product = PRIMES[trip].pow(3) * PRIMES[kickers[0]] * PRIMES[kickers[1]];
                self.unsuited.insert(product, rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_THREE_OF_A_KIND);

        // 4) two pair
        let mut rank = MAX_THREE_OF_A_KIND + 1;
        for pairs in desc.iter().copied().combinations(2) {
            let (hi, lo) = (pairs[0], pairs[1]);
            for &kicker in desc.iter().filter(|&&k| k != hi && k != lo) {
                let product = PRIMES[hi].pow(2) * PRIMES[lo].pow(2) * PRIMES[kicker];
                self.unsuited.insert(product, rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_TWO_PAIR);

        // 5) pair
        let mut rank = MAX_TWO_PAIR + 1;
        for &pair in &desc {
            for kickers in desc.iter().copied().filter(|&k| k != pair).combinations(3) {
                let product = PRIMES[pair].pow(2)
                    * PRIMES[kickers[0]]
                    * PRIMES[kickers[1]]
                    * PRIMES[kickers[2]];
                self.unsuited.insert(product, rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_PAIR);
    }
}

impl Default for FiveCardTable {
    fn default() -> Self {
        FiveCardTable::new()
    }
}
