use itertools::Itertools;
use std::collections::{HashMap, HashSet};

use super::{all_one_suit, straight_window_patterns};
use crate::evaluate::bit_sequence::BitSequence;
use crate::models::card::{cards_from_rank_bits, prime_product_from_hand, Card, PRIMES};

/// Number of distinct 3-card combos that can still reach each class with two
/// cards to come:
///
/// Straight Flush   10       one per straight window
/// Four of a Kind   169      13 made sets + 13*12 pairs with kicker
/// Full Houses      169      13 made sets + 13*12 pairs with kicker
/// Flush            222      (13 choose 3) - 64 straight-flush window patterns
/// Straight         10       one per straight window
/// Three of a Kind  442      13*12 pairs + (13 choose 3) unpaired
/// Two Pair         442      13*12 pairs + (13 choose 3) unpaired
/// One Pair         286      (13 choose 3) unpaired
///
/// High card alone is not an outcome here: an unpaired flop hand is only
/// interesting for what it can still turn into.
pub const MAX_STRAIGHT_FLUSH: u16 = 10;
pub const MAX_FOUR_OF_A_KIND: u16 = 179;
pub const MAX_FULL_HOUSE: u16 = 348;
pub const MAX_FLUSH: u16 = 570;
pub const MAX_STRAIGHT: u16 = 580;
pub const MAX_THREE_OF_A_KIND: u16 = 1022;
pub const MAX_TWO_PAIR: u16 = 1464;
pub const MAX_PAIR: u16 = 1750;

/// Maps a 3-card (flop) hand's prime product to the ordered list of final
/// ranks it can complete into. A signature reached by several construction
/// passes accumulates one outcome per pass, never overwriting earlier ones.
pub struct ThreeCardTable {
    flush: HashMap<u64, Vec<u16>>,
    unsuited: HashMap<u64, Vec<u16>>,
}

impl ThreeCardTable {
    pub fn new() -> ThreeCardTable {
        let mut table = ThreeCardTable {
            flush: HashMap::new(),
            unsuited: HashMap::new(),
        };
        table.build_flushes();
        table.build_multiples();
        table
    }

    /// Reachable final ranks for three concrete cards, or `None` when the
    /// signature has no tabulated improvement in the consulted map.
    pub fn outcomes(&self, cards: &[Card]) -> Option<&[u16]> {
        debug_assert_eq!(cards.len(), 3);
        let product = prime_product_from_hand(cards);
        let map = if all_one_suit(cards) { &self.flush } else { &self.unsuited };
        map.get(&product).map(|ranks| ranks.as_slice())
    }

    fn build_flushes(&mut self) {
        let windows = straight_window_patterns(3);

        // every pattern of a window draws at the same straight flush
        let mut rank = 1;
        for window in &windows {
            for &pattern in window {
                let (_, product) = cards_from_rank_bits(pattern);
                self.flush.entry(product).or_default().push(rank);
            }
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_STRAIGHT_FLUSH);

        // plain flush draws are whatever 3-rank patterns are left
        let window_patterns: HashSet<u16> = windows.iter().flatten().copied().collect();
        let mut flushes: Vec<u16> = std::iter::once(0b111u32)
            .chain(BitSequence::new(0b111))
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

    /// The same windows reinterpreted without suit context.
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

    /// Each multiple class collects its source shapes in descending strength
    /// order: the shapes already holding the most of the class first, then
    /// the lighter shapes that need more help.
    fn build_multiples(&mut self) {
        let desc: Vec<usize> = (0..13).rev().collect();

        // 1) four of a kind: from a made set, or from a pair plus kicker
        let mut rank = MAX_STRAIGHT_FLUSH + 1;
        for &trip in &desc {
            self.unsuited.entry(PRIMES[trip].pow(3)).or_default().push(rank);
            rank += 1;
        }
        for &pair in &desc {
            for &kicker in desc.iter().filter(|&&k| k != pair) {
                let product = PRIMES[pair].pow(2) * PRIMES[kicker];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_FOUR_OF_A_KIND);

        // 2) full house: the same source shapes at their own base rank
        let mut rank = MAX_FOUR_OF_A_KIND + 1;
        for &trip in &desc {
            self.unsuited.entry(PRIMES[trip].pow(3)).or_default().push(rank);
            rank += 1;
        }
        for &pair in &desc {
            for &kicker in desc.iter().filter(|&&k| k != pair) {
                let product = PRIMES[pair].pow(2) * PRIMES[kicker];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        assert_eq!(rank - 1, MAX_FULL_HOUSE);

        // 3) three of a kind: from a pair plus kicker, or from three
        //    unpaired ranks
        let mut rank = MAX_STRAIGHT + 1;
        for &pair in &desc {
            for &kicker in desc.iter().filter(|&&k| k != pair) {
                let product = PRIMES[pair].pow(2) * PRIMES[kicker];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        for ranks in desc.iter().copied().combinations(3) {
            let product = PRIMES[ranks[0]] * PRIMES[ranks[1]] * PRIMES[ranks[2]];
            self.unsuited.entry(product).or_default().push(rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_THREE_OF_A_KIND);

        // 4) two pair: pairing the kicker of an existing pair, or pairing
        //    two of three unpaired ranks
        let mut rank = MAX_THREE_OF_A_KIND + 1;
        for &pair in &desc {
            for &kicker in desc.iter().filter(|&&k| k != pair) {
                let product = PRIMES[pair].pow(2) * PRIMES[kicker];
                self.unsuited.entry(product).or_default().push(rank);
                rank += 1;
            }
        }
        for ranks in desc.iter().copied().combinations(3) {
            let product = PRIMES[ranks[0]] * PRIMES[ranks[1]] * PRIMES[ranks[2]];
            self.unsuited.entry(product).or_default().push(rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_TWO_PAIR);

        // 5) one pair: from three unpaired ranks
        let mut rank = MAX_TWO_PAIR + 1;
        for ranks in desc.iter().copied().combinations(3) {
            let product = PRIMES[ranks[0]] * PRIMES[ranks[1]] * PRIMES[ranks[2]];
            self.unsuited.entry(product).or_default().push(rank);
            rank += 1;
        }
        assert_eq!(rank - 1, MAX_PAIR);
    }
}

impl Default for ThreeCardTable {
    fn default() -> Self {
        ThreeCardTable::new()
    }
}
