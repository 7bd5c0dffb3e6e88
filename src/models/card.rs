use itertools::Itertools;
use rand::Rng;
use std::fmt::{Display, Formatter};

use crate::thread_utils::with_rng;

/// One prime per rank, the smallest prime for the lowest rank
/// (deuce=2, trey=3, ..., ace=41). The product of a hand's rank primes is a
/// perfect-hash key: two rank multisets share a product only if they are the
/// same multiset.
pub const PRIMES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[derive(Default)]
pub enum Suit {
    #[default]
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Suit::Spades => "s",
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
        })
    }
}

impl Suit {
    pub fn from_int(suit: u8) -> Suit {
        match suit {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            3 => Suit::Clubs,
            _ => panic!("Invalid suit"),
        }
    }

    pub fn to_int(&self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    /// Suit as a one-hot bitmask; ANDing the masks of a hand leaves a set bit
    /// only when every card shares the suit.
    pub fn to_bit(&self) -> u32 {
        1 << self.to_int()
    }

    pub fn random() -> Suit {
        with_rng(|rng| Suit::from_int(rng.gen_range(0..4)))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[derive(Default)]
pub enum Rank {
    #[default]
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        })
    }
}

impl Rank {
    pub fn from_int(rank: u8) -> Rank {
        match rank {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("Invalid rank"),
        }
    }

    pub fn to_int(&self) -> u8 {
        *self as u8
    }

    pub fn to_prime(&self) -> u64 {
        PRIMES[self.to_int() as usize]
    }

    pub fn to_bit(&self) -> u16 {
        1 << self.to_int()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

pub fn cards_string(cards: &[Card]) -> String {
    cards.iter().map(|card| card.to_string()).join(" ")
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank }
    }

    pub fn from_int(card_number: u8) -> Card {
        let suit = card_number / 13;
        let rank = card_number % 13;
        Card::new(Suit::from_int(suit), Rank::from_int(rank))
    }

    pub fn to_int(&self) -> u8 {
        self.suit.to_int() * 13 + self.rank.to_int()
    }

    pub fn from_ints(suit: u8, rank: u8) -> Card {
        Card {
            suit: Suit::from_int(suit),
            rank: Rank::from_int(rank),
        }
    }

    /// Deal `num_cards` distinct random cards.
    pub fn new_random_cards(num_cards: usize) -> Vec<Card> {
        let mut taken = [false; 52];
        let mut res = Vec::with_capacity(num_cards);
        with_rng(|rng|
            while res.len() < num_cards {
                let card_int = rng.gen::<u8>() % 52;
                if taken[card_int as usize] {
                    continue;
                }
                taken[card_int as usize] = true;
                res.push(Card::from_int(card_int));
            }
        );
        res
    }

    /// Deal `n` distinct random cards avoiding the ones already out.
    pub fn more_cards_avoiding(existing_cards: &[Card], n: usize) -> Vec<Card> {
        let mut taken = [false; 52];
        for card in existing_cards {
            taken[card.to_int() as usize] = true;
        }
        let mut res = Vec::with_capacity(n);
        with_rng(|rng|
            while res.len() < n {
                let card_int = (rng.gen::<u8>() % 52) as usize;
                if taken[card_int] {
                    continue;
                }
                taken[card_int] = true;
                res.push(Card::from_int(card_int as u8));
            }
        );
        res
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_int().cmp(&other.to_int())
    }
}

/// The cards a 13-bit rank mask stands for (one canonical card per set bit,
/// suits immaterial) together with the product of their rank primes.
pub fn cards_from_rank_bits(rank_bits: u16) -> (Vec<Card>, u64) {
    let mut cards = Vec::new();
    let mut product = 1u64;
    for rank in 0..13u8 {
        if rank_bits & (1 << rank) != 0 {
            cards.push(Card::new(Suit::Spades, Rank::from_int(rank)));
            product *= PRIMES[rank as usize];
        }
    }
    (cards, product)
}

pub fn prime_product_from_hand(cards: &[Card]) -> u64 {
    cards.iter().map(|card| card.rank.to_prime()).product()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn test_suit_from_int() {
        assert_eq!(Suit::from_int(0), Suit::Spades);
        assert_eq!(Suit::from_int(1), Suit::Hearts);
        assert_eq!(Suit::from_int(2), Suit::Diamonds);
        assert_eq!(Suit::from_int(3), Suit::Clubs);
    }

    #[test]
    #[should_panic(expected = "Invalid suit")]
    fn test_suit_from_int_invalid() {
        Suit::from_int(4);
    }

    #[test]
    #[should_panic(expected = "Invalid rank")]
    fn test_rank_from_int_invalid() {
        Rank::from_int(13);
    }

    #[test]
    fn deck_to_int_roundtrip() {
        let mut seen = HashSet::new();
        for i in 0..52 {
            let card = Card::from_int(i);
            assert!(!seen.contains(&card));
            seen.insert(card);
            assert_eq!(card.to_int(), i);
        }
    }

    #[rstest]
    #[case(Rank::Two, 2)]
    #[case(Rank::Five, 7)]
    #[case(Rank::Ten, 23)]
    #[case(Rank::Ace, 41)]
    fn test_rank_primes(#[case] rank: Rank, #[case] prime: u64) {
        assert_eq!(rank.to_prime(), prime);
        assert_eq!(PRIMES[rank.to_int() as usize], prime);
    }

    #[rstest]
    #[case(Card::new(Suit::Spades, Rank::Ace), "As")]
    #[case(Card::new(Suit::Hearts, Rank::Ten), "Th")]
    #[case(Card::new(Suit::Clubs, Rank::Two), "2c")]
    fn test_card_display(#[case] card: Card, #[case] expected: &str) {
        assert_eq!(card.to_string(), expected);
    }

    #[test]
    fn test_new_random_cards_are_distinct() {
        for _ in 0..1_000 {
            let cards = Card::new_random_cards(10);
            let seen: HashSet<Card> = cards.iter().copied().collect();
            assert_eq!(seen.len(), 10);
        }
    }

    #[test]
    fn test_more_cards_avoiding() {
        let existing_cards = Card::new_random_cards(5);
        let new_cards = Card::more_cards_avoiding(&existing_cards, 4);
        assert_eq!(new_cards.len(), 4);
        for card in new_cards {
            assert!(!existing_cards.contains(&card));
        }
    }

    #[test]
    fn test_cards_from_rank_bits_royal() {
        // xxxAKQJT xxxxxxxx
        let (cards, product) = cards_from_rank_bits(0b1111100000000);
        assert_eq!(cards.len(), 5);
        assert_eq!(product, 23 * 29 * 31 * 37 * 41);
        assert!(cards.iter().any(|c| c.rank == Rank::Ace));
        assert!(cards.iter().any(|c| c.rank == Rank::Ten));
    }

    #[test]
    fn test_cards_from_rank_bits_matches_hand_product() {
        let (cards, product) = cards_from_rank_bits(0b1000000001111);
        assert_eq!(product, prime_product_from_hand(&cards));
    }

    #[test]
    fn test_prime_product_counts_multiplicity() {
        let pair = vec![
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Clubs, Rank::King),
        ];
        assert_eq!(prime_product_from_hand(&pair), 41 * 41 * 37);
    }
}
