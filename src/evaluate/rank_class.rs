use std::fmt::{Display, Formatter};

use super::tables::five_card;

/// The nine standard hand classes, strongest first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandCategory {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
    HighCard,
}

impl HandCategory {
    /// Class of a 5-card table rank, by the category boundary constants.
    /// Ranks outside [1, 7462] do not correspond to any hand.
    pub fn from_rank(rank: u16) -> HandCategory {
        match rank {
            0 => panic!("Invalid hand rank 0"),
            r if r <= five_card::MAX_STRAIGHT_FLUSH => HandCategory::StraightFlush,
            r if r <= five_card::MAX_FOUR_OF_A_KIND => HandCategory::FourOfAKind,
            r if r <= five_card::MAX_FULL_HOUSE => HandCategory::FullHouse,
            r if r <= five_card::MAX_FLUSH => HandCategory::Flush,
            r if r <= five_card::MAX_STRAIGHT => HandCategory::Straight,
            r if r <= five_card::MAX_THREE_OF_A_KIND => HandCategory::ThreeOfAKind,
            r if r <= five_card::MAX_TWO_PAIR => HandCategory::TwoPair,
            r if r <= five_card::MAX_PAIR => HandCategory::Pair,
            r if r <= five_card::MAX_HIGH_CARD => HandCategory::HighCard,
            r => panic!("Invalid hand rank {}", r),
        }
    }
}

impl Display for HandCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        })
    }
}
