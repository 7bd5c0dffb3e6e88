use itertools::Itertools;
use thiserror::Error;

use crate::evaluate::rank_class::HandCategory;
use crate::evaluate::tables::five_card::FiveCardTable;
use crate::models::card::Card;

/// Leading cards of an 8, 9 or 10 card hand that form the hole pool. The
/// remainder is the board.
pub const HOLE_POOL: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("unsupported hand size {0}, expected 5 to 10 cards")]
    UnsupportedHandSize(usize),
}

/// Ranks hands of 5 to 10 cards against the 5-card table.
///
/// 5 cards rank directly. 6 and 7 card hands take the best 5-card subset.
/// 8 to 10 card hands are scored Omaha style: exactly two cards from the
/// 5-card hole pool and exactly three from the board.
pub struct Evaluator {
    five_card: FiveCardTable,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator {
            five_card: FiveCardTable::new(),
        }
    }

    /// Best achievable rank for the hand, 1 (strongest) to 7462 (weakest).
    pub fn evaluate(&self, cards: &[Card]) -> Result<u16, EvalError> {
        match cards.len() {
            5 => Ok(self.five_card.rank_of(cards)),
            6 | 7 => Ok(self.best_five_of(cards)),
            8..=10 => Ok(self.evaluate_omaha(cards)),
            n => Err(EvalError::UnsupportedHandSize(n)),
        }
    }

    /// The category (flush, two pair, ...) of the hand's best rank.
    pub fn category(&self, cards: &[Card]) -> Result<HandCategory, EvalError> {
        self.evaluate(cards).map(HandCategory::from_rank)
    }

    fn best_five_of(&self, cards: &[Card]) -> u16 {
        cards
            .iter()
            .copied()
            .combinations(5)
            .map(|five| self.five_card.rank_of(&five))
            .min()
            .unwrap_or(u16::MAX)
    }

    fn evaluate_omaha(&self, cards: &[Card]) -> u16 {
        let (hole, board) = cards.split_at(HOLE_POOL);
        let mut best = u16::MAX;
        for two in hole.iter().copied().combinations(2) {
            for three in board.iter().copied().combinations(3) {
                let five = [two[0], two[1], three[0], three[1], three[2]];
                best = best.min(self.five_card.rank_of(&five));
            }
        }
        best
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}
