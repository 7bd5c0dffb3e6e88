mod evaluate;
mod models;
mod thread_utils;

pub use evaluate::bit_sequence::BitSequence;
pub use evaluate::evaluator::{EvalError, Evaluator, HOLE_POOL};
pub use evaluate::rank_class::HandCategory;
pub use evaluate::tables::five_card::{self, FiveCardTable};
pub use evaluate::tables::four_card::{self, FourCardTable};
pub use evaluate::tables::three_card::{self, ThreeCardTable};
pub use models::card::{cards_string, Card, Rank, Suit};
pub use models::Deck;
