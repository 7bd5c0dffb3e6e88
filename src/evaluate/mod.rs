pub mod bit_sequence;
pub mod evaluator;
pub mod rank_class;
pub mod tables;

pub use bit_sequence::BitSequence;
pub use evaluator::{EvalError, Evaluator};
pub use rank_class::HandCategory;
