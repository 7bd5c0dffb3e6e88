pub mod five_card;
pub mod four_card;
pub mod three_card;

use itertools::Itertools;

use super::bit_sequence::BitSequence;
use crate::models::Card;

pub(crate) fn all_one_suit(cards: &[Card]) -> bool {
    cards.iter().fold(0b1111u32, |mask, card| mask & card.suit.to_bit()) != 0
}

/// The `cards_held`-bit sub-patterns of each 5-rank straight window, one
/// inner vec per window, strongest window (T-J-Q-K-A) first and the wheel
/// (A-2-3-4-5) last. Every pattern of a window completes into the same
/// straight, so the draw tables assign one rank per window.
pub(crate) fn straight_window_patterns(cards_held: usize) -> Vec<Vec<u16>> {
    let seed = (1u32 << cards_held) - 1;
    let mut in_window: Vec<u16> = std::iter::once(seed)
        .chain(BitSequence::new(seed))
        .take_while(|&w| w < (1 << 5))
        .map(|w| w as u16)
        .collect();
    in_window.reverse();

    let mut windows: Vec<Vec<u16>> = (0..=8)
        .rev()
        .map(|shift| in_window.iter().map(|&p| p << shift).collect())
        .collect();

    // the wheel window, where the ace plays low
    let wheel = [12u8, 3, 2, 1, 0]
        .into_iter()
        .combinations(cards_held)
        .map(|ranks| ranks.into_iter().fold(0u16, |mask, r| mask | (1 << r)))
        .collect();
    windows.push(wheel);

    windows
}
