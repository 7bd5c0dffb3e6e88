use crate::models::Card;

pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Deck {
        let mut cards = Vec::with_capacity(52);
        for suit in 0..4 {
            for rank in 0..13 {
                cards.push(Card::from_ints(suit, rank));
            }
        }
        Deck { cards }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;

    #[test]
    fn test_full_deck() {
        let deck = Deck::new();
        assert_eq!(deck.cards.len(), 52);
        let seen: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(seen.len(), 52);
    }
}
