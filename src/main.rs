use omaha_eval::{cards_string, Card, Evaluator, FourCardTable, ThreeCardTable, HOLE_POOL};

fn main() {
    let evaluator = Evaluator::new();
    let cards = Card::new_random_cards(10);
    let (hole, board) = cards.split_at(HOLE_POOL);
    println!("hole pool: {}", cards_string(hole));
    println!("board:     {}", cards_string(board));

    match evaluator.evaluate(&cards) {
        Ok(rank) => {
            let category = omaha_eval::HandCategory::from_rank(rank);
            println!("best rank: {} ({})", rank, category);
        }
        Err(err) => println!("evaluation failed: {}", err),
    }

    let three = ThreeCardTable::new();
    if let Some(outcomes) = three.outcomes(&hole[..3]) {
        println!(
            "draw outcomes for {}: {:?}",
            cards_string(&hole[..3]),
            outcomes
        );
    }

    let four = FourCardTable::new();
    if let Some(outcomes) = four.outcomes(&hole[..4]) {
        println!(
            "draw outcomes for {}: {:?}",
            cards_string(&hole[..4]),
            outcomes
        );
    }
}
