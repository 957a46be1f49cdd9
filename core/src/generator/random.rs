use super::*;

/// Uniform shuffle of the canonical deck, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self) -> Board {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut deck = canonical_deck();

        // Fisher-Yates, walking down from the last card
        for i in (1..deck.len()).rev() {
            let j = rng.random_range(0..=i);
            deck.swap(i, j);
        }

        let symbols = Array2::from_shape_fn((usize::from(ROWS), usize::from(COLS)), |(row, col)| {
            deck[row * usize::from(COLS) + col]
        });
        log::trace!("Generated board from seed {}: {:?}", self.seed, deck);

        Board::from_grid(symbols).expect("shuffled deck should keep every pair")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_counts(board: &Board) -> [usize; PAIR_COUNT] {
        let mut counts = [0; PAIR_COUNT];
        for coords in iter_coords() {
            let index = SYMBOLS
                .iter()
                .position(|&symbol| symbol == board[coords])
                .unwrap();
            counts[index] += 1;
        }
        counts
    }

    #[test]
    fn canonical_deck_holds_each_symbol_twice() {
        let deck = canonical_deck();

        assert_eq!(deck.len(), CELL_COUNT);
        for symbol in SYMBOLS {
            assert_eq!(deck.iter().filter(|&&s| s == symbol).count(), 2);
        }
    }

    #[test]
    fn generated_boards_keep_every_pair() {
        for seed in 0..200 {
            let board = RandomBoardGenerator::new(seed).generate();

            assert_eq!(symbol_counts(&board), [2; PAIR_COUNT], "seed {seed}");
        }
    }

    #[test]
    fn same_seed_generates_same_board() {
        let a = RandomBoardGenerator::new(42).generate();
        let b = RandomBoardGenerator::new(42).generate();

        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_moves_cards_around() {
        let canonical = canonical_deck();
        let shuffled = (0..20)
            .map(|seed| RandomBoardGenerator::new(seed).generate())
            .filter(|board| {
                iter_coords()
                    .zip(canonical.iter())
                    .any(|(coords, &symbol)| board[coords] != symbol)
            })
            .count();

        assert!(shuffled > 0);
    }
}
