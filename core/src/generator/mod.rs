use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self) -> Board;
}

/// Every symbol twice, in alphabet order, before any shuffling.
pub fn canonical_deck() -> [Symbol; CELL_COUNT] {
    core::array::from_fn(|i| SYMBOLS[i / 2])
}
