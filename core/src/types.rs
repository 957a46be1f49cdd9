/// Single coordinate axis used for board rows and columns.
pub type Coord = u8;

/// Count type used for moves and matched pairs.
pub type Count = u32;

/// Two-dimensional 0-based coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Face value of a card.
pub type Symbol = char;

pub const ROWS: Coord = 4;
pub const COLS: Coord = 4;
pub const PAIR_COUNT: usize = 8;
pub const CELL_COUNT: usize = PAIR_COUNT * 2;

/// The fixed alphabet, one entry per pair.
pub const SYMBOLS: [Symbol; PAIR_COUNT] = ['★', '♦', '♣', '♠', '♥', '●', '▲', '■'];

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn in_bounds((row, col): Coord2) -> bool {
    row < ROWS && col < COLS
}

/// Iterates every coordinate of the grid in row-major order.
pub fn iter_coords() -> impl Iterator<Item = Coord2> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| (row, col)))
}
