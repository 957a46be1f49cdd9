use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use pairs_core::*;

const SYMBOL_COLORS: [Color; PAIR_COUNT] = [
    Color::Yellow,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::DarkYellow,
    Color::White,
];

fn symbol_color(symbol: Symbol) -> Color {
    SYMBOLS
        .iter()
        .position(|&s| s == symbol)
        .map_or(Color::Reset, |i| SYMBOL_COLORS[i])
}

/// Draws the grid with 1-based row and column labels.
pub fn draw_board(out: &mut impl Write, engine: &RoundEngine) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 1..=COLS {
        write!(out, " {col}")?;
    }
    writeln!(out)?;

    for row in 0..ROWS {
        write!(out, " {} ", row + 1)?;
        for col in 0..COLS {
            match engine.cell_at((row, col)) {
                CellView::Hidden => write!(out, " {}", '?'.dark_grey())?,
                CellView::Revealed(symbol) => {
                    write!(out, " {}", symbol.with(symbol_color(symbol)).bold())?
                }
            }
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "Moves: {}  Pairs: {}/{}",
        engine.move_count(),
        engine.match_count(),
        PAIR_COUNT
    )
}

pub fn draw_leaderboard(out: &mut impl Write, leaderboard: &Leaderboard) -> io::Result<()> {
    if leaderboard.is_empty() {
        return writeln!(out, "No scores yet. Run `pairs play` to set one.");
    }

    writeln!(out, "{}", "High scores".bold())?;
    for (rank, record) in leaderboard.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<20} {:>4}  {}",
            rank + 1,
            record.name,
            record.score,
            record.timestamp
        )?;
    }
    Ok(())
}
