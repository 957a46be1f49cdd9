use crate::*;

/// Parses a 1-based `row,col` pick into 0-based coordinates.
pub fn parse_pick(input: &str) -> Result<Coord2> {
    let mut parts = input.trim().split(',');
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GameError::InvalidInput);
    };

    let row = parse_axis(row, ROWS)?;
    let col = parse_axis(col, COLS)?;
    Ok((row, col))
}

fn parse_axis(part: &str, len: Coord) -> Result<Coord> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidInput);
    }
    // digits only, so a parse failure can only mean overflow
    let value: u32 = part.parse().map_err(|_| GameError::OutOfRange)?;
    if (1..=u32::from(len)).contains(&value) {
        Ok((value - 1) as Coord)
    } else {
        Err(GameError::OutOfRange)
    }
}
