use std::fs;
use std::path::Path;

use runtime::{TileGrid, TileId};

/// Parses the board text format: one row per line, one decimal digit
/// per cell. Rows must all be the same length; blank trailing lines
/// are ignored. The digit is the tile id looked up in the catalog.
pub(crate) fn parse_tile_grid(text: &str) -> Result<TileGrid, String> {
    let mut rows: Vec<Vec<TileId>> = Vec::new();
    for (row, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut cells = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or_else(|| format!("row {row}, column {col}: '{ch}' is not a digit"))?;
            cells.push(digit as TileId);
        }
        rows.push(cells);
    }
    if rows.is_empty() {
        return Err("map file holds no rows".to_string());
    }
    TileGrid::from_rows(rows).map_err(|error| error.to_string())
}

pub(crate) fn load_tile_grid(path: &Path) -> Result<TileGrid, String> {
    let text = fs::read_to_string(path)
        .map_err(|error| format!("failed to read map file {}: {error}", path.display()))?;
    parse_tile_grid(&text)
}
