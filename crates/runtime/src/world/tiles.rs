use std::collections::HashMap;

use crate::app::rendering::{Sprite, VirtualCanvas};

use super::{ConfigurationError, Rect, Vec2};

pub type TileId = u16;

/// Rectangular row-major grid of tile ids. Immutable after load;
/// ragged input is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<TileId>,
}

impl TileGrid {
    pub fn new(width: u32, height: u32, tiles: Vec<TileId>) -> Result<Self, ConfigurationError> {
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(ConfigurationError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Builds from row slices, taking the first row's length as the
    /// required width for every row.
    pub fn from_rows(rows: Vec<Vec<TileId>>) -> Result<Self, ConfigurationError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(ConfigurationError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected,
                });
            }
        }
        let height = rows.len() as u32;
        let tiles = rows.into_iter().flatten().collect();
        TileGrid::new(expected as u32, height, tiles)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_at(&self, col: u32, row: u32) -> Option<TileId> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.tiles
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }
}

/// Maps tile ids to their drawable, if any. An id present with no
/// sprite is a solid, impassable cell that draws nothing.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    entries: HashMap<TileId, Option<Sprite>>,
}

impl TileCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_solid(&mut self, id: TileId) {
        self.entries.insert(id, None);
    }

    pub fn insert_sprite(&mut self, id: TileId, sprite: Sprite) {
        self.entries.insert(id, Some(sprite));
    }

    pub fn get(&self, id: TileId) -> Option<&Option<Sprite>> {
        self.entries.get(&id)
    }
}

impl FromIterator<(TileId, Option<Sprite>)> for TileCatalog {
    fn from_iter<I: IntoIterator<Item = (TileId, Option<Sprite>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Static tile world. The collision set is derived once here, one
/// cell-sized box per solid cell, and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TileWorld {
    grid: TileGrid,
    catalog: TileCatalog,
    cell_size: Vec2,
    collision_set: Vec<Rect>,
}

impl TileWorld {
    /// Fails when the catalog does not cover every id the grid uses,
    /// or the cell size is not positive on both axes.
    pub fn new(
        grid: TileGrid,
        catalog: TileCatalog,
        cell_size: Vec2,
    ) -> Result<Self, ConfigurationError> {
        if cell_size.x <= 0.0 || cell_size.y <= 0.0 {
            return Err(ConfigurationError::NonPositiveCellSize {
                width: cell_size.x,
                height: cell_size.y,
            });
        }

        let mut collision_set = Vec::new();
        for (index, &id) in grid.tiles.iter().enumerate() {
            let col = index as u32 % grid.width;
            let row = index as u32 / grid.width;
            let entry = catalog
                .get(id)
                .ok_or(ConfigurationError::UnknownTileId { id, col, row })?;
            if entry.is_none() {
                collision_set.push(Rect::new(
                    col as f32 * cell_size.x,
                    row as f32 * cell_size.y,
                    cell_size.x,
                    cell_size.y,
                ));
            }
        }

        Ok(Self {
            grid,
            catalog,
            cell_size,
            collision_set,
        })
    }

    pub fn collision_set(&self) -> &[Rect] {
        &self.collision_set
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Blits every drawable cell at its grid position plus `offset`,
    /// row-major. Solid cells draw nothing; the clear color shows
    /// through. Tiles never overlap, so draw order is cosmetic.
    pub fn draw(&self, canvas: &mut VirtualCanvas, offset: Vec2) {
        for (index, &id) in self.grid.tiles.iter().enumerate() {
            let Some(Some(sprite)) = self.catalog.get(id) else {
                continue;
            };
            let col = index as u32 % self.grid.width;
            let row = index as u32 / self.grid.width;
            let x = (col as f32 * self.cell_size.x + offset.x).round() as i32;
            let y = (row as f32 * self.cell_size.y + offset.y).round() as i32;
            canvas.blit(sprite, x, y);
        }
    }
}
