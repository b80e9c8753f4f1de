mod actor;
mod animation;
mod geom;
mod tiles;

use thiserror::Error;

pub use actor::Actor;
pub use animation::AnimationSequence;
pub use geom::{Rect, Vec2};
pub use tiles::{TileCatalog, TileGrid, TileId, TileWorld};

/// Construction-time validation failure. Raised once, while the
/// offending object is being built; steady-state update and draw code
/// cannot fail after construction succeeds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("animation has {frames} frames but {durations} durations; counts must match")]
    FrameDurationMismatch { frames: usize, durations: usize },
    #[error("animation must have at least one frame")]
    EmptyAnimation,
    #[error("animation frame {index} has a zero-tick duration")]
    ZeroFrameDuration { index: usize },
    #[error("tile count mismatch: expected {expected}, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },
    #[error("tile grid row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("tile id {id} at column {col}, row {row} is missing from the catalog")]
    UnknownTileId { id: u16, col: u32, row: u32 },
    #[error("tile cell size {width}x{height} must be positive on both axes")]
    NonPositiveCellSize { width: f32, height: f32 },
}
