use thiserror::Error;

/// Invalid startup settings, detected before the grid is allocated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("{width_px}x{height_px} px window holds no {cell_size} px cells")]
    GridTooSmall {
        width_px: u32,
        height_px: u32,
        cell_size: u32,
    },

    #[error("frame rate cap must be a positive number, got {max_fps}")]
    InvalidMaxFps { max_fps: f64 },
}

/// A stamped pattern cell that falls outside the grid.
///
/// The whole stamp is rejected when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{pattern}: cell ({row}, {col}) is outside the {rows}x{cols} grid")]
pub struct OutOfBounds {
    pub pattern: &'static str,
    pub row: i64,
    pub col: i64,
    pub rows: usize,
    pub cols: usize,
}
