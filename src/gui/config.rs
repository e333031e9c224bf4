use crate::Topology;
use eframe::egui::Color32;

/// Window and simulation settings chosen at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_size: u32,
    pub max_fps: f64,
    pub random_density: f64, // Chance of a cell being alive after randomizing.
    pub topology: Topology,
    pub seed: Option<u64>, // `None` seeds from entropy.
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width_px: Self::WIDTH_PX,
            height_px: Self::HEIGHT_PX,
            cell_size: Self::CELL_SIZE,
            max_fps: Self::MAX_FPS,
            random_density: Self::RANDOM_DENSITY,
            topology: Topology::default(),
            seed: None,
        }
    }
}

impl Config {
    pub const TITLE: &'static str = "Conway's Game of Life";

    pub const WIDTH_PX: u32 = 1600;
    pub const HEIGHT_PX: u32 = 850;
    pub const CELL_SIZE: u32 = 8;
    pub const MAX_FPS: f64 = 60.;
    pub const RANDOM_DENSITY: f64 = 0.1;

    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
    pub const CELL_COLOR: Color32 = Color32::WHITE;
    pub const STROKE_WIDTH: f32 = 1.;
}
