mod gui;
mod population;
mod utils;

pub use gui::{cell_rect, draw_cells, App, Config, Control};
pub use population::{patterns, seed_default, stamp, Grid, Pattern, Transform};
pub use utils::{ConfigError, OutOfBounds, Topology};
