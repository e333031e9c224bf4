mod app;
mod config;
mod controls;
mod draw;
mod fps_limit;

pub use app::App;
pub use config::Config;
pub use controls::Control;
pub use draw::{cell_rect, draw_cells};
use fps_limit::FpsLimiter;
