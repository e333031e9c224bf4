#![warn(clippy::all)]

use clap::Parser;
use conway::{App, Config, Topology};
use std::process::ExitCode;

/// Conway's Game of Life seeded with two blink puffers and a bi-gun.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = Config::WIDTH_PX)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = Config::HEIGHT_PX)]
    height: u32,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = Config::CELL_SIZE)]
    cell_size: u32,

    /// Frame rate cap
    #[arg(long, default_value_t = Config::MAX_FPS)]
    max_fps: f64,

    /// Chance of a cell being alive when randomizing with Space
    #[arg(long, default_value_t = Config::RANDOM_DENSITY)]
    density: f64,

    /// Which edge cells take part in neighbor counting
    #[arg(long, value_enum, default_value_t = Topology::Legacy)]
    topology: Topology,

    /// Seed for randomizing; drawn from entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            width_px: args.width,
            height_px: args.height,
            cell_size: args.cell_size,
            max_fps: args.max_fps,
            random_density: args.density,
            topology: args.topology,
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::init();

    let config = Config::from(Args::parse());
    let size = vec2(config.width_px as f32, config.height_px as f32);

    let app = match App::new(config) {
        Ok(app) => app,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Controls:");
    log::info!("  Space  - Randomize grid");
    log::info!("  F10    - Toggle fullscreen");
    log::info!("  Escape - Quit");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(size)
            .with_resizable(false)
            .with_decorations(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    if let Err(err) = eframe::run_native(
        Config::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    ) {
        log::error!("event loop error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
