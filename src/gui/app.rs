use super::{Config, Control, FpsLimiter};
use crate::{seed_default, ConfigError, Grid};
use eframe::egui::{CentralPanel, Context, Frame, ViewportCommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub struct App {
    pub(super) config: Config,
    pub(super) grid: Option<Grid>, // Taken out while a generation is being computed.
    pub(super) generation: u64,    // Generations since startup or the last randomize.
    pub(super) rng: ChaCha8Rng,
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to `config.max_fps`.
}

impl App {
    /// Build the grid for `config` and place the startup patterns on it.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        if !(config.max_fps.is_finite() && config.max_fps > 0.) {
            return Err(ConfigError::InvalidMaxFps {
                max_fps: config.max_fps,
            });
        }
        let mut grid = Grid::new(
            config.width_px,
            config.height_px,
            config.cell_size,
            config.topology,
        )?;
        log::info!(
            "{}x{} grid, {:?} topology",
            grid.rows(),
            grid.cols(),
            grid.topology()
        );

        let rejected = seed_default(&mut grid);
        if !rejected.is_empty() {
            log::warn!("{} startup pattern(s) did not fit", rejected.len());
        }

        let rng = if let Some(x) = config.seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };

        Ok(Self {
            fps_limiter: FpsLimiter::new(config.max_fps),
            config,
            grid: Some(grid),
            generation: 0,
            rng,
        })
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the grid with a random population.
    pub fn randomize(&mut self) {
        if let Some(grid) = self.grid.take() {
            self.grid = Some(grid.randomize(self.config.random_density, &mut self.rng));
            self.generation = 0;
        }
    }

    /// Advance the simulation by one generation.
    pub fn step(&mut self) {
        if let Some(grid) = self.grid.take() {
            self.grid = Some(grid.advance());
            self.generation += 1;
        }
    }

    fn handle_control(&mut self, ctx: &Context, control: Control) {
        match control {
            Control::Quit => {
                log::info!("quitting after {} generations", self.generation);
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            Control::Randomize => {
                self.randomize();
                log::info!(
                    "randomized grid at density {}",
                    self.config.random_density
                );
            }
            Control::ToggleFullscreen => {
                let fullscreen = ctx.input(|input| input.viewport().fullscreen.unwrap_or(false));
                ctx.send_viewport_cmd(ViewportCommand::Fullscreen(!fullscreen));
            }
            Control::None => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let control = ctx.input(Control::poll);
        self.handle_control(ctx, control);

        self.step();
        if let Some(grid) = &self.grid {
            log::debug!(
                "generation {}: {} live cells, {:.1} fps",
                self.generation,
                grid.population(),
                self.fps_limiter.fps()
            );
        }

        // full-window panel
        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                ctx.request_repaint();
                self.draw(ui);
            });

        self.fps_limiter.delay();
    }
}
