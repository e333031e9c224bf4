use eframe::egui::{InputState, Key};

/// Runtime command read from the keyboard or the window manager once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Quit,
    Randomize,
    ToggleFullscreen,
    None,
}

impl Control {
    /// Close request or Escape quits, Space randomizes, F10 toggles fullscreen.
    ///
    /// If several arrive in the same frame the first in that order wins.
    pub fn poll(input: &InputState) -> Self {
        if input.viewport().close_requested() || input.key_pressed(Key::Escape) {
            Self::Quit
        } else if input.key_pressed(Key::Space) {
            Self::Randomize
        } else if input.key_pressed(Key::F10) {
            Self::ToggleFullscreen
        } else {
            Self::None
        }
    }
}
