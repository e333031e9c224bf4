mod grid;
pub mod patterns;
mod transform;

#[cfg(test)]
mod tests;

pub use grid::Grid;
pub use patterns::{seed_default, stamp, Pattern};
pub use transform::Transform;
