mod error;
mod topology;

pub use error::{ConfigError, OutOfBounds};
pub use topology::Topology;
