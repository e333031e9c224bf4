/// Describes which cells take part in neighbor counting near the edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Topology {
    /// Neighbors are counted only strictly inside `(0, rows) x (0, cols)`.
    ///
    /// Row 0 and column 0 never contribute to a neighbor count.
    #[default]
    Legacy,
    /// Every in-bounds neighbor is counted, including row 0 and column 0.
    Clamped,
    /// Bounds of the field are stitched together.
    Torus,
}
