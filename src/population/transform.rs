/// Orientation applied to a pattern's `(row, col)` offsets before stamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// `(dr, dc)`
    Identity,
    /// `(-dr, dc)`, mirrored top to bottom.
    FlipRows,
    /// `(dr, -dc)`, mirrored left to right.
    FlipCols,
    /// `(dc, dr)`, mirrored along the main diagonal.
    Transpose,
    /// `(-dc, dr)`, a quarter turn.
    Rotate,
}

impl Transform {
    pub fn apply(self, (dr, dc): (i64, i64)) -> (i64, i64) {
        match self {
            Self::Identity => (dr, dc),
            Self::FlipRows => (-dr, dc),
            Self::FlipCols => (dr, -dc),
            Self::Transpose => (dc, dr),
            Self::Rotate => (-dc, dr),
        }
    }
}
