use super::{Grid, Transform};
use crate::OutOfBounds;

/// A fixed arrangement of live cells, given as `(row, col)` offsets from an origin.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [(i64, i64)],
    /// Supported orientations, indexed by rotation number.
    pub orientations: &'static [Transform],
}

impl Pattern {
    pub fn orientation(&self, rotation: usize) -> Option<Transform> {
        self.orientations.get(rotation).copied()
    }

    /// Absolute positions of the pattern's cells.
    pub fn cells(
        &self,
        origin_row: i64,
        origin_col: i64,
        transform: Transform,
    ) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.offsets.iter().map(move |&offset| {
            let (dr, dc) = transform.apply(offset);
            (origin_row + dr, origin_col + dc)
        })
    }
}

#[rustfmt::skip]
pub const BLINK_PUFFER_1: Pattern = Pattern {
    name: "blink puffer 1",
    offsets: &[
        (2, 0), (3, 0), (4, 0), (9, 0),
        (1, 1), (4, 1), (8, 1), (9, 1), (10, 1),
        (4, 2), (8, 2), (10, 2), (11, 2), (15, 2), (16, 2), (17, 2),
        (0, 3), (4, 3), (9, 3), (10, 3), (11, 3), (14, 3), (17, 3),
        (4, 4), (9, 4), (10, 4), (17, 4),
        (1, 5), (3, 5), (9, 5), (13, 5), (17, 5),
        (13, 6), (17, 6),
        (17, 7),
        (14, 8), (16, 8),
    ],
    orientations: &[Transform::FlipCols, Transform::FlipRows],
};

#[rustfmt::skip]
pub const TIME_BOMB: Pattern = Pattern {
    name: "time bomb",
    offsets: &[
        (1, 0), (0, 1), (1, 2), (3, 2), (4, 2), (4, 3), (5, 3), (3, 5), (1, 7),
        (2, 7), (3, 9), (4, 10), (2, 12), (3, 12), (0, 13), (0, 14), (1, 14),
    ],
    orientations: &[Transform::Identity, Transform::FlipRows],
};

#[rustfmt::skip]
pub const BI_GUN: Pattern = Pattern {
    name: "bi-gun",
    offsets: &[
        (8, 0), (9, 0), (8, 1), (9, 1), (2, 9), (8, 9),
        (1, 10), (2, 10), (3, 10), (7, 10), (8, 10), (9, 10),
        (0, 11), (1, 11), (3, 11), (7, 11), (9, 11), (10, 11),
        (3, 14), (7, 14), (3, 15), (7, 15),
        (7, 34), (11, 34), (7, 35), (11, 35),
        (4, 38), (5, 38), (7, 38), (11, 38), (13, 38), (14, 38),
        (5, 39), (6, 39), (7, 39), (11, 39), (12, 39), (13, 39),
        (6, 40), (12, 40), (5, 48), (6, 48), (5, 49), (6, 49),
    ],
    orientations: &[Transform::Identity],
};

#[rustfmt::skip]
pub const QUEEN_BEE: Pattern = Pattern {
    name: "queen bee",
    offsets: &[
        (0, 0), (1, 0), (5, 0), (6, 0), (2, 1), (3, 1),
        (4, 1), (1, 2), (5, 2), (2, 3), (4, 3), (3, 4),
    ],
    orientations: &[
        Transform::Rotate,
        Transform::FlipRows,
        Transform::Transpose,
        Transform::FlipCols,
    ],
};

pub const PATTERNS: [&Pattern; 4] = [&BLINK_PUFFER_1, &TIME_BOMB, &BI_GUN, &QUEEN_BEE];

/// Set the pattern's cells alive on `grid`.
///
/// If any cell lands outside the grid nothing is written.
pub fn stamp(
    grid: &mut Grid,
    pattern: &Pattern,
    origin_row: i64,
    origin_col: i64,
    transform: Transform,
) -> Result<(), OutOfBounds> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let in_bounds = |(row, col): (i64, i64)| {
        (0..rows as i64).contains(&row) && (0..cols as i64).contains(&col)
    };

    if let Some((row, col)) = pattern
        .cells(origin_row, origin_col, transform)
        .find(|&pos| !in_bounds(pos))
    {
        return Err(OutOfBounds {
            pattern: pattern.name,
            row,
            col,
            rows,
            cols,
        });
    }

    for (row, col) in pattern.cells(origin_row, origin_col, transform) {
        grid.set(row as usize, col as usize, true);
    }
    Ok(())
}

/// Two blink puffers heading in opposite directions and a bi-gun between them.
///
/// Stamps that do not fit are logged and returned; the rest are still placed.
pub fn seed_default(grid: &mut Grid) -> Vec<OutOfBounds> {
    let placements = [
        (&BLINK_PUFFER_1, 10, 10, 0),
        (&BLINK_PUFFER_1, 100, 190, 1),
        (&BI_GUN, 50, 75, 0),
    ];

    let mut rejected = vec![];
    for (pattern, row, col, rotation) in placements {
        let Some(transform) = pattern.orientation(rotation) else {
            continue;
        };
        match stamp(grid, pattern, row, col, transform) {
            Ok(()) => log::info!("placed {} at ({row}, {col})", pattern.name),
            Err(err) => {
                log::warn!("skipping stamp: {err}");
                rejected.push(err);
            }
        }
    }
    rejected
}
