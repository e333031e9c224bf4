use crate::{ConfigError, Topology};
use rand::Rng;

/// One generation of the field: a fixed `rows x cols` array of cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
    topology: Topology,
}

impl Grid {
    /// Create a blank grid covering a `width_px x height_px` window
    /// with square cells of side `cell_size`.
    pub fn new(
        width_px: u32,
        height_px: u32,
        cell_size: u32,
        topology: Topology,
    ) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let (cols, rows) = ((width_px / cell_size) as usize, (height_px / cell_size) as usize);
        if rows == 0 || cols == 0 {
            return Err(ConfigError::GridTooSmall {
                width_px,
                height_px,
                cell_size,
            });
        }
        Ok(Self::blank(rows, cols, topology))
    }

    /// Create a blank grid with the given dimensions in cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero. Use [`Grid::new`] to get a
    /// [`ConfigError`] instead.
    pub fn blank(rows: usize, cols: usize, topology: Topology) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
            topology,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[col + row * self.cols]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[col + row * self.cols] = alive;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of live cells among the 8 surrounding positions.
    ///
    /// Which positions are eligible near the edges depends on the topology;
    /// with [`Topology::Legacy`] row 0 and column 0 are never counted.
    /// On a torus narrower than 3 cells each wrapped neighbor is counted once,
    /// and the cell never counts itself.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        let mut count = 0;
        let mut counted = [(0, 0); 8];
        let mut n_counted = 0;
        for i in row as isize - 1..=row as isize + 1 {
            for j in col as isize - 1..=col as isize + 1 {
                if i == row as isize && j == col as isize {
                    continue;
                }
                let pos = match self.topology {
                    Topology::Legacy => {
                        (i > 0 && i < rows && j > 0 && j < cols).then_some((i, j))
                    }
                    Topology::Clamped => {
                        (i >= 0 && i < rows && j >= 0 && j < cols).then_some((i, j))
                    }
                    Topology::Torus => Some((i.rem_euclid(rows), j.rem_euclid(cols))),
                };
                let Some((i, j)) = pos else {
                    continue;
                };
                let is_self = (i, j) == (row as isize, col as isize);
                if is_self || counted[..n_counted].contains(&(i, j)) {
                    continue;
                }
                counted[n_counted] = (i, j);
                n_counted += 1;
                count += self.get(i as usize, j as usize) as u8;
            }
        }
        count
    }

    /// Compute the next generation (B3/S23), consuming the current one.
    ///
    /// Every neighbor count reads the old cells only.
    pub fn advance(self) -> Self {
        let mut cells = vec![false; self.cells.len()];
        for row in 0..self.rows {
            for col in 0..self.cols {
                let neibs = self.neighbor_count(row, col);
                cells[col + row * self.cols] = if self.get(row, col) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        Self { cells, ..self }
    }

    /// Replace every cell with a fresh one that is alive with probability `density`.
    ///
    /// Densities at or above 1 fill the grid; at or below 0 (or NaN) empty it.
    pub fn randomize(self, density: f64, rng: &mut impl Rng) -> Self {
        let cells = (0..self.cells.len())
            .map(|_| rng.gen::<f64>() < density)
            .collect();
        Self { cells, ..self }
    }

    /// All-dead grid of the same shape.
    pub fn clear(self) -> Self {
        Self::blank(self.rows, self.cols, self.topology)
    }

    /// Coordinates `(row, col)` of live cells, column by column.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.cols)
            .flat_map(move |col| (0..self.rows).map(move |row| (row, col)))
            .filter(|&(row, col)| self.get(row, col))
    }
}
