use crate::{Config, LifeError};
use rand::Rng;
use std::fmt;

/// Wrapped predecessor of `i` on an axis of length `n`.
#[inline]
pub fn wrap_prev(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

/// Wrapped successor of `i` on an axis of length `n`.
#[inline]
pub fn wrap_next(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// Fixed-size field of cells stored row-major; `true` is alive.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid of dead cells.
    ///
    /// Both dimensions must be at least 1.
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) -> Result<(), LifeError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, LifeError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Makes every cell alive independently with probability [`Config::FILL_RATE`].
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(Config::FILL_RATE);
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Number of live cells among the 8 neighbours of `(x, y)`, wrapping at every edge.
    ///
    /// `(x, y)` must be inside the grid.
    pub fn count_neighbours(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        let (w, h) = (self.width, self.height);
        let (x1, x2) = (wrap_prev(x, w), wrap_next(x, w));
        let (y1, y2) = (wrap_prev(y, h), wrap_next(y, h));
        self.at(x1, y1) as u8
            + self.at(x, y1) as u8
            + self.at(x2, y1) as u8
            + self.at(x1, y) as u8
            + self.at(x2, y) as u8
            + self.at(x1, y2) as u8
            + self.at(x, y2) as u8
            + self.at(x2, y2) as u8
    }

    /// Coordinates of the 8 neighbours of `(x, y)` in a fixed order:
    /// north-west, north, north-east, west, east, south-west, south, south-east.
    pub fn neighbour_coords(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        let (w, h) = (self.width, self.height);
        let (x1, x2) = (wrap_prev(x, w), wrap_next(x, w));
        let (y1, y2) = (wrap_prev(y, h), wrap_next(y, h));
        [
            (x1, y1),
            (x, y1),
            (x2, y1),
            (x1, y),
            (x2, y),
            (x1, y2),
            (x, y2),
            (x2, y2),
        ]
    }

    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state;
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, LifeError> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.width) {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
