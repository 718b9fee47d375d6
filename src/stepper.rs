use crate::{rule::next_state, Grid};

/// Writes the successor generation of `active` into `next`.
///
/// `active` is only read, so every cell sees the previous generation's neighbourhood.
/// Both grids must have the same dimensions.
pub fn step(active: &Grid, next: &mut Grid) {
    assert_eq!(active.dimensions(), next.dimensions());
    let (w, h) = active.dimensions();
    for y in 0..h {
        for x in 0..w {
            let neibs = active.count_neighbours(x, y);
            next.put(x, y, next_state(active.at(x, y), neibs));
        }
    }
}

/// Two equally sized grids; one is the current generation, the other is the step target.
#[derive(Clone, Debug)]
pub struct DoubleBuffer {
    buffers: [Grid; 2],
    active: usize,
}

impl DoubleBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buffers: [Grid::blank(width, height), Grid::blank(width, height)],
            active: 0,
        }
    }

    /// Current generation.
    pub fn active(&self) -> &Grid {
        &self.buffers[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.active]
    }

    /// Splits into the active grid (read) and the next grid (write).
    pub fn split(&mut self) -> (&Grid, &mut Grid) {
        let [a, b] = &mut self.buffers;
        if self.active == 0 {
            (&*a, b)
        } else {
            (&*b, a)
        }
    }

    /// Exchanges the roles of the two grids without copying cells.
    pub fn swap(&mut self) {
        self.active ^= 1;
    }

    /// Computes the next generation and makes it active.
    pub fn advance(&mut self) {
        let (active, next) = self.split();
        step(active, next);
        self.swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_step_leaves_active_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut active = Grid::blank(20, 15);
        active.randomize(&mut rng);
        let snapshot = active.clone();
        let mut next = Grid::blank(20, 15);

        step(&active, &mut next);

        assert_eq!(active, snapshot);
        assert_ne!(next, snapshot);
    }

    #[test]
    fn test_step_overwrites_stale_next() {
        let active = Grid::blank(8, 8);
        let mut next = Grid::blank(8, 8);
        next.set(3, 3, true).unwrap();
        step(&active, &mut next);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_swap_exchanges_roles() {
        let mut buffers = DoubleBuffer::new(6, 6);
        buffers.active_mut().set(1, 1, true).unwrap();
        {
            let (active, next) = buffers.split();
            assert!(active.get(1, 1).unwrap());
            assert!(!next.get(1, 1).unwrap());
        }
        buffers.swap();
        assert!(!buffers.active().get(1, 1).unwrap());
        buffers.swap();
        assert!(buffers.active().get(1, 1).unwrap());
    }

    #[test]
    #[should_panic]
    fn test_step_rejects_mismatched_sizes() {
        let active = Grid::blank(4, 4);
        let mut next = Grid::blank(5, 4);
        step(&active, &mut next);
    }
}
