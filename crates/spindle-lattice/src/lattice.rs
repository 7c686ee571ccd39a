//! 2D square spin lattice with periodic (torus) boundary.

use crate::error::LatticeError;
use crate::spin::Spin;
use rand::Rng;
use smallvec::{smallvec, SmallVec};

/// A square grid of [`Spin`] values under toroidal topology.
///
/// Coordinates `(i, j)` are wrapped modulo the side length on every
/// access, so any `i32` pair names a valid cell and every site has
/// exactly four neighbours — there are no special-cased edges.
///
/// `i` indexes the first axis (mapped to x by the renderer), `j` the
/// second (mapped to y).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use spindle_lattice::Lattice;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let lattice = Lattice::random(8, &mut rng).unwrap();
/// assert_eq!(lattice.size(), 8);
///
/// // Periodic wrap: coordinates past an edge name the opposite edge.
/// assert_eq!(lattice.get(-1, 0), lattice.get(7, 0));
/// assert_eq!(lattice.get(0, 8), lattice.get(0, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lattice {
    size: u32,
    cells: Vec<Spin>,
}

impl Lattice {
    /// Maximum side length: coordinates use `i32` and the cell count
    /// must fit comfortably in `u32`.
    pub const MAX_DIM: u32 = 1 << 15;

    /// Create a lattice with every cell drawn independently and
    /// uniformly from {-1, +1}.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if `size == 0`, or
    /// `Err(LatticeError::DimensionTooLarge)` if `size > MAX_DIM`.
    pub fn random<R: Rng + ?Sized>(size: u32, rng: &mut R) -> Result<Self, LatticeError> {
        Self::from_fn(size, |_, _| Spin::random(rng))
    }

    /// Create a lattice by evaluating `f(i, j)` for every cell.
    ///
    /// Deterministic construction for tests and fixtures. Same size
    /// validation as [`Lattice::random`].
    pub fn from_fn<F>(size: u32, mut f: F) -> Result<Self, LatticeError>
    where
        F: FnMut(u32, u32) -> Spin,
    {
        if size == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if size > Self::MAX_DIM {
            return Err(LatticeError::DimensionTooLarge {
                value: size,
                max: Self::MAX_DIM,
            });
        }
        let count = (size as usize) * (size as usize);
        let mut cells = Vec::with_capacity(count);
        for i in 0..size {
            for j in 0..size {
                cells.push(f(i, j));
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length `N`.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells, `N²`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The spin at `(i, j)`, with both coordinates wrapped modulo the
    /// side length.
    pub fn get(&self, i: i32, j: i32) -> Spin {
        self.cells[self.index(i, j)]
    }

    /// Negate the spin at `(i, j)` in place (periodic indexing, no
    /// further validation).
    pub fn flip(&mut self, i: i32, j: i32) {
        let idx = self.index(i, j);
        self.cells[idx].flip();
    }

    /// The four spins directly left/right/above/below `(i, j)` under
    /// the torus.
    pub fn neighbours(&self, i: i32, j: i32) -> SmallVec<[Spin; 4]> {
        smallvec![
            self.get(i - 1, j),
            self.get(i + 1, j),
            self.get(i, j - 1),
            self.get(i, j + 1),
        ]
    }

    /// Sum of the four neighbour spins, in `[-4, 4]`.
    pub fn neighbour_sum(&self, i: i32, j: i32) -> i32 {
        self.neighbours(i, j).iter().map(|s| s.value()).sum()
    }

    /// Re-randomize every cell in place at the current size.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Spin::random(rng);
        }
    }

    /// Fraction of cells that are [`Spin::Up`], in `[0, 1]`.
    pub fn up_fraction(&self) -> f64 {
        let ups = self.cells.iter().filter(|s| s.is_up()).count();
        ups as f64 / self.cells.len() as f64
    }

    /// All cells in row-major order (`i` outer, `j` inner).
    pub fn cells(&self) -> &[Spin] {
        &self.cells
    }

    fn index(&self, i: i32, j: i32) -> usize {
        let n = self.size as i32;
        let i = i.rem_euclid(n) as usize;
        let j = j.rem_euclid(n) as usize;
        i * self.size as usize + j
    }
}
