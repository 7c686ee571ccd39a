//! The two-valued site state.

use rand::Rng;

/// A single lattice site's spin: exactly -1 or +1.
///
/// Modeled as a fieldless enum so no other value is representable — the
/// "every cell is ±1" invariant holds by construction, not by audit.
///
/// # Examples
///
/// ```
/// use spindle_lattice::Spin;
///
/// assert_eq!(Spin::Up.value(), 1);
/// assert_eq!(Spin::Down.value(), -1);
/// assert_eq!(Spin::Up.flipped(), Spin::Down);
/// assert_eq!(Spin::Up.flipped().flipped(), Spin::Up);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Spin {
    /// Spin down, value -1.
    Down = -1,
    /// Spin up, value +1.
    Up = 1,
}

impl Spin {
    /// The spin as a signed integer, -1 or +1.
    pub fn value(self) -> i32 {
        match self {
            Self::Down => -1,
            Self::Up => 1,
        }
    }

    /// The spin as a float, -1.0 or +1.0.
    pub fn value_f64(self) -> f64 {
        f64::from(self.value())
    }

    /// The opposite spin. Involutive: `s.flipped().flipped() == s`.
    pub fn flipped(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// Negate this spin in place.
    pub fn flip(&mut self) {
        *self = self.flipped();
    }

    /// Draw a spin uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// Whether this spin is [`Spin::Up`].
    pub fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}
