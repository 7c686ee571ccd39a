//! Two-entry color palette indexed by spin sign.

use spindle_lattice::Spin;

/// RGB colors for the two spin states.
///
/// Defaults match the reference display: down spins render white,
/// up spins render near-black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Color for [`Spin::Down`].
    pub down: [u8; 3],
    /// Color for [`Spin::Up`].
    pub up: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            down: [255, 255, 255],
            up: [32, 32, 32],
        }
    }
}

impl Palette {
    /// The RGB color for a spin.
    pub fn rgb(&self, spin: Spin) -> [u8; 3] {
        match spin {
            Spin::Down => self.down,
            Spin::Up => self.up,
        }
    }
}
