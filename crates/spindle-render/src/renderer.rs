//! Lattice-to-raster renderer.

use std::ops::Range;

use spindle_engine::FrameSink;
use spindle_lattice::Lattice;

use crate::error::RenderError;
use crate::palette::Palette;
use crate::surface::PixelSurface;

/// Paints lattice cells as solid color blocks on a [`PixelSurface`].
///
/// Cell `i` covers pixel columns `[⌊i·S/N⌋, ⌊(i+1)·S/N⌋)` (rows likewise
/// for `j`), where `S` is the display size and `N` the lattice side.
/// The spans tile the raster exactly for integer and fractional scales
/// alike, so no block ever writes past its row. `i` maps to x, `j` to y.
///
/// [`draw_all()`](Renderer::draw_all) rebuilds the full raster (after
/// initialize, resize, reset); [`draw_cell()`](Renderer::draw_cell)
/// repaints one block, bounding per-frame cost to the accepted flips.
#[derive(Clone, Debug)]
pub struct Renderer {
    surface: PixelSurface,
    palette: Palette,
    lattice_size: u32,
    frames_presented: u64,
}

impl Renderer {
    /// Create a renderer with the default palette.
    pub fn new(display_size: u32, lattice_size: u32) -> Result<Self, RenderError> {
        Self::with_palette(display_size, lattice_size, Palette::default())
    }

    /// Create a renderer with a custom palette.
    ///
    /// Rejects a zero display size or zero lattice side.
    pub fn with_palette(
        display_size: u32,
        lattice_size: u32,
        palette: Palette,
    ) -> Result<Self, RenderError> {
        if lattice_size == 0 {
            return Err(RenderError::EmptyLattice);
        }
        Ok(Self {
            surface: PixelSurface::new(display_size)?,
            palette,
            lattice_size,
            frames_presented: 0,
        })
    }

    /// Display side length in pixels.
    pub fn display_size(&self) -> u32 {
        self.surface.size()
    }

    /// Derived pixels-per-cell scale, `display_size / N`.
    pub fn pixel_scale(&self) -> f64 {
        f64::from(self.surface.size()) / f64::from(self.lattice_size)
    }

    /// The rendered surface.
    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// The raw RGBA buffer for the host surface.
    pub fn as_rgba(&self) -> &[u8] {
        self.surface.as_rgba()
    }

    /// Number of frames presented so far.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Rebuild the full raster from the lattice. Adopts the lattice's
    /// side length, recomputing the pixel scale.
    pub fn draw_all(&mut self, lattice: &Lattice) {
        self.lattice_size = lattice.size();
        for i in 0..lattice.size() {
            for j in 0..lattice.size() {
                self.blit(lattice, i, j);
            }
        }
    }

    /// Repaint the block for one cell (coordinates wrap).
    pub fn draw_cell(&mut self, lattice: &Lattice, i: i32, j: i32) {
        self.lattice_size = lattice.size();
        let n = lattice.size() as i32;
        self.blit(lattice, i.rem_euclid(n) as u32, j.rem_euclid(n) as u32);
    }

    fn blit(&mut self, lattice: &Lattice, i: u32, j: u32) {
        let rgb = self.palette.rgb(lattice.get(i as i32, j as i32));
        let xs = self.span(i);
        let ys = self.span(j);
        for y in ys {
            for x in xs.clone() {
                self.surface.put(x, y, rgb);
            }
        }
    }

    fn span(&self, k: u32) -> Range<usize> {
        let s = u64::from(self.surface.size());
        let n = u64::from(self.lattice_size);
        let start = (u64::from(k) * s / n) as usize;
        let end = ((u64::from(k) + 1) * s / n) as usize;
        start..end
    }
}

impl FrameSink for Renderer {
    fn draw_all(&mut self, lattice: &Lattice) {
        Renderer::draw_all(self, lattice);
    }

    fn draw_cell(&mut self, lattice: &Lattice, i: i32, j: i32) {
        Renderer::draw_cell(self, lattice, i, j);
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

/// Filename for a raster snapshot export, e.g.
/// `ising_256x256_t=2.269_j=1.png`. The export itself is a host
/// collaborator consuming [`Renderer::as_rgba`].
pub fn snapshot_name(size: u32, temperature: f64, coupling: f64) -> String {
    format!("ising_{size}x{size}_t={temperature}_j={coupling}.png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_lattice::Spin;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const DARK: [u8; 4] = [32, 32, 32, 255];

    fn one_up(size: u32, up_i: u32, up_j: u32) -> Lattice {
        Lattice::from_fn(size, |i, j| {
            if (i, j) == (up_i, up_j) {
                Spin::Up
            } else {
                Spin::Down
            }
        })
        .unwrap()
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn rejects_zero_display() {
        assert!(matches!(
            Renderer::new(0, 8),
            Err(RenderError::EmptySurface)
        ));
    }

    #[test]
    fn rejects_zero_lattice() {
        assert!(matches!(
            Renderer::new(8, 0),
            Err(RenderError::EmptyLattice)
        ));
    }

    // ── Block geometry tests ────────────────────────────────────

    #[test]
    fn draw_all_paints_solid_blocks_at_integer_scale() {
        // 2×2 lattice on a 4×4 display: each cell is a 2×2 block.
        let lattice = one_up(2, 1, 0);
        let mut renderer = Renderer::new(4, 2).unwrap();
        renderer.draw_all(&lattice);
        assert_eq!(renderer.pixel_scale(), 2.0);

        // i maps to x, j to y: cell (1, 0) is the top-right block.
        for (x, y) in [(2, 0), (3, 0), (2, 1), (3, 1)] {
            assert_eq!(renderer.surface().get(x, y), DARK, "at ({x}, {y})");
        }
        for (x, y) in [(0, 0), (1, 1), (0, 3), (3, 3)] {
            assert_eq!(renderer.surface().get(x, y), WHITE, "at ({x}, {y})");
        }
    }

    #[test]
    fn draw_all_covers_every_pixel() {
        let lattice = one_up(3, 0, 0);
        let mut renderer = Renderer::new(16, 3).unwrap();
        renderer.draw_all(&lattice);
        // Fractional scale (16/3): the spans must still tile the raster.
        for chunk in renderer.as_rgba().chunks_exact(4) {
            assert_eq!(chunk[3], 255, "unpainted pixel");
        }
    }

    #[test]
    fn lattice_finer_than_display_does_not_overrun() {
        // Scale below one pixel per cell: some cells collapse to empty
        // spans, the rest still tile the raster exactly.
        let lattice = one_up(8, 0, 0);
        let mut renderer = Renderer::new(4, 8).unwrap();
        renderer.draw_all(&lattice);
        assert_eq!(renderer.pixel_scale(), 0.5);
        for chunk in renderer.as_rgba().chunks_exact(4) {
            assert_eq!(chunk[3], 255, "unpainted pixel");
        }
    }

    #[test]
    fn draw_cell_touches_only_its_block() {
        let mut lattice = one_up(4, 0, 0);
        let mut renderer = Renderer::new(8, 4).unwrap();
        renderer.draw_all(&lattice);
        let before = renderer.as_rgba().to_vec();

        lattice.flip(2, 1);
        renderer.draw_cell(&lattice, 2, 1);

        // Cell (2, 1) on an 8px display covers x ∈ [4, 6), y ∈ [2, 4).
        for y in 0..8usize {
            for x in 0..8usize {
                let inside = (4..6).contains(&x) && (2..4).contains(&y);
                let offset = (y * 8 + x) * 4;
                let now = &renderer.as_rgba()[offset..offset + 4];
                if inside {
                    assert_eq!(now, DARK, "block pixel ({x}, {y}) not repainted");
                } else {
                    assert_eq!(
                        now,
                        &before[offset..offset + 4],
                        "pixel ({x}, {y}) outside the block changed"
                    );
                }
            }
        }
    }

    #[test]
    fn draw_cell_wraps_coordinates() {
        let lattice = one_up(4, 0, 0);
        let mut renderer = Renderer::new(8, 4).unwrap();
        renderer.draw_cell(&lattice, -4, 4);
        // (-4, 4) wraps to (0, 0), the single up cell.
        assert_eq!(renderer.surface().get(0, 0), DARK);
    }

    #[test]
    fn draw_all_adopts_resized_lattice() {
        let mut renderer = Renderer::new(512, 256).unwrap();
        assert_eq!(renderer.pixel_scale(), 2.0);
        let smaller = one_up(128, 0, 0);
        renderer.draw_all(&smaller);
        assert_eq!(renderer.pixel_scale(), 4.0);
    }

    // ── Sink tests ──────────────────────────────────────────────

    #[test]
    fn present_counts_frames() {
        let mut renderer = Renderer::new(8, 4).unwrap();
        assert_eq!(renderer.frames_presented(), 0);
        FrameSink::present(&mut renderer);
        FrameSink::present(&mut renderer);
        assert_eq!(renderer.frames_presented(), 2);
    }

    // ── Export naming ───────────────────────────────────────────

    #[test]
    fn snapshot_name_matches_reference_format() {
        assert_eq!(
            snapshot_name(256, 2.269, 1.0),
            "ising_256x256_t=2.269_j=1.png"
        );
        assert_eq!(snapshot_name(64, 0.5, -1.0), "ising_64x64_t=0.5_j=-1.png");
    }
}
