use crate::encoder::PixelBuffer;
use crate::error::{cell_count, Result, SimError};

/// An `n x n x n` cube packed into an `n² x n` board: `(x, y, z)` sits at
/// column `x + n * z` of row `y`. The automaton still runs on the flat torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeLayout {
    size: u32,
}

impl CubeLayout {
    /// Rejects an empty cube and one whose `size² x size` board cannot be
    /// addressed.
    pub fn new(size: u32) -> Result<Self> {
        let width = size.checked_mul(size).ok_or(SimError::InvalidCubeSize(size))?;
        cell_count(width, size).map_err(|_| SimError::InvalidCubeSize(size))?;
        Ok(Self { size })
    }

    /// Recovers the layout from board dimensions, if they describe a cube.
    pub fn from_board(width: u32, height: u32) -> Option<Self> {
        if height.checked_mul(height) != Some(width) {
            return None;
        }
        Self::new(height).ok()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// `(width, height)` of the board backing this cube.
    pub fn board_dimensions(&self) -> (u32, u32) {
        (self.size * self.size, self.size)
    }

    #[inline]
    pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
        let (width, height) = self.board_dimensions();
        x as usize + width as usize * y as usize + height as usize * z as usize
    }

    /// Inverse of [`CubeLayout::index`].
    pub fn position(&self, index: usize) -> (u32, u32, u32) {
        let n = self.size as usize;
        let y = index / (n * n);
        let column = index % (n * n);
        ((column % n) as u32, y as u32, (column / n) as u32)
    }

    /// All cube positions, x outermost and z innermost.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32, u32)> {
        let n = self.size;
        (0..n).flat_map(move |x| (0..n).flat_map(move |y| (0..n).map(move |z| (x, y, z))))
    }

    /// Cube positions whose cell is alive in `frame`.
    pub fn live_positions(&self, frame: &PixelBuffer) -> Vec<(u32, u32, u32)> {
        let pixels = frame.pixels();
        self.positions()
            .filter(|&(x, y, z)| pixels.get(self.index(x, y, z)).is_some_and(|p| p.is_alive()))
            .collect()
    }
}
