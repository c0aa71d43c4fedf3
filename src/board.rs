use std::fmt;

use rand::Rng;

use crate::encoder::{self, PixelBuffer};
use crate::error::{cell_count, expect_len, Result};
use crate::rules::{get_index, Pattern};

/// A `width` x `height` grid of 0/1 cells, row-major (`index = x + width * y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Board {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; len],
        })
    }

    /// Builds a board from a flat cell array; any non-zero value is alive.
    pub fn from_cells(cells: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        expect_len(width, height, cells.len())?;
        let cells = cells.into_iter().map(|c| (c != 0) as u8).collect();
        Ok(Self { width, height, cells })
    }

    /// Each cell independently alive with probability `live_probability`.
    pub fn random<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        live_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let len = cell_count(width, height)?;
        let cells = random_cells(len, live_probability, rng).map(u8::from).collect();
        Ok(Self { width, height, cells })
    }

    pub fn decode(pixels: &PixelBuffer) -> Self {
        Self {
            width: pixels.width(),
            height: pixels.height(),
            cells: encoder::decode_unchecked(pixels.pixels()),
        }
    }

    pub fn encode(&self) -> PixelBuffer {
        encoder::encode_unchecked(&self.cells, self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    // Coordinates wrap around the torus
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.cells[self.wrapped_index(x, y)] != 0
    }

    /// Sets the cell at `(x, y)`, wrapping both coordinates around the torus.
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let idx = self.wrapped_index(x, y);
        self.cells[idx] = alive as u8;
    }

    /// Stamps a pattern with its anchor at `(x, y)`. Cells past an edge wrap.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i64, y: i64) {
        for (dx, dy) in pattern.offsets() {
            self.set(x + dx as i64, y + dy as i64, true);
        }
    }

    /// Stamps a pattern roughly in the middle of the board.
    pub fn place_pattern_centered(&mut self, pattern: &Pattern) {
        let (w, h) = pattern.extent();
        let x = (self.width as i64 - w as i64) / 2;
        let y = (self.height as i64 - h as i64) / 2;
        self.place_pattern(pattern, x, y);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    fn wrapped_index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.width as i64) as u32;
        let y = y.rem_euclid(self.height as i64) as u32;
        get_index(x, y, self.width)
    }
}

/// Forces a probability into `[0, 1]`; NaN counts as 0.
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// `len` independent draws, row-major, each alive with the clamped probability.
pub(crate) fn random_cells<R: Rng + ?Sized>(
    len: usize,
    live_probability: f64,
    rng: &mut R,
) -> impl Iterator<Item = bool> + '_ {
    let p = clamp_probability(live_probability);
    (0..len).map(move |_| rng.gen_bool(p))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width as usize) {
            for &cell in row {
                f.write_str(if cell != 0 { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
