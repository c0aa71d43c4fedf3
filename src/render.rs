use std::io::{self, Write};

use crate::encoder::PixelBuffer;

/// Something that can present the current generation.
///
/// Implementations receive the front pixel buffer directly, so a GPU backend
/// can upload `frame.as_bytes()` as an RGBA8 texture without decoding.
pub trait BoardRenderer {
    type Error;

    fn draw(&mut self, frame: &PixelBuffer, generation: u64) -> Result<(), Self::Error>;
}

/// Text renderer for terminals and logs.
pub struct AsciiRenderer<W: Write> {
    out: W,
    /// Columns per cube slice; slices are separated by a space
    slice_width: Option<u32>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, slice_width: None }
    }

    /// Splits every row into `size`-wide slices, one per cube layer.
    pub fn with_slices(out: W, size: u32) -> Self {
        Self {
            out,
            slice_width: Some(size).filter(|&s| s > 0),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BoardRenderer for AsciiRenderer<W> {
    type Error = io::Error;

    fn draw(&mut self, frame: &PixelBuffer, generation: u64) -> io::Result<()> {
        writeln!(self.out, "generation {}", generation)?;
        for row in frame.pixels().chunks(frame.width() as usize) {
            let mut line = String::with_capacity(row.len() * 2);
            for (x, pixel) in row.iter().enumerate() {
                if let Some(size) = self.slice_width {
                    if x > 0 && x % size as usize == 0 {
                        line.push(' ');
                    }
                }
                line.push(if pixel.is_alive() { '#' } else { '.' });
            }
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}
