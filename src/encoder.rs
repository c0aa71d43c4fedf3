use bytemuck::{Pod, Zeroable};

use crate::error::{cell_count, expect_len, Result, SimError};

// A live cell is opaque white, a dead one opaque black
pub const CHANNELS: usize = 4;
pub const ON: u8 = 255;
pub const OFF: u8 = 0;

/// One RGBA8 texel. Layout matches a `Rgba8Unorm` texture row.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const ALIVE: Pixel = Pixel { r: ON, g: ON, b: ON, a: ON };
    pub const DEAD: Pixel = Pixel { r: OFF, g: OFF, b: OFF, a: ON };

    #[inline]
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            Self::ALIVE
        } else {
            Self::DEAD
        }
    }

    /// Only red carries state.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.r != OFF
    }
}

/// A `width` x `height` image of cell states, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::DEAD; len],
        })
    }

    /// Wraps raw RGBA bytes, e.g. read back from a texture.
    pub fn from_bytes(bytes: &[u8], width: u32, height: u32) -> Result<Self> {
        let expected = cell_count(width, height)
            .ok()
            .and_then(|count| count.checked_mul(CHANNELS));
        if expected != Some(bytes.len()) {
            return Err(SimError::InvalidDimensions { width, height, len: bytes.len() });
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice::<u8, Pixel>(bytes).to_vec(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Byte view suitable for uploading as an RGBA8 texture.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Encodes a flat row-major cell array into RGBA pixels.
///
/// Any non-zero cell counts as alive. Fails with `InvalidDimensions` when
/// `cells.len()` is not `width * height`.
pub fn encode(cells: &[u8], width: u32, height: u32) -> Result<PixelBuffer> {
    expect_len(width, height, cells.len())?;
    Ok(encode_unchecked(cells, width, height))
}

pub(crate) fn encode_unchecked(cells: &[u8], width: u32, height: u32) -> PixelBuffer {
    let pixels = cells.iter().map(|&cell| Pixel::from_alive(cell != 0)).collect();
    PixelBuffer { width, height, pixels }
}

/// Decodes pixels back into 0/1 cells, reading the red channel only.
pub fn decode(pixels: &[Pixel], width: u32, height: u32) -> Result<Vec<u8>> {
    expect_len(width, height, pixels.len())?;
    Ok(decode_unchecked(pixels))
}

pub(crate) fn decode_unchecked(pixels: &[Pixel]) -> Vec<u8> {
    pixels.iter().map(|p| p.is_alive() as u8).collect()
}
