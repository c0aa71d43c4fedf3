mod patterns;
mod presets;

use std::fmt;

use crate::encoder::Pixel;
use crate::error::{Result, SimError};

pub use presets::Preset;

/// Size of the Moore neighbourhood used by the update pass.
pub const NEIGHBOURHOOD: u32 = 8;

/// Survival and birth thresholds.
///
/// Classic Game of Life is survival 2..=3, birth 3..=3:
/// 1. A live cell with fewer than two live neighbours dies
/// 2. A live cell with two or three live neighbours lives on
/// 3. A live cell with more than three live neighbours dies
/// 4. A dead cell with exactly three live neighbours becomes alive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Minimum neighbours for a live cell to survive
    pub survival_min: u32,
    /// Maximum neighbours for a live cell to survive
    pub survival_max: u32,
    /// Minimum neighbours for a dead cell to become alive
    pub birth_min: u32,
    /// Maximum neighbours for a dead cell to become alive
    pub birth_max: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self::conway()
    }
}

impl GameRules {
    pub fn new(survival_min: u32, survival_max: u32, birth_min: u32, birth_max: u32) -> Self {
        Self {
            survival_min,
            survival_max,
            birth_min,
            birth_max,
        }
    }

    /// Checks `0 <= min <= max <= 8` for both ranges.
    pub fn validate(&self) -> Result<()> {
        for (min, max) in [
            (self.survival_min, self.survival_max),
            (self.birth_min, self.birth_max),
        ] {
            if min > max || max > NEIGHBOURHOOD {
                return Err(SimError::InvalidRule {
                    min,
                    max,
                    limit: NEIGHBOURHOOD,
                });
            }
        }
        Ok(())
    }

    /// State of a cell in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u32) -> bool {
        if alive {
            (self.survival_min..=self.survival_max).contains(&neighbors)
        } else {
            (self.birth_min..=self.birth_max).contains(&neighbors)
        }
    }
}

impl fmt::Display for GameRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{}-{}/B{}-{}",
            self.survival_min, self.survival_max, self.birth_min, self.birth_max
        )
    }
}

/// Seed patterns, described as offsets from an anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A small oscillator
    Blinker,
    /// A small oscillator
    Toad,
    /// A small stationary pattern
    Block,
    /// A diagonal spaceship
    Glider,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A pattern that grows indefinitely
    GosperGliderGun,
}

/// Index in a row-major flat array for a 2D grid position
#[inline]
pub fn get_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Given a grid position, count the number of live neighbours using wrapping boundaries
pub fn count_neighbors(grid: &[Pixel], x: u32, y: u32, width: u32, height: u32) -> u32 {
    let mut count = 0;

    for dy in 0..3 {
        for dx in 0..3 {
            // Skip the cell itself
            if dx == 1 && dy == 1 {
                continue;
            }

            let nx = (x + width + dx - 1) % width;
            let ny = (y + height + dy - 1) % height;

            if grid[get_index(nx, ny, width)].is_alive() {
                count += 1;
            }
        }
    }

    count
}

/// Computes row `y` of the next generation into `row`.
pub fn apply_rules_row(
    input: &[Pixel],
    row: &mut [Pixel],
    y: u32,
    width: u32,
    height: u32,
    rules: &GameRules,
) {
    debug_assert_eq!(row.len(), width as usize);
    for (x, out) in (0..width).zip(row.iter_mut()) {
        let alive = input[get_index(x, y, width)].is_alive();
        let neighbors = count_neighbors(input, x, y, width, height);
        *out = Pixel::from_alive(rules.next_state(alive, neighbors));
    }
}

/// Serial update of a whole grid for one generation.
pub fn apply_rules(input: &[Pixel], output: &mut [Pixel], width: u32, height: u32, rules: &GameRules) {
    let size = width as usize * height as usize;
    assert!(input.len() >= size);
    assert!(output.len() >= size);

    for (y, row) in (0..height).zip(output.chunks_mut(width as usize)) {
        apply_rules_row(input, row, y, width, height, rules);
    }
}
