use std::time::Duration;

use crate::error::{cell_count, Result, SimError};
use crate::layout::CubeLayout;
use crate::rules::GameRules;

/// Chance of a cell starting alive when none is given.
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;
/// Generation interval of the large cube demo.
pub const DEFAULT_TICK: Duration = Duration::from_millis(900);
/// Screen pixels per cell in the flat demo.
pub const FLAT_SCALE: u32 = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub rules: GameRules,
    pub live_probability: f64,
    /// Minimum wall-clock time between generations.
    pub tick: Duration,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            rules: GameRules::conway(),
            live_probability: DEFAULT_LIVE_PROBABILITY,
            tick: DEFAULT_TICK,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Flat 2D demo: one cell per `FLAT_SCALE` screen pixels, half the cells
    /// alive, a new generation every frame.
    pub fn flat(view_width: u32, view_height: u32) -> Self {
        Self {
            width: (view_width / FLAT_SCALE).max(1),
            height: (view_height / FLAT_SCALE).max(1),
            rules: GameRules::conway(),
            live_probability: 0.5,
            tick: Duration::ZERO,
            seed: None,
        }
    }

    /// Cube demo: a `size`³ cube packed into a `size² x size` board. An
    /// unusable size yields an empty board that `validate` rejects.
    pub fn cube(size: u32) -> Self {
        let (width, height) = CubeLayout::new(size)
            .map(|layout| layout.board_dimensions())
            .unwrap_or((0, 0));
        Self {
            width,
            height,
            rules: GameRules::unbounded(),
            live_probability: DEFAULT_LIVE_PROBABILITY,
            tick: if size >= 15 { DEFAULT_TICK } else { Duration::from_millis(700) },
            seed: None,
        }
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_live_probability(mut self, live_probability: f64) -> Self {
        self.live_probability = live_probability;
        self
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        cell_count(self.width, self.height)?;
        self.rules.validate()?;
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(SimError::InvalidProbability(self.live_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_cube_presets() {
        let large = SimConfig::cube(15);
        assert_eq!((large.width, large.height), (225, 15));
        assert_eq!(large.tick, Duration::from_millis(900));
        assert_eq!(large.rules, GameRules::new(4, 5, 2, 6));

        let small = SimConfig::cube(10);
        assert_eq!((small.width, small.height), (100, 10));
        assert_eq!(small.tick, Duration::from_millis(700));

        assert!(SimConfig::cube(0).validate().is_err());
    }

    #[test]
    fn test_flat_preset() {
        let config = SimConfig::flat(800, 600);
        assert_eq!((config.width, config.height), (200, 150));
        assert_eq!(config.tick, Duration::ZERO);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        assert!(SimConfig::new(0, 10).validate().is_err());
        assert_eq!(
            SimConfig::new(4, 4).with_live_probability(1.5).validate(),
            Err(SimError::InvalidProbability(1.5))
        );
        assert!(SimConfig::new(4, 4).with_live_probability(f64::NAN).validate().is_err());
        assert!(SimConfig::new(4, 4)
            .with_rules(GameRules::new(3, 2, 3, 3))
            .validate()
            .is_err());
    }
}
