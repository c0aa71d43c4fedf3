use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::board::{clamp_probability, random_cells, Board};
use crate::config::SimConfig;
use crate::encoder::{self, Pixel, PixelBuffer};
use crate::error::{Result, SimError};
use crate::rules::{apply_rules_row, GameRules};

/// Two same-sized buffers trade roles every step: the front one is read, the
/// back one written, then the front index flips.
pub struct SimulationStepper {
    width: u32,
    height: u32,
    rules: GameRules,
    live_probability: f64,
    buffers: [PixelBuffer; 2],
    front: usize,
    generation: u64,
    rng: StdRng,
}

impl SimulationStepper {
    /// Allocates both buffers and seeds the front one at random.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let buffers = [
            PixelBuffer::new(config.width, config.height)?,
            PixelBuffer::new(config.width, config.height)?,
        ];

        let mut stepper = Self {
            width: config.width,
            height: config.height,
            rules: config.rules,
            live_probability: config.live_probability,
            buffers,
            front: 0,
            generation: 0,
            rng,
        };
        log::info!(
            "Created {}x{} stepper with rules {}",
            stepper.width,
            stepper.height,
            stepper.rules
        );
        stepper.randomize(config.live_probability);
        Ok(stepper)
    }

    /// Advances the board by one generation.
    pub fn step(&mut self) {
        let (width, height, rules) = (self.width, self.height, self.rules);
        let (front, back) = self.front_and_back();
        let input = front.pixels();

        // Rows only read the front buffer, so they can be written independently
        back.pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| apply_rules_row(input, row, y as u32, width, height, &rules));

        self.swap();
        self.generation += 1;
        log::debug!("Generation {}: {} live cells", self.generation, self.live_count());
    }

    /// Refills the front buffer with cells alive at `live_probability`.
    ///
    /// Out-of-range probabilities are clamped into `[0, 1]`.
    pub fn randomize(&mut self, live_probability: f64) {
        let p = clamp_probability(live_probability);
        if p != live_probability {
            log::warn!("Live probability {} clamped to {}", live_probability, p);
        }

        let front = self.buffers[self.front].pixels_mut();
        let cells = random_cells(front.len(), p, &mut self.rng);
        for (pixel, alive) in front.iter_mut().zip(cells) {
            *pixel = Pixel::from_alive(alive);
        }
        self.generation = 0;
        log::info!("Randomized board at p={}: {} live cells", p, self.live_count());
    }

    /// Replaces the rule thresholds and re-randomizes the board.
    pub fn set_rule(
        &mut self,
        survival_min: u32,
        survival_max: u32,
        birth_min: u32,
        birth_max: u32,
    ) -> Result<()> {
        self.set_rules(GameRules::new(survival_min, survival_max, birth_min, birth_max))
    }

    /// Replaces the rule and re-randomizes the board. An invalid rule leaves
    /// the stepper untouched.
    pub fn set_rules(&mut self, rules: GameRules) -> Result<()> {
        rules.validate()?;
        self.rules = rules;
        log::info!("Game rules changed to: {}", rules);
        self.randomize(self.live_probability);
        Ok(())
    }

    /// Loads an explicit board into the front buffer.
    pub fn set_board(&mut self, board: &Board) -> Result<()> {
        if board.width() != self.width || board.height() != self.height {
            return Err(SimError::InvalidDimensions {
                width: self.width,
                height: self.height,
                len: board.cells().len(),
            });
        }
        let front = &mut self.buffers[self.front];
        for (pixel, &cell) in front.pixels_mut().iter_mut().zip(board.cells()) {
            *pixel = Pixel::from_alive(cell != 0);
        }
        self.generation = 0;
        Ok(())
    }

    /// The current generation as 0/1 cells.
    pub fn read_board(&self) -> Vec<u8> {
        encoder::decode_unchecked(self.front_pixels().pixels())
    }

    pub fn board(&self) -> Board {
        Board::decode(self.front_pixels())
    }

    /// The buffer holding the current generation, for rendering.
    pub fn front_pixels(&self) -> &PixelBuffer {
        &self.buffers[self.front]
    }

    pub fn live_count(&self) -> usize {
        self.front_pixels().pixels().iter().filter(|p| p.is_alive()).count()
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn front_and_back(&mut self) -> (&PixelBuffer, &mut PixelBuffer) {
        let front = self.front;
        let [first, second] = &mut self.buffers;
        if front == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        }
    }

    fn swap(&mut self) {
        self.front ^= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_rules, Pattern};

    fn seeded(width: u32, height: u32, rules: GameRules) -> SimulationStepper {
        let config = SimConfig::new(width, height).with_rules(rules).with_seed(7);
        SimulationStepper::new(&config).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(SimulationStepper::new(&SimConfig::new(0, 3)).is_err());
        let bad_rules = SimConfig::new(3, 3).with_rules(GameRules::new(0, 9, 3, 3));
        assert!(SimulationStepper::new(&bad_rules).is_err());
    }

    #[test]
    fn test_step_swaps_roles() {
        let mut stepper = seeded(8, 8, GameRules::conway());
        let before = stepper.front_pixels() as *const PixelBuffer;
        stepper.step();
        let after = stepper.front_pixels() as *const PixelBuffer;
        assert_ne!(before, after);
        stepper.step();
        assert_eq!(stepper.front_pixels() as *const PixelBuffer, before);
        assert_eq!(stepper.generation(), 2);
    }

    #[test]
    fn test_parallel_step_matches_serial() {
        let mut stepper = seeded(37, 23, GameRules::unbounded());
        for _ in 0..5 {
            let input = stepper.front_pixels().clone();
            let mut expected = vec![Pixel::DEAD; input.pixels().len()];
            apply_rules(input.pixels(), &mut expected, 37, 23, &stepper.rules());

            stepper.step();
            assert_eq!(stepper.front_pixels().pixels(), expected.as_slice());
        }
    }

    #[test]
    fn test_step_is_deterministic() {
        let mut a = seeded(16, 16, GameRules::conway());
        let mut b = seeded(16, 16, GameRules::conway());
        assert_eq!(a.read_board(), b.read_board());
        for _ in 0..10 {
            a.step();
            b.step();
        }
        assert_eq!(a.read_board(), b.read_board());
    }

    #[test]
    fn test_set_board_checks_dimensions() {
        let mut stepper = seeded(6, 6, GameRules::conway());
        let board = Board::new(5, 6).unwrap();
        assert!(stepper.set_board(&board).is_err());

        let mut board = Board::new(6, 6).unwrap();
        board.place_pattern(&Pattern::Block, 2, 2);
        stepper.set_board(&board).unwrap();
        assert_eq!(stepper.board(), board);
        assert_eq!(stepper.generation(), 0);
    }

    #[test]
    fn test_invalid_rule_keeps_state() {
        let mut stepper = seeded(10, 10, GameRules::conway());
        let before = stepper.read_board();
        assert!(stepper.set_rule(4, 3, 3, 3).is_err());
        assert_eq!(stepper.rules(), GameRules::conway());
        assert_eq!(stepper.read_board(), before);
    }

    #[test]
    fn test_randomize_clamps() {
        let mut stepper = seeded(5, 5, GameRules::conway());
        stepper.randomize(2.0);
        assert_eq!(stepper.live_count(), 25);
        stepper.randomize(-1.0);
        assert_eq!(stepper.live_count(), 0);
    }

    #[test]
    fn test_randomize_matches_random_board() {
        let stepper = seeded(12, 9, GameRules::conway());
        let mut rng = StdRng::seed_from_u64(7);
        let expected = Board::random(12, 9, stepper.live_probability(), &mut rng).unwrap();
        assert_eq!(stepper.board(), expected);
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut stepper = seeded(5, 5, GameRules::conway());
        stepper.step();
        stepper.step();
        stepper.randomize(0.3);
        assert_eq!(stepper.generation(), 0);
    }
}
