use std::time::{Duration, Instant};

use crate::config::SimConfig;
use crate::error::Result;
use crate::render::BoardRenderer;
use crate::stepper::SimulationStepper;

pub struct Driver {
    stepper: SimulationStepper,
    tick: Duration,
    last_tick: Option<Instant>,
    running: bool,
}

impl Driver {
    pub fn new(stepper: SimulationStepper, tick: Duration) -> Self {
        Self {
            stepper,
            tick,
            last_tick: None,
            running: true,
        }
    }

    pub fn from_config(config: &SimConfig) -> Result<Self> {
        Ok(Self::new(SimulationStepper::new(config)?, config.tick))
    }

    /// Steps once if running and more than one tick has passed since the last
    /// step. The very first call always steps. Returns whether a step ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.tick,
        };
        if due {
            self.stepper.step();
            self.last_tick = Some(now);
        }
        due
    }

    /// Time left until `update` would step again. A tick too long to land on
    /// the clock never comes due.
    pub fn time_until_next_tick(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => last
                .checked_add(self.tick)
                .map_or(Duration::MAX, |next| next.saturating_duration_since(now)),
        }
    }

    /// Advances one generation regardless of the pause state or the clock.
    pub fn step_once(&mut self) {
        self.stepper.step();
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        log::info!("Simulation {}", if self.running { "resumed" } else { "paused" });
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn stepper(&self) -> &SimulationStepper {
        &self.stepper
    }

    pub fn stepper_mut(&mut self) -> &mut SimulationStepper {
        &mut self.stepper
    }

    /// Hands the current front buffer to a renderer.
    pub fn render<R: BoardRenderer>(&self, renderer: &mut R) -> std::result::Result<(), R::Error> {
        renderer.draw(self.stepper.front_pixels(), self.stepper.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameRules;

    fn driver(tick_ms: u64) -> Driver {
        let config = SimConfig::new(8, 8)
            .with_rules(GameRules::conway())
            .with_tick(Duration::from_millis(tick_ms))
            .with_seed(3);
        Driver::from_config(&config).unwrap()
    }

    #[test]
    fn test_first_update_steps() {
        let mut driver = driver(900);
        assert!(driver.update(Instant::now()));
        assert_eq!(driver.stepper().generation(), 1);
    }

    #[test]
    fn test_update_waits_for_tick() {
        let mut driver = driver(500);
        let start = Instant::now();
        assert!(driver.update(start));
        assert!(!driver.update(start + Duration::from_millis(200)));
        // Exactly one tick is not enough, it has to be exceeded
        assert!(!driver.update(start + Duration::from_millis(500)));
        assert!(driver.update(start + Duration::from_millis(501)));
        assert_eq!(driver.stepper().generation(), 2);
    }

    #[test]
    fn test_paused_driver_does_not_step() {
        let mut driver = driver(0);
        driver.toggle_running();
        assert!(!driver.is_running());
        assert!(!driver.update(Instant::now()));
        assert_eq!(driver.stepper().generation(), 0);

        driver.step_once();
        assert_eq!(driver.stepper().generation(), 1);
    }

    #[test]
    fn test_time_until_next_tick() {
        let mut driver = driver(400);
        let start = Instant::now();
        assert_eq!(driver.time_until_next_tick(start), Duration::ZERO);
        driver.update(start);
        assert_eq!(
            driver.time_until_next_tick(start + Duration::from_millis(100)),
            Duration::from_millis(300)
        );
        assert_eq!(
            driver.time_until_next_tick(start + Duration::from_millis(700)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_unbounded_tick_does_not_overflow() {
        let config = SimConfig::new(4, 4).with_tick(Duration::MAX).with_seed(5);
        assert!(config.validate().is_ok());

        let mut driver = Driver::from_config(&config).unwrap();
        let now = Instant::now();
        assert!(driver.update(now));
        assert_eq!(driver.time_until_next_tick(now), Duration::MAX);
        assert!(!driver.update(now + Duration::from_secs(3600)));
    }
}
