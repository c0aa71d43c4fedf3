use pingpong_life::render::AsciiRenderer;
use pingpong_life::{CubeLayout, Driver, SimConfig};

use std::io;
use std::time::Instant;

// Constants
const CUBE_SIZE: u32 = 10;
const GENERATIONS: u64 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SimConfig::cube(CUBE_SIZE);
    let layout = CubeLayout::new(CUBE_SIZE)?;
    log::info!(
        "Running {}^3 cube ({}x{} board) with rules {} every {:?}",
        layout.size(),
        config.width,
        config.height,
        config.rules,
        config.tick
    );

    let mut driver = Driver::from_config(&config)?;
    let mut renderer = AsciiRenderer::with_slices(io::stdout().lock(), CUBE_SIZE);
    driver.render(&mut renderer)?;

    while driver.stepper().generation() < GENERATIONS {
        let now = Instant::now();
        if driver.update(now) {
            driver.render(&mut renderer)?;
            let alive = layout.live_positions(driver.stepper().front_pixels()).len();
            log::info!("Generation {}: {} live cubes", driver.stepper().generation(), alive);
            if alive == 0 {
                log::info!("Everything died, stopping");
                break;
            }
        }
        std::thread::sleep(driver.time_until_next_tick(Instant::now()));
    }

    Ok(())
}
