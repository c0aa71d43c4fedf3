use crate::driver::Driver;
use crate::error::Result;
use crate::rules::Preset;

/// What an input source can ask the simulation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Advance a single generation, even while paused
    Step,
    Randomize,
    SetRules(Preset),
}

impl Command {
    /// Maps a keyboard `code` (as in `KeyboardEvent.code`) to a command.
    pub fn from_key_code(code: &str) -> Option<Self> {
        let command = match code {
            "Space" => Command::TogglePause,
            "KeyN" | "ArrowRight" => Command::Step,
            "KeyR" => Command::Randomize,
            "Digit1" => Command::SetRules(Preset::Conway),
            "Digit2" => Command::SetRules(Preset::Unbounded),
            "Digit3" => Command::SetRules(Preset::Sustained),
            "Digit4" => Command::SetRules(Preset::Bays4555),
            "Digit5" => Command::SetRules(Preset::Bays6855),
            _ => return None,
        };
        Some(command)
    }
}

pub fn handle_command(driver: &mut Driver, command: Command) -> Result<()> {
    log::debug!("Handling {:?}", command);
    match command {
        Command::TogglePause => driver.toggle_running(),
        Command::Step => driver.step_once(),
        Command::Randomize => {
            let stepper = driver.stepper_mut();
            let p = stepper.live_probability();
            stepper.randomize(p);
        }
        Command::SetRules(preset) => {
            log::info!("Switching to {} preset", preset.name());
            driver.stepper_mut().set_rules(preset.rules())?;
        }
    }
    Ok(())
}

/// Handles a raw key code; unknown keys are ignored.
pub fn handle_key(driver: &mut Driver, code: &str) -> Result<()> {
    match Command::from_key_code(code) {
        Some(command) => handle_command(driver, command),
        None => Ok(()),
    }
}
