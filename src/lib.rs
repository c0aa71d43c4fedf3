//! Ping-pong Game of Life on RGBA pixel buffers.

pub mod board;
pub mod config;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod rules;
pub mod stepper;


pub use board::Board;
pub use config::SimConfig;
pub use driver::Driver;
pub use encoder::{decode, encode, Pixel, PixelBuffer};
pub use error::{Result, SimError};
pub use layout::CubeLayout;
pub use rules::{GameRules, Pattern, Preset};
pub use stepper::SimulationStepper;
