//! MAX7219 display drivers

pub mod matrix;
pub mod max7219;

#[cfg(test)]
pub(crate) mod mock;

pub use matrix::Matrix;
pub use max7219::{spi_config, Max7219, Max7219Error};
