//! Board-agnostic core for cascaded MAX7219 LED matrices
//!
//! This crate contains everything that does not touch a bus:
//!
//! - MAX7219 register map
//! - Framebuffer layout and addressing arithmetic
//! - Font lookup trait and a built-in 8x8 font
//! - Argument and configuration error types
//! - Display configuration (serde / TOML)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod registers;

pub use config::{BusSelector, DisplayConfig};
pub use error::{ArgumentError, ConfigError};
pub use font::{Font, BASIC_FONT};
pub use framebuffer::{FrameBuffer, MAX_BUFFER_LEN, MAX_CASCADED};
pub use registers::{reg, MAX_INTENSITY, NUM_DIGITS};
