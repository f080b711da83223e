//! Display driver implementations
//!
//! This crate drives daisy-chained MAX7219 chips through the
//! [`ledcascade_hal::SpiBus`] seam:
//!
//! - [`display::Max7219`] - cascade device: init, control registers,
//!   framebuffer edits and flush
//! - [`display::Matrix`] - 8x8 LED matrix rendering on top of it:
//!   glyphs, pixels, vertical scroll, scrolled messages
//!
//! Everything is blocking and single-threaded. A driver owns its bus and
//! framebuffer exclusively; sharing one across threads needs a lock around
//! each edit-and-flush.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod fmt;

pub mod display;

pub use display::{Matrix, Max7219, Max7219Error};
