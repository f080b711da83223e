//! Cascade framebuffer
//!
//! One flat byte buffer holds every digit/column register of every chip
//! in the chain: byte `device * 8 + column` is column `column` of chip
//! `device`. Bit `y` of a byte is row `y` of that column.
//!
//! The buffer is addressed two ways:
//!
//! - **Device addressing** (`offset`, `get`, `set`, `device`,
//!   `clear_device`) respects physical chip boundaries. Positions are
//!   MAX7219 register numbers `DIGIT0..=DIGIT7`.
//! - **Canvas addressing** (`column`, `set_column`, `pixel`,
//!   `set_pixel`, `shift_*`) treats the whole chain as one continuous
//!   strip `8 * cascaded` columns wide. Horizontal shifts carry content
//!   across chip boundaries.
//!
//! The length is fixed at construction and no operation changes it.

use heapless::Vec;

use crate::error::{ArgumentError, ConfigError};
use crate::registers::{is_digit, reg, NUM_DIGITS};

/// Longest supported chain
pub const MAX_CASCADED: usize = 32;

/// Buffer capacity for the longest chain
pub const MAX_BUFFER_LEN: usize = NUM_DIGITS * MAX_CASCADED;

/// Column bytes for every chip in a cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: Vec<u8, MAX_BUFFER_LEN>,
    cascaded: usize,
}

impl FrameBuffer {
    /// Create an all-dark buffer for `cascaded` chips
    pub fn new(cascaded: usize) -> Result<Self, ConfigError> {
        if cascaded == 0 || cascaded > MAX_CASCADED {
            return Err(ConfigError::CascadeCount(cascaded));
        }

        let mut bytes = Vec::new();
        bytes
            .resize(cascaded * NUM_DIGITS, 0)
            .map_err(|_| ConfigError::CascadeCount(cascaded))?;

        Ok(Self { bytes, cascaded })
    }

    /// Number of chips in the chain
    pub fn cascaded(&self) -> usize {
        self.cascaded
    }

    /// Buffer length, always `8 * cascaded`
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true; a cascade has at least one chip
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw column bytes, left to right
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    // -- device addressing --------------------------------------------

    /// Check a device index
    pub fn check_device(&self, device: usize) -> Result<(), ArgumentError> {
        if device < self.cascaded {
            Ok(())
        } else {
            Err(ArgumentError::DeviceId(device))
        }
    }

    /// Buffer offset of digit register `position` on chip `device`
    pub fn offset(&self, device: usize, position: u8) -> Result<usize, ArgumentError> {
        self.check_device(device)?;
        if !is_digit(position) {
            return Err(ArgumentError::Position(position));
        }
        Ok(device * NUM_DIGITS + (position - reg::DIGIT0) as usize)
    }

    /// Read digit register `position` on chip `device`
    pub fn get(&self, device: usize, position: u8) -> Result<u8, ArgumentError> {
        let offset = self.offset(device, position)?;
        Ok(self.bytes[offset])
    }

    /// Write digit register `position` on chip `device`
    pub fn set(&mut self, device: usize, position: u8, value: u8) -> Result<(), ArgumentError> {
        let offset = self.offset(device, position)?;
        self.bytes[offset] = value;
        Ok(())
    }

    /// The 8 column bytes of one chip
    pub fn device(&self, device: usize) -> Result<&[u8], ArgumentError> {
        self.check_device(device)?;
        let start = device * NUM_DIGITS;
        Ok(&self.bytes[start..start + NUM_DIGITS])
    }

    /// Zero one chip's columns, leaving the others untouched
    pub fn clear_device(&mut self, device: usize) -> Result<(), ArgumentError> {
        self.check_device(device)?;
        let start = device * NUM_DIGITS;
        self.bytes[start..start + NUM_DIGITS].fill(0);
        Ok(())
    }

    /// Zero every chip
    pub fn clear_all(&mut self) {
        self.bytes.fill(0);
    }

    // -- canvas addressing --------------------------------------------

    fn check_x(&self, x: usize) -> Result<(), ArgumentError> {
        if x < self.bytes.len() {
            Ok(())
        } else {
            Err(ArgumentError::PixelX(x))
        }
    }

    fn check_y(y: u8) -> Result<(), ArgumentError> {
        if (y as usize) < NUM_DIGITS {
            Ok(())
        } else {
            Err(ArgumentError::PixelY(y))
        }
    }

    /// Column byte at canvas position `x`
    pub fn column(&self, x: usize) -> Result<u8, ArgumentError> {
        self.check_x(x)?;
        Ok(self.bytes[x])
    }

    /// Overwrite the column byte at canvas position `x`
    pub fn set_column(&mut self, x: usize, value: u8) -> Result<(), ArgumentError> {
        self.check_x(x)?;
        self.bytes[x] = value;
        Ok(())
    }

    /// Whether the pixel at column `x`, row `y` is lit
    pub fn pixel(&self, x: usize, y: u8) -> Result<bool, ArgumentError> {
        self.check_x(x)?;
        Self::check_y(y)?;
        Ok(self.bytes[x] & (1 << y) != 0)
    }

    /// Light or darken the pixel at column `x`, row `y`
    pub fn set_pixel(&mut self, x: usize, y: u8, on: bool) -> Result<(), ArgumentError> {
        self.check_x(x)?;
        Self::check_y(y)?;
        if on {
            self.bytes[x] |= 1 << y;
        } else {
            self.bytes[x] &= !(1 << y);
        }
        Ok(())
    }

    /// Move every column one place left; a dark column enters on the right
    pub fn shift_left(&mut self) {
        self.bytes.copy_within(1.., 0);
        if let Some(last) = self.bytes.last_mut() {
            *last = 0;
        }
    }

    /// Move every column one place right; a dark column enters on the left
    pub fn shift_right(&mut self) {
        let len = self.bytes.len();
        self.bytes.copy_within(..len - 1, 1);
        self.bytes[0] = 0;
    }

    /// Move every lit pixel one row up; row 0 is lost
    pub fn shift_rows_up(&mut self) {
        for value in self.bytes.iter_mut() {
            *value >>= 1;
        }
    }

    /// Move every lit pixel one row down; row 7 is lost
    pub fn shift_rows_down(&mut self) {
        for value in self.bytes.iter_mut() {
            *value <<= 1;
        }
    }
}
