//! MAX7219 register map
//!
//! Every write to the chip is a 16-bit word: register address in the
//! first byte, data in the second. A cascade shifts words through the
//! chain, so N chips take N words per transaction.

/// Digit/column registers per chip
pub const NUM_DIGITS: usize = 8;

/// Highest INTENSITY value (4 bits)
pub const MAX_INTENSITY: u8 = 15;

/// MAX7219 register addresses
pub mod reg {
    /// No-op, shifts data through to the next chip
    pub const NOOP: u8 = 0x0;
    /// Digit/column 0
    pub const DIGIT0: u8 = 0x1;
    pub const DIGIT1: u8 = 0x2;
    pub const DIGIT2: u8 = 0x3;
    pub const DIGIT3: u8 = 0x4;
    pub const DIGIT4: u8 = 0x5;
    pub const DIGIT5: u8 = 0x6;
    pub const DIGIT6: u8 = 0x7;
    /// Digit/column 7
    pub const DIGIT7: u8 = 0x8;
    /// BCD decode per digit (0 = raw matrix data)
    pub const DECODEMODE: u8 = 0x9;
    /// LED current, 0-15
    pub const INTENSITY: u8 = 0xA;
    /// Number of digits scanned, minus one
    pub const SCANLIMIT: u8 = 0xB;
    /// 0 = shutdown, 1 = normal operation
    pub const SHUTDOWN: u8 = 0xC;
    /// 1 = all LEDs on
    pub const DISPLAYTEST: u8 = 0xF;
}

/// True for the registers backed by the framebuffer
pub const fn is_digit(register: u8) -> bool {
    register >= reg::DIGIT0 && register <= reg::DIGIT7
}

/// True for the control registers the command path may write
pub const fn is_control(register: u8) -> bool {
    register >= reg::DECODEMODE && register <= reg::DISPLAYTEST
}
