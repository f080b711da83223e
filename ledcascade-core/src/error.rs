//! Error types shared by the framebuffer, font and config layers

/// An argument was outside the range the operation accepts
///
/// Raised before any buffer or bus mutation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Device index not in `0..cascaded`
    DeviceId(usize),
    /// Digit/column register not in `DIGIT0..=DIGIT7`
    Position(u8),
    /// Register not a control register (`DECODEMODE..=DISPLAYTEST`)
    Register(u8),
    /// Brightness not in `0..16`
    Brightness(u8),
    /// Canvas column not in `0..buffer length`
    PixelX(usize),
    /// Pixel row not in `0..8`
    PixelY(u8),
    /// Character code above 255
    CharCode(u32),
    /// Font has no glyph for this code
    MissingGlyph(u8),
}

/// Display configuration is unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Cascade count not in `1..=MAX_CASCADED`
    CascadeCount(usize),
    /// Configured brightness above `MAX_INTENSITY`
    Brightness(u8),
    /// Configuration text could not be parsed
    Parse,
}
