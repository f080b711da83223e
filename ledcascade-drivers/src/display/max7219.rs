//! MAX7219 cascade driver
//!
//! The MAX7219 drives 64 LEDs from eight digit registers. Chips are
//! daisy-chained: DOUT of one feeds DIN of the next, and all of them latch
//! on the same rising edge of LOAD/CS.
//!
//! # Wire format
//!
//! Each chip consumes one 16-bit word per transaction:
//!
//! ```text
//! ┌──────────┬──────┐┌──────────┬──────┐     ┌──────────┬──────┐
//! │ REGISTER │ DATA ││ REGISTER │ DATA │ ... │ REGISTER │ DATA │
//! │ 1B       │ 1B   ││ 1B       │ 1B   │     │ 1B       │ 1B   │
//! └──────────┴──────┘└──────────┴──────┘     └──────────┴──────┘
//!    device 0           device 1               device N-1
//! ```
//!
//! Every chip latches whatever word is sitting in its shift register when
//! CS rises, so one transaction can only address the *same* register on
//! every chip. A flush is therefore column-major: eight transactions, one
//! per digit register, each carrying that column for every device.

use heapless::Vec;

use ledcascade_core::config::DEFAULT_BRIGHTNESS;
use ledcascade_core::registers::{is_control, is_digit};
use ledcascade_core::{
    reg, ArgumentError, ConfigError, DisplayConfig, FrameBuffer, MAX_CASCADED, MAX_INTENSITY,
};
use ledcascade_hal::{SpiBus, SpiConfig};

/// Longest transaction: one word per chip
pub const MAX_FRAME_LEN: usize = 2 * MAX_CASCADED;

/// Bytes of one bus transaction
pub type Frame = Vec<u8, MAX_FRAME_LEN>;

/// Chip bring-up, in order. Scan all 8 digits, raw (non-BCD) data, display
/// test off, leave shutdown. Reordering can leave chips blank or showing
/// power-on garbage.
const INIT_SEQUENCE: [(u8, u8); 4] = [
    (reg::SCANLIMIT, 7),
    (reg::DECODEMODE, 0),
    (reg::DISPLAYTEST, 0),
    (reg::SHUTDOWN, 1),
];

/// MAX7219 driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Max7219Error<E> {
    /// Cascade cannot be built with this configuration
    InvalidConfiguration(ConfigError),
    /// Argument out of range; nothing was written
    InvalidArgument(ArgumentError),
    /// Glyph wider than one chip; that chip has been cleared
    GlyphOverflow(u8),
    /// Transport failure
    Bus(E),
}

impl<E> From<ArgumentError> for Max7219Error<E> {
    fn from(e: ArgumentError) -> Self {
        Max7219Error::InvalidArgument(e)
    }
}

impl<E> From<ConfigError> for Max7219Error<E> {
    fn from(e: ConfigError) -> Self {
        Max7219Error::InvalidConfiguration(e)
    }
}

/// Build a transaction writing the same control word to every chip
pub fn build_command_frame(
    register: u8,
    data: u8,
    cascaded: usize,
) -> Result<Frame, ConfigError> {
    if cascaded == 0 || cascaded > MAX_CASCADED {
        return Err(ConfigError::CascadeCount(cascaded));
    }

    let mut frame = Frame::new();
    for _ in 0..cascaded {
        frame
            .extend_from_slice(&[register, data])
            .map_err(|_| ConfigError::CascadeCount(cascaded))?;
    }
    Ok(frame)
}

/// Build the transaction for digit register `position` (`DIGIT0..=DIGIT7`)
///
/// Device 0's word goes out first.
pub fn build_digit_frame(buffer: &FrameBuffer, position: u8) -> Result<Frame, ArgumentError> {
    if !is_digit(position) {
        return Err(ArgumentError::Position(position));
    }

    let mut frame = Frame::new();
    for device in 0..buffer.cascaded() {
        let value = buffer.get(device, position)?;
        frame
            .extend_from_slice(&[position, value])
            .map_err(|_| ArgumentError::DeviceId(device))?;
    }
    Ok(frame)
}

/// Bus settings for a configured cascade
pub fn spi_config(config: &DisplayConfig) -> SpiConfig {
    SpiConfig::new(config.spi.bus, config.spi.device)
}

/// Chain of MAX7219 chips behind one chip select
///
/// Holds a framebuffer of `8 * cascaded` column bytes. Edits go to the
/// buffer; `redraw = true` on an edit flushes the whole buffer right away,
/// `redraw = false` defers it so a batch of edits costs one flush.
pub struct Max7219<SPI> {
    spi: SPI,
    buffer: FrameBuffer,
}

impl<SPI: SpiBus> Max7219<SPI> {
    /// Bring up a chain of `cascaded` chips
    ///
    /// Runs the init sequence, sets brightness 7, then clears and flushes.
    pub fn new(spi: SPI, cascaded: usize) -> Result<Self, Max7219Error<SPI::Error>> {
        let buffer = FrameBuffer::new(cascaded)?;
        let mut device = Self { spi, buffer };
        device.init()?;
        Ok(device)
    }

    /// Bring up a chain from config, then apply its brightness
    pub fn from_config(
        spi: SPI,
        config: &DisplayConfig,
    ) -> Result<Self, Max7219Error<SPI::Error>> {
        config.validate()?;
        let mut device = Self::new(spi, config.cascaded)?;
        if config.brightness != DEFAULT_BRIGHTNESS {
            device.brightness(config.brightness)?;
        }
        Ok(device)
    }

    fn init(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        for &(register, data) in INIT_SEQUENCE.iter() {
            self.command(register, data)?;
        }
        self.brightness(DEFAULT_BRIGHTNESS)?;
        self.clear(None)?;

        debug!("MAX7219 cascade up: {} devices", self.buffer.cascaded());
        Ok(())
    }

    /// Number of chips in the chain
    pub fn cascaded(&self) -> usize {
        self.buffer.cascaded()
    }

    /// Current framebuffer contents
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// The bus this driver writes to
    pub fn bus(&self) -> &SPI {
        &self.spi
    }

    /// Give the bus back
    pub fn release(self) -> SPI {
        self.spi
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), Max7219Error<SPI::Error>> {
        self.spi.transfer(frame).map_err(Max7219Error::Bus)
    }

    /// Write `data` to control register `register` on every chip
    ///
    /// Only `DECODEMODE..=DISPLAYTEST` are accepted; digit registers go
    /// through the framebuffer.
    pub fn command(&mut self, register: u8, data: u8) -> Result<(), Max7219Error<SPI::Error>> {
        if !is_control(register) {
            return Err(ArgumentError::Register(register).into());
        }
        let frame = build_command_frame(register, data, self.buffer.cascaded())?;
        self.write(&frame)
    }

    /// Set every chip's intensity (0-15)
    pub fn brightness(&mut self, level: u8) -> Result<(), Max7219Error<SPI::Error>> {
        if level > MAX_INTENSITY {
            return Err(ArgumentError::Brightness(level).into());
        }
        self.command(reg::INTENSITY, level)
    }

    /// Enter (`true`) or leave (`false`) shutdown on every chip
    ///
    /// Register contents survive shutdown.
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.command(reg::SHUTDOWN, if shutdown { 0 } else { 1 })
    }

    /// Light every LED regardless of the digit registers
    pub fn set_display_test(&mut self, on: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.command(reg::DISPLAYTEST, on as u8)
    }

    /// Store `value` in digit register `position` of chip `device_id`
    pub fn set_byte(
        &mut self,
        device_id: usize,
        position: u8,
        value: u8,
        redraw: bool,
    ) -> Result<(), Max7219Error<SPI::Error>> {
        self.buffer.set(device_id, position, value)?;
        self.flush_if(redraw)
    }

    /// Zero one chip (`Some(id)`) or all of them (`None`), then flush
    pub fn clear(&mut self, device_id: Option<usize>) -> Result<(), Max7219Error<SPI::Error>> {
        match device_id {
            Some(id) => self.buffer.clear_device(id)?,
            None => self.buffer.clear_all(),
        }
        self.flush()
    }

    /// Send the whole framebuffer: one transaction per digit column
    pub fn flush(&mut self) -> Result<(), Max7219Error<SPI::Error>> {
        for position in reg::DIGIT0..=reg::DIGIT7 {
            let frame = build_digit_frame(&self.buffer, position)?;
            self.write(&frame)?;
        }
        Ok(())
    }

    pub(crate) fn flush_if(&mut self, redraw: bool) -> Result<(), Max7219Error<SPI::Error>> {
        if redraw {
            self.flush()
        } else {
            Ok(())
        }
    }

    /// Shift the whole strip one column left, across chip boundaries
    pub fn scroll_left(&mut self, redraw: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.buffer.shift_left();
        self.flush_if(redraw)
    }

    /// Shift the whole strip one column right, across chip boundaries
    pub fn scroll_right(&mut self, redraw: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.buffer.shift_right();
        self.flush_if(redraw)
    }
}
