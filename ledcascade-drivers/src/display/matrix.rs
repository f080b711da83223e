//! 8x8 LED matrix rendering
//!
//! Assumes the matrices sit side by side in chain order, device 0 on the
//! left. Glyphs land on a single chip; pixels, vertical scrolling and
//! scrolled messages treat the chain as one strip `8 * cascaded` columns
//! wide with bit 0 of each column at the top.

use core::ops::{Deref, DerefMut};

use embedded_hal::delay::DelayNs;
use ledcascade_core::config::DEFAULT_SCROLL_DELAY_MS;
use ledcascade_core::{reg, ArgumentError, DisplayConfig, Font, NUM_DIGITS};
use ledcascade_hal::SpiBus;

use super::max7219::{Max7219, Max7219Error};

/// Code drawn after a message so it scrolls fully off the display
const BLANK: char = ' ';

fn char_code(ch: char) -> Result<u8, ArgumentError> {
    u8::try_from(ch).map_err(|_| ArgumentError::CharCode(ch as u32))
}

fn glyph_for<F: Font + ?Sized>(font: &F, code: u8) -> Result<&[u8], ArgumentError> {
    font.glyph(code).ok_or(ArgumentError::MissingGlyph(code))
}

/// LED matrix cascade
///
/// Dereferences to [`Max7219`], so the cascade operations (`flush`,
/// `clear`, `brightness`, horizontal scroll, ...) are available directly.
pub struct Matrix<SPI> {
    device: Max7219<SPI>,
    scroll_delay_ms: u32,
}

impl<SPI> Deref for Matrix<SPI> {
    type Target = Max7219<SPI>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl<SPI> DerefMut for Matrix<SPI> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}

impl<SPI> From<Max7219<SPI>> for Matrix<SPI> {
    fn from(device: Max7219<SPI>) -> Self {
        Self {
            device,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

impl<SPI: SpiBus> Matrix<SPI> {
    /// Bring up a chain of `cascaded` matrices
    pub fn new(spi: SPI, cascaded: usize) -> Result<Self, Max7219Error<SPI::Error>> {
        Max7219::new(spi, cascaded).map(Self::from)
    }

    /// Bring up a chain of matrices from config
    ///
    /// The configured scroll delay is what [`Matrix::scroll_message`] uses.
    pub fn from_config(
        spi: SPI,
        config: &DisplayConfig,
    ) -> Result<Self, Max7219Error<SPI::Error>> {
        let device = Max7219::from_config(spi, config)?;
        Ok(Self {
            device,
            scroll_delay_ms: config.scroll_delay_ms,
        })
    }

    /// Per-column delay used by [`Matrix::scroll_message`]
    pub fn scroll_delay_ms(&self) -> u32 {
        self.scroll_delay_ms
    }

    pub fn set_scroll_delay_ms(&mut self, delay_ms: u32) {
        self.scroll_delay_ms = delay_ms;
    }

    /// Unwrap the cascade device
    pub fn into_inner(self) -> Max7219<SPI> {
        self.device
    }

    /// Draw character `code` from `font` on chip `device_id`
    ///
    /// Glyph columns go to DIGIT0 onwards; a glyph narrower than 8 leaves
    /// the remaining columns as they were. A glyph wider than 8 clears the
    /// chip and fails with [`Max7219Error::GlyphOverflow`].
    pub fn letter<F: Font + ?Sized>(
        &mut self,
        device_id: usize,
        code: u8,
        font: &F,
        redraw: bool,
    ) -> Result<(), Max7219Error<SPI::Error>> {
        self.device.buffer().check_device(device_id)?;
        let glyph = glyph_for(font, code)?;

        for (column, &value) in glyph.iter().enumerate() {
            if column >= NUM_DIGITS {
                warn!("glyph {} is {} columns wide", code, glyph.len());
                self.device.clear(Some(device_id))?;
                return Err(Max7219Error::GlyphOverflow(code));
            }
            self.device
                .set_byte(device_id, reg::DIGIT0 + column as u8, value, false)?;
        }

        self.device.flush_if(redraw)
    }

    /// Move every lit pixel up one row; the top row is lost
    pub fn scroll_up(&mut self, redraw: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.device.buffer_mut().shift_rows_up();
        self.device.flush_if(redraw)
    }

    /// Move every lit pixel down one row; the bottom row is lost
    pub fn scroll_down(&mut self, redraw: bool) -> Result<(), Max7219Error<SPI::Error>> {
        self.device.buffer_mut().shift_rows_down();
        self.device.flush_if(redraw)
    }

    /// Light (`on = true`) or darken the pixel at strip column `x`, row `y`
    pub fn pixel(
        &mut self,
        x: usize,
        y: u8,
        on: bool,
        redraw: bool,
    ) -> Result<(), Max7219Error<SPI::Error>> {
        self.device.buffer_mut().set_pixel(x, y, on)?;
        self.device.flush_if(redraw)
    }

    /// Scroll `text` across the display from right to left
    ///
    /// Each column of each glyph enters at the right edge after waiting
    /// `delay_per_column_ms`, followed by one blank per chip so the tail
    /// leaves the display. Blocks until done. Every character is checked
    /// against `font` before anything is drawn.
    pub fn show_message<F, D>(
        &mut self,
        text: &str,
        font: &F,
        delay: &mut D,
        delay_per_column_ms: u32,
    ) -> Result<(), Max7219Error<SPI::Error>>
    where
        F: Font + ?Sized,
        D: DelayNs,
    {
        let cascaded = self.device.cascaded();
        let chars = || text.chars().chain(core::iter::repeat(BLANK).take(cascaded));

        for ch in chars() {
            glyph_for(font, char_code(ch)?)?;
        }

        trace!("scrolling {} chars over {} devices", text.chars().count(), cascaded);

        for ch in chars() {
            for &value in glyph_for(font, char_code(ch)?)? {
                delay.delay_ms(delay_per_column_ms);

                let buffer = self.device.buffer_mut();
                buffer.shift_left();
                let last = buffer.len() - 1;
                buffer.set_column(last, value)?;

                self.device.flush()?;
            }
        }

        Ok(())
    }

    /// [`Matrix::show_message`] at the configured scroll delay
    pub fn scroll_message<F, D>(
        &mut self,
        text: &str,
        font: &F,
        delay: &mut D,
    ) -> Result<(), Max7219Error<SPI::Error>>
    where
        F: Font + ?Sized,
        D: DelayNs,
    {
        self.show_message(text, font, delay, self.scroll_delay_ms)
    }
}
