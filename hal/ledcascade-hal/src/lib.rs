//! ledcascade Hardware Abstraction Layer
//!
//! This crate defines the bus seam between the MAX7219 cascade driver and
//! whatever platform actually moves the bytes. The driver only ever needs
//! one operation: send an ordered run of bytes as a single chip-select
//! bracketed transaction.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ledcascade-drivers (Max7219, Matrix)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ledcascade-hal (this crate - SpiBus)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  any embedded-hal 1.0 SpiDevice         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`spi::SpiBus`] - SPI transfer operation
//! - [`spi::SpiDeviceBus`] - Adapter from `embedded_hal::spi::SpiDevice`

#![no_std]
#![deny(unsafe_code)]

pub mod spi;

// Re-export key types at crate root for convenience
pub use spi::{Mode, SpiBus, SpiConfig, SpiDeviceBus};
