//! Test doubles for the bus and delay seams

use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use ledcascade_hal::SpiBus;

/// Bus error raised by [`RecordingBus`] once armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Records every transfer; fails once `fail_after` transfers succeeded
pub struct RecordingBus {
    pub transfers: Vec<Vec<u8>>,
    pub fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
            fail_after: None,
        }
    }

    pub fn failing_after(transfers: usize) -> Self {
        Self {
            transfers: Vec::new(),
            fail_after: Some(transfers),
        }
    }

    pub fn reset(&mut self) {
        self.transfers.clear();
    }
}

impl SpiBus for RecordingBus {
    type Error = BusFault;

    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_after.is_some_and(|limit| self.transfers.len() >= limit) {
            return Err(BusFault);
        }
        self.transfers.push(data.to_vec());
        Ok(())
    }
}

/// Counts delays instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    pub calls: usize,
    pub total_ms: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls += 1;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls += 1;
        self.total_ms += ms as u64;
    }
}
