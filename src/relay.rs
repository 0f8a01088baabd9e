//! Serial relay for the temperature line protocol.
//!
//! One-way, byte-oriented: after a settle delay the truncated temperature is
//! written as an ASCII decimal line. Nothing is read back.

use crate::config::SerialConfig;
use crate::{Result, TempRelayError};
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Write timeout for the serial port
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// Relays temperature readings over a configured serial device.
pub struct SerialRelay {
    config: SerialConfig,
}

impl SerialRelay {
    /// Create a relay for the given serial configuration
    #[must_use]
    pub fn new(config: &SerialConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Transmit one temperature reading.
    ///
    /// Opens the device, waits for the settle delay so the receiving
    /// microcontroller can start its listener, writes the line, and releases
    /// the port handle on every exit path.
    #[instrument(skip(self), fields(device = %self.config.device_path))]
    pub fn send(&self, temperature: i64) -> Result<()> {
        debug!(
            "Opening {} at {} baud",
            self.config.device_path, self.config.baud_rate
        );

        let mut port = serialport::new(&self.config.device_path, self.config.baud_rate)
            .timeout(WRITE_TIMEOUT)
            .open()
            .map_err(|e| {
                TempRelayError::transmit(format!(
                    "failed to open serial device {}: {e}",
                    self.config.device_path
                ))
            })?;

        if self.config.settle_seconds > 0 {
            debug!(
                "Waiting {}s for the device to start listening",
                self.config.settle_seconds
            );
            thread::sleep(Duration::from_secs(self.config.settle_seconds.into()));
        }

        write_reading(&mut *port, temperature).map_err(|e| {
            TempRelayError::transmit(format!(
                "failed to write to serial device {}: {e}",
                self.config.device_path
            ))
        })?;

        info!(
            "Transmitted temperature {temperature} to {}",
            self.config.device_path
        );
        Ok(())
    }
}

/// Write one newline-terminated ASCII decimal temperature line
fn write_reading<W: Write + ?Sized>(writer: &mut W, temperature: i64) -> std::io::Result<()> {
    writer.write_all(format!("{temperature}\n").as_bytes())?;
    writer.flush()
}
