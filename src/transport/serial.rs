//! Serial device transport

use std::time::Duration;

use serialport::SerialPort;

use crate::config::Config;
use crate::error::{Result, SyncFrameError};
use super::IoTransport;

/// A serial device behind the generic stream adapter
pub type SerialTransport = IoTransport<Box<dyn SerialPort>>;

/// Open and configure the device named in `config`
pub fn open_serial(config: &Config) -> Result<SerialTransport> {
    let port = serialport::new(&config.port, config.baud_rate)
        .timeout(Duration::from_millis(config.read_timeout_ms))
        .open()
        .map_err(|e| SyncFrameError::SerialPort(format!("{}: {}", config.port, e)))?;

    tracing::info!(
        port = %config.port,
        baud = config.baud_rate,
        timeout_ms = config.read_timeout_ms,
        "serial port opened"
    );

    Ok(IoTransport::new(port))
}
