//! Configuration for syncframe
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, SyncFrameError};

/// Main configuration for a serial link
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Port Configuration
    // -------------------------------------------------------------------------
    /// Serial device path (e.g. `/dev/ttyACM0`, `COM3`)
    pub port: String,

    /// Serial baud rate
    pub baud_rate: u32,

    /// Transport read timeout (milliseconds)
    pub read_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Buffering Configuration
    // -------------------------------------------------------------------------
    /// Maximum bytes requested from the transport per poll
    pub read_chunk: usize,

    // -------------------------------------------------------------------------
    // Host Loop Configuration
    // -------------------------------------------------------------------------
    /// Delay between send/poll cycles (milliseconds)
    pub poll_interval_ms: u64,

    /// Delay after opening the port, while the peer resets (milliseconds)
    pub startup_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: "/dev/ttyACM0".to_string(),
            baud_rate: 115_200,
            read_timeout_ms: 100,
            read_chunk: 512,
            poll_interval_ms: 1000,
            startup_delay_ms: 2000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings that would stall or never open a link
    pub fn validate(&self) -> Result<()> {
        if self.read_chunk == 0 {
            return Err(SyncFrameError::Config(
                "read_chunk must be greater than zero".to_string(),
            ));
        }

        if self.baud_rate == 0 {
            return Err(SyncFrameError::Config(
                "baud_rate must be greater than zero".to_string(),
            ));
        }

        if self.port.is_empty() {
            return Err(SyncFrameError::Config("port must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the serial device path
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.config.port = port.into();
        self
    }

    /// Set the baud rate
    pub fn baud_rate(mut self, baud: u32) -> Self {
        self.config.baud_rate = baud;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the maximum bytes per read
    pub fn read_chunk(mut self, bytes: usize) -> Self {
        self.config.read_chunk = bytes;
        self
    }

    /// Set the host loop period (in milliseconds)
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Set the post-open startup delay (in milliseconds)
    pub fn startup_delay_ms(mut self, ms: u64) -> Self {
        self.config.startup_delay_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
