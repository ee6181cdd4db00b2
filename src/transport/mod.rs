//! Transport Module
//!
//! Byte-level I/O consumed by a [`crate::link::Link`]. The protocol layer never
//! touches a transport; it only sees byte slices.
//!
//! ## Implementations
//! - [`IoTransport`]: any `Read + Write` (serial ports, TCP streams, ...)
//! - [`LoopbackTransport`]: in-memory connected pair
//! - [`open_serial`]: a serial device wrapped in an [`IoTransport`]

mod io;
mod loopback;
mod serial;

pub use io::IoTransport;
pub use loopback::LoopbackTransport;
pub use serial::{open_serial, SerialTransport};

use crate::error::Result;

/// Raw byte pipe to the peer
pub trait Transport {
    /// Write all of `bytes`
    fn write(&mut self, bytes: &[u8]) -> Result<()>;

    /// Read up to `max_bytes` currently available bytes. May return none.
    fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        (**self).read(max_bytes)
    }
}
