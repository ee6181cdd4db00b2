//! Adapter from `std::io` streams to [`Transport`]

use std::io::{ErrorKind, Read, Write};

use crate::error::Result;
use super::Transport;

/// Wraps a blocking or timeout-configured stream
///
/// Read timeouts are reported as an empty read, not an error.
pub struct IoTransport<T> {
    inner: T,
}

impl<T: Read + Write> IoTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write> Transport for IoTransport<T> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.inner.flush()?;
        Ok(())
    }

    fn read(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; max_bytes];
        match self.inner.read(&mut buf) {
            Ok(n) => {
                buf.truncate(n);
                Ok(buf)
            }
            // Windows reports TimedOut where Unix reports WouldBlock
            Err(ref e)
                if matches!(
                    e.kind(),
                    ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
                ) =>
            {
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}
