//! Byte transport abstraction.
//!
//! The protocol engine is written against this trait so the same framing
//! code drives a serial line, a TCP bridge, or a scripted mock in tests.
//! The model is strictly blocking: every call runs to completion or to the
//! transport's own timeout on the calling thread.

use std::io;

/// A blocking, byte-oriented connection to a charge controller.
///
/// Timeouts are signalled in-band: [`recv`](Transport::recv) returning
/// fewer bytes than requested (including zero) means the line went idle
/// for the transport's timeout period, not that the connection failed.
/// Hard failures (port gone, socket reset) are returned as errors.
pub trait Transport {
    /// Establish the connection.
    ///
    /// Default implementation does nothing. Transports that connect lazily
    /// or are always ready (a serial port is open from construction) need
    /// not override this.
    fn connect(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Send raw bytes, blocking until they are fully handed to the OS.
    fn send(&mut self, data: &[u8]) -> io::Result<()>;

    /// Receive up to `buf.len()` bytes, blocking at most the transport's
    /// read timeout. Returns the number of bytes placed in `buf`; zero
    /// means the timeout elapsed with nothing to read.
    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Tear the connection down. Default implementation does nothing.
    fn disconnect(&mut self) {}
}
