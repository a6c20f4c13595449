//! Serial-line transport.

use std::io::{self, Read, Write};
use std::time::Duration;

use log::debug;
use serialport::SerialPort;

use tracerlink_protocol::Transport;

/// Default read timeout, matching the controller's documented response
/// latency with margin.
pub const DEFAULT_SERIAL_TIMEOUT: Duration = Duration::from_secs(1);

/// Default baud rate of the controller's RJ45 serial port.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Transport over a local serial port.
///
/// The port is opened eagerly; `connect` and `disconnect` are no-ops.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    path: String,
}

impl SerialTransport {
    /// Open a serial port with the default 1-second read timeout.
    pub fn open(path: &str, baud: u32) -> serialport::Result<Self> {
        Self::open_with_timeout(path, baud, DEFAULT_SERIAL_TIMEOUT)
    }

    /// Open a serial port with an explicit read timeout.
    pub fn open_with_timeout(
        path: &str,
        baud: u32,
        timeout: Duration,
    ) -> serialport::Result<Self> {
        let port = serialport::new(path, baud).timeout(timeout).open()?;
        debug!("opened serial port {path} at {baud} baud");
        Ok(SerialTransport {
            port,
            path: path.to_string(),
        })
    }

    /// The path this transport was opened on.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("path", &self.path)
            .finish()
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)?;
        self.port.flush()
    }

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.port.read(buf) {
            Ok(n) => Ok(n),
            // An idle line is not an error; the protocol layer turns it
            // into its own timeout kinds.
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(0),
            Err(e) => Err(e),
        }
    }
}
