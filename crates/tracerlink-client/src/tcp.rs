//! TCP transport for serial-over-network bridges.
//!
//! Many Tracer installations expose the controller's serial line through a
//! TCP bridge (an RS-232 device server or a simulator). Sockets deliver
//! data in whatever chunks the network produces, so this transport keeps a
//! leftover buffer: one socket read may fill several small `recv` calls
//! from the frame reader.
//!
//! The connection is established lazily on first use, and any hard error
//! or peer hangup drops the stream so the next call reconnects.

use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use bytes::{Buf, BytesMut};
use log::debug;

use tracerlink_protocol::Transport;

/// Default socket read timeout.
pub const DEFAULT_TCP_TIMEOUT: Duration = Duration::from_secs(1);

/// Size of one socket read.
const RECV_CHUNK_SIZE: usize = 512;

/// Transport over a TCP connection, with buffering and lazy reconnect.
#[derive(Debug)]
pub struct TcpTransport {
    addr: String,
    read_timeout: Duration,
    stream: Option<TcpStream>,
    /// Bytes received from the socket but not yet handed to a caller.
    buffer: BytesMut,
}

impl TcpTransport {
    /// Create a transport for `addr` (`host:port`). No connection is made
    /// until the first send or receive.
    pub fn new(addr: impl Into<String>) -> Self {
        Self::with_timeout(addr, DEFAULT_TCP_TIMEOUT)
    }

    /// Create a transport with an explicit socket read timeout.
    pub fn with_timeout(addr: impl Into<String>, read_timeout: Duration) -> Self {
        TcpTransport {
            addr: addr.into(),
            read_timeout,
            stream: None,
            buffer: BytesMut::with_capacity(RECV_CHUNK_SIZE),
        }
    }

    /// The address this transport connects to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Whether a live connection is currently held.
    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    fn ensure_connected(&mut self) -> io::Result<&mut TcpStream> {
        if self.stream.is_none() {
            let stream = TcpStream::connect(self.addr.as_str())?;
            stream.set_read_timeout(Some(self.read_timeout))?;
            stream.set_nodelay(true)?;
            debug!("connected to {}", self.addr);
            self.stream = Some(stream);
        }
        self.stream
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "tcp stream not connected"))
    }

    fn drop_stream(&mut self) {
        if self.stream.take().is_some() {
            debug!("dropping connection to {}", self.addr);
        }
    }
}

impl Transport for TcpTransport {
    fn connect(&mut self) -> io::Result<()> {
        self.ensure_connected().map(|_| ())
    }

    fn send(&mut self, data: &[u8]) -> io::Result<()> {
        let result = self
            .ensure_connected()
            .and_then(|stream| stream.write_all(data));
        if result.is_err() {
            // Reconnect lazily on the next call.
            self.drop_stream();
        }
        result
    }

    fn recv(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // Serve leftovers from the last socket read first.
        if !self.buffer.is_empty() {
            let n = buf.len().min(self.buffer.len());
            self.buffer.copy_to_slice(&mut buf[..n]);
            return Ok(n);
        }

        let mut chunk = [0u8; RECV_CHUNK_SIZE];
        let read = match self.ensure_connected() {
            Ok(stream) => stream.read(&mut chunk),
            Err(e) => return Err(e),
        };

        match read {
            // Peer hung up; reconnect on the next call.
            Ok(0) => {
                self.drop_stream();
                Ok(0)
            }
            Ok(n) => {
                let take = buf.len().min(n);
                buf[..take].copy_from_slice(&chunk[..take]);
                self.buffer.extend_from_slice(&chunk[take..n]);
                Ok(take)
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(0),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(0),
            Err(e) => {
                self.drop_stream();
                Err(e)
            }
        }
    }

    fn disconnect(&mut self) {
        self.drop_stream();
        self.buffer.clear();
    }
}
