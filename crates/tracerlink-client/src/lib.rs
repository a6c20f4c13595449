//! Synchronous client for EPsolar Tracer charge controllers.
//!
//! This crate layers a request/response client and two concrete transports
//! (serial line, TCP bridge) on top of [`tracerlink_protocol`]. The client
//! is strictly synchronous: one request is sent, one response is read back,
//! and the call blocks until the exchange completes or the transport's
//! timeout expires.
//!
//! # Example
//!
//! ```rust,no_run
//! use tracerlink_client::{SerialTransport, TracerClient};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
//! let mut client = TracerClient::new(transport);
//!
//! let snapshot = client.read_realtime()?;
//! println!("battery: {:.2} V", snapshot.battery_voltage);
//!
//! client.set_load_on(true)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod serial;
mod tcp;

pub use client::*;
pub use serial::*;
pub use tcp::*;

pub use tracerlink_protocol::{
    Command, LoadControlResult, ProtocolError, TelemetrySnapshot, Transport,
};
