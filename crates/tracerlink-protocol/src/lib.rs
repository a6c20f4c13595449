//! EPsolar Tracer (MT-5) Charge Controller Protocol
//!
//! This crate provides types and utilities for talking to EPsolar Tracer
//! solar charge controllers over their point-to-point serial protocol. The
//! protocol is strictly request/response: the host sends one command frame
//! and the controller answers with one response frame carrying the same
//! command code.
//!
//! # Protocol Overview
//!
//! Every frame has the same shape:
//!
//! ```text
//! +-------------------+-------------------+------+-----+-----+-------------+--------+--------+------+
//! | AA 55 AA 55 AA 55 | EB 90 EB 90 EB 90 | addr | cmd | len | data[0..len]| crc_hi | crc_lo | 0x7F |
//! +-------------------+-------------------+------+-----+-----+-------------+--------+--------+------+
//!       preamble              sync                   header                   checksum        end
//! ```
//!
//! The checksum covers `addr`, `cmd`, `len`, and the payload, using the
//! controller's own bit-serial algorithm (see [`checksum`]). Receivers never
//! look for the preamble; they hunt for the sync pattern and parse from
//! there.
//!
//! The transport underneath is abstracted by the [`Transport`] trait so the
//! same engine drives a serial line, a TCP bridge, or a scripted mock.
//!
//! # Example
//!
//! ```rust,ignore
//! use tracerlink_protocol::{build_frame, read_frame, Command, DEFAULT_CONTROLLER_ID};
//!
//! let frame = build_frame(DEFAULT_CONTROLLER_ID, Command::ReadRealtime, &[])?;
//! transport.send(&frame)?;
//! let (_, payload) = read_frame(&mut transport, Some(Command::ReadRealtime))?;
//! let snapshot = tracerlink_protocol::decode_realtime(&payload)?;
//! ```

mod checksum;
mod commands;
mod constants;
mod error;
mod frame;
mod mock_transport;
mod responses;
mod transport;
mod types;

pub use checksum::*;
pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use mock_transport::*;
pub use responses::*;
pub use transport::*;
pub use types::*;
