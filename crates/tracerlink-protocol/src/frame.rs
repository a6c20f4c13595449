//! Frame encoding and decoding.
//!
//! A frame on the wire is:
//!
//! ```text
//! +-------------------+-------------------+------+-----+-----+-------------+--------+--------+------+
//! | AA 55 AA 55 AA 55 | EB 90 EB 90 EB 90 | addr | cmd | len | data[0..len]| crc_hi | crc_lo | 0x7F |
//! +-------------------+-------------------+------+-----+-----+-------------+--------+--------+------+
//! ```
//!
//! The checksum is big-endian and covers `addr`, `cmd`, `len`, and the
//! payload. There is no escaping or byte stuffing anywhere in the protocol;
//! the receiver relies entirely on hunting for the sync pattern to find the
//! start of a frame. Senders emit the preamble before the sync pattern, but
//! receivers never look for it.

use bytes::BufMut;
use log::{debug, trace};

use crate::checksum::checksum;
use crate::commands::Command;
use crate::constants::*;
use crate::error::{FrameSection, ProtocolError};
use crate::transport::Transport;

/// Build the wire bytes for one command frame.
///
/// `args` is the raw payload and must fit the one-byte length field.
pub fn build_frame(
    controller_id: u8,
    command: Command,
    args: &[u8],
) -> Result<Vec<u8>, ProtocolError> {
    if args.len() > MAX_PAYLOAD_SIZE {
        return Err(ProtocolError::PayloadTooLong {
            max: MAX_PAYLOAD_SIZE,
            actual: args.len(),
        });
    }

    let mut data = Vec::with_capacity(3 + args.len());
    data.push(controller_id);
    data.push(command.code());
    data.push(args.len() as u8);
    data.extend_from_slice(args);

    let mut frame =
        Vec::with_capacity(FRAME_PREAMBLE.len() + FRAME_SYNC.len() + data.len() + 3);
    frame.extend_from_slice(&FRAME_PREAMBLE);
    frame.extend_from_slice(&FRAME_SYNC);
    frame.extend_from_slice(&data);
    frame.put_u16(checksum(&data));
    frame.push(FRAME_TERMINATOR);
    Ok(frame)
}

/// Read and validate one frame from the transport.
///
/// Hunts for the sync pattern, then reads header, payload, checksum, and
/// terminator. The controller address is accepted but not checked, and the
/// terminator only has to be present, not correct.
///
/// With `expected` set, frames carrying any other command code are
/// discarded and the hunt starts over until a matching frame arrives or
/// the line goes idle. The wait has no iteration cap, but each discarded
/// frame still has to sync within the transport's timeout, so a quiet line
/// exits with [`ProtocolError::SyncTimeout`].
pub fn read_frame<T: Transport>(
    transport: &mut T,
    expected: Option<Command>,
) -> Result<(Command, Vec<u8>), ProtocolError> {
    loop {
        seek_sync(transport)?;

        let mut header = [0u8; 3];
        read_exact(transport, &mut header, FrameSection::Header)?;
        let code = header[1];
        let length = header[2] as usize;

        let mut payload = vec![0u8; length];
        if length > 0 {
            read_exact(transport, &mut payload, FrameSection::Payload)?;
        }

        let mut crc_bytes = [0u8; 2];
        read_exact(transport, &mut crc_bytes, FrameSection::Checksum)?;
        let received = u16::from_be_bytes(crc_bytes);

        let mut data = Vec::with_capacity(3 + payload.len());
        data.extend_from_slice(&header);
        data.extend_from_slice(&payload);
        let computed = checksum(&data);
        if computed != received {
            return Err(ProtocolError::CrcMismatch { computed, received });
        }

        let mut terminator = [0u8; 1];
        read_exact(transport, &mut terminator, FrameSection::Terminator)?;
        trace!("frame: cmd=0x{:02X} len={}", code, length);

        let command = Command::from_code(code);
        if let Some(want) = expected {
            if command != Some(want) {
                debug!(
                    "discarding frame with command 0x{:02X} while waiting for 0x{:02X}",
                    code,
                    want.code()
                );
                continue;
            }
        }

        return match command {
            Some(command) => Ok((command, payload)),
            None => Err(ProtocolError::UnknownCommand(code)),
        };
    }
}

/// Consume bytes until the full sync pattern has been matched.
///
/// A byte matching the pattern at the current position advances the match;
/// any other byte resets it to the start.
fn seek_sync<T: Transport>(transport: &mut T) -> Result<(), ProtocolError> {
    let mut pos = 0;
    let mut byte = [0u8; 1];
    while pos < FRAME_SYNC.len() {
        if transport.recv(&mut byte)? == 0 {
            return Err(ProtocolError::SyncTimeout);
        }
        if byte[0] == FRAME_SYNC[pos] {
            pos += 1;
        } else {
            pos = 0;
        }
    }
    Ok(())
}

/// Fill `buf` completely, treating an idle read as a timeout on `section`.
fn read_exact<T: Transport>(
    transport: &mut T,
    buf: &mut [u8],
    section: FrameSection,
) -> Result<(), ProtocolError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = transport.recv(&mut buf[filled..])?;
        if n == 0 {
            return Err(ProtocolError::ReadTimeout(section));
        }
        filled += n;
    }
    Ok(())
}
