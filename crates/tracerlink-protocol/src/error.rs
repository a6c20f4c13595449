//! Protocol error types.

use thiserror::Error;

use crate::commands::Command;

/// Errors that can occur while exchanging frames with the controller.
///
/// Every variant is terminal for the current exchange: nothing here is
/// retried inside the codec or the client, and no partial frame state is
/// kept across attempts. Callers that want resilience retry the whole
/// request.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// No sync pattern was observed before the transport stopped yielding
    /// data.
    #[error("no sync pattern received before the line went idle")]
    SyncTimeout,

    /// Sync was achieved but the rest of the frame did not fully arrive.
    #[error("timed out reading frame {0}")]
    ReadTimeout(FrameSection),

    /// The received checksum does not match the one computed over the
    /// header and payload. The data is corrupted or we are desynchronized.
    #[error("checksum mismatch: computed 0x{computed:04X}, received 0x{received:04X}")]
    CrcMismatch {
        /// Checksum computed over the received header and payload.
        computed: u16,
        /// Checksum carried by the frame.
        received: u16,
    },

    /// The frame validated but its payload length does not match what the
    /// decoder expects for this command.
    #[error("wrong payload length for {command:?}: expected {expected} bytes, got {actual}")]
    WrongPayloadLength {
        /// Command the payload belongs to.
        command: Command,
        /// Payload length the decoder requires.
        expected: usize,
        /// Payload length actually received.
        actual: usize,
    },

    /// The controller sent a command code we do not model.
    #[error("unknown command code: 0x{0:02X}")]
    UnknownCommand(u8),

    /// The arguments do not fit in the one-byte length field.
    #[error("payload too long: maximum {max} bytes, got {actual}")]
    PayloadTooLong {
        /// Maximum length the length field can express.
        max: usize,
        /// Length of the rejected arguments.
        actual: usize,
    },

    /// The transport failed outright (as opposed to timing out quietly).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The part of a frame being read when a timeout occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSection {
    /// Address, command code, and length bytes.
    Header,
    /// The length-prefixed payload.
    Payload,
    /// The two checksum bytes.
    Checksum,
    /// The closing terminator byte.
    Terminator,
}

impl std::fmt::Display for FrameSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameSection::Header => write!(f, "header"),
            FrameSection::Payload => write!(f, "payload"),
            FrameSection::Checksum => write!(f, "checksum"),
            FrameSection::Terminator => write!(f, "terminator"),
        }
    }
}
