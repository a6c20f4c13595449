//! Protocol constants
//!
//! These constants define the fixed wire patterns, command codes, and size
//! limits of the Tracer MT-5 serial protocol.

// ============================================================================
// Wire patterns
// ============================================================================

/// Preamble emitted before every transmitted frame. Receivers do not look
/// for it; only the sync pattern is hunted on the inbound side.
pub const FRAME_PREAMBLE: [u8; 6] = [0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55];

/// Sync pattern that marks the start of a frame for the receiver.
pub const FRAME_SYNC: [u8; 6] = [0xEB, 0x90, 0xEB, 0x90, 0xEB, 0x90];

/// Terminator byte closing every frame. Its presence is required on receive
/// but its value is not checked.
pub const FRAME_TERMINATOR: u8 = 0x7F;

// ============================================================================
// Command codes (host → controller, echoed in responses)
// ============================================================================

/// Read the realtime telemetry snapshot.
pub const CMD_READ_REALTIME: u8 = 0xA0;
/// Switch the load output on or off.
pub const CMD_MANUAL_CONTROL: u8 = 0xAA;

// ============================================================================
// Addressing and sizes
// ============================================================================

/// Controller address used when none is configured. The documentation uses
/// 0x16 throughout; the hardware accepts the byte but does not enforce it.
pub const DEFAULT_CONTROLLER_ID: u8 = 0x16;

/// Maximum payload length expressible in the one-byte length field.
pub const MAX_PAYLOAD_SIZE: usize = 255;

/// Exact payload length of a realtime telemetry response.
pub const REALTIME_PAYLOAD_SIZE: usize = 24;

/// Exact payload length of a manual-control acknowledgement.
pub const MANUAL_CONTROL_PAYLOAD_SIZE: usize = 1;
