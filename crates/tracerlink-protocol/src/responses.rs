//! Decoding of response payloads.
//!
//! These decoders interpret the validated payload of a response frame. They
//! are pure byte mappings with strict length checks; framing and checksum
//! verification have already happened in [`read_frame`](crate::read_frame)
//! by the time a payload gets here.

use crate::commands::Command;
use crate::constants::*;
use crate::error::ProtocolError;
use crate::types::*;

/// A decoded response from the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
    /// Realtime telemetry snapshot.
    Realtime(TelemetrySnapshot),
    /// Load-switch acknowledgement.
    LoadControl(LoadControlResult),
}

impl Response {
    /// Decode a response payload for the given command.
    pub fn decode(command: Command, payload: &[u8]) -> Result<Self, ProtocolError> {
        match command {
            Command::ReadRealtime => Ok(Response::Realtime(decode_realtime(payload)?)),
            Command::ManualControl => Ok(Response::LoadControl(decode_load_control(payload)?)),
        }
    }
}

/// Decode a realtime telemetry payload.
///
/// The payload is exactly 24 bytes, little-endian multi-byte fields, with
/// padding at offsets 4-5, 15, and 23:
///
/// ```text
/// offset  0  u16  battery voltage (1/100 V)
/// offset  2  u16  PV voltage (1/100 V)
/// offset  6  u16  load current (1/100 A)
/// offset  8  u16  over-discharge voltage (1/100 V)
/// offset 10  u16  battery-full voltage (1/100 V)
/// offset 12  u8   load on          offset 13  u8  overload
/// offset 14  u8   load short       offset 16  u8  battery overload
/// offset 17  u8   over-discharge   offset 18  u8  battery full
/// offset 19  u8   charging
/// offset 20  u8   battery temperature (°C + 30)
/// offset 21  u16  charge current (1/100 A)
/// ```
pub fn decode_realtime(payload: &[u8]) -> Result<TelemetrySnapshot, ProtocolError> {
    if payload.len() != REALTIME_PAYLOAD_SIZE {
        return Err(ProtocolError::WrongPayloadLength {
            command: Command::ReadRealtime,
            expected: REALTIME_PAYLOAD_SIZE,
            actual: payload.len(),
        });
    }

    Ok(TelemetrySnapshot {
        battery_voltage: centi(u16::from_le_bytes([payload[0], payload[1]])),
        pv_voltage: centi(u16::from_le_bytes([payload[2], payload[3]])),
        load_current: centi(u16::from_le_bytes([payload[6], payload[7]])),
        overdischarge_voltage: centi(u16::from_le_bytes([payload[8], payload[9]])),
        battery_full_voltage: centi(u16::from_le_bytes([payload[10], payload[11]])),
        load_on: payload[12] != 0,
        overload: payload[13] != 0,
        load_short: payload[14] != 0,
        battery_overload: payload[16] != 0,
        over_discharge: payload[17] != 0,
        battery_full: payload[18] != 0,
        charging: payload[19] != 0,
        battery_temperature: i16::from(payload[20]) - 30,
        charge_current: centi(u16::from_le_bytes([payload[21], payload[22]])),
    })
}

/// Decode a manual-control acknowledgement payload (one byte, nonzero means
/// the load is on).
pub fn decode_load_control(payload: &[u8]) -> Result<LoadControlResult, ProtocolError> {
    if payload.len() != MANUAL_CONTROL_PAYLOAD_SIZE {
        return Err(ProtocolError::WrongPayloadLength {
            command: Command::ManualControl,
            expected: MANUAL_CONTROL_PAYLOAD_SIZE,
            actual: payload.len(),
        });
    }

    Ok(LoadControlResult {
        load_on: payload[0] != 0,
    })
}

/// Convert a wire value in hundredths to its unit value.
fn centi(raw: u16) -> f32 {
    f32::from(raw) / 100.0
}
