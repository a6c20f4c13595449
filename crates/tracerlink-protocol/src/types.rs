//! Decoded response types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One realtime telemetry snapshot from the controller.
///
/// Voltages and currents arrive on the wire as unsigned 16-bit hundredths;
/// they are converted here, so `battery_voltage` is in volts and
/// `charge_current` in amps. The temperature arrives with a +30 offset and
/// is stored in degrees Celsius.
///
/// A snapshot is built fresh from every successful realtime response and is
/// immutable after decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TelemetrySnapshot {
    /// Battery terminal voltage, volts.
    pub battery_voltage: f32,
    /// Solar panel input voltage, volts.
    pub pv_voltage: f32,
    /// Current drawn by the load, amps.
    pub load_current: f32,
    /// Configured over-discharge cutoff voltage, volts.
    pub overdischarge_voltage: f32,
    /// Configured battery-full voltage, volts.
    pub battery_full_voltage: f32,
    /// Whether the load output is switched on.
    pub load_on: bool,
    /// Load overload condition.
    pub overload: bool,
    /// Short circuit detected on the load output.
    pub load_short: bool,
    /// Battery overload condition.
    pub battery_overload: bool,
    /// Battery discharged below the cutoff.
    pub over_discharge: bool,
    /// Battery considered full.
    pub battery_full: bool,
    /// Battery currently charging.
    pub charging: bool,
    /// Battery temperature, degrees Celsius.
    pub battery_temperature: i16,
    /// Charge current from the panel, amps.
    pub charge_current: f32,
}

/// Result of a manual load-control command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadControlResult {
    /// Load output state reported by the controller after the switch.
    pub load_on: bool,
}
