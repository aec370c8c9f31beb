use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{ActuatorError, Result};

/// Pulses per output revolution with the default microstep setting
pub const DEFAULT_PULSES_PER_REV: u32 = 51_200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorConfig {
    /// Serial port the controller is attached to
    pub port: String,
    pub motor_id: u8,
    #[serde(default = "default_pulses_per_rev")]
    pub pulses_per_rev: u32,
    /// Acceleration/deceleration ramp in milliseconds (200-1000 is typical)
    #[serde(default = "default_acc_time_ms")]
    pub acc_time_ms: u32,
    /// Target velocity in pulse/ms
    #[serde(default = "default_target_velocity")]
    pub target_velocity: u32,
}

fn default_pulses_per_rev() -> u32 {
    DEFAULT_PULSES_PER_REV
}

fn default_acc_time_ms() -> u32 {
    100
}

fn default_target_velocity() -> u32 {
    150
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            port: "COM9".to_string(),
            motor_id: 1,
            pulses_per_rev: default_pulses_per_rev(),
            acc_time_ms: default_acc_time_ms(),
            target_velocity: default_target_velocity(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorCommand {
    PowerOn { id: u8 },
    SetAccTime { id: u8, ms: u32 },
    SetTargetVelocity { id: u8, velocity: u32 },
    SetTargetPosition { id: u8, pulses: i64 },
    Stop,
}

/// A command as observed by a driver, with the time it was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCommand {
    pub command: MotorCommand,
    pub ts: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    pub name: String,
    pub driver: String,
}

/// Scale an angle in degrees to a pulse target, truncating toward zero.
pub fn degrees_to_pulses(degrees: i64, pulses_per_rev: u32) -> Result<i64> {
    let pulses = i128::from(degrees) * i128::from(pulses_per_rev) / 360;
    i64::try_from(pulses).map_err(|_| ActuatorError::PulseOverflow(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_pulses() {
        assert_eq!(degrees_to_pulses(90, DEFAULT_PULSES_PER_REV).unwrap(), 12_800);
        assert_eq!(degrees_to_pulses(-90, DEFAULT_PULSES_PER_REV).unwrap(), -12_800);
        assert_eq!(degrees_to_pulses(360, DEFAULT_PULSES_PER_REV).unwrap(), 51_200);
        assert_eq!(degrees_to_pulses(0, DEFAULT_PULSES_PER_REV).unwrap(), 0);
    }

    #[test]
    fn test_degrees_to_pulses_truncates_toward_zero() {
        assert_eq!(degrees_to_pulses(1, DEFAULT_PULSES_PER_REV).unwrap(), 142);
        assert_eq!(degrees_to_pulses(-1, DEFAULT_PULSES_PER_REV).unwrap(), -142);
    }

    #[test]
    fn test_degrees_to_pulses_overflow() {
        assert!(matches!(
            degrees_to_pulses(i64::MAX, DEFAULT_PULSES_PER_REV),
            Err(ActuatorError::PulseOverflow(_))
        ));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let cfg: MotorConfig =
            serde_json::from_str(r#"{"port":"/dev/ttyUSB0","motor_id":2}"#).unwrap();
        assert_eq!(cfg.pulses_per_rev, DEFAULT_PULSES_PER_REV);
        assert_eq!(cfg.acc_time_ms, 100);
        assert_eq!(cfg.target_velocity, 150);
        assert_eq!(cfg.motor_id, 2);
    }
}
