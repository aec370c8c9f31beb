//! motor-command: angle targets for a serial stepper-motor controller
//!
//! Converts angles in degrees into pulse targets and sends them through a
//! [`MotorDriver`]. The default build enables a `mock` backend so binaries can
//! run on any host without the controller attached.

mod types;
pub use types::{
    degrees_to_pulses, MotorCommand, MotorConfig, PortInfo, SentCommand, DEFAULT_PULSES_PER_REV,
};

mod error;
pub use error::{ActuatorError, Result};

mod traits;
pub use traits::MotorDriver;

mod actuator;
pub use actuator::Actuator;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockDriver;
