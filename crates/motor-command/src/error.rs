use thiserror::Error;

pub type Result<T, E = ActuatorError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ActuatorError {
    #[error("port not found: {0}")]
    PortNotFound(String),
    #[error("pulse target out of range for {0} degrees")]
    PulseOverflow(i64),
    #[error("actuator not initialized")]
    NotInitialized,
}
