use crate::{MotorCommand, PortInfo, Result};

/// A minimal blocking motor controller interface.
pub trait MotorDriver {
    /// Open the controller on a serial port (e.g., "COM9", "/dev/ttyUSB0").
    fn open(port: &str) -> Result<Self>
    where
        Self: Sized;

    /// Attempt to list ports this backend can drive.
    fn list() -> Result<Vec<PortInfo>>;

    /// Send one command.
    fn send(&mut self, command: &MotorCommand) -> Result<()>;
}
