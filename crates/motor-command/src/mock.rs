use crate::{ActuatorError, MotorCommand, MotorDriver, PortInfo, Result, SentCommand};
use time::OffsetDateTime;

/// An in-process driver that records every command it accepts.
#[derive(Debug, Default)]
pub struct MockDriver {
    port: String,
    sent: Vec<SentCommand>,
}

impl MockDriver {
    pub fn sent(&self) -> &[SentCommand] {
        &self.sent
    }

    /// The last position target sent, if any
    pub fn last_position(&self) -> Option<i64> {
        self.sent.iter().rev().find_map(|s| match s.command {
            MotorCommand::SetTargetPosition { pulses, .. } => Some(pulses),
            _ => None,
        })
    }
}

impl MotorDriver for MockDriver {
    fn open(port: &str) -> Result<Self> {
        if port.trim().is_empty() {
            return Err(ActuatorError::PortNotFound(port.to_string()));
        }
        Ok(Self {
            port: port.to_string(),
            sent: Vec::new(),
        })
    }

    fn list() -> Result<Vec<PortInfo>> {
        Ok(vec![PortInfo {
            name: "mock0".to_string(),
            driver: "mock".to_string(),
        }])
    }

    fn send(&mut self, command: &MotorCommand) -> Result<()> {
        tracing::trace!(port = %self.port, ?command, "mock command accepted");
        self.sent.push(SentCommand {
            command: *command,
            ts: OffsetDateTime::now_utc(),
        });
        Ok(())
    }
}
