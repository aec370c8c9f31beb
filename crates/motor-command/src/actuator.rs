//! Angle-driven actuator on top of a motor driver

use tracing::{debug, info};

use crate::types::degrees_to_pulses;
use crate::{ActuatorError, MotorCommand, MotorConfig, MotorDriver, Result};

pub struct Actuator<D: MotorDriver> {
    driver: D,
    config: MotorConfig,
    initialized: bool,
}

impl<D: MotorDriver> Actuator<D> {
    pub fn new(driver: D, config: MotorConfig) -> Self {
        Self {
            driver,
            config,
            initialized: false,
        }
    }

    /// Open the configured port and wrap the driver.
    pub fn open(config: MotorConfig) -> Result<Self> {
        let driver = D::open(&config.port)?;
        Ok(Self::new(driver, config))
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Power the motor on and apply the ramp and velocity settings.
    pub fn initialize(&mut self) -> Result<()> {
        let id = self.config.motor_id;
        let setup = [
            MotorCommand::PowerOn { id },
            MotorCommand::SetAccTime {
                id,
                ms: self.config.acc_time_ms,
            },
            MotorCommand::SetTargetVelocity {
                id,
                velocity: self.config.target_velocity,
            },
        ];
        for cmd in &setup {
            self.driver.send(cmd)?;
        }
        self.initialized = true;
        info!(
            port = %self.config.port,
            motor_id = id,
            "motor initialized"
        );
        Ok(())
    }

    /// Move to an absolute angle; returns the pulse target that was sent.
    pub fn move_to_degrees(&mut self, degrees: i64) -> Result<i64> {
        if !self.initialized {
            return Err(ActuatorError::NotInitialized);
        }
        let pulses = degrees_to_pulses(degrees, self.config.pulses_per_rev)?;
        self.driver.send(&MotorCommand::SetTargetPosition {
            id: self.config.motor_id,
            pulses,
        })?;
        debug!(degrees, pulses, "position target sent");
        Ok(pulses)
    }

    pub fn stop(&mut self) -> Result<()> {
        self.driver.send(&MotorCommand::Stop)?;
        self.initialized = false;
        info!("motor stopped");
        Ok(())
    }
}

#[cfg(all(test, feature = "mock"))]
mod tests {
    use super::*;
    use crate::MockDriver;

    fn actuator() -> Actuator<MockDriver> {
        Actuator::open(MotorConfig::default()).unwrap()
    }

    #[test]
    fn test_initialize_sends_setup_sequence() -> anyhow::Result<()> {
        let mut act = actuator();
        act.initialize()?;
        let sent: Vec<_> = act.driver().sent().iter().map(|s| s.command).collect();
        assert_eq!(
            sent,
            vec![
                MotorCommand::PowerOn { id: 1 },
                MotorCommand::SetAccTime { id: 1, ms: 100 },
                MotorCommand::SetTargetVelocity {
                    id: 1,
                    velocity: 150
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn test_move_requires_initialize() {
        let mut act = actuator();
        assert!(matches!(
            act.move_to_degrees(90),
            Err(ActuatorError::NotInitialized)
        ));
    }

    #[test]
    fn test_move_to_degrees() -> anyhow::Result<()> {
        let mut act = actuator();
        act.initialize()?;
        assert_eq!(act.move_to_degrees(-90)?, -12_800);
        assert_eq!(act.driver().last_position(), Some(-12_800));
        Ok(())
    }

    #[test]
    fn test_stop_resets_initialization() -> anyhow::Result<()> {
        let mut act = actuator();
        act.initialize()?;
        act.stop()?;
        assert_eq!(
            act.driver().sent().last().map(|s| s.command),
            Some(MotorCommand::Stop)
        );
        assert!(act.move_to_degrees(10).is_err());
        Ok(())
    }

    #[test]
    fn test_open_empty_port_fails() {
        let result = Actuator::<MockDriver>::open(MotorConfig {
            port: String::new(),
            ..MotorConfig::default()
        });
        assert!(matches!(result, Err(ActuatorError::PortNotFound(_))));
    }
}
