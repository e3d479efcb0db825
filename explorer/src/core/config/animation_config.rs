// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Timing and sizing knobs for every animation lane. All periods and delays are in
/// milliseconds so the JSON form stays readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub fan: FanLaneConfig,
    pub bit_flow: BitFlowConfig,
    /// `None` disables the ambient power flow lane.
    pub ambient_flow: Option<AmbientFlowConfig>,
    pub processor: ProcessorLaneConfig,
    /// How long the power surge flag stays up after power on. `None` disables it.
    pub power_surge_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanLaneConfig {
    pub tick_ms: u64,
    /// Degrees per tick is `speed_rpm / speed_divisor`.
    pub speed_divisor: f64,
    /// Upper bound on degrees per tick. `None` means uncapped.
    pub max_degrees_per_tick: Option<f64>,
}

impl FanLaneConfig {
    #[must_use]
    pub fn degrees_per_tick(&self, speed_rpm: u32) -> f64 {
        let degrees = f64::from(speed_rpm) / self.speed_divisor;
        match self.max_degrees_per_tick {
            Some(cap) => degrees.min(cap),
            None => degrees,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BitFlowConfig {
    pub particle_count: u32,
    /// Stagger between launching consecutive particles of one burst.
    pub launch_delay_ms: u64,
    pub tick_ms: u64,
    /// Progress added to every live particle per tick.
    pub progress_increment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientFlowConfig {
    pub tick_ms: u64,
    /// Probability of a spawn on each tick, `0.0..=1.0`.
    pub spawn_chance: f64,
    pub progress_increment: f64,
}

/// The pulse train and the single decaying activity schedule both live here, a
/// curriculum only ever triggers one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorLaneConfig {
    pub cycle_ms: u64,
    pub pulse_clear_ms: u64,
    /// Delay after the last cycle before the operation reverts to idle.
    pub revert_to_idle_ms: u64,
    pub activity_steps: Vec<ActivityStep>,
}

/// Set processor activity to `level` once `delay_ms` has elapsed since the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityStep {
    pub delay_ms: u64,
    pub level: u8,
}

impl AnimationConfig {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            fan: FanLaneConfig {
                tick_ms: 16,
                speed_divisor: 50.0,
                max_degrees_per_tick: Some(50.0),
            },
            bit_flow: BitFlowConfig {
                particle_count: 10,
                launch_delay_ms: 100,
                tick_ms: 20,
                progress_increment: 2.0,
            },
            ambient_flow: None,
            processor: ProcessorLaneConfig::default(),
            power_surge_ms: Some(2500),
        }
    }

    #[must_use]
    pub fn lenient() -> Self {
        Self {
            fan: FanLaneConfig {
                tick_ms: 16,
                speed_divisor: 50.0,
                max_degrees_per_tick: None,
            },
            bit_flow: BitFlowConfig {
                particle_count: 8,
                launch_delay_ms: 100,
                tick_ms: 30,
                progress_increment: 2.0,
            },
            ambient_flow: Some(AmbientFlowConfig {
                tick_ms: 50,
                spawn_chance: 0.2,
                progress_increment: 2.0,
            }),
            processor: ProcessorLaneConfig::default(),
            power_surge_ms: None,
        }
    }

    /// # Errors
    ///
    /// A zero period (which would make a lane fire forever inside a single advance), an
    /// empty burst, a non positive increment, or a spawn chance outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_period("fan.tick_ms", self.fan.tick_ms)?;
        if !(self.fan.speed_divisor.is_finite() && self.fan.speed_divisor > 0.0) {
            return Err(ConfigError::ZeroPeriod {
                field: "fan.speed_divisor",
            });
        }

        if self.bit_flow.particle_count == 0 {
            return Err(ConfigError::EmptyBurst);
        }
        check_period("bit_flow.tick_ms", self.bit_flow.tick_ms)?;
        check_increment(self.bit_flow.progress_increment)?;

        if let Some(ambient) = &self.ambient_flow {
            check_period("ambient_flow.tick_ms", ambient.tick_ms)?;
            check_increment(ambient.progress_increment)?;
            if !(0.0..=1.0).contains(&ambient.spawn_chance) {
                return Err(ConfigError::InvalidSpawnChance {
                    chance: ambient.spawn_chance,
                });
            }
        }

        check_period("processor.cycle_ms", self.processor.cycle_ms)?;
        check_period("processor.pulse_clear_ms", self.processor.pulse_clear_ms)?;

        if let Some(surge) = self.power_surge_ms {
            check_period("power_surge_ms", surge)?;
        }

        Ok(())
    }
}

impl Default for ProcessorLaneConfig {
    fn default() -> Self {
        Self {
            cycle_ms: 800,
            pulse_clear_ms: 400,
            revert_to_idle_ms: 1000,
            activity_steps: vec![
                ActivityStep {
                    delay_ms: 0,
                    level: 100,
                },
                ActivityStep {
                    delay_ms: 500,
                    level: 50,
                },
                ActivityStep {
                    delay_ms: 2000,
                    level: 0,
                },
            ],
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self { Self::strict() }
}

/// Convert a millisecond knob into a [`Duration`].
#[must_use]
pub fn ms(value: u64) -> Duration { Duration::from_millis(value) }

/// The instant `delay_ms` after `now`, pinned at [`Duration::MAX`] instead of
/// overflowing.
#[must_use]
pub fn after(now: Duration, delay_ms: u64) -> Duration {
    now.saturating_add(ms(delay_ms))
}

fn check_period(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::ZeroPeriod { field })
    } else {
        Ok(())
    }
}

fn check_increment(increment: f64) -> Result<(), ConfigError> {
    if increment.is_finite() && increment > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParticleIncrement { increment })
    }
}
