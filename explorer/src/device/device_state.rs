// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{MemoryBank, ProcessorOp};

/// What the processor is showing right now. `op` is set by a command, the other two
/// fields are animation state written by [`crate::AnimationScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessorState {
    pub op: ProcessorOp,
    /// The cycle currently lit, `0` when no pulse is showing.
    pub pulse: u32,
    /// Percent load, `0..=100`.
    pub activity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
    pub size_bytes: u64,
    pub stored_at: DateTime<Local>,
}

/// The simulated motherboard. Commands change it through
/// [`ParamSet::commit`](crate::ParamSet::commit), and the animation lanes update the
/// purely visual fields (`fan_angle_deg`, `power_surge`, `processor.pulse`,
/// `processor.activity`).
///
/// Nothing here is ever reset by navigating between tasks. Later tasks build on the
/// state left behind by earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    pub powered: bool,
    pub power_surge: bool,
    pub fan_speed_rpm: u32,
    /// Always in `0.0..360.0`.
    pub fan_angle_deg: f64,
    pub processor: ProcessorState,
    pub memory: MemoryBank,
    pub stored_files: Vec<StoredFile>,
    pub display_text: String,
}

impl DeviceState {
    #[must_use]
    pub fn new(memory_history_capacity: usize) -> Self {
        Self {
            powered: false,
            power_surge: false,
            fan_speed_rpm: 0,
            fan_angle_deg: 0.0,
            processor: ProcessorState::default(),
            memory: MemoryBank::new(memory_history_capacity),
            stored_files: Vec::new(),
            display_text: String::new(),
        }
    }

    #[must_use]
    pub fn fan_running(&self) -> bool { self.fan_speed_rpm > 0 }
}
