// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DeviceState, LaneEvent, TimerQueue, after};

/// Raises `power_surge` on power on and lowers it once the configured duration elapses.
#[derive(Debug, Clone)]
pub struct PowerSurgeLane {
    duration_ms: Option<u64>,
}

impl PowerSurgeLane {
    #[must_use]
    pub fn new(duration_ms: Option<u64>) -> Self { Self { duration_ms } }

    pub fn surge(&self, now: Duration, device: &mut DeviceState, timers: &mut TimerQueue<LaneEvent>) {
        let Some(duration_ms) = self.duration_ms else {
            return;
        };
        device.power_surge = true;
        timers.schedule(after(now, duration_ms), LaneEvent::PowerSurgeEnd);
    }

    pub fn on_end(device: &mut DeviceState) { device.power_surge = false; }
}
