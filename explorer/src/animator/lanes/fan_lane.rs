// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DeviceState, FanLaneConfig, LaneEvent, TimerQueue, after};

/// Spins the fan while `fan_speed_rpm > 0`. No command ever sets the speed back to zero,
/// so once started this lane runs for the rest of the session. It still checks the
/// speed on every tick and stops itself if it ever finds zero.
#[derive(Debug, Clone)]
pub struct FanLane {
    config: FanLaneConfig,
    running: bool,
}

impl FanLane {
    #[must_use]
    pub fn new(config: FanLaneConfig) -> Self {
        Self {
            config,
            running: false,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool { self.running }

    /// Idempotent. A new speed is picked up by the tick chain that is already running.
    pub fn start(&mut self, now: Duration, device: &DeviceState, timers: &mut TimerQueue<LaneEvent>) {
        if self.running || !device.fan_running() {
            return;
        }
        self.running = true;
        timers.schedule(after(now, self.config.tick_ms), LaneEvent::FanTick);
    }

    pub fn on_tick(
        &mut self,
        now: Duration,
        device: &mut DeviceState,
        timers: &mut TimerQueue<LaneEvent>,
    ) {
        if !device.fan_running() {
            self.running = false;
            tracing::trace!(message = "fan lane stopped");
            return;
        }
        let step = self.config.degrees_per_tick(device.fan_speed_rpm);
        device.fan_angle_deg = (device.fan_angle_deg + step).rem_euclid(360.0);
        timers.schedule(after(now, self.config.tick_ms), LaneEvent::FanTick);
    }
}
