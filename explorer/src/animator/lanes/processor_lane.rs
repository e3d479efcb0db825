// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DeviceState, LaneEvent, ProcessorLaneConfig, ProcessorOp, TimerQueue, after};

/// Two ways to animate the processor:
/// 1. A pulse train: `cycles` blinks one `cycle_ms` apart, each cleared `pulse_clear_ms`
///    after it lights, then a revert to [`ProcessorOp::Idle`].
/// 2. A single activity schedule with no repetition, stepping through
///    [`ProcessorLaneConfig::activity_steps`].
///
/// Overlapping triggers are not merged. An earlier train's revert may land while a later
/// train is still blinking.
#[derive(Debug, Clone)]
pub struct ProcessorLane {
    config: ProcessorLaneConfig,
}

impl ProcessorLane {
    #[must_use]
    pub fn new(config: ProcessorLaneConfig) -> Self { Self { config } }

    pub fn pulse(&self, now: Duration, cycles: u32, timers: &mut TimerQueue<LaneEvent>) {
        if cycles == 0 {
            timers.schedule(after(now, self.config.revert_to_idle_ms), LaneEvent::RevertToIdle);
            return;
        }
        timers.schedule(
            after(now, self.config.cycle_ms),
            LaneEvent::ProcessorCycle {
                index: 1,
                total: cycles,
            },
        );
    }

    pub fn on_cycle(
        &self,
        now: Duration,
        (index, total): (u32, u32),
        device: &mut DeviceState,
        timers: &mut TimerQueue<LaneEvent>,
    ) {
        device.processor.pulse = index;
        timers.schedule(after(now, self.config.pulse_clear_ms), LaneEvent::ClearPulse);

        if index >= total {
            timers.schedule(after(now, self.config.revert_to_idle_ms), LaneEvent::RevertToIdle);
        } else {
            timers.schedule(
                after(now, self.config.cycle_ms),
                LaneEvent::ProcessorCycle {
                    index: index + 1,
                    total,
                },
            );
        }
    }

    pub fn on_clear_pulse(device: &mut DeviceState) { device.processor.pulse = 0; }

    pub fn on_revert(device: &mut DeviceState) { device.processor.op = ProcessorOp::Idle; }

    pub fn activity(&self, now: Duration, timers: &mut TimerQueue<LaneEvent>) {
        for step in &self.config.activity_steps {
            timers.schedule(after(now, step.delay_ms), LaneEvent::ActivityLevel(step.level));
        }
    }

    pub fn on_activity_level(level: u8, device: &mut DeviceState) {
        device.processor.activity = level.min(100);
    }
}
