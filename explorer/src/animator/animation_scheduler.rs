// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};

use crate::{AmbientFlowLane, AnimationConfig, AnimationCue, BitFlowLane, DeviceState, FanLane,
            LaneEvent, Particle, PowerSurgeLane, ProcessorLane, TimerQueue};

/// Owns every animation lane and the one timer queue they share. Time only moves when
/// [`advance`](Self::advance) is called, so tests can step through an animation
/// deterministically (together with a fixed RNG seed).
#[derive(Debug)]
pub struct AnimationScheduler {
    now: Duration,
    timers: TimerQueue<LaneEvent>,
    fan: FanLane,
    bit_flow: BitFlowLane,
    ambient_flow: AmbientFlowLane,
    processor: ProcessorLane,
    power_surge: PowerSurgeLane,
    rng: StdRng,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new(config: &AnimationConfig, rng_seed: Option<u64>) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            now: Duration::ZERO,
            timers: TimerQueue::new(),
            fan: FanLane::new(config.fan),
            bit_flow: BitFlowLane::new(config.bit_flow),
            ambient_flow: AmbientFlowLane::new(config.ambient_flow),
            processor: ProcessorLane::new(config.processor.clone()),
            power_surge: PowerSurgeLane::new(config.power_surge_ms),
            rng,
        }
    }

    /// Time since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration { self.now }

    #[must_use]
    pub fn bit_flow_particles(&self) -> &[Particle] { self.bit_flow.particles() }

    #[must_use]
    pub fn ambient_particles(&self) -> &[Particle] { self.ambient_flow.particles() }

    #[must_use]
    pub fn fan_lane_running(&self) -> bool { self.fan.is_running() }

    #[must_use]
    pub fn pending_timers(&self) -> usize { self.timers.len() }

    /// Start the animation for a committed command. Effects due immediately (zero delay)
    /// are applied before this returns.
    pub fn play(&mut self, cue: AnimationCue, device: &mut DeviceState) {
        tracing::debug!(message = "play", ?cue, now = ?self.now);
        let now = self.now;
        match cue {
            AnimationCue::PowerOn => {
                self.power_surge.surge(now, device, &mut self.timers);
                self.ambient_flow.start(now, device, &mut self.timers);
            }
            AnimationCue::FanStarted => self.fan.start(now, device, &mut self.timers),
            AnimationCue::BitFlowBurst { origin, target } => {
                self.bit_flow.burst(now, origin, target, &mut self.timers);
            }
            AnimationCue::ProcessorPulse { cycles } => {
                self.processor.pulse(now, cycles, &mut self.timers);
            }
            AnimationCue::ProcessorActivity => self.processor.activity(now, &mut self.timers),
        }
        self.dispatch_until(now, device);
    }

    /// Move time forward by `elapsed`, firing every timer that comes due on the way, in
    /// fire time order. The clock saturates at [`Duration::MAX`].
    pub fn advance(&mut self, elapsed: Duration, device: &mut DeviceState) {
        let deadline = self.now.saturating_add(elapsed);
        self.dispatch_until(deadline, device);
        self.now = deadline;
    }

    fn dispatch_until(&mut self, deadline: Duration, device: &mut DeviceState) {
        while let Some((fire_at, event)) = self.timers.pop_due(deadline) {
            self.now = fire_at;
            tracing::trace!(message = "dispatch", ?event, now = ?fire_at);
            self.dispatch(event, device);
            // A pinned clock cannot move, so a periodic lane would refire here forever.
            if fire_at == Duration::MAX {
                break;
            }
        }
    }

    fn dispatch(&mut self, event: LaneEvent, device: &mut DeviceState) {
        let now = self.now;
        let timers = &mut self.timers;
        match event {
            LaneEvent::FanTick => self.fan.on_tick(now, device, timers),
            LaneEvent::LaunchBit { origin, target } => {
                self.bit_flow
                    .on_launch(now, (origin, target), &mut self.rng, timers);
            }
            LaneEvent::BitFlowTick => self.bit_flow.on_tick(now, timers),
            LaneEvent::AmbientFlowTick => {
                self.ambient_flow.on_tick(now, device, &mut self.rng, timers);
            }
            LaneEvent::ProcessorCycle { index, total } => {
                self.processor.on_cycle(now, (index, total), device, timers);
            }
            LaneEvent::ClearPulse => ProcessorLane::on_clear_pulse(device),
            LaneEvent::RevertToIdle => ProcessorLane::on_revert(device),
            LaneEvent::ActivityLevel(level) => ProcessorLane::on_activity_level(level, device),
            LaneEvent::PowerSurgeEnd => PowerSurgeLane::on_end(device),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, ProcessorOp, assert_eq2};

    fn ms(it: u64) -> Duration { Duration::from_millis(it) }

    fn strict() -> (AnimationScheduler, DeviceState) {
        (
            AnimationScheduler::new(&AnimationConfig::strict(), Some(7)),
            DeviceState::new(5),
        )
    }

    fn lenient() -> (AnimationScheduler, DeviceState) {
        (
            AnimationScheduler::new(&AnimationConfig::lenient(), Some(7)),
            DeviceState::new(5),
        )
    }

    #[test]
    fn test_advance_moves_clock() {
        let (mut scheduler, mut device) = strict();
        scheduler.advance(ms(40), &mut device);
        scheduler.advance(ms(2), &mut device);
        assert_eq2!(scheduler.now(), ms(42));
        assert_eq2!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_fan_rotation_strict_is_capped() {
        let (mut scheduler, mut device) = strict();
        device.fan_speed_rpm = 5000;
        scheduler.play(AnimationCue::FanStarted, &mut device);
        assert!(scheduler.fan_lane_running());

        // Two ticks at 16ms, capped at 50 degrees each.
        scheduler.advance(ms(32), &mut device);
        assert_eq2!(device.fan_angle_deg, 100.0);

        // Stays in 0..360.
        scheduler.advance(ms(16 * 10), &mut device);
        assert!((0.0..360.0).contains(&device.fan_angle_deg));
        assert_eq2!(device.fan_angle_deg, (50.0 * 12.0) % 360.0);
    }

    #[test]
    fn test_fan_rotation_lenient_is_uncapped() {
        let (mut scheduler, mut device) = lenient();
        device.fan_speed_rpm = 5000;
        scheduler.play(AnimationCue::FanStarted, &mut device);
        scheduler.advance(ms(16), &mut device);
        assert_eq2!(device.fan_angle_deg, 100.0);
    }

    #[test]
    fn test_fan_lane_is_single_chain_and_stops_at_zero() {
        let (mut scheduler, mut device) = strict();
        device.fan_speed_rpm = 1000;
        scheduler.play(AnimationCue::FanStarted, &mut device);
        scheduler.play(AnimationCue::FanStarted, &mut device);
        assert_eq2!(scheduler.pending_timers(), 1);

        device.fan_speed_rpm = 0;
        scheduler.advance(ms(16), &mut device);
        assert!(!scheduler.fan_lane_running());
        assert_eq2!(scheduler.pending_timers(), 0);
        assert_eq2!(device.fan_angle_deg, 0.0);
    }

    #[test]
    fn test_fan_does_not_start_at_zero_speed() {
        let (mut scheduler, mut device) = lenient();
        scheduler.play(AnimationCue::FanStarted, &mut device);
        assert!(!scheduler.fan_lane_running());
    }

    #[test]
    fn test_bit_flow_burst_launches_and_drains() {
        let (mut scheduler, mut device) = strict();
        let origin = Point::new(20.0, 25.0);
        let target = Point::new(80.0, 25.0);
        scheduler.play(AnimationCue::BitFlowBurst { origin, target }, &mut device);

        // The first particle launches immediately.
        assert_eq2!(scheduler.bit_flow_particles().len(), 1);
        assert_eq2!(scheduler.bit_flow_particles()[0].progress, 0.0);

        scheduler.advance(ms(900), &mut device);
        assert_eq2!(scheduler.bit_flow_particles().len(), 10);
        for particle in scheduler.bit_flow_particles() {
            assert!(particle.payload.is_some());
            assert_eq2!(particle.target, Some(target));
            assert!((0.0..=100.0).contains(&particle.progress));
        }

        // 50 ticks to reach 100, one more to cull. The last launch is at 900ms.
        scheduler.advance(ms(51 * 20), &mut device);
        assert!(scheduler.bit_flow_particles().is_empty());
        assert_eq2!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_bit_flow_progress_per_tick() {
        let (mut scheduler, mut device) = lenient();
        scheduler.play(
            AnimationCue::BitFlowBurst {
                origin: Point::new(2.0, 2.0),
                target: Point::new(8.0, 2.0),
            },
            &mut device,
        );
        scheduler.advance(ms(30), &mut device);
        assert_eq2!(scheduler.bit_flow_particles()[0].progress, 2.0);
        scheduler.advance(ms(30 * 49), &mut device);
        assert_eq2!(scheduler.bit_flow_particles()[0].progress, 100.0);
        assert_eq2!(scheduler.bit_flow_particles()[0].position(), Point::new(8.0, 2.0));
    }

    #[test]
    fn test_processor_pulse_train() {
        let (mut scheduler, mut device) = strict();
        device.processor.op = ProcessorOp::Mul;
        scheduler.play(AnimationCue::ProcessorPulse { cycles: 3 }, &mut device);

        scheduler.advance(ms(800), &mut device);
        assert_eq2!(device.processor.pulse, 1);
        scheduler.advance(ms(400), &mut device);
        assert_eq2!(device.processor.pulse, 0);
        scheduler.advance(ms(400), &mut device);
        assert_eq2!(device.processor.pulse, 2);
        scheduler.advance(ms(800), &mut device);
        assert_eq2!(device.processor.pulse, 3);
        assert_eq2!(device.processor.op, ProcessorOp::Mul);

        // Reverts 1000ms after the last cycle.
        scheduler.advance(ms(999), &mut device);
        assert_eq2!(device.processor.op, ProcessorOp::Mul);
        assert_eq2!(device.processor.pulse, 0);
        scheduler.advance(ms(1), &mut device);
        assert_eq2!(device.processor.op, ProcessorOp::Idle);
        assert_eq2!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_processor_activity_decays() {
        let (mut scheduler, mut device) = lenient();
        scheduler.play(AnimationCue::ProcessorActivity, &mut device);
        assert_eq2!(device.processor.activity, 100);
        scheduler.advance(ms(500), &mut device);
        assert_eq2!(device.processor.activity, 50);
        scheduler.advance(ms(1499), &mut device);
        assert_eq2!(device.processor.activity, 50);
        scheduler.advance(ms(1), &mut device);
        assert_eq2!(device.processor.activity, 0);
    }

    #[test]
    fn test_power_surge_clears() {
        let (mut scheduler, mut device) = strict();
        device.powered = true;
        scheduler.play(AnimationCue::PowerOn, &mut device);
        assert!(device.power_surge);
        scheduler.advance(ms(2499), &mut device);
        assert!(device.power_surge);
        scheduler.advance(ms(1), &mut device);
        assert!(!device.power_surge);
        assert!(scheduler.ambient_particles().is_empty());
    }

    #[test]
    fn test_ambient_flow_runs_while_powered() {
        let (mut scheduler, mut device) = lenient();
        device.powered = true;
        scheduler.play(AnimationCue::PowerOn, &mut device);
        assert!(!device.power_surge);

        // 200 ticks at a 20% chance: some spawn, none outlives 51 ticks.
        for _ in 0..200 {
            scheduler.advance(ms(50), &mut device);
            for particle in scheduler.ambient_particles() {
                assert_eq2!(particle.target, None);
                assert!((0.0..100.0).contains(&particle.origin.x));
                assert!((0.0..100.0).contains(&particle.origin.y));
                assert!(particle.progress <= 100.0);
            }
        }
        assert!(scheduler.ambient_particles().len() <= 51);

        device.powered = false;
        scheduler.advance(ms(50), &mut device);
        assert!(scheduler.ambient_particles().is_empty());
        assert_eq2!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_advance_saturates_clock() {
        let (mut scheduler, mut device) = strict();
        scheduler.advance(ms(1000), &mut device);
        scheduler.advance(Duration::MAX, &mut device);
        assert_eq2!(scheduler.now(), Duration::MAX);
    }

    #[test]
    fn test_huge_launch_delay_saturates() {
        let mut config = AnimationConfig::strict();
        config.bit_flow.launch_delay_ms = u64::MAX / 2 + 1;
        let mut scheduler = AnimationScheduler::new(&config, Some(7));
        let mut device = DeviceState::new(5);

        scheduler.play(
            AnimationCue::BitFlowBurst {
                origin: Point::new(2.0, 2.0),
                target: Point::new(8.0, 2.0),
            },
            &mut device,
        );
        // First bit launches now; the other nine and one tick are queued.
        assert_eq2!(scheduler.bit_flow_particles().len(), 1);
        assert_eq2!(scheduler.pending_timers(), 10);

        scheduler.advance(Duration::MAX, &mut device);
        assert!(scheduler.bit_flow_particles().is_empty());
        assert_eq2!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn test_periodic_lane_stops_at_pinned_clock() {
        let (mut scheduler, mut device) = strict();
        scheduler.advance(Duration::MAX - ms(10), &mut device);

        device.fan_speed_rpm = 3000;
        scheduler.play(AnimationCue::FanStarted, &mut device);
        scheduler.advance(Duration::MAX, &mut device);
        assert_eq2!(scheduler.now(), Duration::MAX);
        assert!(scheduler.fan_lane_running());
        assert_eq2!(scheduler.pending_timers(), 1);
    }

    #[test]
    fn test_same_seed_same_animation() {
        let run = || {
            let (mut scheduler, mut device) = lenient();
            device.powered = true;
            scheduler.play(AnimationCue::PowerOn, &mut device);
            scheduler.play(
                AnimationCue::BitFlowBurst {
                    origin: Point::new(2.0, 2.0),
                    target: Point::new(8.0, 2.0),
                },
                &mut device,
            );
            scheduler.advance(ms(1000), &mut device);
            (
                scheduler.ambient_particles().to_vec(),
                scheduler.bit_flow_particles().to_vec(),
            )
        };
        assert_eq2!(run(), run());
    }
}
