// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use rand::{Rng, rngs::StdRng};

use crate::{AmbientFlowConfig, Bit, BitFlowConfig, DeviceState, LaneEvent, Particle, Point,
            TimerQueue, after, cull_and_advance};

/// Bits flowing from the processor to storage after a write. A burst launches
/// `particle_count` particles, `launch_delay_ms` apart. The tick chain runs only while
/// there are live particles and restarts on the next launch.
#[derive(Debug, Clone)]
pub struct BitFlowLane {
    config: BitFlowConfig,
    particles: Vec<Particle>,
    ticking: bool,
    next_id: u64,
}

impl BitFlowLane {
    #[must_use]
    pub fn new(config: BitFlowConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            ticking: false,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn burst(
        &self,
        now: Duration,
        origin: Point,
        target: Point,
        timers: &mut TimerQueue<LaneEvent>,
    ) {
        for index in 0..u64::from(self.config.particle_count) {
            timers.schedule(
                after(now, self.config.launch_delay_ms.saturating_mul(index)),
                LaneEvent::LaunchBit { origin, target },
            );
        }
    }

    pub fn on_launch(
        &mut self,
        now: Duration,
        (origin, target): (Point, Point),
        rng: &mut StdRng,
        timers: &mut TimerQueue<LaneEvent>,
    ) {
        let payload = if rng.random_bool(0.5) { Bit::One } else { Bit::Zero };
        self.particles.push(Particle {
            id: self.next_id,
            origin,
            target: Some(target),
            progress: 0.0,
            payload: Some(payload),
        });
        self.next_id += 1;

        if !self.ticking {
            self.ticking = true;
            timers.schedule(after(now, self.config.tick_ms), LaneEvent::BitFlowTick);
        }
    }

    pub fn on_tick(&mut self, now: Duration, timers: &mut TimerQueue<LaneEvent>) {
        cull_and_advance(&mut self.particles, self.config.progress_increment);
        if self.particles.is_empty() {
            self.ticking = false;
        } else {
            timers.schedule(after(now, self.config.tick_ms), LaneEvent::BitFlowTick);
        }
    }
}

/// Decorative particles that appear at random spots while the board is powered. When
/// disabled (no config) every call is a no-op.
#[derive(Debug, Clone)]
pub struct AmbientFlowLane {
    config: Option<AmbientFlowConfig>,
    particles: Vec<Particle>,
    running: bool,
    next_id: u64,
}

/// Ambient particles spawn anywhere on a `0..100` square.
const AMBIENT_EXTENT: f64 = 100.0;

impl AmbientFlowLane {
    #[must_use]
    pub fn new(config: Option<AmbientFlowConfig>) -> Self {
        Self {
            config,
            particles: Vec::new(),
            running: false,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] { &self.particles }

    #[must_use]
    pub fn is_running(&self) -> bool { self.running }

    pub fn start(&mut self, now: Duration, device: &DeviceState, timers: &mut TimerQueue<LaneEvent>) {
        let Some(config) = self.config else {
            return;
        };
        if self.running || !device.powered {
            return;
        }
        self.running = true;
        timers.schedule(after(now, config.tick_ms), LaneEvent::AmbientFlowTick);
    }

    pub fn on_tick(
        &mut self,
        now: Duration,
        device: &DeviceState,
        rng: &mut StdRng,
        timers: &mut TimerQueue<LaneEvent>,
    ) {
        let Some(config) = self.config else {
            return;
        };
        if !device.powered {
            self.running = false;
            self.particles.clear();
            tracing::trace!(message = "ambient flow lane stopped");
            return;
        }

        if rng.random_bool(config.spawn_chance) {
            self.particles.push(Particle {
                id: self.next_id,
                origin: Point::new(
                    rng.random_range(0.0..AMBIENT_EXTENT),
                    rng.random_range(0.0..AMBIENT_EXTENT),
                ),
                target: None,
                progress: 0.0,
                payload: None,
            });
            self.next_id += 1;
        }
        cull_and_advance(&mut self.particles, config.progress_increment);

        timers.schedule(after(now, config.tick_ms), LaneEvent::AmbientFlowTick);
    }
}
