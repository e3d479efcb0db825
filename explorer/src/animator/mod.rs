// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cosmetic animation, driven by explicit time rather than wall clock timers.
//!
//! The presentation layer calls [`AnimationScheduler::advance`] once per frame with the
//! elapsed time. Every delayed effect, periodic or one-shot, is an entry in a single
//! [`TimerQueue`] keyed by fire time, and entries are dispatched in `(fire_at, seq)`
//! order to the lane that owns them:
//!
//! | Lane                  | Trigger                          | Period   |
//! |-----------------------|----------------------------------|----------|
//! | [`FanLane`]           | fan start                        | 16ms     |
//! | [`BitFlowLane`]       | storage write                    | 20-30ms  |
//! | [`AmbientFlowLane`]   | power on (when enabled)          | 50ms     |
//! | [`ProcessorLane`]     | processor execute                | 800ms    |
//! | [`PowerSurgeLane`]    | power on (when enabled)          | one-shot |
//!
//! Lanes are independent of each other. Within a lane, effects happen in the order they
//! were scheduled. One-shot effects can't be cancelled once scheduled.

// Attach sources.
pub mod animation_cue;
pub mod animation_scheduler;
pub mod lanes;
pub mod particle;
pub mod timer_queue;

// Re-export.
pub use animation_cue::*;
pub use animation_scheduler::*;
pub use lanes::*;
pub use particle::*;
pub use timer_queue::*;
