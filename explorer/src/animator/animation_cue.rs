// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use crate::Point;

/// What a committed command asks the [`crate::AnimationScheduler`] to play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AnimationCue {
    /// Power surge and ambient power flow, whichever are enabled.
    PowerOn,
    /// Start the fan rotation lane, unless it is already running.
    FanStarted,
    /// A staggered burst of bits flowing along a straight line.
    BitFlowBurst { origin: Point, target: Point },
    /// Blink the processor `cycles` times, then revert to idle.
    ProcessorPulse { cycles: u32 },
    /// The single decaying activity schedule.
    ProcessorActivity,
}
