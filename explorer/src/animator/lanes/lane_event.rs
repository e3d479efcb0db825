// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Point;

/// Every entry in the scheduler's [`crate::TimerQueue`]. The variant decides which lane
/// handles it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaneEvent {
    FanTick,
    LaunchBit { origin: Point, target: Point },
    BitFlowTick,
    AmbientFlowTick,
    ProcessorCycle { index: u32, total: u32 },
    ClearPulse,
    RevertToIdle,
    ActivityLevel(u8),
    PowerSurgeEnd,
}
