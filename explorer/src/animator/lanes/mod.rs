// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod fan_lane;
pub mod flow_lanes;
pub mod lane_event;
pub mod power_surge_lane;
pub mod processor_lane;

// Re-export.
pub use fan_lane::*;
pub use flow_lanes::*;
pub use lane_event::*;
pub use power_surge_lane::*;
pub use processor_lane::*;
