// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Serialize;

use crate::{CurriculumVariant, DeviceState, Particle, Progress};

/// Everything the presentation layer needs to draw one frame. It holds no state of its
/// own, so a renderer can be rebuilt from any snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub variant: CurriculumVariant,
    pub task: TaskView,
    pub progress: Progress,
    /// Number of tasks marked complete so far.
    pub completed_count: usize,
    pub device: DeviceState,
    pub staged_name: String,
    pub committed_name: Option<String>,
    pub bit_flow_particles: Vec<Particle>,
    pub ambient_particles: Vec<Particle>,
    pub elapsed_ms: u64,
}

/// The current task, with its instruction already rendered for the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    pub index: usize,
    pub title: String,
    pub instruction: String,
    /// Only present once the hint is visible.
    pub hint: Option<String>,
}
