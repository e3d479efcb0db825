// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::GrammarSpec;

/// One per task, in curriculum order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TaskKind {
    Power,
    Fan,
    Identity,
    Memory,
    Processor,
    Storage,
    Display,
}

/// Renders a task's instruction, given the learner's committed name (if any).
pub type InstructionFn = fn(Option<&str>) -> String;

#[derive(Clone)]
pub struct Task {
    pub index: usize,
    pub kind: TaskKind,
    pub title: &'static str,
    pub hint: &'static str,
    pub grammar: GrammarSpec,
    instruction: InstructionFn,
}

impl Task {
    #[must_use]
    pub fn new(
        index: usize,
        kind: TaskKind,
        title: &'static str,
        instruction: InstructionFn,
        hint: &'static str,
        grammar: GrammarSpec,
    ) -> Self {
        Self {
            index,
            kind,
            title,
            hint,
            grammar,
            instruction,
        }
    }

    #[must_use]
    pub fn instruction(&self, learner_name: Option<&str>) -> String {
        (self.instruction)(learner_name)
    }
}

impl Debug for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("index", &self.index)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("grammar", &self.grammar)
            .finish_non_exhaustive()
    }
}
