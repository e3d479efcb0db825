// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Where the learner is in the curriculum, and the transient state of their attempts on
/// the current task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current_index: usize,
    pub completed: Vec<bool>,
    pub consecutive_failures: u32,
    pub hint_visible: bool,
    pub input_buffer: String,
}

impl Progress {
    #[must_use]
    pub fn new(task_count: usize) -> Self {
        Self {
            current_index: 0,
            completed: vec![false; task_count],
            consecutive_failures: 0,
            hint_visible: false,
            input_buffer: String::new(),
        }
    }

    /// Called on every success and every navigation.
    pub fn reset_attempts(&mut self) {
        self.consecutive_failures = 0;
        self.hint_visible = false;
        self.input_buffer.clear();
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn all_completed(&self) -> bool { self.completed.iter().all(|it| *it) }

    #[must_use]
    pub fn completed_count(&self) -> usize { self.completed.iter().filter(|it| **it).count() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_new_and_reset() {
        let mut progress = Progress::new(7);
        assert_eq2!(progress.completed, vec![false; 7]);
        assert!(!progress.all_completed());

        progress.consecutive_failures = 4;
        progress.hint_visible = true;
        progress.input_buffer.push_str("fan.start(");
        progress.reset_attempts();
        assert_eq2!(progress, Progress::new(7));
    }

    #[test]
    fn test_is_completed_out_of_range() {
        let progress = Progress::new(2);
        assert!(!progress.is_completed(99));
        assert_eq2!(progress.completed_count(), 0);
    }
}
