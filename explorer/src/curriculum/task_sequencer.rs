// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnimationCue, BoardLayout, DeviceState, GrammarSpec, Identity, Progress, Rejection,
            SequencerPolicy, Task, TaskKind, validate};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Success {
        task_index: usize,
        /// Animation to hand to the scheduler, if the command has one.
        cue: Option<AnimationCue>,
    },
    Failure {
        task_index: usize,
        rejection: Rejection,
        hint_visible: bool,
    },
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool { matches!(self, SubmitOutcome::Success { .. }) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Moved { from: usize, to: usize },
    /// Already at the first (retreat) or last (advance) task.
    AtBoundary,
    /// Advancing past an incomplete task, when the policy forbids that.
    Refused,
}

/// The state machine that walks the learner through the task table.
///
/// Each task is `pending`, `hinting` (enough failed attempts to show the hint) or
/// `completed`. A successful [`submit`](Self::submit) completes the current task. Failed
/// attempts accumulate until the hint shows. Navigation moves between tasks and
/// resets the attempt state of the task that is moved to.
#[derive(Debug, Clone)]
pub struct TaskSequencer {
    tasks: Vec<Task>,
    policy: SequencerPolicy,
    progress: Progress,
}

impl TaskSequencer {
    #[must_use]
    pub fn new(tasks: Vec<Task>, policy: SequencerPolicy) -> Self {
        let progress = Progress::new(tasks.len());
        Self {
            tasks,
            policy,
            progress,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &Progress { &self.progress }

    #[must_use]
    pub fn tasks(&self) -> &[Task] { &self.tasks }

    #[must_use]
    pub fn current_task(&self) -> Option<&Task> { self.tasks.get(self.progress.current_index) }

    /// Keep what the learner is typing, so the presentation layer holds no state of its
    /// own.
    pub fn set_input_buffer(&mut self, text: impl Into<String>) {
        self.progress.input_buffer = text.into();
    }

    /// Run `text` through the current task's grammar. On a match the command is
    /// committed to `device` and the task is completed. On a rejection nothing but the
    /// attempt counters change.
    pub fn submit(
        &mut self,
        text: &str,
        device: &mut DeviceState,
        identity: &Identity,
        layout: &BoardLayout,
    ) -> SubmitOutcome {
        let task_index = self.progress.current_index;
        let Some(task) = self.tasks.get(task_index) else {
            return SubmitOutcome::Failure {
                task_index,
                rejection: Rejection::GrammarNoMatch,
                hint_visible: self.progress.hint_visible,
            };
        };

        let trimmed = text.trim();
        let result = match &task.grammar {
            GrammarSpec::Identity => {
                if identity.is_committed() {
                    Ok(None)
                } else {
                    Err(Rejection::semantic("no name has been committed yet"))
                }
            }
            grammar => validate(trimmed, grammar).map(|param_set| param_set.commit(device, layout)),
        };

        let outcome = match result {
            Ok(cue) => {
                self.progress.completed[task_index] = true;
                self.progress.reset_attempts();
                tracing::info!(message = "task completed", task_index, title = task.title);
                SubmitOutcome::Success { task_index, cue }
            }
            Err(rejection) => {
                self.progress.consecutive_failures += 1;
                if self.progress.consecutive_failures >= self.policy.hint_threshold {
                    self.progress.hint_visible = true;
                }
                self.progress.input_buffer = text.to_string();
                SubmitOutcome::Failure {
                    task_index,
                    rejection,
                    hint_visible: self.progress.hint_visible,
                }
            }
        };

        tracing::debug!(
            message = "submit",
            task_index,
            text = trimmed,
            ?outcome,
            consecutive_failures = self.progress.consecutive_failures
        );
        outcome
    }

    pub fn advance(&mut self) -> Navigation {
        let from = self.progress.current_index;
        if from + 1 >= self.tasks.len() {
            return Navigation::AtBoundary;
        }
        if self.policy.require_completion_to_advance && !self.progress.is_completed(from) {
            tracing::warn!(message = "advance refused, task not completed", task_index = from);
            return Navigation::Refused;
        }
        self.move_to(from + 1)
    }

    pub fn retreat(&mut self) -> Navigation {
        let from = self.progress.current_index;
        if from == 0 {
            return Navigation::AtBoundary;
        }
        self.move_to(from - 1)
    }

    /// The identity task is completed by [`Identity::commit`], not by a command. Does
    /// not touch the attempt counters.
    pub fn complete_identity_task(&mut self) {
        if let Some(index) = self.tasks.iter().position(|it| it.kind == TaskKind::Identity) {
            self.progress.completed[index] = true;
            tracing::info!(message = "identity task completed", task_index = index);
        }
    }

    fn move_to(&mut self, to: usize) -> Navigation {
        let from = self.progress.current_index;
        self.progress.current_index = to;
        self.progress.reset_attempts();
        tracing::info!(message = "navigate", from, to);
        Navigation::Moved { from, to }
    }
}
