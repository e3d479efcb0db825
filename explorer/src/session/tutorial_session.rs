// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{AnimationScheduler, CommonResult, DeviceState, EngineConfig, Identity,
            IdentityCommit, Key, Navigation, SessionSnapshot, SubmitOutcome, TaskSequencer,
            TaskView, curriculum, ok};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// One learner's run through a curriculum. This is the whole engine: every input from
/// the presentation layer is a method here, and [`snapshot`](Self::snapshot) is the only
/// output.
#[derive(Debug)]
pub struct TutorialSession {
    config: EngineConfig,
    sequencer: TaskSequencer,
    device: DeviceState,
    identity: Identity,
    scheduler: AnimationScheduler,
}

impl TutorialSession {
    /// Validates `config` first, so every lane period is known to be non zero.
    ///
    /// # Errors
    ///
    /// The [`crate::ConfigError`] from [`EngineConfig::validate`], as a report.
    pub fn try_new(config: EngineConfig) -> CommonResult<Self> {
        config.validate()?;

        let tasks = curriculum(config.variant, &config.grammar);
        let session = Self {
            sequencer: TaskSequencer::new(tasks, config.sequencer),
            device: DeviceState::new(config.memory_history_capacity),
            identity: Identity::default(),
            scheduler: AnimationScheduler::new(&config.animation, config.rng_seed),
            config,
        };

        tracing::info!(message = "session started", variant = ?session.config.variant);
        ok!(session)
    }

    pub fn submit_command(&mut self, text: &str) -> SubmitOutcome {
        let outcome = self.sequencer.submit(
            text,
            &mut self.device,
            &self.identity,
            &self.config.board_layout,
        );
        if let SubmitOutcome::Success { cue: Some(cue), .. } = &outcome {
            self.scheduler.play(*cue, &mut self.device);
        }
        outcome
    }

    /// Mirror of the command input box.
    pub fn edit_input(&mut self, text: &str) { self.sequencer.set_input_buffer(text); }

    pub fn keystroke(&mut self, key: Key) { self.identity.keystroke(key); }

    pub fn backspace(&mut self) { self.identity.backspace(); }

    /// Commit the staged name. On success the display shows the confirmation text and
    /// the identity task is completed.
    pub fn commit_identity(&mut self) -> IdentityCommit {
        let policy = self.config.identity;
        let result = self.identity.commit(policy.clear_staged_on_commit);
        match &result {
            IdentityCommit::Committed(name) => {
                self.device.display_text = policy.confirmation.render(name);
                self.sequencer.complete_identity_task();
                tracing::info!(message = "identity committed", name = name.as_str());
            }
            IdentityCommit::EmptyName | IdentityCommit::AlreadyCommitted => {
                tracing::debug!(message = "identity commit ignored", ?result);
            }
        }
        result
    }

    pub fn navigate(&mut self, direction: Direction) -> Navigation {
        match direction {
            Direction::Next => self.sequencer.advance(),
            Direction::Prev => self.sequencer.retreat(),
        }
    }

    /// Move animation time forward, typically once per rendered frame.
    pub fn advance(&mut self, elapsed: Duration) { self.scheduler.advance(elapsed, &mut self.device); }

    #[must_use]
    pub fn device(&self) -> &DeviceState { &self.device }

    #[must_use]
    pub fn identity(&self) -> &Identity { &self.identity }

    #[must_use]
    pub fn sequencer(&self) -> &TaskSequencer { &self.sequencer }

    #[must_use]
    pub fn scheduler(&self) -> &AnimationScheduler { &self.scheduler }

    #[must_use]
    pub fn config(&self) -> &EngineConfig { &self.config }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let progress = self.sequencer.progress().clone();
        let name = self.identity.committed_name();
        let task = match self.sequencer.current_task() {
            Some(task) => TaskView {
                index: task.index,
                title: task.title.to_string(),
                instruction: task.instruction(name),
                hint: progress.hint_visible.then(|| task.hint.to_string()),
            },
            None => TaskView {
                index: progress.current_index,
                title: String::new(),
                instruction: String::new(),
                hint: None,
            },
        };

        SessionSnapshot {
            variant: self.config.variant,
            task,
            completed_count: progress.completed_count(),
            progress,
            device: self.device.clone(),
            staged_name: self.identity.staged_name().to_string(),
            committed_name: name.map(str::to_string),
            bit_flow_particles: self.scheduler.bit_flow_particles().to_vec(),
            ambient_particles: self.scheduler.ambient_particles().to_vec(),
            elapsed_ms: u64::try_from(self.scheduler.now().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, ProcessorOp, Rejection, assert_eq2};

    fn session(config: EngineConfig) -> TutorialSession {
        TutorialSession::try_new(config.with_rng_seed(1)).unwrap()
    }

    fn type_name(session: &mut TutorialSession, name: &str) {
        for ch in name.chars() {
            session.keystroke(if ch == ' ' { Key::Space } else { Key::Char(ch) });
        }
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let mut config = EngineConfig::strict();
        config.animation.fan.tick_ms = 0;
        let report = TutorialSession::try_new(config).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ZeroPeriod {
                field: "fan.tick_ms"
            })
        );
    }

    #[test]
    fn test_submit_plays_cue() {
        let mut session = session(EngineConfig::strict());
        assert!(session.submit_command("battery.powerOn()").is_success());
        assert!(session.device().powered);
        assert!(session.device().power_surge);

        session.advance(Duration::from_millis(2500));
        assert!(!session.device().power_surge);
    }

    #[test]
    fn test_commit_identity_strict() {
        let mut session = session(EngineConfig::strict());
        type_name(&mut session, "ADA");
        assert_eq2!(session.commit_identity(), IdentityCommit::Committed("ADA".into()));
        assert_eq2!(session.device().display_text, "USER: ADA AUTHENTICATED");
        assert_eq2!(session.identity().staged_name(), "");
        assert!(session.sequencer().progress().completed[2]);

        type_name(&mut session, "BOB");
        assert_eq2!(session.commit_identity(), IdentityCommit::AlreadyCommitted);
        assert_eq2!(session.device().display_text, "USER: ADA AUTHENTICATED");
    }

    #[test]
    fn test_commit_identity_lenient() {
        let mut session = session(EngineConfig::lenient());
        type_name(&mut session, "ADA");
        session.commit_identity();
        assert_eq2!(session.device().display_text, "ADA");
        assert_eq2!(session.identity().staged_name(), "ADA");
    }

    #[test]
    fn test_commit_empty_identity_changes_nothing() {
        let mut session = session(EngineConfig::strict());
        session.keystroke(Key::Space);
        assert_eq2!(session.commit_identity(), IdentityCommit::EmptyName);
        assert!(!session.sequencer().progress().completed[2]);
        assert_eq2!(session.device().display_text, "");
    }

    #[test]
    fn test_snapshot_shows_hint_after_threshold() {
        let mut session = session(EngineConfig::strict());
        session.submit_command("battery");
        assert_eq2!(session.snapshot().task.hint, None);

        let outcome = session.submit_command("battery");
        assert_eq2!(
            outcome,
            SubmitOutcome::Failure {
                task_index: 0,
                rejection: Rejection::GrammarNoMatch,
                hint_visible: true,
            }
        );
        let snapshot = session.snapshot();
        assert_eq2!(
            snapshot.task.hint.as_deref(),
            Some("Call battery.powerOn() to enable the power distribution system.")
        );
        assert_eq2!(snapshot.progress.input_buffer, "battery");
    }

    #[test]
    fn test_snapshot_renders_name_in_instruction() {
        let mut session = session(EngineConfig::lenient());
        type_name(&mut session, "ADA");
        session.commit_identity();
        session.navigate(Direction::Next);
        let snapshot = session.snapshot();
        assert_eq2!(snapshot.task.index, 1);
        assert!(snapshot.task.instruction.starts_with("Great, ADA!"));
        assert_eq2!(snapshot.committed_name.as_deref(), Some("ADA"));
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut session = session(EngineConfig::strict());
        session.submit_command("battery.powerOn()");
        session.navigate(Direction::Next);
        session.submit_command("fan.start(speed=3000)");
        session.navigate(Direction::Next);
        session.edit_input("half typed");
        session.advance(Duration::from_millis(100));

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq2!(json["variant"], "Strict");
        assert_eq2!(json["task"]["index"], 2);
        assert_eq2!(json["completed_count"], 2);
        assert_eq2!(json["device"]["fan_speed_rpm"], 3000);
        assert_eq2!(json["device"]["processor"]["op"], "IDLE");
        assert_eq2!(json["progress"]["input_buffer"], "half typed");
        assert_eq2!(json["elapsed_ms"], 100);
    }

    #[test]
    fn test_storage_write_with_huge_launch_delay() {
        let mut config = EngineConfig::lenient();
        config.animation.bit_flow.launch_delay_ms = u64::MAX / 2 + 1;
        let json = config.try_to_json_string().unwrap();
        let mut session = session(EngineConfig::try_from_json_str(&json).unwrap());

        for _ in 0..5 {
            session.navigate(Direction::Next);
        }
        assert!(session.submit_command(r#"storage.write("a", 1)"#).is_success());
        assert_eq2!(session.device().stored_files.len(), 1);
        assert_eq2!(session.scheduler().bit_flow_particles().len(), 1);

        session.advance(Duration::MAX);
        assert!(session.scheduler().bit_flow_particles().is_empty());
        assert_eq2!(session.snapshot().elapsed_ms, u64::MAX);
    }

    #[test]
    fn test_processor_execute_through_session() {
        let mut session = session(EngineConfig::lenient());
        for _ in 0..4 {
            session.navigate(Direction::Next);
        }
        assert!(session.submit_command(r#"cpu.execute("2 + 2")"#).is_success());
        assert_eq2!(session.device().processor.activity, 100);
        assert_eq2!(session.device().processor.op, ProcessorOp::Idle);
        session.advance(Duration::from_millis(2000));
        assert_eq2!(session.device().processor.activity, 0);
    }
}
