// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The linear curriculum. [`TaskSequencer`] owns the task table and the learner's
//! [`Progress`] through it, and gates every transition on the grammar of the current
//! task. [`Identity`] is the one task that is completed out of band, by the virtual
//! keyboard rather than by a typed command.

// Attach sources.
pub mod curricula;
pub mod identity;
pub mod progress;
pub mod task;
pub mod task_sequencer;

// Re-export.
pub use curricula::*;
pub use identity::*;
pub use progress::*;
pub use task::*;
pub use task_sequencer::*;
