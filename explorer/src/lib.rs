// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `hw_explorer`
//!
//! The engine behind an interactive hardware tutorial. A learner types small
//! "commands" such as `battery.powerOn()` or `fan.start(speed=3000)`. Each command is
//! matched against the grammar of the current task, and a successful match mutates a
//! simulated device and queues cosmetic animations.
//!
//! ```text
//! text ─▶ TaskSequencer::submit ─▶ validate(text, grammar) ─▶ ParamSet::commit
//!                                                                │
//!                                   DeviceState ◀────────────────┤
//!                                   AnimationScheduler ◀── cue ──┘
//! ```
//!
//! Everything lives in one in-memory [`TutorialSession`]. Nothing is persisted and
//! there are no threads: the presentation layer calls [`TutorialSession::advance`] on
//! its own frame clock and renders the [`SessionSnapshot`].
//!
//! ## Modules
//!
//! - [`mod@core`] - result and error types, decl macros, logging, [`EngineConfig`].
//! - [`grammar`] - the per-task command grammars and [`validate()`].
//! - [`device`] - [`DeviceState`] and the memory bank.
//! - [`curriculum`] - tasks, the two curricula, identity, and [`TaskSequencer`].
//! - [`animator`] - [`AnimationScheduler`] and its lanes.
//! - [`session`] - [`TutorialSession`], the external interface.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

pub mod animator;
pub mod core;
pub mod curriculum;
pub mod device;
pub mod grammar;
pub mod session;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use animator::*;
#[allow(ambiguous_glob_reexports)]
pub use core::*;
#[allow(ambiguous_glob_reexports)]
pub use curriculum::*;
#[allow(ambiguous_glob_reexports)]
pub use device::*;
#[allow(ambiguous_glob_reexports)]
pub use grammar::*;
#[allow(ambiguous_glob_reexports)]
pub use session::*;
