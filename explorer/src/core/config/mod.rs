// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod animation_config;
pub mod engine_config;
pub mod grammar_policy;

// Re-export.
pub use animation_config::*;
pub use engine_config::*;
pub use grammar_policy::*;
