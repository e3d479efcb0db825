// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod session_snapshot;
pub mod tutorial_session;

// Re-export.
pub use session_snapshot::*;
pub use tutorial_session::*;
