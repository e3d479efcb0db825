// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod bounded_history;
pub mod common_result_and_error;

// Re-export.
pub use bounded_history::*;
pub use common_result_and_error::*;
