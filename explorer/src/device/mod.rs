// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod board_layout;
pub mod commit;
pub mod device_state;
pub mod memory_bank;

// Re-export.
pub use board_layout::*;
pub use commit::*;
pub use device_state::*;
pub use memory_bank::*;
