// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use super::constants::HEX_PREFIX;

/// Typed parameters extracted from a successful match. Applying one of these to a
/// [`crate::DeviceState`] is the task's commit function, see
/// [`ParamSet::commit`](crate::ParamSet::commit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSet {
    PowerOn,
    FanStart { speed_rpm: u32 },
    MemoryStore {
        text: String,
        address: Option<HexAddress>,
    },
    /// `cpu.execute("<op>", cycles=<n>)`.
    ProcessorExecute { op: ProcessorOp, cycles: u32 },
    /// The loose `cpu.execute` form, which carries no operands.
    ProcessorActivity,
    StorageWrite { name: String, size_bytes: u64 },
    Display { text: String },
}

/// Why a submission did not complete the task. Both variants are *expected* outcomes
/// that the sequencer counts as a failed attempt. Neither is ever surfaced as a hard
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum Rejection {
    #[error("Input does not match the expected command shape")]
    #[diagnostic(code(hw_explorer::grammar::no_match))]
    GrammarNoMatch,

    #[error("Command recognized but rejected: {reason}")]
    #[diagnostic(code(hw_explorer::grammar::semantic_rejected))]
    SemanticRejected { reason: String },
}

impl Rejection {
    pub fn semantic(reason: impl Into<String>) -> Self {
        Self::SemanticRejected {
            reason: reason.into(),
        }
    }
}

/// Operation shown on the processor. `IDLE` is the resting state and can't be requested
/// by a command.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProcessorOp {
    #[default]
    Idle,
    Add,
    Sub,
    Mul,
    Div,
}

impl ProcessorOp {
    /// Whether a command may ask the processor to run this operation.
    #[must_use]
    pub fn is_executable(self) -> bool { !matches!(self, ProcessorOp::Idle) }
}

/// A memory address, always stored as `0x` followed by uppercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexAddress(String);

impl HexAddress {
    /// `digits` are the hex digits without the prefix, in any case.
    #[must_use]
    pub fn from_digits(digits: &str) -> Self {
        Self(format!("{HEX_PREFIX}{}", digits.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Display for HexAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}
