// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// The declarative grammar table entry for one task. Each variant names the command
/// shape, and carries the semantic policy that decides whether a well formed command is
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GrammarSpec {
    /// Substring `battery.powerOn` anywhere in the input.
    PowerOn,
    /// `fan.start(speed=<int>)`.
    FanStart(FanSpeedPolicy),
    /// Completed out of band by [`crate::Identity::commit`]; there is no command.
    Identity,
    /// `ram.store("<text>"[, 0x<hex>])`.
    MemoryStore(AddressPolicy),
    /// `cpu.execute("<op>", cycles=<int>)`, or just the call name in the loose form.
    ProcessorExecute(ProcessorForm),
    /// `storage.write("<name>", <int>)`.
    StorageWrite(StorageSizePolicy),
    /// `screen.display("<text>")`.
    Display(DisplayTextPolicy),
}

/// The strict curriculum computes a target (24 W / 0.008 W per RPM = 3000 RPM) and
/// accepts a small window above it. The lenient curriculum accepts any speed. These are
/// two different policies on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanSpeedPolicy {
    Any,
    /// Both ends inclusive.
    Band { min_rpm: u32, max_rpm: u32 },
}

impl FanSpeedPolicy {
    /// `target` up to `target + tolerance`, both inclusive.
    #[must_use]
    pub fn target_with_tolerance(target_rpm: u32, tolerance_rpm: u32) -> Self {
        Self::Band {
            min_rpm: target_rpm,
            max_rpm: target_rpm.saturating_add(tolerance_rpm),
        }
    }

    #[must_use]
    pub fn accepts(&self, speed_rpm: u32) -> bool {
        match self {
            FanSpeedPolicy::Any => true,
            FanSpeedPolicy::Band { min_rpm, max_rpm } => {
                (*min_rpm..=*max_rpm).contains(&speed_rpm)
            }
        }
    }
}

/// Whether `ram.store` takes the hex address argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressPolicy {
    Required,
    Optional,
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessorForm {
    /// Only the `cpu.execute` call name has to be present.
    Loose,
    /// Op in `{ADD, SUB, MUL, DIV}` (any case) and `cycles > 0`.
    WithCycles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageSizePolicy {
    Any,
    /// Exact match, no tolerance. The strict curriculum uses
    /// `2048 * 2048 * 32 / 8 = 16_777_216` bytes.
    Exact(u64),
}

impl StorageSizePolicy {
    #[must_use]
    pub fn accepts(&self, size_bytes: u64) -> bool {
        match self {
            StorageSizePolicy::Any => true,
            StorageSizePolicy::Exact(expected) => *expected == size_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayTextPolicy {
    Any,
    /// The text must *contain* this substring. The strict curriculum uses
    /// `1920 * 1080 * 120 = 248832000`.
    MustContain(String),
}

impl DisplayTextPolicy {
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            DisplayTextPolicy::Any => true,
            DisplayTextPolicy::MustContain(needle) => text.contains(needle.as_str()),
        }
    }
}
