// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)
//!
//! Note that a learner typing a malformed command is **not** an error in this crate.
//! That outcome is a [`crate::Rejection`] value which the sequencer counts as a failed
//! attempt. The types here cover the genuinely fallible paths: loading configuration
//! and installing the logging subscriber.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
/// It is basically `miette::Result<T, miette::Report>`, and works hand in hand with
/// [`ConfigError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Reasons an [`crate::EngineConfig`] can't be used to build a session.
#[derive(Debug, PartialEq, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// A periodic lane or one-shot delay was configured as zero milliseconds.
    #[error("Timing value `{field}` must be greater than zero")]
    #[diagnostic(
        code(hw_explorer::config::zero_period),
        help("A zero period would make the lane fire forever within a single advance")
    )]
    ZeroPeriod { field: &'static str },

    #[error("Bit-flow burst must emit at least one particle")]
    #[diagnostic(code(hw_explorer::config::empty_burst))]
    EmptyBurst,

    #[error("Hint threshold must be at least one failed attempt")]
    #[diagnostic(code(hw_explorer::config::zero_hint_threshold))]
    ZeroHintThreshold,

    #[error("Memory history capacity must hold at least one entry")]
    #[diagnostic(code(hw_explorer::config::zero_memory_capacity))]
    ZeroMemoryCapacity,

    #[error("Particle increment must be a positive, finite amount (got {increment})")]
    #[diagnostic(
        code(hw_explorer::config::particle_increment),
        help("Particles would never reach 100 and would live forever")
    )]
    InvalidParticleIncrement { increment: f64 },

    #[error("Ambient spawn chance must be within 0.0..=1.0 (got {chance})")]
    #[diagnostic(code(hw_explorer::config::spawn_chance))]
    InvalidSpawnChance { chance: f64 },

    #[error("Configuration is not valid JSON: {message}")]
    #[diagnostic(
        code(hw_explorer::config::malformed_json),
        help("Start from `EngineConfig::strict()` serialized with serde_json")
    )]
    MalformedJson { message: String },

    #[error("Fan speed band is empty: min {min} > max {max}")]
    #[diagnostic(code(hw_explorer::config::fan_band))]
    EmptyFanBand { min: u32, max: u32 },
}
