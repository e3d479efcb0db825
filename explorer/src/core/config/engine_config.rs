// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AnimationConfig, BoardLayout, CommonResult, ConfigError, GrammarPolicy, ok};

pub const DEFAULT_MEMORY_HISTORY_CAPACITY: usize = 5;

/// Which curriculum table (titles, instructions, hints) a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurriculumVariant {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerPolicy {
    /// The failed attempt that reveals the hint (`2` means "on the 2nd failure").
    pub hint_threshold: u32,
    /// Refuse to advance past a task that is not completed.
    pub require_completion_to_advance: bool,
}

/// What the display shows once a name is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationStyle {
    /// `USER: <name> AUTHENTICATED`.
    Authenticated,
    /// Just the name.
    NameOnly,
}

impl ConfirmationStyle {
    #[must_use]
    pub fn render(self, name: &str) -> String {
        match self {
            ConfirmationStyle::Authenticated => format!("USER: {name} AUTHENTICATED"),
            ConfirmationStyle::NameOnly => name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityPolicy {
    pub confirmation: ConfirmationStyle,
    pub clear_staged_on_commit: bool,
}

/// Everything that differs between the two curricula, in one place. A
/// [`crate::TutorialSession`] is built from one of these and never reads any global
/// state.
///
/// Use [`EngineConfig::strict`] or [`EngineConfig::lenient`] for the stock curricula.
/// When loading from JSON with [`EngineConfig::try_from_json_str`], every top level
/// field is optional and missing ones are taken from the preset named by `variant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub variant: CurriculumVariant,
    pub sequencer: SequencerPolicy,
    pub grammar: GrammarPolicy,
    pub identity: IdentityPolicy,
    pub animation: AnimationConfig,
    pub memory_history_capacity: usize,
    pub board_layout: BoardLayout,
    /// Seed for the scheduler's random source. `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl EngineConfig {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            variant: CurriculumVariant::Strict,
            sequencer: SequencerPolicy {
                hint_threshold: 2,
                require_completion_to_advance: true,
            },
            grammar: GrammarPolicy::strict(),
            identity: IdentityPolicy {
                confirmation: ConfirmationStyle::Authenticated,
                clear_staged_on_commit: true,
            },
            animation: AnimationConfig::strict(),
            memory_history_capacity: DEFAULT_MEMORY_HISTORY_CAPACITY,
            board_layout: BoardLayout::percent(),
            rng_seed: None,
        }
    }

    #[must_use]
    pub fn lenient() -> Self {
        Self {
            variant: CurriculumVariant::Lenient,
            sequencer: SequencerPolicy {
                hint_threshold: 3,
                require_completion_to_advance: false,
            },
            grammar: GrammarPolicy::lenient(),
            identity: IdentityPolicy {
                confirmation: ConfirmationStyle::NameOnly,
                clear_staged_on_commit: false,
            },
            animation: AnimationConfig::lenient(),
            memory_history_capacity: DEFAULT_MEMORY_HISTORY_CAPACITY,
            board_layout: BoardLayout::grid(),
            rng_seed: None,
        }
    }

    #[must_use]
    pub fn preset(variant: CurriculumVariant) -> Self {
        match variant {
            CurriculumVariant::Strict => Self::strict(),
            CurriculumVariant::Lenient => Self::lenient(),
        }
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// # Errors
    ///
    /// The first [`ConfigError`] found, checking the sequencer and memory knobs, then the
    /// grammar policy, then the animation timing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sequencer.hint_threshold == 0 {
            return Err(ConfigError::ZeroHintThreshold);
        }
        if self.memory_history_capacity == 0 {
            return Err(ConfigError::ZeroMemoryCapacity);
        }
        self.grammar.validate()?;
        self.animation.validate()
    }

    /// Parse and validate. Top level fields that are missing from `json` are filled in
    /// from the preset named by its `variant` field (strict if that is missing too).
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedJson`] if `json` is not an object of the right shape, or
    /// whatever [`EngineConfig::validate`] rejects.
    pub fn try_from_json_str(json: &str) -> CommonResult<Self> {
        let overrides: Value = serde_json::from_str(json).map_err(malformed)?;
        let Value::Object(overrides) = overrides else {
            return Err(ConfigError::MalformedJson {
                message: "expected a JSON object at the top level".into(),
            }
            .into());
        };

        let variant = match overrides.get("variant") {
            Some(it) => serde_json::from_value(it.clone()).map_err(malformed)?,
            None => CurriculumVariant::default(),
        };

        let mut merged = match serde_json::to_value(Self::preset(variant)).map_err(malformed)? {
            Value::Object(preset) => preset,
            _ => serde_json::Map::new(),
        };
        merged.extend(overrides);

        let config: Self = serde_json::from_value(Value::Object(merged)).map_err(malformed)?;
        config.validate()?;

        tracing::debug!(message = "loaded engine config", variant = ?config.variant);
        ok!(config)
    }

    /// # Errors
    ///
    /// Only if serialization itself fails, which these types never trigger.
    pub fn try_to_json_string(&self) -> CommonResult<String> {
        ok!(serde_json::to_string_pretty(self).map_err(malformed)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self { Self::strict() }
}

fn malformed(error: serde_json::Error) -> ConfigError {
    ConfigError::MalformedJson {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddressPolicy, FanSpeedPolicy, assert_eq2};

    #[test]
    fn test_default_is_strict() {
        assert_eq2!(EngineConfig::default(), EngineConfig::strict());
        assert_eq2!(EngineConfig::strict().validate(), Ok(()));
        assert_eq2!(EngineConfig::lenient().validate(), Ok(()));
    }

    #[test]
    fn test_confirmation_style() {
        assert_eq2!(
            ConfirmationStyle::Authenticated.render("ADA"),
            "USER: ADA AUTHENTICATED"
        );
        assert_eq2!(ConfirmationStyle::NameOnly.render("ADA"), "ADA");
    }

    #[test]
    fn test_validate_zero_hint_threshold() {
        let mut config = EngineConfig::lenient();
        config.sequencer.hint_threshold = 0;
        assert_eq2!(config.validate(), Err(ConfigError::ZeroHintThreshold));
    }

    #[test]
    fn test_validate_zero_memory_capacity() {
        let mut config = EngineConfig::strict();
        config.memory_history_capacity = 0;
        assert_eq2!(config.validate(), Err(ConfigError::ZeroMemoryCapacity));
    }

    #[test]
    fn test_json_round_trip_of_preset() -> CommonResult<()> {
        let config = EngineConfig::lenient().with_rng_seed(7);
        let json = config.try_to_json_string()?;
        assert_eq2!(EngineConfig::try_from_json_str(&json)?, config);
        ok!()
    }

    #[test]
    fn test_json_fills_missing_fields_from_variant() -> CommonResult<()> {
        let config = EngineConfig::try_from_json_str(r#"{ "variant": "Lenient", "rng_seed": 42 }"#)?;
        assert_eq2!(config.variant, CurriculumVariant::Lenient);
        assert_eq2!(config.grammar.fan, FanSpeedPolicy::Any);
        assert_eq2!(config.grammar.memory_address, AddressPolicy::Optional);
        assert_eq2!(config.rng_seed, Some(42));

        let config = EngineConfig::try_from_json_str("{}")?;
        assert_eq2!(config, EngineConfig::strict());
        ok!()
    }

    #[test]
    fn test_json_errors() {
        assert!(EngineConfig::try_from_json_str("not json").is_err());
        assert!(EngineConfig::try_from_json_str("[1, 2]").is_err());
        assert!(EngineConfig::try_from_json_str(r#"{ "variant": "Loose" }"#).is_err());

        let report =
            EngineConfig::try_from_json_str(r#"{ "memory_history_capacity": 0 }"#).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<ConfigError>(),
            Some(&ConfigError::ZeroMemoryCapacity)
        );
    }
}
