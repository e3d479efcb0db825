// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{AddressPolicy, ConfigError, DisplayTextPolicy, FanSpeedPolicy, GrammarSpec,
            ProcessorForm, StorageSizePolicy, TaskKind};

/// Heat load the fan has to remove in the thermal task, in watts.
pub const CPU_HEAT_LOAD_WATTS: f64 = 24.0;
/// Watts removed per RPM.
pub const FAN_EFFICIENCY_WATTS_PER_RPM: f64 = 0.008;
/// `24 / 0.008`.
pub const FAN_TARGET_RPM: u32 = 3000;
pub const FAN_TOLERANCE_RPM: u32 = 50;
/// A 2048x2048 texture at 32 bits per pixel: `(2048 * 2048 * 32) / 8`.
pub const TEXTURE_SIZE_BYTES: u64 = 2048 * 2048 * 32 / 8;
/// 1920x1080 at 120Hz: `1920 * 1080 * 120`.
pub const DISPLAY_THROUGHPUT_PX_PER_SEC: u64 = 1920 * 1080 * 120;

/// The semantic half of every task's grammar. The command shapes are fixed, these knobs
/// decide which well formed commands are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarPolicy {
    pub fan: FanSpeedPolicy,
    pub memory_address: AddressPolicy,
    pub processor: ProcessorForm,
    pub storage_size: StorageSizePolicy,
    pub display: DisplayTextPolicy,
}

impl GrammarPolicy {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            fan: FanSpeedPolicy::target_with_tolerance(FAN_TARGET_RPM, FAN_TOLERANCE_RPM),
            memory_address: AddressPolicy::Required,
            processor: ProcessorForm::WithCycles,
            storage_size: StorageSizePolicy::Exact(TEXTURE_SIZE_BYTES),
            display: DisplayTextPolicy::MustContain(DISPLAY_THROUGHPUT_PX_PER_SEC.to_string()),
        }
    }

    #[must_use]
    pub fn lenient() -> Self {
        Self {
            fan: FanSpeedPolicy::Any,
            memory_address: AddressPolicy::Optional,
            processor: ProcessorForm::Loose,
            storage_size: StorageSizePolicy::Any,
            display: DisplayTextPolicy::Any,
        }
    }

    /// Build the grammar table entry for a task.
    #[must_use]
    pub fn spec_for(&self, kind: TaskKind) -> GrammarSpec {
        match kind {
            TaskKind::Power => GrammarSpec::PowerOn,
            TaskKind::Fan => GrammarSpec::FanStart(self.fan),
            TaskKind::Identity => GrammarSpec::Identity,
            TaskKind::Memory => GrammarSpec::MemoryStore(self.memory_address),
            TaskKind::Processor => GrammarSpec::ProcessorExecute(self.processor),
            TaskKind::Storage => GrammarSpec::StorageWrite(self.storage_size),
            TaskKind::Display => GrammarSpec::Display(self.display.clone()),
        }
    }

    /// # Errors
    ///
    /// [`ConfigError::EmptyFanBand`] when the band's ends are reversed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.fan {
            FanSpeedPolicy::Band { min_rpm, max_rpm } if min_rpm > max_rpm => {
                Err(ConfigError::EmptyFanBand {
                    min: min_rpm,
                    max: max_rpm,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_strict_constants() {
        assert_eq2!(
            (CPU_HEAT_LOAD_WATTS / FAN_EFFICIENCY_WATTS_PER_RPM).round() as u32,
            FAN_TARGET_RPM
        );
        assert_eq2!(TEXTURE_SIZE_BYTES, 16_777_216);
        assert_eq2!(DISPLAY_THROUGHPUT_PX_PER_SEC, 248_832_000);
    }

    #[test]
    fn test_spec_for() {
        let strict = GrammarPolicy::strict();
        assert_eq2!(
            strict.spec_for(TaskKind::Fan),
            GrammarSpec::FanStart(FanSpeedPolicy::Band {
                min_rpm: 3000,
                max_rpm: 3050
            })
        );
        assert_eq2!(
            strict.spec_for(TaskKind::Display),
            GrammarSpec::Display(DisplayTextPolicy::MustContain("248832000".into()))
        );

        let lenient = GrammarPolicy::lenient();
        assert_eq2!(
            lenient.spec_for(TaskKind::Memory),
            GrammarSpec::MemoryStore(AddressPolicy::Optional)
        );
        assert_eq2!(lenient.spec_for(TaskKind::Identity), GrammarSpec::Identity);
    }

    #[test]
    fn test_validate_rejects_empty_band() {
        let policy = GrammarPolicy {
            fan: FanSpeedPolicy::Band {
                min_rpm: 10,
                max_rpm: 5,
            },
            ..GrammarPolicy::lenient()
        };
        assert_eq2!(
            policy.validate(),
            Err(ConfigError::EmptyFanBand { min: 10, max: 5 })
        );
        assert_eq2!(GrammarPolicy::strict().validate(), Ok(()));
    }
}
