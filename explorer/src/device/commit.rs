// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::Local;

use crate::{AnimationCue, BoardComponent, BoardLayout, DeviceState, ParamSet, StoredFile};

impl ParamSet {
    /// Apply a successful match to the device. This is the only way a command changes
    /// [`DeviceState`]. Returns the cue the [`crate::AnimationScheduler`] should play, if
    /// this command has a visual effect over time.
    ///
    /// Only ever called with a [`ParamSet`] that passed validation, so a rejected
    /// command can't leave a partial write behind.
    pub fn commit(self, device: &mut DeviceState, layout: &BoardLayout) -> Option<AnimationCue> {
        tracing::debug!(message = "commit", param_set = ?self);

        match self {
            ParamSet::PowerOn => {
                device.powered = true;
                Some(AnimationCue::PowerOn)
            }
            ParamSet::FanStart { speed_rpm } => {
                device.fan_speed_rpm = speed_rpm;
                Some(AnimationCue::FanStarted)
            }
            ParamSet::MemoryStore { text, address } => {
                if let Some(displaced) = device.memory.store(text, address, Local::now()) {
                    tracing::trace!(message = "memory entry displaced", ?displaced);
                }
                None
            }
            ParamSet::ProcessorExecute { op, cycles } => {
                device.processor.op = op;
                Some(AnimationCue::ProcessorPulse { cycles })
            }
            ParamSet::ProcessorActivity => Some(AnimationCue::ProcessorActivity),
            ParamSet::StorageWrite { name, size_bytes } => {
                device.stored_files.push(StoredFile {
                    name,
                    size_bytes,
                    stored_at: Local::now(),
                });
                Some(AnimationCue::BitFlowBurst {
                    origin: layout.position_of(BoardComponent::Cpu),
                    target: layout.position_of(BoardComponent::Storage),
                })
            }
            ParamSet::Display { text } => {
                device.display_text = text;
                None
            }
        }
    }
}
