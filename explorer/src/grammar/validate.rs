// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use nom::{IResult, error::ErrorKind};

use super::constants::{CPU_EXECUTE, FAN_START, POWER_ON, RAM_STORE, SCREEN_DISPLAY,
                       STORAGE_WRITE};
use crate::{AddressPolicy, GrammarSpec, HexAddress, ParamSet, ProcessorForm, ProcessorOp,
            RamStoreArgs, Rejection, parse_cpu_execute, parse_fan_start, parse_ram_store,
            parse_screen_display, parse_storage_write, scan_for_call};

/// Match `raw_text` against `grammar`, then run the grammar's semantic checks.
///
/// This is pure: it reads nothing but its arguments. The caller is expected to have
/// trimmed the text already.
///
/// # Errors
///
/// - [`Rejection::GrammarNoMatch`] if the text doesn't have the command's shape.
/// - [`Rejection::SemanticRejected`] if it does, but a bound, set membership, or exact
///   value check fails.
pub fn validate(raw_text: &str, grammar: &GrammarSpec) -> Result<ParamSet, Rejection> {
    match grammar {
        GrammarSpec::PowerOn => {
            if raw_text.contains(POWER_ON) {
                Ok(ParamSet::PowerOn)
            } else {
                Err(Rejection::GrammarNoMatch)
            }
        }

        GrammarSpec::FanStart(policy) => {
            let speed_digits = scan_for_call(raw_text, FAN_START, parse_fan_start)
                .ok_or(Rejection::GrammarNoMatch)?;
            // The parser only yields digits, so a failed parse means the speed is
            // past `u32::MAX`. Pin it there and let the policy decide.
            let speed_rpm = speed_digits.parse::<u32>().unwrap_or(u32::MAX);
            if !policy.accepts(speed_rpm) {
                return Err(Rejection::semantic(format!(
                    "fan speed {speed_rpm} RPM is not the speed the heat load needs"
                )));
            }
            Ok(ParamSet::FanStart { speed_rpm })
        }

        GrammarSpec::Identity => Err(Rejection::GrammarNoMatch),

        GrammarSpec::MemoryStore(policy) => {
            let args =
                scan_for_call(raw_text, RAM_STORE, ram_store_permitting(*policy))
                    .ok_or(Rejection::GrammarNoMatch)?;
            Ok(ParamSet::MemoryStore {
                text: args.text.to_string(),
                address: args.address_digits.map(HexAddress::from_digits),
            })
        }

        GrammarSpec::ProcessorExecute(ProcessorForm::Loose) => {
            if raw_text.contains(CPU_EXECUTE) {
                Ok(ParamSet::ProcessorActivity)
            } else {
                Err(Rejection::GrammarNoMatch)
            }
        }

        GrammarSpec::ProcessorExecute(ProcessorForm::WithCycles) => {
            let args = scan_for_call(raw_text, CPU_EXECUTE, parse_cpu_execute)
                .ok_or(Rejection::GrammarNoMatch)?;
            let op = ProcessorOp::from_str(args.op)
                .ok()
                .filter(|it| it.is_executable())
                .ok_or_else(|| {
                    Rejection::semantic(format!(
                        "`{}` is not in the instruction set (ADD, SUB, MUL, DIV)",
                        args.op
                    ))
                })?;
            let cycles: u32 = parse_number(args.cycles_digits, "cycles")?;
            if cycles == 0 {
                return Err(Rejection::semantic("cycles must be at least 1"));
            }
            Ok(ParamSet::ProcessorExecute { op, cycles })
        }

        GrammarSpec::StorageWrite(policy) => {
            let args = scan_for_call(raw_text, STORAGE_WRITE, parse_storage_write)
                .ok_or(Rejection::GrammarNoMatch)?;
            let size_bytes: u64 = parse_number(args.size_digits, "size")?;
            if !policy.accepts(size_bytes) {
                return Err(Rejection::semantic(format!(
                    "{size_bytes} bytes is not the size of the file"
                )));
            }
            Ok(ParamSet::StorageWrite {
                name: args.name.to_string(),
                size_bytes,
            })
        }

        GrammarSpec::Display(policy) => {
            let text = scan_for_call(raw_text, SCREEN_DISPLAY, parse_screen_display)
                .ok_or(Rejection::GrammarNoMatch)?;
            if !policy.accepts(text) {
                return Err(Rejection::semantic(
                    "the text does not contain the pixel throughput",
                ));
            }
            Ok(ParamSet::Display {
                text: text.to_string(),
            })
        }
    }
}

/// A `ram.store` call whose address argument is allowed by `policy`. A disallowed shape
/// is a parse error, so [`scan_for_call`] keeps looking further along the input.
fn ram_store_permitting(
    policy: AddressPolicy,
) -> impl FnMut(&str) -> IResult<&str, RamStoreArgs<'_>> {
    move |input| {
        let (remainder, args) = parse_ram_store(input)?;
        if address_permitted(policy, args.address_digits.is_some()) {
            Ok((remainder, args))
        } else {
            Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Verify)))
        }
    }
}

fn address_permitted(policy: AddressPolicy, has_address: bool) -> bool {
    match policy {
        AddressPolicy::Required => has_address,
        AddressPolicy::Optional => true,
        AddressPolicy::Forbidden => !has_address,
    }
}

fn parse_number<T: FromStr>(digits: &str, name: &str) -> Result<T, Rejection> {
    digits
        .parse::<T>()
        .map_err(|_| Rejection::semantic(format!("{name} `{digits}` is out of range")))
}
