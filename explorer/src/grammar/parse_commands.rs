// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One parser per command shape. Each one expects its call name at the very start of
//! the input. [`scan_for_call`] is what lets a call appear anywhere in the learner's
//! text.

use nom::{IResult, Parser,
          bytes::complete::tag,
          character::complete::digit1,
          combinator::{map, opt},
          sequence::preceded};

use super::{constants::{CLOSE_PAREN, COMMA, CPU_EXECUTE, FAN_START, KW_CYCLES, KW_SPEED,
                        OPEN_PAREN, RAM_STORE, SCREEN_DISPLAY, STORAGE_WRITE},
            hex_literal, keyword_arg, punct, quoted_text, ws, StrError};

/// Captures of `ram.store("<text>"[, 0x<hex>])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RamStoreArgs<'a> {
    pub text: &'a str,
    /// Hex digits without the `0x` prefix, exactly as typed.
    pub address_digits: Option<&'a str>,
}

/// Captures of `cpu.execute("<op>", cycles=<int>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuExecuteArgs<'a> {
    pub op: &'a str,
    pub cycles_digits: &'a str,
}

/// Captures of `storage.write("<name>", <int>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageWriteArgs<'a> {
    pub name: &'a str,
    pub size_digits: &'a str,
}

/// Try `parser` at every position where `call_name` occurs in `input`, and return the
/// output of the first attempt that succeeds.
pub fn scan_for_call<'a, O, P>(input: &'a str, call_name: &str, mut parser: P) -> Option<O>
where
    P: Parser<&'a str, Output = O, Error = StrError<'a>>,
{
    input.match_indices(call_name).find_map(|(index, _)| {
        parser
            .parse(&input[index..])
            .ok()
            .map(|(_remainder, output)| output)
    })
}

/// - Parse input: `fan.start(speed=3000)`. Output: `3000`.
pub fn parse_fan_start(input: &str) -> IResult<&str, &str> {
    map(
        (
            tag(FAN_START),
            punct(OPEN_PAREN),
            keyword_arg(KW_SPEED),
            punct(CLOSE_PAREN),
        ),
        |(_, _, speed, _)| speed,
    )
    .parse(input)
}

/// - Parse input: `ram.store("DATA", 0xA1)` or `ram.store("DATA")`.
pub fn parse_ram_store(input: &str) -> IResult<&str, RamStoreArgs<'_>> {
    map(
        (
            tag(RAM_STORE),
            punct(OPEN_PAREN),
            quoted_text,
            opt(preceded(punct(COMMA), hex_literal)),
            punct(CLOSE_PAREN),
        ),
        |(_, _, text, address_digits, _)| RamStoreArgs {
            text,
            address_digits,
        },
    )
    .parse(input)
}

/// - Parse input: `cpu.execute("MUL", cycles=3)`.
pub fn parse_cpu_execute(input: &str) -> IResult<&str, CpuExecuteArgs<'_>> {
    map(
        (
            tag(CPU_EXECUTE),
            punct(OPEN_PAREN),
            quoted_text,
            punct(COMMA),
            keyword_arg(KW_CYCLES),
            punct(CLOSE_PAREN),
        ),
        |(_, _, op, _, cycles_digits, _)| CpuExecuteArgs { op, cycles_digits },
    )
    .parse(input)
}

/// - Parse input: `storage.write("tex.png", 16777216)`.
pub fn parse_storage_write(input: &str) -> IResult<&str, StorageWriteArgs<'_>> {
    map(
        (
            tag(STORAGE_WRITE),
            punct(OPEN_PAREN),
            quoted_text,
            punct(COMMA),
            ws(digit1),
            punct(CLOSE_PAREN),
        ),
        |(_, _, name, _, size_digits, _)| StorageWriteArgs { name, size_digits },
    )
    .parse(input)
}

/// - Parse input: `screen.display("Hardware Mastered!")`. Output: `Hardware Mastered!`.
pub fn parse_screen_display(input: &str) -> IResult<&str, &str> {
    map(
        (
            tag(SCREEN_DISPLAY),
            punct(OPEN_PAREN),
            quoted_text,
            punct(CLOSE_PAREN),
        ),
        |(_, _, text, _)| text,
    )
    .parse(input)
}
