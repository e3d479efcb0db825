// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

pub mod constants {
    pub const POWER_ON: &str = "battery.powerOn";
    pub const FAN_START: &str = "fan.start";
    pub const RAM_STORE: &str = "ram.store";
    pub const CPU_EXECUTE: &str = "cpu.execute";
    pub const STORAGE_WRITE: &str = "storage.write";
    pub const SCREEN_DISPLAY: &str = "screen.display";

    pub const KW_SPEED: &str = "speed";
    pub const KW_CYCLES: &str = "cycles";

    pub const OPEN_PAREN: char = '(';
    pub const CLOSE_PAREN: char = ')';
    pub const EQUALS: char = '=';
    pub const COMMA: char = ',';
    pub const QUOTE: char = '"';
    pub const QUOTE_STR: &str = "\"";
    pub const HEX_PREFIX: &str = "0x";
}
