// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The command grammars. Each task has exactly one [`GrammarSpec`], and [`validate()`]
//! turns raw learner input into either a typed [`ParamSet`] or a [`Rejection`].
//!
//! This is not a general purpose parser. Every grammar is a literal call shape with a
//! handful of captures, e.g. `fan.start(speed=<int>)`. Whitespace around `(`, `)`, `=`
//! and `,` is insignificant, string literals are double quoted with no escapes, and the
//! call may appear anywhere in the input (`>>> fan.start(speed=3000)` still matches).

// Attach sources.
pub mod grammar_constants;
pub mod grammar_spec;
pub mod grammar_types;
pub mod parse_commands;
pub mod parser_atomics;
pub mod validate;

// Re-export.
pub use grammar_constants::*;
pub use grammar_spec::*;
pub use grammar_types::*;
pub use parse_commands::*;
pub use parser_atomics::*;
pub use validate::*;
