// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// A key on the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Space,
}

impl Key {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Key::Char(ch) => ch,
            Key::Space => ' ',
        }
    }
}

/// The keys the presentation layer draws, in QWERTY order.
pub const VIRTUAL_KEYBOARD_KEYS: [Key; 27] = [
    Key::Char('Q'),
    Key::Char('W'),
    Key::Char('E'),
    Key::Char('R'),
    Key::Char('T'),
    Key::Char('Y'),
    Key::Char('U'),
    Key::Char('I'),
    Key::Char('O'),
    Key::Char('P'),
    Key::Char('A'),
    Key::Char('S'),
    Key::Char('D'),
    Key::Char('F'),
    Key::Char('G'),
    Key::Char('H'),
    Key::Char('J'),
    Key::Char('K'),
    Key::Char('L'),
    Key::Char('Z'),
    Key::Char('X'),
    Key::Char('C'),
    Key::Char('V'),
    Key::Char('B'),
    Key::Char('N'),
    Key::Char('M'),
    Key::Space,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityCommit {
    /// Carries the trimmed name that is now committed.
    Committed(String),
    /// The staged name was empty or only whitespace. Nothing changed.
    EmptyName,
    /// A name was already committed for this session. Nothing changed.
    AlreadyCommitted,
}

/// The learner's name. `staged` accumulates keystrokes, `committed` is written at
/// most once per session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    committed: Option<String>,
    staged: String,
}

impl Identity {
    pub fn keystroke(&mut self, key: Key) { self.staged.push(key.as_char()); }

    pub fn backspace(&mut self) { self.staged.pop(); }

    pub fn commit(&mut self, clear_staged: bool) -> IdentityCommit {
        if self.committed.is_some() {
            return IdentityCommit::AlreadyCommitted;
        }

        let name = self.staged.trim();
        if name.is_empty() {
            return IdentityCommit::EmptyName;
        }

        let name = name.to_string();
        self.committed = Some(name.clone());
        if clear_staged {
            self.staged.clear();
        }
        IdentityCommit::Committed(name)
    }

    #[must_use]
    pub fn committed_name(&self) -> Option<&str> { self.committed.as_deref() }

    #[must_use]
    pub fn staged_name(&self) -> &str { &self.staged }

    #[must_use]
    pub fn is_committed(&self) -> bool { self.committed.is_some() }
}
