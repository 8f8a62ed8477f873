//! The fixed flag vocabulary: canonical flags, their opcodes, and long-form
//! aliases.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The behavior a flag selects. Discriminants are the stable opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Help = 0,
    SetFile = 1,
    InputBatch = 2,
    CountLines = 3,
    CountDigits = 4,
    CountNumbers = 5,
    CountChars = 6,
    Anagrams = 7,
    Palindromes = 8,
    SortAsc = 9,
    SortDesc = 10,
    SetOutput = 11,
}

impl Opcode {
    pub fn code(self) -> u8 {
        self as u8
    }
}

const FLAGS: [(&str, Opcode); 12] = [
    ("", Opcode::Help),
    ("-f", Opcode::SetFile),
    ("-i", Opcode::InputBatch),
    ("-n", Opcode::CountLines),
    ("-d", Opcode::CountDigits),
    ("-dd", Opcode::CountNumbers),
    ("-c", Opcode::CountChars),
    ("-a", Opcode::Anagrams),
    ("-p", Opcode::Palindromes),
    ("-s", Opcode::SortAsc),
    ("-rs", Opcode::SortDesc),
    ("-o", Opcode::SetOutput),
];

// `--angrams` and `--palindroms` are spelled the way existing batch files
// spell them.
const ALIASES: [(&str, &str); 12] = [
    ("--help", ""),
    ("--file", "-f"),
    ("--input", "-i"),
    ("--newlines", "-n"),
    ("--digits", "-d"),
    ("--numbers", "-dd"),
    ("--chars", "-c"),
    ("--angrams", "-a"),
    ("--palindroms", "-p"),
    ("--sorted", "-s"),
    ("--reverse-sorted", "-rs"),
    ("--output", "-o"),
];

static STANDARD: LazyLock<FlagRegistry> = LazyLock::new(FlagRegistry::new);

/// Read-only lookup tables from flag tokens to opcodes.
#[derive(Debug, Clone)]
pub struct FlagRegistry {
    opcodes: HashMap<&'static str, Opcode>,
    aliases: HashMap<&'static str, &'static str>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        FlagRegistry {
            opcodes: FLAGS.into_iter().collect(),
            aliases: ALIASES.into_iter().collect(),
        }
    }

    /// The process-wide registry, built on first use.
    pub fn standard() -> &'static FlagRegistry {
        &STANDARD
    }

    /// The canonical flag an alias stands for; other tokens come back as is.
    pub fn canonical<'t>(&self, token: &'t str) -> &'t str {
        match self.aliases.get(token) {
            Some(&canonical) => canonical,
            None => token,
        }
    }

    pub fn opcode(&self, canonical: &str) -> Option<Opcode> {
        self.opcodes.get(canonical).copied()
    }

    /// Alias lookup first, then opcode lookup. `None` for unknown tokens.
    pub fn resolve(&self, token: &str) -> Option<Opcode> {
        self.opcode(self.canonical(token))
    }
}

impl Default for FlagRegistry {
    fn default() -> Self {
        Self::new()
    }
}
