//! Pattern flags.
//!
//! The vocabulary is fixed and has a canonical display order, `gimsuy`:
//!
//! | Letter | Flag                  | Effect                                         |
//! |--------|-----------------------|------------------------------------------------|
//! | `g`    | [`Flags::GLOBAL`]      | enumerate every match instead of the first one |
//! | `i`    | [`Flags::IGNORE_CASE`] | case-insensitive matching                      |
//! | `m`    | [`Flags::MULTILINE`]   | `^`/`$` match at line boundaries               |
//! | `s`    | [`Flags::DOT_ALL`]     | `.` also matches `\n`                          |
//! | `u`    | [`Flags::UNICODE`]     | Unicode-aware matching                         |
//! | `y`    | [`Flags::STICKY`]      | matches must start exactly at the scan cursor  |
//!
//! Order in an input string does not matter; `Display` always writes the
//! canonical order.

use crate::error::CompileError;
use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// Set of mode switches attached to a pattern.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u8 {
        const GLOBAL      = 1 << 0;
        const IGNORE_CASE = 1 << 1;
        const MULTILINE   = 1 << 2;
        const DOT_ALL     = 1 << 3;
        const UNICODE     = 1 << 4;
        const STICKY      = 1 << 5;
    }
}

/// One entry of the flag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagInfo {
    pub letter: char,
    pub flag: Flags,
    pub label: &'static str,
}

/// The flag vocabulary in canonical display order.
pub const FLAG_ORDER: [FlagInfo; 6] = [
    FlagInfo { letter: 'g', flag: Flags::GLOBAL, label: "global" },
    FlagInfo { letter: 'i', flag: Flags::IGNORE_CASE, label: "case-insensitive" },
    FlagInfo { letter: 'm', flag: Flags::MULTILINE, label: "multiline" },
    FlagInfo { letter: 's', flag: Flags::DOT_ALL, label: "dot-matches-newline" },
    FlagInfo { letter: 'u', flag: Flags::UNICODE, label: "unicode" },
    FlagInfo { letter: 'y', flag: Flags::STICKY, label: "sticky" },
];

impl Flags {
    /// Look up a single flag by its letter.
    pub fn from_letter(letter: char) -> Option<Flags> {
        FLAG_ORDER.iter().find(|info| info.letter == letter).map(|info| info.flag)
    }

    /// Parse a flag string such as `"gi"`.
    ///
    /// Unknown letters and repeated letters are rejected.
    pub fn parse(input: &str) -> Result<Flags, CompileError> {
        let mut flags = Flags::empty();
        for letter in input.chars() {
            let Some(flag) = Flags::from_letter(letter) else {
                return Err(CompileError::InvalidFlags {
                    flags: input.to_string(),
                    reason: format!("unknown flag '{letter}'"),
                });
            };
            if flags.contains(flag) {
                return Err(CompileError::InvalidFlags {
                    flags: input.to_string(),
                    reason: format!("duplicate flag '{letter}'"),
                });
            }
            flags |= flag;
        }
        Ok(flags)
    }

    /// Flip a single flag.
    pub fn toggled(self, flag: Flags) -> Flags {
        self ^ flag
    }

    /// Vocabulary entries paired with whether they are set.
    pub fn states(self) -> impl Iterator<Item = (FlagInfo, bool)> {
        FLAG_ORDER.into_iter().map(move |info| (info, self.contains(info.flag)))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for info in FLAG_ORDER.iter().filter(|info| self.contains(info.flag)) {
            write!(f, "{}", info.letter)?;
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flags::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_order_insensitive() {
        let a = Flags::parse("gi").unwrap();
        let b = Flags::parse("ig").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Flags::GLOBAL | Flags::IGNORE_CASE);
    }

    #[test]
    fn display_uses_canonical_order() {
        let flags = Flags::parse("yusmig").unwrap();
        assert_eq!(flags.to_string(), "gimsuy");
        assert_eq!(Flags::empty().to_string(), "");
    }

    #[test]
    fn rejects_unknown_and_duplicate_flags() {
        let Err(CompileError::InvalidFlags { reason, .. }) = Flags::parse("gx") else {
            panic!("expected invalid flags");
        };
        assert_eq!(reason, "unknown flag 'x'");

        let err = "gg".parse::<Flags>().unwrap_err();
        assert_eq!(err.message(), "invalid flags 'gg': duplicate flag 'g'");
    }

    #[test]
    fn toggled_flips_one_flag() {
        let flags = Flags::GLOBAL.toggled(Flags::STICKY);
        assert_eq!(flags.to_string(), "gy");
        assert_eq!(flags.toggled(Flags::GLOBAL).to_string(), "y");
    }

    #[test]
    fn states_follow_vocabulary_order() {
        let letters: Vec<(char, bool)> =
            Flags::MULTILINE.states().map(|(info, on)| (info.letter, on)).collect();
        assert_eq!(
            letters,
            vec![('g', false), ('i', false), ('m', true), ('s', false), ('u', false), ('y', false)]
        );
    }
}
