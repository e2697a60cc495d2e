use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::is_separator;
use crate::PathError;

/// Root or volume marker at offset 0. Its presence makes a path absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `/` (or `\`) on the POSIX flavor.
    Root,
    /// `<letter>:/` on the Windows flavor. Always an ASCII lowercase letter.
    Volume(u8),
}

impl Prefix {
    /// Bytes taken by the prefix, both in the raw input and in the
    /// serialized output.
    pub fn width(&self) -> usize {
        match self {
            Prefix::Root => 1,
            Prefix::Volume(_) => 3,
        }
    }

    pub fn volume(&self) -> Option<u8> {
        match self {
            Prefix::Root => None,
            Prefix::Volume(letter) => Some(*letter),
        }
    }

    pub(crate) fn extend_into(&self, out: &mut Vec<u8>) {
        match self {
            Prefix::Root => out.push(b'/'),
            Prefix::Volume(letter) => out.extend_from_slice(&[*letter, b':', b'/']),
        }
    }
}

/// Decides whether a raw path starts with a prefix.
///
/// Implementations look at no more than the first three bytes and must
/// return a prefix whose [`Prefix::width`] does not exceed `raw.len()`.
pub trait PrefixStrategy {
    fn detect(&self, raw: &[u8]) -> Option<Prefix>;
}

/// Which prefix rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Posix,
    Windows,
}

impl Flavor {
    /// The flavor of the compilation target.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Flavor::Windows
        } else {
            Flavor::Posix
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Posix => "posix",
            Flavor::Windows => "windows",
        }
    }
}

impl Default for Flavor {
    fn default() -> Self {
        Self::native()
    }
}

impl PrefixStrategy for Flavor {
    fn detect(&self, raw: &[u8]) -> Option<Prefix> {
        match self {
            Flavor::Posix => match raw.first() {
                Some(&b) if is_separator(b) => Some(Prefix::Root),
                _ => None,
            },
            // ASCII letters only; `c:` without a separator stays relative.
            Flavor::Windows => match raw {
                [letter, b':', sep, ..] if letter.is_ascii_alphabetic() && is_separator(*sep) => {
                    Some(Prefix::Volume(letter.to_ascii_lowercase()))
                }
                _ => None,
            },
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" => Ok(Flavor::Posix),
            "windows" | "win" => Ok(Flavor::Windows),
            _ => Err(PathError::UnknownFlavor(s.to_string())),
        }
    }
}
