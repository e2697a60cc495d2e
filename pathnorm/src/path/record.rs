use serde::{Deserialize, Serialize};

use super::normalized::NormalizedPath;
use crate::PathError;

/// Owned, text-only view of a [`NormalizedPath`] for consumers that want
/// plain fields: the absolute flag, the serialized path and the volume
/// letter as a string.
///
/// Storage is released on drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    pub is_abs: bool,
    pub path: String,
    pub volume: Option<String>,
}

impl PathRecord {
    /// Copies the serialized path out of `normalized`.
    ///
    /// Allocation failure and non-UTF-8 content are both returned as errors.
    pub fn try_from_normalized(normalized: &NormalizedPath) -> Result<Self, PathError> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(normalized.serialized_len())?;
        normalized.extend_into(&mut bytes);
        let path = String::from_utf8(bytes)?;

        let volume = match normalized.volume() {
            Some(letter) => {
                let mut v = String::new();
                v.try_reserve_exact(1)?;
                v.push(char::from(letter));
                Some(v)
            }
            None => None,
        };

        Ok(Self {
            is_abs: normalized.is_absolute(),
            path,
            volume,
        })
    }
}

impl TryFrom<&NormalizedPath> for PathRecord {
    type Error = PathError;

    fn try_from(normalized: &NormalizedPath) -> Result<Self, Self::Error> {
        Self::try_from_normalized(normalized)
    }
}
