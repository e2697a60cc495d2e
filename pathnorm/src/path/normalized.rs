use std::fmt;
use std::io;

use super::prefix::Prefix;
use super::segment::Segment;
use crate::PathError;

/// Result of [`crate::normalize`].
///
/// Built once per call and immutable afterwards. Two paths that normalize to
/// the same prefix and segment list compare equal regardless of how their
/// raw input was spelled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    prefix: Option<Prefix>,
    segments: Vec<Segment>,
    /// Serialize with a leading `./` so the first segment is not re-read
    /// as a prefix.
    dot_lead: bool,
}

impl NormalizedPath {
    pub(crate) fn new(prefix: Option<Prefix>, segments: Vec<Segment>, dot_lead: bool) -> Self {
        Self {
            prefix,
            segments,
            dot_lead,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.prefix.is_some()
    }

    pub fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    /// Lowercase drive letter, Windows flavor only.
    pub fn volume(&self) -> Option<u8> {
        self.prefix.and_then(|p| p.volume())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Relative with no segments; serializes to the empty string.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_none() && self.segments.is_empty()
    }

    /// Number of retained `..` segments.
    pub fn parent_refs(&self) -> usize {
        self.segments.iter().filter(|s| s.is_parent_ref()).count()
    }

    /// Exact byte length of [`Self::to_bytes`].
    pub fn serialized_len(&self) -> usize {
        let prefix = match self.prefix {
            Some(p) => p.width(),
            None if self.dot_lead => 2,
            None => 0,
        };
        let body: usize = self.segments.iter().map(Segment::len).sum();
        let separators = self.segments.len().saturating_sub(1);
        prefix + body + separators
    }

    /// Flat form: prefix, then segments joined by `/`. No trailing separator.
    ///
    /// A relative path that would otherwise start like a volume (`c:/x`
    /// under the Windows flavor) is written as `./c:/x`; that is the only
    /// place the output differs from plain prefix plus `/`-join.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.serialized_len());
        self.extend_into(&mut out);
        out
    }

    pub(crate) fn extend_into(&self, out: &mut Vec<u8>) {
        match &self.prefix {
            Some(prefix) => prefix.extend_into(out),
            None if self.dot_lead => out.extend_from_slice(b"./"),
            None => {}
        }
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(b'/');
            }
            out.extend_from_slice(seg.as_bytes());
        }
    }

    pub fn write_to<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.to_bytes())
    }

    pub fn to_utf8(&self) -> Result<String, PathError> {
        Ok(String::from_utf8(self.to_bytes())?)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}
