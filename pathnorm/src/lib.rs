//! Lexical path normalization over raw bytes.
//!
//! [`normalize`] turns a POSIX- or Windows-style path (either separator, in
//! any mix) into a [`NormalizedPath`]: `.` removed, `..` collapsed against the
//! preceding segment, an explicit absolute flag and, on the Windows flavor, a
//! lower-cased drive letter. Nothing here touches the filesystem.

pub mod error;
pub mod path;

pub use error::PathError;
pub use path::normalized::NormalizedPath;
pub use path::normalizer::{normalize, normalize_with, Normalizer};
pub use path::prefix::{Flavor, Prefix, PrefixStrategy};
pub use path::record::PathRecord;
pub use path::segment::Segment;
