pub mod normalized;
pub mod normalizer;
pub mod prefix;
pub mod record;
pub mod segment;

/// Both separators are accepted on input; output always uses `/`.
#[inline]
pub(crate) fn is_separator(b: u8) -> bool {
    b == b'/' || b == b'\\'
}
