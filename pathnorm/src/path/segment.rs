/// One resolved path component. Owns a copy of its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    bytes: Vec<u8>,
    parent_ref: bool,
}

impl Segment {
    pub(crate) fn normal(bytes: &[u8]) -> Self {
        debug_assert!(!bytes.is_empty() && bytes != b"." && bytes != b"..");
        Self {
            bytes: bytes.to_vec(),
            parent_ref: false,
        }
    }

    /// A `..` that had nothing left to cancel.
    pub(crate) fn parent() -> Self {
        Self {
            bytes: b"..".to_vec(),
            parent_ref: true,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_parent_ref(&self) -> bool {
        self.parent_ref
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Never true for a segment produced by the normalizer.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
