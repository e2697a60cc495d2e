use super::is_separator;
use super::normalized::NormalizedPath;
use super::prefix::{Flavor, PrefixStrategy};
use super::segment::Segment;

/// Lexical normalizer. Stateless: one instance can serve any number of
/// threads and calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer<S = Flavor> {
    strategy: S,
}

impl Normalizer<Flavor> {
    pub fn new(flavor: Flavor) -> Self {
        Self { strategy: flavor }
    }

    pub fn native() -> Self {
        Self::new(Flavor::native())
    }

    pub fn flavor(&self) -> Flavor {
        self.strategy
    }
}

impl<S: PrefixStrategy> Normalizer<S> {
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// Normalize `raw`. Total: every byte sequence, including the empty
    /// one, has a defined result.
    ///
    /// Tokens are borrowed slices of `raw`; only segments that survive
    /// resolution are copied into the result.
    pub fn normalize(&self, raw: impl AsRef<[u8]>) -> NormalizedPath {
        let raw = raw.as_ref();

        let prefix = self.strategy.detect(raw);
        let start = prefix.map(|p| p.width()).unwrap_or(0).min(raw.len());
        let absolute = prefix.is_some();

        // A surviving segment takes at least one byte plus a separator.
        let mut out: Vec<Segment> = Vec::with_capacity(raw.len() / 2 + 1);

        for token in raw[start..].split(|b| is_separator(*b)) {
            match token {
                b"" | b"." => {}
                b".." => match out.last() {
                    Some(last) if !last.is_parent_ref() => {
                        out.pop();
                    }
                    Some(_) => out.push(Segment::parent()),
                    None if absolute => {
                        tracing::trace!("dropping `..` above root");
                    }
                    None => out.push(Segment::parent()),
                },
                _ => out.push(Segment::normal(token)),
            }
        }

        let dot_lead = prefix.is_none() && self.reads_back_as_prefix(&out);
        NormalizedPath::new(prefix, out, dot_lead)
    }

    /// Whether the serialized form of a relative result would be detected as
    /// a prefix when normalized again (on Windows: `./c:/x` -> `c:/x`).
    fn reads_back_as_prefix(&self, segments: &[Segment]) -> bool {
        let Some(first) = segments.first() else {
            return false;
        };
        // Only the first three serialized bytes matter to a strategy.
        let bytes = first.as_bytes();
        let mut head = [0u8; 3];
        let mut n = bytes.len().min(head.len());
        head[..n].copy_from_slice(&bytes[..n]);
        if n < head.len() && segments.len() > 1 {
            head[n] = b'/';
            n += 1;
        }
        self.strategy.detect(&head[..n]).is_some()
    }
}

/// Normalize with the flavor of the compilation target.
pub fn normalize(raw: impl AsRef<[u8]>) -> NormalizedPath {
    Normalizer::native().normalize(raw)
}

pub fn normalize_with(flavor: Flavor, raw: impl AsRef<[u8]>) -> NormalizedPath {
    Normalizer::new(flavor).normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Prefix;

    fn posix(raw: &str) -> NormalizedPath {
        normalize_with(Flavor::Posix, raw)
    }

    fn windows(raw: &str) -> NormalizedPath {
        normalize_with(Flavor::Windows, raw)
    }

    #[test]
    fn collapses_dot_and_dotdot() {
        let p = posix("a/b/../c");
        assert!(!p.is_absolute());
        assert_eq!(p.volume(), None);
        assert_eq!(p.to_string(), "a/c");

        assert_eq!(posix("./a/./b/").to_string(), "a/b");
    }

    #[test]
    fn absolute_cannot_climb_above_root() {
        let p = posix("/a/b/../../..");
        assert!(p.is_absolute());
        assert_eq!(p.prefix(), Some(Prefix::Root));
        assert!(p.segments().is_empty());
        assert_eq!(p.to_string(), "/");

        assert_eq!(posix("/../../x").to_string(), "/x");
    }

    #[test]
    fn relative_keeps_unresolvable_parents() {
        assert_eq!(posix("a/../../b").to_string(), "../b");
        assert_eq!(posix("../../x").to_string(), "../../x");
        assert_eq!(posix("..").to_string(), "..");

        let p = posix("../a/..");
        assert_eq!(p.to_string(), "..");
        assert!(p.segments()[0].is_parent_ref());
    }

    #[test]
    fn parent_never_cancels_parent() {
        let p = posix("../../x/..");
        assert_eq!(p.to_string(), "../..");
        assert_eq!(p.parent_refs(), 2);
    }

    #[test]
    fn empty_input_is_empty_relative() {
        let p = posix("");
        assert!(!p.is_absolute());
        assert!(p.is_empty());
        assert_eq!(p.to_bytes(), b"");

        assert!(windows("").is_empty());
    }

    #[test]
    fn repeated_separators_produce_no_empty_segments() {
        let p = posix("//a\\\\b///");
        assert!(p.is_absolute());
        assert_eq!(p.segments().len(), 2);
        assert_eq!(p.to_string(), "/a/b");
    }

    #[test]
    fn mixed_separators_are_interchangeable() {
        assert_eq!(posix("a\\b/c"), posix("a/b/c"));
        assert_eq!(windows("C:/x\\y"), windows("c:\\x/y"));
    }

    #[test]
    fn windows_volume() {
        let p = windows("C:\\a\\..\\b");
        assert!(p.is_absolute());
        assert_eq!(p.volume(), Some(b'c'));
        assert_eq!(p.to_string(), "c:/b");

        let p = windows("C:/");
        assert_eq!(p.volume(), Some(b'c'));
        assert!(p.segments().is_empty());
        assert_eq!(p.to_string(), "c:/");

        assert_eq!(windows("D:\\..\\..").to_string(), "d:/");
    }

    #[test]
    fn windows_without_volume_is_relative() {
        let p = windows("/etc/passwd");
        assert!(!p.is_absolute());
        assert_eq!(p.to_string(), "etc/passwd");

        let p = windows("c:");
        assert!(!p.is_absolute());
        assert_eq!(p.to_string(), "c:");
    }

    #[test]
    fn relative_drive_like_segment_is_escaped() {
        let p = windows("./C:/a");
        assert!(!p.is_absolute());
        assert_eq!(p.to_string(), "./C:/a");
        assert_eq!(windows(&p.to_string()), p);

        assert_eq!(windows("x/../c:\\y").to_string(), "./c:/y");
        assert_eq!(windows("./C:").to_string(), "C:");
        assert_eq!(posix("./C:/a").to_string(), "C:/a");
    }

    #[test]
    fn drive_like_head_needs_the_separator() {
        assert_eq!(windows("./c:x/y").to_string(), "c:x/y");
        assert_eq!(windows("./c:\\x").to_string(), "./c:/x");
        assert_eq!(windows("./ab/c:").to_string(), "ab/c:");
        assert_eq!(windows("./C:").to_string(), "C:");
    }

    #[test]
    fn dots_inside_names_are_ordinary() {
        assert_eq!(posix("a/.../b/.c/..d").to_string(), "a/.../b/.c/..d");
    }

    #[test]
    fn no_nul_terminator_assumed() {
        let p = normalize_with(Flavor::Posix, b"a\0b/c");
        assert_eq!(p.to_bytes(), b"a\0b/c");
    }

    #[test]
    fn long_input_stays_off_the_stack() {
        let raw = "a/".repeat(200_000);
        let p = posix(&raw);
        assert_eq!(p.segments().len(), 200_000);

        let raw = "../".repeat(200_000);
        assert_eq!(posix(&raw).parent_refs(), 200_000);
        assert!(posix(&format!("/{raw}")).segments().is_empty());
    }

    #[test]
    fn custom_strategy() {
        struct AlwaysRoot;
        impl PrefixStrategy for AlwaysRoot {
            fn detect(&self, _raw: &[u8]) -> Option<Prefix> {
                Some(Prefix::Root)
            }
        }
        // width 1 on an empty buffer must not panic
        let n = Normalizer::with_strategy(AlwaysRoot);
        assert_eq!(n.normalize("").to_string(), "/");
        assert_eq!(n.normalize("xa/../..").to_string(), "/");
    }
}
