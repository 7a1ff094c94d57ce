//! Focus paths

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One field accessor: a field name, with an index when the field is a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub field: Cow<'static, str>,
    pub index: Option<usize>,
}

impl PathSegment {
    pub fn field(name: &'static str) -> Self {
        PathSegment {
            field: Cow::Borrowed(name),
            index: None,
        }
    }

    pub fn indexed(name: &'static str, index: usize) -> Self {
        PathSegment {
            field: Cow::Borrowed(name),
            index: Some(index),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.field, index),
            None => f.write_str(&self.field),
        }
    }
}

/// Ordered field accessors from the root to a node. Empty means the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FocusPath {
    segments: Vec<PathSegment>,
}

impl FocusPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        FocusPath { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: PathSegment) -> FocusPath {
        let mut segments = self.segments.clone();
        segments.push(segment);
        FocusPath { segments }
    }

    /// A new path without its last segment. The root is its own parent.
    pub fn parent(&self) -> FocusPath {
        let mut segments = self.segments.clone();
        segments.pop();
        FocusPath { segments }
    }

    /// A new path keeping only the first `len` segments, with the last one re-indexed.
    pub(crate) fn reindexed(&self, len: usize, index: usize) -> FocusPath {
        let mut segments = self.segments[..len].to_vec();
        if let Some(last) = segments.last_mut() {
            last.index = Some(index);
        }
        FocusPath { segments }
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FocusPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl Serialize for FocusPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePathError {
    #[error("empty field name in path segment {0:?}")]
    EmptyField(String),
    #[error("invalid index in path segment {0:?}")]
    BadIndex(String),
}

impl FromStr for FocusPath {
    type Err = ParsePathError;

    /// Parses `body[0].expression.left`. The empty string and `<root>` are the root path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "<root>" {
            return Ok(FocusPath::root());
        }
        let segments = s
            .split('.')
            .map(parse_segment)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FocusPath { segments })
    }
}

fn parse_segment(raw: &str) -> Result<PathSegment, ParsePathError> {
    let (name, index) = match raw.split_once('[') {
        Some((name, rest)) => {
            let digits = rest
                .strip_suffix(']')
                .ok_or_else(|| ParsePathError::BadIndex(raw.to_string()))?;
            let index = digits
                .parse::<usize>()
                .map_err(|_| ParsePathError::BadIndex(raw.to_string()))?;
            (name, Some(index))
        }
        None => (raw, None),
    };
    if name.is_empty() {
        return Err(ParsePathError::EmptyField(raw.to_string()));
    }
    Ok(PathSegment {
        field: Cow::Owned(name.to_string()),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        raw,
        case("body[0]"),
        case("body[0].expression"),
        case("body[12].declarations[0].init.arguments[3]"),
        case("program.body[1]")
    )]
    fn test_parse_display_round_trip(raw: &str) {
        let path: FocusPath = raw.parse().unwrap();
        assert_eq!(path.to_string(), raw);
    }

    #[test]
    fn test_root_spellings() {
        assert_eq!("".parse::<FocusPath>().unwrap(), FocusPath::root());
        assert_eq!("<root>".parse::<FocusPath>().unwrap(), FocusPath::root());
        assert_eq!(FocusPath::root().to_string(), "<root>");
    }

    #[rstest(raw, case("body[x]"), case("body[1"), case("[0]"), case("body..left"))]
    fn test_parse_errors(raw: &str) {
        assert!(raw.parse::<FocusPath>().is_err());
    }

    #[test]
    fn test_parsed_segments_equal_static_ones() {
        let parsed: FocusPath = "body[1].expression".parse().unwrap();
        let built = FocusPath::root()
            .child(PathSegment::indexed("body", 1))
            .child(PathSegment::field("expression"));
        assert_eq!(parsed, built);
        assert_eq!(built.parent().parent(), FocusPath::root());
        assert_eq!(FocusPath::root().parent(), FocusPath::root());
    }
}
