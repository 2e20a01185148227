use smallvec::SmallVec;
use std::fmt;

use super::{PatternResult, parse_pattern};

pub type PatternSegments = SmallVec<[Segment; 6]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Literal(String),
    Dynamic { name: String, optional: bool },
}

impl Segment {
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Segment::Dynamic { .. })
    }

    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Dynamic { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(text) => f.write_str(text),
            Segment::Dynamic {
                name,
                optional: false,
            } => write!(f, ":{name}"),
            Segment::Dynamic {
                name,
                optional: true,
            } => write!(f, ":{name}?"),
        }
    }
}

/// A parsed route pattern such as `/users/:id/posts/:page?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: Box<str>,
    segments: PatternSegments,
}

impl Pattern {
    pub fn parse(raw: &str) -> PatternResult<Self> {
        let segments = parse_pattern(raw)?;
        Ok(Self {
            raw: raw.into(),
            segments,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_static(&self) -> bool {
        !self.segments.iter().any(Segment::is_dynamic)
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
