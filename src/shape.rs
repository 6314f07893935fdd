//! The public input/output geometry types (§6): a [`Shape`] is a sequence of
//! [`Subpath`]s, each a sequence of [`Segment`](crate::segment::Segment)s.

use crate::segment::{Line, Segment};

/// A planar region's boundary, as a sequence of contours. Each subpath is
/// independent; overlapping or self-intersecting subpaths (within or across
/// shapes) are resolved by the graph pipeline, not here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub subpaths: Vec<Subpath>,
}

impl Shape {
    pub fn new(subpaths: Vec<Subpath>) -> Self {
        Shape { subpaths }
    }

    pub fn empty() -> Self {
        Shape { subpaths: Vec::new() }
    }
}

/// One contour: an ordered sequence of segments, each starting where the
/// previous one ended, plus a `closed` flag.
///
/// A closed subpath whose last segment's end does not equal its first
/// segment's start implicitly gets a closing [`Line`] appended during
/// ingestion (§4.G.1) — `has_closing_segment`/`closing_segment` expose that
/// without mutating the subpath itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Subpath {
    pub segments: Vec<Segment>,
    pub closed: bool,
}

impl Subpath {
    pub fn new(segments: Vec<Segment>, closed: bool) -> Self {
        Subpath { segments, closed }
    }

    pub fn open(segments: Vec<Segment>) -> Self {
        Subpath { segments, closed: false }
    }

    pub fn closed(segments: Vec<Segment>) -> Self {
        Subpath { segments, closed: true }
    }

    /// True if this subpath is marked closed and its last segment's end
    /// does not already coincide with its first segment's start, i.e. an
    /// implicit closing segment is needed.
    pub fn has_closing_segment(&self) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => self.closed && last.end() != first.start(),
            _ => false,
        }
    }

    /// The implicit closing segment, if [`Self::has_closing_segment`] is
    /// true.
    pub fn closing_segment(&self) -> Option<Segment> {
        if !self.has_closing_segment() {
            return None;
        }
        let first = self.segments.first()?;
        let last = self.segments.last()?;
        Some(Segment::Line(Line::new(last.end(), first.start())))
    }
}
