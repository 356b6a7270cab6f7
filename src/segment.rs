use std::cmp::Ordering;
use std::fmt;

use crate::errors::IvSetError;

/// An immutable closed interval `[start, end]` over an ordered key type.
///
/// Two segments are equal iff both endpoints are equal; ordering (and
/// therefore storage order inside [`crate::interval_set::IntervalSet`]) is
/// by `start` first, `end` second — mirroring `gtars_core`'s `Interval<I,
/// T>` ordering.
#[derive(Debug, Clone, Eq, Hash)]
pub struct Segment<K> {
    pub start: K,
    pub end: K,
}

impl<K: Ord> Segment<K> {
    /// Builds a segment, failing if `start > end`.
    pub fn new(start: K, end: K) -> Result<Self, IvSetError>
    where
        K: fmt::Debug,
    {
        if start > end {
            return Err(IvSetError::InvalidRange {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            });
        }
        Ok(Segment { start, end })
    }
}

impl<K: Ord + Clone> Segment<K> {
    /// `start <= point <= end`.
    pub fn contains_point(&self, point: &K) -> bool {
        &self.start <= point && point <= &self.end
    }

    /// `self.contains_point(other.start) && self.contains_point(other.end)`.
    pub fn contains(&self, other: &Segment<K>) -> bool {
        self.contains_point(&other.start) && self.contains_point(&other.end)
    }

    /// Endpoint-inclusive intersection is non-empty.
    pub fn overlaps(&self, other: &Segment<K>) -> bool {
        self.contains_point(&other.start) || self.contains_point(&other.end) || other.contains(self)
    }
}

impl<K: Ord> Ord for Segment<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl<K: Ord> PartialOrd for Segment<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialEq> PartialEq for Segment<K> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<K: fmt::Display> fmt::Display for Segment<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

impl<K: fmt::Display> Segment<K> {
    /// Renders the segment with a caller-supplied template using the
    /// explicit placeholders `{start}` and `{end}`. A legacy bare `a`/`b`
    /// substitution form is not implemented.
    pub fn format_with(&self, template: &str) -> String {
        template
            .replace("{start}", &self.start.to_string())
            .replace("{end}", &self.end.to_string())
    }
}
