//! The core container: an ordered set of non-overlapping [`Segment`]s with
//! union (`insert`) and difference (`remove`) editing.

use std::fmt;

use crate::adjust::EndpointAdjuster;
use crate::audit::{AuditEntry, AuditLog};
use crate::classifier::Tag;
use crate::errors::IvSetError;
use crate::scanner::scan;
use crate::segment::Segment;

/// A sorted collection of non-overlapping closed intervals over an ordered
/// key type `K`, keyed by `start` (I2). `insert` performs a union with the
/// given range, coalescing every touched segment into at most one result;
/// `remove` performs a difference, trimming, splitting, or deleting
/// existing segments as needed.
///
/// Each mutating call returns the [`AuditLog`] of the segment-level
/// transitions it caused — empty (and allocation-free) unless auditing was
/// turned on for this set via [`IntervalSet::with_audit`] or
/// [`IntervalSet::set_audit_enabled`].
///
/// # Example
///
/// ```
/// use ivset::IntervalSet;
/// use ivset::adjust::Identity;
///
/// let mut set = IntervalSet::new();
/// set.insert(1, 2).unwrap();
/// set.insert(3, 4).unwrap();
/// assert_eq!(set.count(), 2);
/// assert_eq!(set.covered_start(), Some(&1));
/// assert_eq!(set.covered_end(), Some(&4));
///
/// set.remove(1, 4, &Identity).unwrap();
/// assert_eq!(set.count(), 0);
/// ```
#[derive(Debug)]
pub struct IntervalSet<K> {
    segments: Vec<Segment<K>>,
    covered_start: Option<K>,
    covered_end: Option<K>,
    audit_enabled: bool,
}

impl<K> Default for IntervalSet<K> {
    fn default() -> Self {
        IntervalSet {
            segments: Vec::new(),
            covered_start: None,
            covered_end: None,
            audit_enabled: false,
        }
    }
}

impl<K> IntervalSet<K> {
    /// An empty set with auditing off.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty set with auditing on.
    pub fn with_audit() -> Self {
        let mut set = Self::default();
        set.audit_enabled = true;
        set
    }

    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit_enabled = enabled;
    }

    pub fn is_audit_enabled(&self) -> bool {
        self.audit_enabled
    }

    /// Number of stored segments.
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A read-only snapshot in ascending `start` order.
    pub fn segments(&self) -> &[Segment<K>] {
        &self.segments
    }

    pub fn covered_start(&self) -> Option<&K> {
        self.covered_start.as_ref()
    }

    pub fn covered_end(&self) -> Option<&K> {
        self.covered_end.as_ref()
    }

    /// Drops all segments and resets the aggregate bounds. Auditing state
    /// (on/off) is left as-is, but no audit entries are produced — `clear`
    /// is not one of the transition-generating operations.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.covered_start = None;
        self.covered_end = None;
    }
}

impl<K: Ord + Clone + fmt::Debug> IntervalSet<K> {
    fn new_audit(&self) -> AuditLog<K> {
        if self.audit_enabled {
            AuditLog::enabled()
        } else {
            AuditLog::Off
        }
    }

    fn recompute_bounds(&mut self) {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => {
                self.covered_start = Some(first.start.clone());
                self.covered_end = Some(last.end.clone());
            }
            _ => {
                self.covered_start = None;
                self.covered_end = None;
            }
        }
    }

    fn insert_sorted(&mut self, seg: Segment<K>) {
        let pos = self.segments.partition_point(|s| s.start < seg.start);
        self.segments.insert(pos, seg);
    }

    fn remove_by_start(&mut self, start: &K) -> Option<Segment<K>> {
        let pos = self.segments.iter().position(|s| &s.start == start)?;
        Some(self.segments.remove(pos))
    }

    /// `point` lies within the aggregate bounds and some stored segment
    /// contains it (I4 combined with a containment check).
    pub fn is_included(&self, point: &K) -> bool {
        match (&self.covered_start, &self.covered_end) {
            (Some(lo), Some(hi)) if point >= lo && point <= hi => {
                self.segments.iter().any(|s| s.contains_point(point))
            }
            _ => false,
        }
    }

    /// True iff any stored segment satisfies `predicate`, evaluated in an
    /// unspecified order.
    ///
    /// `point` is accepted for API symmetry with [`IntervalSet::is_included`]
    /// but is intentionally unused here — the predicate alone decides
    /// membership. A caller that wants the point taken into account should
    /// close over it in `predicate` itself.
    pub fn is_included_where(&self, _point: &K, predicate: impl Fn(&Segment<K>) -> bool) -> bool {
        self.segments.iter().any(predicate)
    }

    /// Union: the set comes to represent its previous content union the
    /// closed range `[a, b]`. Every segment the scan touches is coalesced
    /// into at most one resulting segment.
    pub fn insert(&mut self, a: K, b: K) -> Result<AuditLog<K>, IvSetError> {
        let affected: Vec<(Segment<K>, Tag)> = scan(
            &self.segments,
            &a,
            &b,
            self.covered_start.as_ref(),
            self.covered_end.as_ref(),
        )?
        .into_iter()
        .map(|(seg, tag)| (seg.clone(), tag))
        .collect();

        let mut audit = self.new_audit();
        let mut new_start = a.clone();
        let mut new_end = b.clone();

        for (seg, tag) in affected {
            match tag {
                Tag::Full => {
                    // The inserted range is already subsumed; no changes.
                    return Ok(audit);
                }
                Tag::Overlap => {
                    self.remove_by_start(&seg.start);
                    audit.record(AuditEntry::deleted(seg));
                }
                Tag::Start | Tag::StartIncluded => {
                    new_start = seg.start.clone();
                    self.remove_by_start(&seg.start);
                    audit.record(AuditEntry::deleted(seg));
                }
                Tag::End | Tag::EndIncluded => {
                    new_end = seg.end.clone();
                    self.remove_by_start(&seg.start);
                    audit.record(AuditEntry::deleted(seg));
                }
                Tag::Out => {
                    return Err(IvSetError::InternalInvariantViolation(
                        "scanner yielded an Out-tagged segment".to_string(),
                    ));
                }
            }
        }

        let merged = Segment {
            start: new_start,
            end: new_end,
        };
        self.insert_sorted(merged.clone());
        audit.record(AuditEntry::created(merged));

        self.recompute_bounds();
        Ok(audit)
    }

    /// Difference: the set comes to represent its previous content minus
    /// the closed range `[a, b]`. Existing segments may be deleted,
    /// trimmed at either end, or split into two.
    ///
    /// `adjuster` is evaluated once per call for each of the two
    /// endpoints (`up = adjuster.adjust_up(&b)`, `down =
    /// adjuster.adjust_down(&a)`); a `None` result falls back to the
    /// unadjusted endpoint.
    pub fn remove(
        &mut self,
        a: K,
        b: K,
        adjuster: &impl EndpointAdjuster<K>,
    ) -> Result<AuditLog<K>, IvSetError> {
        let affected: Vec<(Segment<K>, Tag)> = scan(
            &self.segments,
            &a,
            &b,
            self.covered_start.as_ref(),
            self.covered_end.as_ref(),
        )?
        .into_iter()
        .map(|(seg, tag)| (seg.clone(), tag))
        .collect();

        let mut audit = self.new_audit();
        if affected.is_empty() {
            return Ok(audit);
        }

        let up = adjuster.adjust_up(&b).unwrap_or_else(|| b.clone());
        let down = adjuster.adjust_down(&a).unwrap_or_else(|| a.clone());

        for (seg, tag) in affected {
            match tag {
                Tag::Overlap => {
                    self.remove_by_start(&seg.start);
                    audit.record(AuditEntry::deleted(seg));
                }
                Tag::Start | Tag::StartIncluded => {
                    // Redundant under identity rounding (down <= a <=
                    // seg.end and seg.start <= a already hold), but a
                    // caller-supplied adjuster can inflate `a` past
                    // seg.start; the gate then excludes the trim.
                    if seg.start <= down {
                        let after = Segment {
                            start: seg.start.clone(),
                            end: down.clone(),
                        };
                        if let Some(slot) =
                            self.segments.iter_mut().find(|s| s.start == seg.start)
                        {
                            slot.end = down.clone();
                        }
                        audit.record(AuditEntry::mutated(seg, after));
                    }
                }
                Tag::End | Tag::EndIncluded => {
                    if up <= seg.end {
                        let after = Segment {
                            start: up.clone(),
                            end: seg.end.clone(),
                        };
                        self.remove_by_start(&seg.start);
                        self.insert_sorted(after.clone());
                        audit.record(AuditEntry::mutated(seg, after));
                    }
                }
                Tag::Full => {
                    let split = if seg.end > b && up <= seg.end {
                        let s = Segment {
                            start: up.clone(),
                            end: seg.end.clone(),
                        };
                        audit.record(AuditEntry::created(s.clone()));
                        Some(s)
                    } else {
                        None
                    };
                    if seg.start <= down {
                        let after = Segment {
                            start: seg.start.clone(),
                            end: down.clone(),
                        };
                        if let Some(slot) =
                            self.segments.iter_mut().find(|s| s.start == seg.start)
                        {
                            slot.end = down.clone();
                        }
                        audit.record(AuditEntry::mutated(seg, after));
                    }
                    if let Some(s) = split {
                        self.insert_sorted(s);
                    }
                }
                Tag::Out => {
                    return Err(IvSetError::InternalInvariantViolation(
                        "scanner yielded an Out-tagged segment".to_string(),
                    ));
                }
            }
        }

        self.recompute_bounds();
        Ok(audit)
    }
}

impl<K: Clone> Clone for IntervalSet<K> {
    /// Independent copy with the same segments. Auditing is reset to off
    /// regardless of `self`'s setting.
    fn clone(&self) -> Self {
        IntervalSet {
            segments: self.segments.clone(),
            covered_start: self.covered_start.clone(),
            covered_end: self.covered_end.clone(),
            audit_enabled: false,
        }
    }
}

pub struct Iter<'a, K> {
    inner: std::slice::Iter<'a, Segment<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a Segment<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, K> IntoIterator for &'a IntervalSet<K> {
    type Item = &'a Segment<K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.segments.iter(),
        }
    }
}
