//! The geometric classification state machine: given an edit range and an
//! existing segment, decide which of seven ways they relate.

use std::fmt;

use crate::errors::IvSetError;
use crate::segment::Segment;

/// How an edit range `(a, b)` relates to an existing segment `(â, b̂)`.
///
/// The seven cases are exhaustive for any pair that actually intersects
/// (endpoint-inclusive); [`classify`] treats reaching none of them on an
/// intersecting pair as a bug, not a recoverable input error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Disjoint: `a > b̂` or `b < â`.
    Out,
    /// The existing segment is fully covered by the edit: `a <= â && b >= b̂`.
    Overlap,
    /// The edit touches only the existing segment's right endpoint:
    /// `a > â && a == b̂`.
    StartIncluded,
    /// The edit starts inside the existing segment and extends past its
    /// right endpoint: `a > â && a < b̂ && b > b̂`.
    Start,
    /// The edit touches only the existing segment's left endpoint:
    /// `a < â && b == â`.
    EndIncluded,
    /// The edit ends inside the existing segment, starting before its
    /// left endpoint: `a < â && b > â && b < b̂`.
    End,
    /// The edit lies strictly inside the existing segment:
    /// `a > â && b < b̂`.
    Full,
}

/// Classifies edit range `(a, b)` against `existing`.
pub fn classify<K: Ord + Clone + fmt::Debug>(
    a: &K,
    b: &K,
    existing: &Segment<K>,
) -> Result<Tag, IvSetError> {
    let start = &existing.start;
    let end = &existing.end;

    if *a > *end || *b < *start {
        return Ok(Tag::Out);
    }
    if *a <= *start && *b >= *end {
        return Ok(Tag::Overlap);
    }
    if *a > *start && *a == *end {
        return Ok(Tag::StartIncluded);
    }
    if *a > *start && *a < *end && *b > *end {
        return Ok(Tag::Start);
    }
    if *a < *start && *b == *start {
        return Ok(Tag::EndIncluded);
    }
    if *a < *start && *b > *start && *b < *end {
        return Ok(Tag::End);
    }
    if *a > *start && *b < *end {
        return Ok(Tag::Full);
    }

    Err(IvSetError::InternalInvariantViolation(format!(
        "classifier fallthrough: edit=({a:?}, {b:?}) existing=({start:?}, {end:?})"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn seg(start: i32, end: i32) -> Segment<i32> {
        Segment::new(start, end).unwrap()
    }

    #[rstest]
    #[case(0, 1, 5, 10, Tag::Out)] // b < start
    #[case(11, 20, 5, 10, Tag::Out)] // a > end
    #[case(5, 10, 5, 10, Tag::Overlap)] // exact match
    #[case(4, 11, 5, 10, Tag::Overlap)] // strictly wider
    #[case(4, 10, 5, 10, Tag::Overlap)] // a <= start, b == end
    #[case(7, 10, 5, 10, Tag::StartIncluded)] // a > start, a == end
    #[case(7, 15, 5, 10, Tag::Start)] // a inside, b past end
    fn classify_matches_table_partial(
        #[case] a: i32,
        #[case] b: i32,
        #[case] start: i32,
        #[case] end: i32,
        #[case] expected: Tag,
    ) {
        let existing = seg(start, end);
        assert_eq!(classify(&a, &b, &existing).unwrap(), expected);
    }

    #[rstest]
    fn classify_end_included() {
        // edit (0, 5) against existing (5, 10): a < start, b == start
        let existing = seg(5, 10);
        assert_eq!(classify(&0, &5, &existing).unwrap(), Tag::EndIncluded);
    }

    #[rstest]
    fn classify_end() {
        // edit (0, 7) against existing (5, 10): a < start, start < b < end
        let existing = seg(5, 10);
        assert_eq!(classify(&0, &7, &existing).unwrap(), Tag::End);
    }

    #[rstest]
    fn classify_full() {
        // edit (6, 9) strictly inside existing (5, 10)
        let existing = seg(5, 10);
        assert_eq!(classify(&6, &9, &existing).unwrap(), Tag::Full);
    }

    #[rstest]
    fn classify_start_included() {
        // edit (10, 15) against existing (5, 10): a > start, a == end
        let existing = seg(5, 10);
        assert_eq!(classify(&10, &15, &existing).unwrap(), Tag::StartIncluded);
    }
}
