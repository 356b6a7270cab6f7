//! Walks the ordered segment sequence and yields everything an edit range
//! touches, tagged with its classification.

use std::fmt;

use crate::classifier::{classify, Tag};
use crate::errors::IvSetError;
use crate::segment::Segment;

/// Scans `segments` (assumed sorted ascending by `start`, per I2/I3) for
/// every entry that intersects `[a, b]`, in ascending-start order.
///
/// `covered_start`/`covered_end` are the container's aggregate bounds,
/// used for a fast-rejection check before the linear scan; `None` means
/// the container is empty, in which case the scan is trivially empty.
///
/// Read-only: allocates a fresh `Vec` on every call rather than caching
/// or mutating any state.
pub fn scan<'a, K: Ord + Clone + fmt::Debug>(
    segments: &'a [Segment<K>],
    a: &K,
    b: &K,
    covered_start: Option<&K>,
    covered_end: Option<&K>,
) -> Result<Vec<(&'a Segment<K>, Tag)>, IvSetError> {
    let (Some(lo), Some(hi)) = (covered_start, covered_end) else {
        return Ok(Vec::new());
    };
    if *b < *lo || *a > *hi {
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for seg in segments {
        if seg.end < *a {
            continue;
        }
        if seg.start > *b {
            break;
        }
        let tag = classify(a, b, seg)?;
        if tag != Tag::Out {
            out.push((seg, tag));
        }
    }
    Ok(out)
}
