//! `ivset`: an interval set over an ordered domain.
//!
//! Maintains a sorted collection of non-overlapping closed intervals
//! (segments) over any totally-ordered key type, supporting two destructive
//! editing operations — [`IntervalSet::insert`] (union, merging every
//! touched segment into one coalesced result) and [`IntervalSet::remove`]
//! (difference, possibly trimming, splitting, or deleting existing
//! segments) — plus point/segment containment predicates and an optional
//! audit log enumerating every segment-level transition an edit caused.
//!
//! The crate does not implement an interval tree: a simple sorted sequence
//! with a linear scan over the affected window is all the design calls
//! for (no persistence, no concurrent writers, no cross-set queries).
//!
//! # Example
//!
//! ```
//! use ivset::adjust::Identity;
//! use ivset::IntervalSet;
//!
//! let mut set = IntervalSet::with_audit();
//! set.insert(1, 2).unwrap();
//! set.insert(5, 6).unwrap();
//! assert_eq!(set.count(), 2);
//!
//! let log = set.remove(3, 4, &Identity).unwrap();
//! assert_eq!(set.count(), 2); // (1,2) and (5,6) untouched; 3..4 is a gap
//! assert!(log.entries().is_empty());
//! ```

pub mod adjust;
pub mod audit;
pub mod classifier;
pub mod errors;
pub mod interval_set;
pub mod scanner;
pub mod segment;

pub use audit::{AuditEntry, AuditLog};
pub use classifier::Tag;
pub use errors::IvSetError;
pub use interval_set::IntervalSet;
pub use segment::Segment;
