//! Merge strategies for combining state with updates.
//!
//! A merge strategy is a pure function `(current, update) -> Merged`: it
//! either produces the next state or reports that the update was a no-op.
//! The store trusts the outcome it receives and enforces no policy of its
//! own, so a strategy may be stricter or looser than the default: always
//! report a change, compare deeply, or ignore certain fields.

mod merge;
mod shallow;
mod shared;

pub use merge::{MergeFn, Merged};
pub use shallow::{shallow_merge, ShallowMerge};
pub use shared::Shared;
