//! # Mergestore
//!
//! A minimal, synchronous, in-memory state container for Rust.
//!
//! A [`Store`] owns one current state value, accepts partial updates
//! through a pluggable merge strategy, and notifies listeners exactly when
//! the value actually changes:
//!
//! - [`Store<S, U>`] - the container: read the state, apply updates,
//!   subscribe and unsubscribe listeners, swap the merge strategy.
//! - [`MergeFn`] / [`Merged`] - the strategy contract: a pure function from
//!   `(current, update)` to either a new state or a no-op report.
//! - [`ShallowMerge`] / [`shallow_merge`] - the default strategy: per-key
//!   comparison with copy-and-overlay on difference.
//! - [`Shared<T>`] - identity-compared shared values, for nested state that
//!   should be compared by reference rather than by contents.
//!
//! Everything is synchronous and runs on the caller's thread; there are no
//! background tasks and no suspension points. Unchanged state is
//! referentially stable: a no-op update leaves the exact same allocation in
//! place, so consumers can compare `Arc` handles to skip work.
//!
//! ```
//! use std::collections::HashMap;
//! use mergestore::Store;
//!
//! let store: Store<HashMap<&str, i64>> = Store::new(HashMap::from([("count", 0)]));
//! store.subscribe(|next, prev| {
//!     println!("count: {} -> {}", prev["count"], next["count"]);
//! });
//!
//! store.set_state(HashMap::from([("count", 1)]));
//! assert_eq!(store.get_state()["count"], 1);
//!
//! // Equal values are a no-op: no notification, same allocation.
//! store.set_state(HashMap::from([("count", 1)]));
//! ```

pub mod merge;
pub mod store;

// Re-export main types for convenience
pub use merge::{shallow_merge, MergeFn, Merged, ShallowMerge, Shared};
pub use store::{Store, StoreBuilder, Subscription};
