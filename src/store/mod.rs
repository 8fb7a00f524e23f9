//! The state container.
//!
//! A [`Store`] owns a single current state value, applies updates through a
//! pluggable merge strategy, and notifies registered listeners exactly when
//! the value actually changes.

mod store;

pub use store::{Store, StoreBuilder, Subscription};
