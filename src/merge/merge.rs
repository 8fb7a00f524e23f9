/// Outcome of combining the current state with an update.
///
/// `Unchanged` means the update was a no-op under the active strategy: the
/// store keeps its current state allocation untouched, so consumers holding
/// the previous [`Arc`](std::sync::Arc) observe pointer-identical state and
/// no listeners fire. `Changed` carries the replacement state.
#[derive(Debug)]
pub enum Merged<S> {
    /// The update produced a new state value.
    Changed(S),
    /// The update was a no-op; the current state stays in place.
    Unchanged,
}

impl<S> Merged<S> {
    /// Whether this outcome will replace the state and notify listeners.
    pub fn has_changed(&self) -> bool {
        matches!(self, Merged::Changed(_))
    }
}

/// A merge strategy: a pure function combining the current state with an
/// update into a [`Merged`] outcome.
///
/// Contract:
/// - Must not mutate `current` (enforced by the shared borrow) and must be
///   deterministic with respect to its two inputs; it may not close over
///   other mutable state.
/// - Returning [`Merged::Changed`] means the carried value is a new state,
///   distinct from `current`, with the update applied on top of it.
/// - Returning [`Merged::Unchanged`] means the store keeps the current state
///   allocation as-is, so unchanged state stays referentially stable.
///
/// Blanket-implemented for closures, so any
/// `Fn(&S, &U) -> Merged<S> + Send + Sync` works directly:
///
/// ```
/// use mergestore::{MergeFn, Merged};
///
/// let replace = |_current: &i64, update: &i64| Merged::Changed(*update);
/// assert!(replace.merge(&1, &2).has_changed());
/// ```
pub trait MergeFn<S, U>: Send + Sync {
    /// Combine `current` and `update` into the next state, or report a no-op.
    fn merge(&self, current: &S, update: &U) -> Merged<S>;
}

impl<S, U, F> MergeFn<S, U> for F
where
    F: Fn(&S, &U) -> Merged<S> + Send + Sync,
{
    fn merge(&self, current: &S, update: &U) -> Merged<S> {
        self(current, update)
    }
}
