use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use super::Merged;

/// State types that support the default shallow-merge strategy.
///
/// A shallow merge compares, for every key present in the update, whether
/// the value under that key differs from the current value, by `PartialEq`
/// only; nested contents reached through a key are never inspected. If any
/// key differs the result is a copy of the current state with the update's
/// keys overlaid; values under keys the update does not mention are shared
/// with the previous state, not copied. If no key differs the merge is a
/// no-op and the current state stays in place.
///
/// Implemented for [`HashMap`] and [`BTreeMap`] out of the box; state types
/// with a fixed shape implement it against their own update type.
pub trait ShallowMerge<U = Self>: Sized {
    /// Overlay `update` onto `self`, reporting [`Merged::Unchanged`] when
    /// every key in `update` already holds an equal value.
    fn shallow_merge(&self, update: &U) -> Merged<Self>;
}

/// The default merge strategy as a standalone function.
///
/// Usable on its own or as a building block inside a custom strategy that
/// delegates here and post-processes the outcome.
///
/// ```
/// use std::collections::HashMap;
/// use mergestore::shallow_merge;
///
/// let state = HashMap::from([("count", 0), ("total", 10)]);
/// let update = HashMap::from([("count", 1)]);
///
/// assert!(shallow_merge(&state, &update).has_changed());
/// assert!(!shallow_merge(&state, &HashMap::new()).has_changed());
/// ```
pub fn shallow_merge<S, U>(current: &S, update: &U) -> Merged<S>
where
    S: ShallowMerge<U>,
{
    current.shallow_merge(update)
}

impl<K, V> ShallowMerge for HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    fn shallow_merge(&self, update: &Self) -> Merged<Self> {
        let changed = update.iter().any(|(key, value)| self.get(key) != Some(value));
        if !changed {
            return Merged::Unchanged;
        }
        let mut next = self.clone();
        next.extend(update.iter().map(|(key, value)| (key.clone(), value.clone())));
        Merged::Changed(next)
    }
}

impl<K, V> ShallowMerge for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: PartialEq + Clone,
{
    fn shallow_merge(&self, update: &Self) -> Merged<Self> {
        let changed = update.iter().any(|(key, value)| self.get(key) != Some(value));
        if !changed {
            return Merged::Unchanged;
        }
        let mut next = self.clone();
        next.extend(update.iter().map(|(key, value)| (key.clone(), value.clone())));
        Merged::Changed(next)
    }
}
