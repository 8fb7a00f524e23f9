use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared value compared by identity rather than by contents.
///
/// `Shared<T>` wraps an [`Arc<T>`] and implements [`PartialEq`] as
/// [`Arc::ptr_eq`]: two handles are equal exactly when they point at the
/// same allocation. Used as a map value under the default shallow merge,
/// this gives nested objects reference semantics: replacing a nested value
/// with an equal-but-distinct one counts as a change, while re-submitting
/// (or mutating through) the same allocation does not. Cloning a `Shared`
/// shares the allocation, so unchanged keys in a merged state alias the
/// previous state's values.
///
/// ```
/// use mergestore::Shared;
///
/// let nested = Shared::new(vec![1, 2]);
/// assert_eq!(nested, nested.clone());
/// assert_ne!(nested, Shared::new(vec![1, 2]));
/// ```
pub struct Shared<T: ?Sized>(Arc<T>);

impl<T> Shared<T> {
    /// Wrap a value in a new shared allocation.
    pub fn new(value: T) -> Self {
        Shared(Arc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    /// Whether two handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Eq for Shared<T> {}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Arc<T>> for Shared<T> {
    fn from(value: Arc<T>) -> Self {
        Shared(value)
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_identity() {
        let a = Shared::new(1);
        let b = Shared::new(1);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn derefs_to_contents() {
        let list = Shared::new(vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
    }
}
