use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::merge::{MergeFn, Merged, ShallowMerge};

type Listener<S> = Arc<dyn Fn(&S, &S) + Send + Sync>;

/// Opaque token identifying a registered listener, returned by
/// [`Store::subscribe`] and consumed by [`Store::unsubscribe`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Subscription(u64);

/// A synchronous state container with pluggable merge strategies.
///
/// A store owns one current state value of type `S`, held behind an `Arc`
/// so reads are no-copy and unchanged state stays pointer-identical across
/// calls. Updates of type `U` (by default `S` itself, carrying only the
/// keys to overlay) are combined with the current state by the active
/// [`MergeFn`]; when and only when the strategy reports a change, the state
/// is replaced and every registered listener runs synchronously, in
/// registration order, before [`set_state`](Store::set_state) returns.
///
/// Cloning a `Store` produces a cheap shared handle to the same container.
///
/// The store is designed for a single logical thread of control. No lock is
/// held while a merge strategy or listener runs, so callbacks may freely
/// call back into the store.
pub struct Store<S, U = S> {
    state: Arc<RwLock<Arc<S>>>,
    merge: Arc<RwLock<Arc<dyn MergeFn<S, U>>>>,
    listeners: Arc<RwLock<Vec<(Subscription, Listener<S>)>>>,
    next_id: Arc<AtomicU64>,
}

impl<S, U> Store<S, U>
where
    S: Send + Sync + 'static,
    U: 'static,
{
    /// Create a store with the given initial state and the default
    /// shallow-merge strategy. No notification fires for the initial value.
    pub fn new(initial: S) -> Self
    where
        S: ShallowMerge<U>,
    {
        Self::builder(initial).build()
    }

    /// Start building a store around the default shallow-merge strategy.
    ///
    /// For state types without a [`ShallowMerge`] impl, use
    /// [`StoreBuilder::with_merge_fn`] instead.
    pub fn builder(initial: S) -> StoreBuilder<S, U>
    where
        S: ShallowMerge<U>,
    {
        StoreBuilder::with_merge_fn(initial, |current: &S, update: &U| {
            current.shallow_merge(update)
        })
    }

    /// Get the current state. No copy of `S` is made; two calls with no
    /// intervening state-changing update return pointer-identical `Arc`s
    /// (observable via [`Arc::ptr_eq`]), so consumers can compare handles
    /// to skip work.
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&self.state.read().unwrap())
    }

    /// Borrow the current state without cloning the handle.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Apply an update through the active merge strategy.
    ///
    /// The strategy sees the pre-call state and the update. If it reports
    /// [`Merged::Changed`], the new state is committed and every listener
    /// registered at that moment runs as `listener(&next, &prev)`, in
    /// registration order, all before this call returns. If it reports
    /// [`Merged::Unchanged`], the state keeps its current allocation and no
    /// listener runs.
    ///
    /// A panicking strategy propagates to the caller and commits nothing;
    /// the state remains what it was before the call. A panicking listener
    /// also propagates, skipping listeners later in the pass; the state
    /// change itself is already committed at that point.
    ///
    /// Listeners may call back into the store, including re-entrantly
    /// calling `set_state`; nothing guards against unbounded recursion.
    /// Listener-set changes made during a pass take effect from the next
    /// pass onward.
    pub fn set_state(&self, update: U) {
        let prev = self.get_state();
        let merge = Arc::clone(&self.merge.read().unwrap());
        match merge.merge(&prev, &update) {
            Merged::Unchanged => {}
            Merged::Changed(next) => {
                let next = Arc::new(next);
                *self.state.write().unwrap() = Arc::clone(&next);
                self.notify(&next, &prev);
            }
        }
    }

    /// Register a listener, appended to the end of the notification order.
    ///
    /// The listener is invoked as `listener(next, prev)` after every
    /// state-changing update until unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        let id = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().unwrap().push((id, Arc::new(listener)));
        id
    }

    /// Remove a previously registered listener. Unsubscribing a token that
    /// is unknown or already removed is a no-op.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut listeners = self.listeners.write().unwrap();
        if let Some(index) = listeners.iter().position(|(id, _)| *id == subscription) {
            listeners.remove(index);
        }
    }

    /// Swap the merge strategy. Affects subsequent
    /// [`set_state`](Store::set_state) calls only; the current state is not
    /// re-evaluated and no notification fires.
    pub fn set_merge_fn<M>(&self, merge: M)
    where
        M: MergeFn<S, U> + 'static,
    {
        *self.merge.write().unwrap() = Arc::new(merge);
    }

    /// Get a handle to the active merge strategy.
    pub fn merge_fn(&self) -> Arc<dyn MergeFn<S, U>> {
        Arc::clone(&self.merge.read().unwrap())
    }

    /// Notify listeners of a committed change.
    fn notify(&self, next: &S, prev: &S) {
        // Snapshot the list so listeners can subscribe or unsubscribe
        // mid-pass; such changes apply from the next pass onward.
        let snapshot: Vec<Listener<S>> = self
            .listeners
            .read()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(next, prev);
        }
    }
}

impl<S, U> Clone for Store<S, U> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            merge: Arc::clone(&self.merge),
            listeners: Arc::clone(&self.listeners),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

/// Builder for [`Store`], replacing optional constructor parameters with
/// named steps: the merge strategy defaults to shallow merge (via
/// [`Store::builder`]) and the listener set defaults to empty.
pub struct StoreBuilder<S, U = S> {
    initial: S,
    merge: Arc<dyn MergeFn<S, U>>,
    listeners: Vec<Listener<S>>,
}

impl<S, U> StoreBuilder<S, U>
where
    S: Send + Sync + 'static,
    U: 'static,
{
    /// Start building a store with an explicit merge strategy.
    pub fn with_merge_fn<M>(initial: S, merge: M) -> Self
    where
        M: MergeFn<S, U> + 'static,
    {
        Self {
            initial,
            merge: Arc::new(merge),
            listeners: Vec::new(),
        }
    }

    /// Replace the merge strategy.
    pub fn merge_fn<M>(mut self, merge: M) -> Self
    where
        M: MergeFn<S, U> + 'static,
    {
        self.merge = Arc::new(merge);
        self
    }

    /// Seed the listener set. May be called repeatedly; listeners are
    /// notified in the order they were added.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: Fn(&S, &S) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
        self
    }

    /// Build the store. No notification fires for the initial state.
    pub fn build(self) -> Store<S, U> {
        let next_id = AtomicU64::new(0);
        let listeners = self
            .listeners
            .into_iter()
            .map(|listener| {
                let id = Subscription(next_id.fetch_add(1, Ordering::Relaxed));
                (id, listener)
            })
            .collect();
        Store {
            state: Arc::new(RwLock::new(Arc::new(self.initial))),
            merge: Arc::new(RwLock::new(self.merge)),
            listeners: Arc::new(RwLock::new(listeners)),
            next_id: Arc::new(next_id),
        }
    }
}
