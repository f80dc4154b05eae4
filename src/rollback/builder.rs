use crate::{Entry, Rollback, Socket};
use alloc::collections::VecDeque;
use core::marker::PhantomData;
use core::num::NonZeroUsize;

/// Builder for a [`Rollback`].
///
/// # Examples
/// ```
/// # use rollback::{Rollback, Signal};
/// let mut value = Rollback::builder()
///     .limit(100)
///     .capacity(100)
///     .connect(|s: Signal| { dbg!(s); })
///     .build(0);
/// # value.set(1);
/// ```
#[derive(Debug)]
pub struct Builder<T, S = ()> {
    capacity: usize,
    limit: NonZeroUsize,
    saved: bool,
    socket: Socket<S>,
    pd: PhantomData<T>,
}

impl<T, S> Builder<T, S> {
    /// Sets the capacity for the history.
    pub fn capacity(mut self, capacity: usize) -> Builder<T, S> {
        self.capacity = capacity;
        self
    }

    /// Sets the `limit` of the history.
    ///
    /// When a new value is committed and the history already holds `limit`
    /// entries, the oldest entry is removed.
    ///
    /// # Panics
    /// Panics if `limit` is `0`.
    pub fn limit(mut self, limit: usize) -> Builder<T, S> {
        self.limit = NonZeroUsize::new(limit).expect("limit can not be `0`");
        self
    }

    /// Sets if the seed is initially in a saved state.
    /// By default the seed is in a saved state.
    pub fn saved(mut self, saved: bool) -> Builder<T, S> {
        self.saved = saved;
        self
    }

    /// Connects the slot.
    pub fn connect<U>(self, slot: U) -> Builder<T, U> {
        Builder {
            capacity: self.capacity,
            limit: self.limit,
            saved: self.saved,
            socket: Socket::new(slot),
            pd: PhantomData,
        }
    }

    /// Builds the container with `seed` as its only entry.
    pub fn build(self, seed: T) -> Rollback<T, S> {
        let mut entries = VecDeque::with_capacity(self.capacity.max(1));
        entries.push_back(Entry::from(seed));
        Rollback {
            entries,
            index: 0,
            limit: self.limit,
            saved: self.saved.then_some(0),
            socket: self.socket,
        }
    }
}

impl<T, S> Default for Builder<T, S> {
    fn default() -> Self {
        Builder {
            capacity: 0,
            limit: NonZeroUsize::MAX,
            saved: true,
            socket: Socket::default(),
            pd: PhantomData,
        }
    }
}
