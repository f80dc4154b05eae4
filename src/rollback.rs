//! A value with a linear history.

mod builder;
mod display;

pub use builder::Builder;
pub use display::Display;

use crate::socket::Status;
use crate::{Entry, Slot, Socket};
use alloc::collections::VecDeque;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
use core::fmt;
use core::num::NonZeroUsize;
use core::ops::Deref;

/// A value that remembers every value it has held.
///
/// The container always holds at least one entry, the seed it was created
/// with, and an index pointing at the current entry. New values are committed
/// with [`set`](Rollback::set) or one of the compound assignment operators,
/// which discard every entry after the current one before appending.
/// This means the history never branches.
///
/// # Examples
/// ```
/// # use rollback::Rollback;
/// let mut value = Rollback::new(1);
/// value.set(2);
/// value.set(3);
/// value.set(4);
/// assert_eq!(value.size(), 4);
///
/// value.compress();
/// assert_eq!(value.size(), 2);
/// assert_eq!(value.index(), 1);
/// assert_eq!(value.entries().copied().collect::<Vec<_>>(), [1, 4]);
///
/// assert_eq!(*value.undo(), 1);
/// assert_eq!(*value.reset(), 1);
/// assert_eq!(value.size(), 1);
/// ```
#[derive(Clone)]
pub struct Rollback<T, S = ()> {
    entries: VecDeque<Entry<T>>,
    index: usize,
    limit: NonZeroUsize,
    saved: Option<usize>,
    socket: Socket<S>,
}

impl<T> Rollback<T> {
    /// Returns a new container with `seed` as its only entry.
    pub fn new(seed: T) -> Rollback<T> {
        Builder::default().build(seed)
    }

    /// Returns a builder for a container.
    pub fn builder() -> Builder<T> {
        Builder::default()
    }
}

impl<T, S> Rollback<T, S> {
    /// Reserves capacity for at least `additional` more entries.
    ///
    /// # Panics
    /// Panics if the new capacity overflows usize.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Returns the capacity of the container.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Shrinks the capacity of the container as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit();
    }

    /// Returns the number of entries in the history.
    ///
    /// This is always at least `1`.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns the maximum number of entries kept when committing new values.
    pub fn limit(&self) -> usize {
        self.limit.get()
    }

    /// Returns the index of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if the container can undo.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Returns `true` if the container can redo.
    pub fn can_redo(&self) -> bool {
        self.index < self.entries.len() - 1
    }

    /// Returns `true` if the current entry is marked as saved.
    pub fn is_saved(&self) -> bool {
        self.saved == Some(self.index)
    }

    /// Returns the index of the saved entry, if any.
    pub fn saved(&self) -> Option<usize> {
        self.saved
    }

    /// Returns a reference to the current value.
    pub fn get(&self) -> &T {
        &self.entries[self.index].value
    }

    /// Returns an iterator over the values in the history, oldest first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Returns the time the current value was committed.
    #[cfg(feature = "chrono")]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.entries[self.index].timestamp
    }

    /// Sets how the signal should be handled when the state changes.
    ///
    /// The previous slot is returned if it exists.
    pub fn connect(&mut self, slot: S) -> Option<S> {
        self.socket.connect(Some(slot))
    }

    /// Removes and returns the slot if it exists.
    pub fn disconnect(&mut self) -> Option<S> {
        self.socket.disconnect()
    }

    /// Returns a structure for configurable formatting of the history.
    pub fn display(&self) -> Display<'_, T, S> {
        Display::from(self)
    }

    /// Consumes the container, returning the current value.
    pub fn into_inner(mut self) -> T {
        match self.entries.swap_remove_back(self.index) {
            Some(entry) => entry.value,
            None => unreachable!("history is never empty"),
        }
    }

    fn status(&self) -> Status {
        Status {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            is_saved: self.is_saved(),
            index: self.index,
        }
    }

    fn check_invariants(&self) {
        debug_assert!(!self.entries.is_empty(), "history is empty");
        debug_assert!(
            self.index < self.entries.len(),
            "index {} is out of bounds for history of length {}",
            self.index,
            self.entries.len()
        );
    }
}

impl<T: Clone, S> Rollback<T, S> {
    /// Returns a copy of the current value.
    ///
    /// This is the explicit form of using the container as a plain value,
    /// equivalent to `rollback.get().clone()`.
    pub fn value(&self) -> T {
        self.get().clone()
    }
}

impl<T, S: Slot> Rollback<T, S> {
    /// Commits `value` as the new current value.
    ///
    /// Every entry after the current one is discarded before `value` is appended,
    /// so the container can not redo after this call. If the limit is reached
    /// the oldest entry is removed.
    pub fn set(&mut self, value: T) {
        let old = self.status();
        // Pop off all entries after the current one.
        self.entries.truncate(self.index + 1);
        // Check if the saved entry was popped off.
        self.saved = self.saved.filter(|&saved| saved <= self.index);
        // If limit is reached, pop off the oldest entries.
        while self.entries.len() >= self.limit() {
            self.entries.pop_front();
            self.saved = self.saved.and_then(|saved| saved.checked_sub(1));
            #[cfg(feature = "tracing")]
            tracing::debug!(limit = self.limit(), "evicted oldest entry");
        }
        #[allow(unused_mut)]
        let mut entry = Entry::from(value);
        // Timestamps never decrease, even if the wall clock steps back.
        #[cfg(feature = "chrono")]
        if let Some(last) = self.entries.back() {
            entry.timestamp = entry.timestamp.max(last.timestamp);
        }
        self.entries.push_back(entry);
        self.index = self.entries.len() - 1;
        self.check_invariants();
        #[cfg(feature = "tracing")]
        tracing::trace!(index = self.index, len = self.entries.len(), "committed value");
        self.socket.emit_changes(old, self.status());
    }

    /// Commits the value returned by `f` when called with the current value.
    ///
    /// Returns the new current value.
    pub fn set_with(&mut self, f: impl FnOnce(&T) -> T) -> &T {
        let value = f(self.get());
        self.set(value);
        self.get()
    }

    /// Commits the value returned by `f` if it succeeds.
    ///
    /// If `f` returns an error nothing is committed and the error is returned.
    ///
    /// # Examples
    /// ```
    /// # use rollback::Rollback;
    /// let mut value = Rollback::new(250u8);
    /// assert_eq!(value.try_set_with(|v| v.checked_add(5).ok_or("overflow")), Ok(&255));
    /// assert_eq!(value.try_set_with(|v| v.checked_add(5).ok_or("overflow")), Err("overflow"));
    /// assert_eq!(value.size(), 2);
    /// ```
    pub fn try_set_with<E>(&mut self, f: impl FnOnce(&T) -> Result<T, E>) -> Result<&T, E> {
        let value = f(self.get())?;
        self.set(value);
        Ok(self.get())
    }

    /// Moves to the previous entry and returns the current value.
    ///
    /// Does nothing if the current entry is the oldest one.
    pub fn undo(&mut self) -> &T {
        if self.can_undo() {
            self.jump(self.index - 1);
        }
        self.get()
    }

    /// Moves to the next entry and returns the current value.
    ///
    /// Does nothing if the current entry is the newest one.
    pub fn redo(&mut self) -> &T {
        if self.can_redo() {
            self.jump(self.index + 1);
        }
        self.get()
    }

    /// Undoes `n` times, stopping at the oldest entry.
    pub fn undo_by(&mut self, n: usize) -> &T {
        self.jump(self.index.saturating_sub(n));
        self.get()
    }

    /// Redoes `n` times, stopping at the newest entry.
    pub fn redo_by(&mut self, n: usize) -> &T {
        let newest = self.entries.len() - 1;
        self.jump(self.index.saturating_add(n).min(newest));
        self.get()
    }

    /// Moves to the entry at `index`.
    ///
    /// Returns `None` if there is no entry at `index`.
    pub fn go_to(&mut self, index: usize) -> Option<&T> {
        if index >= self.entries.len() {
            return None;
        }
        self.jump(index);
        Some(self.get())
    }

    /// Moves to the entry that was committed closest before or at `to`.
    ///
    /// Commit times are taken from the wall clock and clamped so they never
    /// decrease along the history. Moves to the oldest entry if every entry
    /// is newer than `to`.
    #[cfg(feature = "chrono")]
    pub fn time_travel(&mut self, to: &DateTime<Utc>) -> &T {
        let after = self.entries.partition_point(|entry| entry.timestamp <= *to);
        self.jump(after.saturating_sub(1));
        self.get()
    }

    /// Removes every entry except the oldest one and returns it.
    pub fn reset(&mut self) -> &T {
        let old = self.status();
        self.entries.truncate(1);
        self.index = 0;
        self.saved = self.saved.filter(|&saved| saved == 0);
        self.check_invariants();
        #[cfg(feature = "tracing")]
        tracing::debug!("reset history to oldest entry");
        self.socket.emit_changes(old, self.status());
        self.get()
    }

    /// Marks the current entry as saved.
    pub fn set_saved(&mut self) {
        let old = self.status();
        self.saved = Some(self.index);
        self.socket.emit_changes(old, self.status());
    }

    /// Removes the saved mark.
    pub fn clear_saved(&mut self) {
        let old = self.status();
        self.saved = None;
        self.socket.emit_changes(old, self.status());
    }

    /// Moves to the saved entry.
    ///
    /// Returns `None` if no entry is marked as saved.
    pub fn revert(&mut self) -> Option<&T> {
        let saved = self.saved?;
        self.go_to(saved)
    }

    fn jump(&mut self, index: usize) {
        if index == self.index {
            return;
        }
        let old = self.status();
        self.index = index;
        self.check_invariants();
        #[cfg(feature = "tracing")]
        tracing::trace!(from = old.index, to = index, "moved in history");
        self.socket.emit_changes(old, self.status());
    }
}

impl<T: Clone, S: Slot> Rollback<T, S> {
    /// Removes every entry between the oldest and the newest one.
    ///
    /// The history is left with exactly two entries, and the newest one becomes current.
    /// If the history only held one entry it is duplicated.
    /// Returns the current value.
    pub fn compress(&mut self) -> &T {
        let old = self.status();
        let newest = self.entries.len() - 1;
        if newest == 0 {
            let copy = self.entries[0].clone();
            self.entries.push_back(copy);
        } else {
            self.entries.drain(1..newest);
        }
        self.index = 1;
        self.saved = match self.saved {
            Some(0) => Some(0),
            Some(saved) if saved == newest => Some(1),
            _ => None,
        };
        self.check_invariants();
        #[cfg(feature = "tracing")]
        tracing::debug!(discarded = newest.saturating_sub(1), "compressed history");
        self.socket.emit_changes(old, self.status());
        self.get()
    }
}

impl<T: Default> Default for Rollback<T> {
    fn default() -> Rollback<T> {
        Rollback::new(T::default())
    }
}

impl<T> From<T> for Rollback<T> {
    fn from(seed: T) -> Rollback<T> {
        Rollback::new(seed)
    }
}

impl<T, S> Deref for Rollback<T, S> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T, S> AsRef<T> for Rollback<T, S> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T: PartialEq, S> PartialEq<T> for Rollback<T, S> {
    fn eq(&self, other: &T) -> bool {
        self.get() == other
    }
}

impl<T: fmt::Debug, S> fmt::Debug for Rollback<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rollback")
            .field("entries", &self.entries)
            .field("index", &self.index)
            .field("limit", &self.limit)
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Display, S> fmt::Display for Rollback<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn history<T: Clone, S>(rollback: &Rollback<T, S>) -> Vec<T> {
        rollback.entries().cloned().collect()
    }

    #[test]
    fn set_truncates_redo_entries() {
        let mut value = Rollback::new(0);
        value.set(5);
        value.set(10);
        assert_eq!(*value.undo(), 5);
        assert!(value.can_redo());
        value.set(7);
        assert_eq!(history(&value), [0, 5, 7]);
        assert_eq!(value.index(), 2);
        assert!(!value.can_redo());
    }

    #[test]
    fn undo_and_redo_are_no_ops_at_the_boundaries() {
        let mut value = Rollback::new(0);
        assert_eq!(*value.undo(), 0);
        assert!(!value.can_undo());
        assert_eq!(value.index(), 0);
        value.set(1);
        assert_eq!(*value.redo(), 1);
        assert_eq!(value.index(), 1);
    }

    #[test]
    fn bulk_navigation_clamps() {
        let mut value = Rollback::new('a');
        value.set('b');
        value.set('c');
        value.set('d');
        assert_eq!(*value.undo_by(2), 'b');
        assert_eq!(*value.undo_by(usize::MAX), 'a');
        assert_eq!(*value.redo_by(1), 'b');
        assert_eq!(*value.redo_by(usize::MAX), 'd');
        assert_eq!(value.index(), 3);
    }

    #[test]
    fn go_to() {
        let mut value = Rollback::new(0);
        value.set(1);
        value.set(2);
        assert_eq!(value.go_to(0), Some(&0));
        assert_eq!(value.go_to(2), Some(&2));
        assert_eq!(value.go_to(3), None);
        assert_eq!(value.index(), 2);
    }

    #[test]
    fn compress_keeps_oldest_and_newest() {
        let mut value = Rollback::new(1);
        value.set(2);
        value.set(3);
        value.set(4);
        assert_eq!(*value.compress(), 4);
        assert_eq!(history(&value), [1, 4]);
        assert_eq!(value.index(), 1);
        assert_eq!(*value.undo(), 1);
    }

    #[test]
    fn compress_duplicates_single_entry() {
        let mut value = Rollback::new(9);
        assert_eq!(*value.compress(), 9);
        assert_eq!(history(&value), [9, 9]);
        assert_eq!(value.index(), 1);
        assert!(value.can_undo());
    }

    #[test]
    fn reset_restores_oldest_surviving_entry() {
        let mut value = Rollback::new(1);
        value.set(2);
        value.set(3);
        assert_eq!(*value.reset(), 1);
        assert_eq!(value.size(), 1);
        assert_eq!(value.index(), 0);

        let mut value = Rollback::builder().limit(2).build(1);
        value.set(2);
        value.set(3);
        assert_eq!(*value.reset(), 2);
    }

    #[test]
    fn limit_evicts_oldest_entry() {
        let mut value = Rollback::builder().limit(3).build(0);
        value.set(1);
        value.set(2);
        value.set(3);
        value.set(4);
        assert_eq!(history(&value), [2, 3, 4]);
        assert_eq!(value.index(), 2);

        let mut value = Rollback::builder().limit(1).build(0);
        value.set(1);
        assert_eq!(history(&value), [1]);
        assert!(!value.can_undo());
    }

    #[test]
    fn saved_follows_history_edits() {
        let mut value = Rollback::builder().saved(false).build(0);
        assert_eq!(value.saved(), None);
        value.set(1);
        value.set(2);
        value.set_saved();
        assert!(value.is_saved());
        value.undo();
        assert!(!value.is_saved());
        assert_eq!(value.revert(), Some(&2));

        value.compress();
        assert_eq!(value.saved(), Some(1));
        value.undo();
        value.set(3);
        assert_eq!(value.saved(), None);
        assert_eq!(value.revert(), None);
    }

    #[test]
    fn limit_shifts_saved_entry() {
        let mut value = Rollback::builder().limit(2).build(0);
        value.set(1);
        value.set_saved();
        value.set(2);
        assert_eq!(value.saved(), Some(0));
        value.set(3);
        assert_eq!(value.saved(), None);
    }

    #[test]
    fn into_inner_returns_current_value() {
        let mut value = Rollback::new(alloc::string::String::from("a"));
        value.set("b".into());
        value.set("c".into());
        value.undo();
        assert_eq!(value.into_inner(), "b");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn timestamps_never_decrease() {
        let mut value = Rollback::new(0);
        let future = Utc::now() + chrono::Duration::hours(1);
        value.entries[0].timestamp = future;
        value.set(1);
        assert_eq!(*value.timestamp(), future);
        assert_eq!(*value.time_travel(&future), 1);
    }

    #[test]
    fn clone_does_not_share_history() {
        let mut a = Rollback::new(0);
        a.set(1);
        let mut b = a.clone();
        b.set(2);
        assert_eq!(history(&a), [0, 1]);
        assert_eq!(history(&b), [0, 1, 2]);
        a.undo();
        assert_eq!(b.index(), 2);
    }
}
