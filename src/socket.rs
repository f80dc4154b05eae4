//! Module used to communicate changes in the container.

use core::mem;
#[cfg(feature = "std")]
use std::sync::mpsc::{Sender, SyncSender};

/// Slot wrapper that adds some additional functionality.
#[derive(Clone, Debug)]
pub(crate) struct Socket<S>(Option<S>);

impl<S> Socket<S> {
    pub const fn new(slot: S) -> Socket<S> {
        Socket(Some(slot))
    }

    pub fn connect(&mut self, slot: Option<S>) -> Option<S> {
        mem::replace(&mut self.0, slot)
    }

    pub fn disconnect(&mut self) -> Option<S> {
        self.0.take()
    }
}

impl<S> Default for Socket<S> {
    fn default() -> Self {
        Socket(None)
    }
}

impl<S: Slot> Socket<S> {
    pub fn emit(&mut self, signal: impl FnOnce() -> Signal) {
        if let Some(slot) = &mut self.0 {
            slot.on_emit(signal());
        }
    }

    pub fn emit_if(&mut self, cond: bool, signal: impl FnOnce() -> Signal) {
        if cond {
            self.emit(signal);
        }
    }

    /// Emits one signal for every part of the status that differs.
    pub fn emit_changes(&mut self, old: Status, new: Status) {
        self.emit_if(old.can_undo != new.can_undo, || Signal::Undo(new.can_undo));
        self.emit_if(old.can_redo != new.can_redo, || Signal::Redo(new.can_redo));
        self.emit_if(old.is_saved != new.is_saved, || Signal::Saved(new.is_saved));
        self.emit_if(old.index != new.index, || Signal::Index(new.index));
    }
}

/// The observable state of a container at one point in time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Status {
    pub can_undo: bool,
    pub can_redo: bool,
    pub is_saved: bool,
    pub index: usize,
}

/// The `Signal` describes the state change done to the container.
///
/// See [`Slot`] for more information.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Signal {
    /// Emitted when the containers ability to undo has changed.
    Undo(bool),
    /// Emitted when the containers ability to redo has changed.
    Redo(bool),
    /// Emitted when the saved state has changed.
    Saved(bool),
    /// Emitted when the index of the current entry has changed.
    Index(usize),
}

/// Use this to handle signals emitted.
///
/// This allows you to trigger events on certain state changes,
/// like enabling or disabling the undo and redo buttons of a user interface.
///
/// # Examples
/// ```
/// # use std::sync::mpsc;
/// # use rollback::{Rollback, Signal};
/// let (sender, receiver) = mpsc::channel();
/// let mut iter = receiver.try_iter();
///
/// let mut value = Rollback::builder().connect(sender).build(0);
///
/// value.set(1);
/// assert_eq!(iter.next(), Some(Signal::Undo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(false)));
/// assert_eq!(iter.next(), Some(Signal::Index(1)));
/// assert_eq!(iter.next(), None);
///
/// value.undo();
/// assert_eq!(iter.next(), Some(Signal::Undo(false)));
/// assert_eq!(iter.next(), Some(Signal::Redo(true)));
/// assert_eq!(iter.next(), Some(Signal::Saved(true)));
/// assert_eq!(iter.next(), Some(Signal::Index(0)));
/// assert_eq!(iter.next(), None);
/// ```
pub trait Slot {
    /// Receives a signal that describes the state change done to the container.
    fn on_emit(&mut self, signal: Signal);
}

impl Slot for () {
    fn on_emit(&mut self, _: Signal) {}
}

impl<F: FnMut(Signal)> Slot for F {
    fn on_emit(&mut self, signal: Signal) {
        self(signal)
    }
}

#[cfg(feature = "std")]
impl Slot for Sender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}

#[cfg(feature = "std")]
impl Slot for SyncSender<Signal> {
    fn on_emit(&mut self, signal: Signal) {
        self.send(signal).ok();
    }
}
