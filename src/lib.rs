//! A value container that remembers every value it has held.
//!
//! [`Rollback`] wraps a single value and keeps a linear history of it.
//! Every time a new value is set, it is appended to the history and becomes
//! the current value. The history can then be walked backwards and forwards
//! with [`undo`] and [`redo`]. Setting a new value while not at the newest
//! entry discards the entries after the current one, so the history never branches.
//!
//! # Features
//!
//! * [`Rollback`] provides linear undo-redo functionality for a single value.
//! * Arithmetic operators can be used directly on the container. The compound
//!   assignment operators (`+=`, `-=`, ...) commit the result as a new entry,
//!   while the plain operators (`+`, `-`, ...) only read the current value.
//! * The history can be compressed to its oldest and newest entry, or reset to its oldest entry.
//! * The amount of entries being tracked can be limited so only the `N` most recent values are stored.
//! * The current entry can be marked as saved and the container tracks if it is still in the saved state.
//! * State changes can be observed by connecting a [`Slot`].
//! * Configurable display formatting of the history using [`Rollback::display`].
//! * Time stamps and time travel is provided when the `chrono` feature is enabled.
//! * Structured events are emitted through `tracing` when the `tracing` feature is enabled.
//!
//! # Examples
//!
//! ```
//! use rollback::Rollback;
//!
//! let mut value = Rollback::new(0);
//! value.set(5);
//! value.set(10);
//! assert_eq!(*value.undo(), 5);
//! assert!(value.can_redo());
//!
//! value += 2;
//! assert_eq!(value.get(), &7);
//! assert!(!value.can_redo());
//! assert_eq!(value.entries().copied().collect::<Vec<_>>(), [0, 5, 7]);
//!
//! assert_eq!(*value.undo_by(10), 0);
//! assert_eq!(*value.redo_by(10), 7);
//! ```
//!
//! Any type can be stored, the operations only require what they use:
//!
//! ```
//! # include!("doctest.rs");
//! # fn main() {
//! # use rollback::Rollback;
//! let mut tool = Rollback::new(Tool::Pen);
//! tool.set(Tool::Brush);
//! tool.set(Tool::Eraser);
//! tool.undo();
//! assert_eq!(tool, Tool::Brush);
//! assert_eq!(tool.to_string(), "Brush");
//! # }
//! ```
//!
//! [`undo`]: Rollback::undo
//! [`redo`]: Rollback::redo

#![no_std]
#![doc(html_root_url = "https://docs.rs/rollback")]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod entry;
mod format;
mod ops;
pub mod rollback;
mod socket;

pub use self::{
    ops::One,
    rollback::Rollback,
    socket::{Signal, Slot},
};

use entry::Entry;
use format::Format;
use socket::Socket;
