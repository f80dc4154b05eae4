use crate::{Entry, Format, Rollback};
use core::fmt;

/// Configurable display formatting for the history of a [`Rollback`].
///
/// The entries are listed newest first, each with its index and labels
/// marking the current (`HEAD`) and saved (`SAVED`) entries.
///
/// # Examples
/// ```
/// # use rollback::Rollback;
/// let mut value = Rollback::new(0);
/// value.set(1);
/// value.set(2);
/// value.undo();
///
/// let mut display = value.display();
/// display.detailed(false);
/// # #[cfg(feature = "colored")]
/// # display.colored(false);
/// assert_eq!(display.to_string(), "2 2\n1 [HEAD] 1\n0 [SAVED] 0\n");
/// ```
pub struct Display<'a, T, S> {
    rollback: &'a Rollback<T, S>,
    format: Format,
}

impl<T, S> Display<'_, T, S> {
    /// Show colored output (on by default).
    ///
    /// Requires the `colored` feature to be enabled.
    #[cfg(feature = "colored")]
    pub fn colored(&mut self, on: bool) -> &mut Self {
        self.format.colored = on;
        self
    }

    /// Show detailed output (on by default).
    ///
    /// Detailed output puts every value on its own indented lines,
    /// otherwise only the first line of the value is shown.
    pub fn detailed(&mut self, on: bool) -> &mut Self {
        self.format.detailed = on;
        self
    }

    /// Show the current position in the output (on by default).
    pub fn head(&mut self, on: bool) -> &mut Self {
        self.format.head = on;
        self
    }

    /// Show the saved entry (on by default).
    pub fn saved(&mut self, on: bool) -> &mut Self {
        self.format.saved = on;
        self
    }
}

impl<T: fmt::Display, S> Display<'_, T, S> {
    fn fmt_entry(&self, f: &mut fmt::Formatter, index: usize, entry: &Entry<T>) -> fmt::Result {
        self.format.index(f, index)?;
        #[cfg(feature = "chrono")]
        if self.format.detailed {
            self.format.timestamp(f, &entry.timestamp)?;
        }
        self.format
            .labels(f, index, self.rollback.index, self.rollback.saved)?;
        self.format.end_header(f)?;
        self.format.value(f, &entry.value)
    }
}

impl<'a, T, S> From<&'a Rollback<T, S>> for Display<'a, T, S> {
    fn from(rollback: &'a Rollback<T, S>) -> Self {
        Display {
            rollback,
            format: Format::default(),
        }
    }
}

impl<T: fmt::Display, S> fmt::Display for Display<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, entry) in self.rollback.entries.iter().enumerate().rev() {
            self.fmt_entry(f, i, entry)?;
        }
        Ok(())
    }
}
