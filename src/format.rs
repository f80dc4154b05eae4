#![cfg_attr(not(feature = "colored"), allow(unused_variables))]

use alloc::string::ToString;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "colored")]
use colored::Colorize;
use core::fmt::{self, Write};

#[derive(Copy, Clone, Debug)]
pub(crate) struct Format {
    #[cfg(feature = "colored")]
    pub colored: bool,
    pub detailed: bool,
    pub head: bool,
    pub saved: bool,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            #[cfg(feature = "colored")]
            colored: true,
            detailed: true,
            head: true,
            saved: true,
        }
    }
}

impl Format {
    /// Writes the value, only the first non-empty line of it unless detailed.
    pub fn value(self, f: &mut fmt::Formatter, value: &impl ToString) -> fmt::Result {
        let text = value.to_string();
        if self.detailed {
            for line in text.lines() {
                f.write_str("    ")?;
                writeln!(f, "{}", line.trim_end())?;
            }
            Ok(())
        } else {
            match text.lines().map(str::trim).find(|s| !s.is_empty()) {
                Some(line) => writeln!(f, " {line}"),
                None => writeln!(f),
            }
        }
    }

    pub fn index(self, f: &mut fmt::Formatter, index: usize) -> fmt::Result {
        #[cfg(feature = "colored")]
        if self.colored {
            let index = alloc::format!("{index}");
            return write!(f, "{}", index.yellow().bold());
        }
        write!(f, "{index}")
    }

    pub fn labels(
        self,
        f: &mut fmt::Formatter,
        index: usize,
        head: usize,
        saved: Option<usize>,
    ) -> fmt::Result {
        match (
            self.head && index == head,
            self.saved && saved == Some(index),
        ) {
            (true, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{} {}{}",
                        "[".yellow(),
                        "HEAD".cyan().bold(),
                        ",".yellow(),
                        "SAVED".green().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [HEAD, SAVED]")
            }
            (true, false) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{}",
                        "[".yellow(),
                        "HEAD".cyan().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [HEAD]")
            }
            (false, true) => {
                #[cfg(feature = "colored")]
                if self.colored {
                    return write!(
                        f,
                        " {}{}{}",
                        "[".yellow(),
                        "SAVED".green().bold(),
                        "]".yellow()
                    );
                }
                f.write_str(" [SAVED]")
            }
            (false, false) => Ok(()),
        }
    }

    #[cfg(feature = "chrono")]
    pub fn timestamp(self, f: &mut fmt::Formatter, timestamp: &DateTime<Utc>) -> fmt::Result {
        let rfc2822 = timestamp.to_rfc2822();
        #[cfg(feature = "colored")]
        if self.colored {
            return write!(f, " {}", rfc2822.yellow());
        }
        write!(f, " {rfc2822}")
    }

    /// Terminates the header line of an entry.
    pub fn end_header(self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.detailed {
            f.write_char('\n')
        } else {
            Ok(())
        }
    }
}
