#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

/// Wrapper around a value that contains additional metadata.
#[derive(Clone, Debug)]
pub(crate) struct Entry<T> {
    pub value: T,
    #[cfg(feature = "chrono")]
    pub timestamp: DateTime<Utc>,
}

impl<T> From<T> for Entry<T> {
    fn from(value: T) -> Self {
        Entry {
            value,
            #[cfg(feature = "chrono")]
            timestamp: Utc::now(),
        }
    }
}
