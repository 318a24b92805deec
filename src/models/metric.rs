use serde::{Deserialize, Serialize};

/// Availability marker for a single extracted value.
///
/// Synthesis reports routinely omit fields across tool versions, so every
/// value that can be absent carries this tag instead of a bare `Option`.
/// Consumers must handle the `Unavailable` case explicitly; extractors
/// never fabricate a value to avoid it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Metric<T> {
    Known(T),
    Unavailable,
}

impl<T> Metric<T> {
    pub fn is_known(&self) -> bool {
        matches!(self, Metric::Known(_))
    }

    /// Borrows the contained value if it is known.
    pub fn known(&self) -> Option<&T> {
        match self {
            Metric::Known(v) => Some(v),
            Metric::Unavailable => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Metric<U> {
        match self {
            Metric::Known(v) => Metric::Known(f(v)),
            Metric::Unavailable => Metric::Unavailable,
        }
    }
}

impl<T> From<Option<T>> for Metric<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Metric::Known(v),
            None => Metric::Unavailable,
        }
    }
}
