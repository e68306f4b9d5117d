use crate::error::GrammarError;

/// Outcome of a single parse attempt: either a value was produced or nothing was
///
/// `Absent` is the ordinary failure signal used for backtracking. It carries no
/// reason and no position; a parser returning it has already restored the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Present(T),
    Absent,
}

impl<T> Maybe<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Extract the value of a successful parse
    ///
    /// # Panics
    ///
    /// Panics if the result is `Absent`. Reaching this with an absent value means
    /// the caller assumed a parse succeeded without checking.
    #[track_caller]
    pub fn unwrap_present(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("attempted to unwrap an absent parse result"),
        }
    }

    /// Extract the value, reporting `GrammarError::AbsentValue` instead of panicking
    pub fn present_or_err(self) -> Result<T, GrammarError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(GrammarError::AbsentValue),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn map<U, F>(self, mapper: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(mapper(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn unwrap_or(self, alternate: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => alternate,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
