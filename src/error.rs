use thiserror::Error;

use crate::maybe::Maybe;

/// Result of running a parser: `Ok(Present)` on a match, `Ok(Absent)` on an ordinary
/// failure, and `Err` only for grammar construction mistakes that must not be
/// mistaken for a non-matching input
pub type ParseResult<O> = Result<Maybe<O>, GrammarError>;

/// Fatal conditions raised by a misassembled grammar
///
/// None of these are ever turned into `Maybe::Absent` by a combinator; they
/// propagate straight out of the top-level `parse` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A placeholder was reached during parsing before `bind` was called on it
    #[error("placeholder `{rule}` was invoked before a target was bound")]
    UnboundPlaceholder { rule: String },

    /// `bind` was called on a placeholder that already has a target
    #[error("placeholder `{rule}` is already bound")]
    AlreadyBound { rule: String },

    /// A caller asked for the value of a parse that produced nothing
    #[error("cannot extract a value from an absent parse result")]
    AbsentValue,
}

impl GrammarError {
    /// Name of the grammar rule involved, if the error concerns a placeholder
    pub fn rule(&self) -> Option<&str> {
        match self {
            GrammarError::UnboundPlaceholder { rule } | GrammarError::AlreadyBound { rule } => {
                Some(rule)
            }
            GrammarError::AbsentValue => None,
        }
    }
}
