use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{GrammarError, ParseResult};
use crate::parser::{Parser, SharedParser};
use log::{debug, error};
use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

const ANONYMOUS: &str = "<anonymous>";

/// A forward reference to a parser that is supplied after construction.
/// This is how recursive and mutually recursive grammar rules are written.
///
/// Clones share the same target, so the usual pattern is to create the
/// placeholder, hand clones of it to the parsers that recurse, then `bind` the
/// finished rule:
///
/// ```ignore
/// let expr = Placeholder::<char, Value>::named("expr");
/// let list = inside(character('('), sep_by(expr.clone(), spaces()), character(')'));
/// expr.bind(atom.or(list.map(Value::List)))?;
/// ```
///
/// The bound target usually contains a clone of the placeholder itself. That
/// reference cycle is never collected; grammars are expected to be built once
/// and live for the life of the program.
pub struct Placeholder<T: Atomic, O> {
    rule: Option<Cow<'static, str>>,
    target: Arc<OnceLock<SharedParser<T, O>>>,
}

impl<T: Atomic, O> Placeholder<T, O> {
    pub fn new() -> Self {
        Placeholder {
            rule: None,
            target: Arc::new(OnceLock::new()),
        }
    }

    /// Create a placeholder whose rule name appears in errors and log output
    pub fn named(rule: impl Into<Cow<'static, str>>) -> Self {
        Placeholder {
            rule: Some(rule.into()),
            target: Arc::new(OnceLock::new()),
        }
    }

    pub fn rule(&self) -> &str {
        self.rule.as_deref().unwrap_or(ANONYMOUS)
    }

    pub fn is_bound(&self) -> bool {
        self.target.get().is_some()
    }

    /// Set the parser this placeholder delegates to
    ///
    /// A placeholder is bound at most once; the first bind wins, including when
    /// two threads race, and every later attempt returns
    /// [`GrammarError::AlreadyBound`].
    pub fn bind<P>(&self, target: P) -> Result<(), GrammarError>
    where
        P: Parser<Element = T, Output = O> + Send + Sync + 'static,
    {
        let target: SharedParser<T, O> = Arc::new(target);
        match self.target.set(target) {
            Ok(()) => {
                debug!("bound placeholder `{}`", self.rule());
                Ok(())
            }
            Err(_) => Err(GrammarError::AlreadyBound {
                rule: self.rule().to_string(),
            }),
        }
    }
}

impl<T: Atomic, O> Clone for Placeholder<T, O> {
    fn clone(&self) -> Self {
        Placeholder {
            rule: self.rule.clone(),
            target: Arc::clone(&self.target),
        }
    }
}

impl<T: Atomic, O> Default for Placeholder<T, O> {
    fn default() -> Self {
        Placeholder::new()
    }
}

impl<T: Atomic, O> Parser for Placeholder<T, O> {
    type Element = T;
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_, T>) -> ParseResult<O> {
        match self.target.get() {
            Some(target) => target.parse(cursor),
            None => {
                error!(
                    "placeholder `{}` invoked before being bound (offset {})",
                    self.rule(),
                    cursor.position()
                );
                Err(GrammarError::UnboundPlaceholder {
                    rule: self.rule().to_string(),
                })
            }
        }
    }
}

/// Convenience function to create an anonymous Placeholder
pub fn placeholder<T: Atomic, O>() -> Placeholder<T, O> {
    Placeholder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inside::inside;
    use crate::lift::MapExt;
    use crate::maybe::Maybe;
    use crate::or::OrExt;
    use crate::text::character;

    /// depth := '(' depth ')' | 'x'
    fn nesting_depth() -> Placeholder<char, usize> {
        let depth = Placeholder::<char, usize>::named("depth");
        let leaf = character('x').map(|_| 0usize);
        let nested = inside(character('('), depth.clone(), character(')')).map(|inner| inner + 1);
        depth
            .bind(leaf.or(nested))
            .expect("fresh placeholder must accept a target");
        depth
    }

    #[test]
    fn test_recursive_rule() {
        let parser = nesting_depth();

        let mut cursor = Cursor::from_text("((x))rest");
        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Present(2));
        assert_eq!(cursor.remaining_text(), "rest");
    }

    #[test]
    fn test_recursive_rule_failure_rewinds() {
        let parser = nesting_depth();

        let mut cursor = Cursor::from_text("((x)");
        assert_eq!(parser.parse(&mut cursor).unwrap(), Maybe::Absent);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_unbound_is_an_error_not_a_failure() {
        let expr = Placeholder::<char, char>::named("expr");
        let mut cursor = Cursor::from_text("abc");

        assert_eq!(
            expr.parse(&mut cursor),
            Err(GrammarError::UnboundPlaceholder {
                rule: "expr".into()
            })
        );
    }

    #[test]
    fn test_unbound_error_propagates_through_choice() {
        let expr = placeholder::<char, char>();
        let parser = expr.clone().or(character('a'));
        let mut cursor = Cursor::from_text("abc");

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.rule(), Some("<anonymous>"));
    }

    #[test]
    fn test_double_bind_rejected() {
        let expr = Placeholder::<char, char>::named("expr");

        assert!(!expr.is_bound());
        expr.bind(character('a')).unwrap();
        assert!(expr.is_bound());
        assert_eq!(
            expr.bind(character('b')),
            Err(GrammarError::AlreadyBound {
                rule: "expr".into()
            })
        );

        // first target is kept
        let mut cursor = Cursor::from_text("a");
        assert_eq!(expr.parse(&mut cursor).unwrap(), Maybe::Present('a'));
    }

    #[test]
    fn test_clones_share_target() {
        let original = Placeholder::<char, char>::new();
        let copy = original.clone();

        copy.bind(character('z')).unwrap();

        assert!(original.is_bound());
        let mut cursor = Cursor::from_text("z");
        assert_eq!(original.parse(&mut cursor).unwrap(), Maybe::Present('z'));
    }
}
