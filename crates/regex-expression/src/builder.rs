//! Declarative, nestable layer over [`Expression`].
//!
//! Every forwarding method maps onto exactly one expression primitive.
//! Composite methods take a block that receives the same builder, so nested
//! calls land at the exact point of invocation.

use crate::bound::Bound;
use crate::expression::Expression;
use crate::options::MatchOptions;
use crate::quantifier::{GroupKind, Quantifier};

/// Builds an [`Expression`] through nested blocks.
///
/// ```rust
/// use regex_expression::expression;
///
/// let expr = expression(|b| {
///     b.capture(|b| {
///         b.word(|b| {
///             b.exact(3);
///         });
///     });
/// });
///
/// assert_eq!(expr.as_str(), r"(\w{3,3})");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    expression: Expression,
}

impl ExpressionBuilder {
    /// Create a builder with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose expression compiles with `options`.
    pub fn with_options(options: impl Into<MatchOptions>) -> Self {
        Self {
            expression: Expression::with_options(options),
        }
    }

    /// The expression assembled so far.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    // =========================================================================
    // Forwarding
    // =========================================================================

    /// `^`
    pub fn start(&mut self) -> &mut Self {
        self.expression.mark_start();
        self
    }

    /// `$`
    pub fn end(&mut self) -> &mut Self {
        self.expression.mark_end();
        self
    }

    /// `|`
    pub fn or(&mut self) -> &mut Self {
        self.expression.mark_or();
        self
    }

    /// Quantifier suffix.
    pub fn quantity(&mut self, quantifier: Quantifier) -> &mut Self {
        self.expression.quantity(quantifier);
        self
    }

    /// `{n,n}`
    pub fn exact(&mut self, times: usize) -> &mut Self {
        self.expression.exact(times);
        self
    }

    /// Range with the `-` delimiter. See [`Expression::range_with`].
    pub fn range(&mut self, min: impl Into<Bound>, max: impl Into<Bound>) -> &mut Self {
        self.expression.range(min, max);
        self
    }

    /// Range with an explicit delimiter. See [`Expression::range_with`].
    pub fn range_with(
        &mut self,
        min: impl Into<Bound>,
        max: impl Into<Bound>,
        delim: char,
    ) -> &mut Self {
        self.expression.range_with(min, max, delim);
        self
    }

    /// Escaped character, e.g. `\%`.
    pub fn literal(&mut self, c: char) -> &mut Self {
        self.expression.set_literal(c);
        self
    }

    /// Verbatim string.
    pub fn string(&mut self, s: &str) -> &mut Self {
        self.expression.set_string(s);
        self
    }

    /// Verbatim character.
    pub fn char(&mut self, c: char) -> &mut Self {
        self.expression.set_char(c);
        self
    }

    /// A literal space.
    pub fn whitespace(&mut self) -> &mut Self {
        self.char(' ')
    }

    // =========================================================================
    // Composite blocks
    // =========================================================================

    /// Runs `block` with no output of its own. Grouping sugar only.
    pub fn decimal<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        block(self);
        self
    }

    /// `\d` followed by whatever `block` appends.
    pub fn digit<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.expression.set_digit();
        block(self);
        self
    }

    /// `\w` followed by whatever `block` appends.
    pub fn word<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.expression.set_word();
        block(self);
        self
    }

    /// A character class: `[`, `block`, `]`.
    pub fn match_class<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.expression.start_match();
        block(self);
        self.expression.end_match();
        self
    }

    /// A capturing group: `(`, `block`, `)`.
    pub fn capture<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.group(GroupKind::Capturing, block)
    }

    /// A non-capturing group: `(?:`, `block`, `)`.
    pub fn nocapture<F>(&mut self, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.group(GroupKind::NonCapturing, block)
    }

    fn group<F>(&mut self, kind: GroupKind, block: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.expression.start_group(kind);
        block(self);
        self.expression.end_group();
        self
    }

    /// Hands back the owned expression for compilation.
    pub fn boot(self) -> Expression {
        self.expression
    }
}

/// Runs `block` against a fresh builder with no options and returns the
/// resulting expression.
pub fn expression<F>(block: F) -> Expression
where
    F: FnOnce(&mut ExpressionBuilder),
{
    expression_with(MatchOptions::default(), block)
}

/// Runs `block` against a fresh builder with `options` and returns the
/// resulting expression.
pub fn expression_with<F>(options: impl Into<MatchOptions>, block: F) -> Expression
where
    F: FnOnce(&mut ExpressionBuilder),
{
    let mut builder = ExpressionBuilder::with_options(options);
    block(&mut builder);
    builder.boot()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MatchOption;

    #[test]
    fn test_builder_starts_empty() {
        let builder = ExpressionBuilder::new();
        assert!(builder.expression().is_empty());
        assert!(builder.boot().options().is_empty());
    }

    #[test]
    fn test_forwarding_matches_primitives() {
        let built = expression(|b| {
            b.start()
                .end()
                .or()
                .quantity(Quantifier::ZeroOrMore)
                .exact(2)
                .range(0, 9)
                .range_with(1, 3, ',')
                .literal('.')
                .string("ab")
                .char('c');
        });

        let mut direct = Expression::new();
        direct
            .mark_start()
            .mark_end()
            .mark_or()
            .quantity(Quantifier::ZeroOrMore)
            .exact(2)
            .range(0, 9)
            .range_with(1, 3, ',')
            .set_literal('.')
            .set_string("ab")
            .set_char('c');

        assert_eq!(built.as_str(), direct.as_str());
    }

    #[test]
    fn test_capture_equals_direct_sequence() {
        let built = expression(|b| {
            b.capture(|b| {
                b.string("test2");
            });
        });

        let mut direct = Expression::new();
        direct
            .start_group(GroupKind::Capturing)
            .set_string("test2")
            .end_group();

        assert_eq!(built.as_str(), direct.as_str());
        assert_eq!(built.as_str(), "(test2)");
    }

    #[test]
    fn test_nocapture_and_match_class() {
        let built = expression(|b| {
            b.nocapture(|b| {
                b.string("test3");
            })
            .match_class(|b| {
                b.string("test");
            });
        });
        assert_eq!(built.as_str(), "(?:test3)[test]");
    }

    #[test]
    fn test_decimal_has_no_output_of_its_own() {
        let built = expression(|b| {
            b.decimal(|b| {
                b.digit(|b| {
                    b.quantity(Quantifier::OneOrMore);
                })
                .literal('.')
                .digit(|b| {
                    b.range_with(1, 2, ',');
                });
            });
        });
        assert_eq!(built.as_str(), r"\d+\.\d{1,2}");
    }

    #[test]
    fn test_empty_blocks() {
        let built = expression(|b| {
            b.digit(|_| {}).word(|_| {}).match_class(|_| {}).decimal(|_| {});
        });
        assert_eq!(built.as_str(), r"\d\w[]");
    }

    #[test]
    fn test_nested_blocks_interleave_in_call_order() {
        let built = expression(|b| {
            b.capture(|b| {
                b.char('a').nocapture(|b| {
                    b.char('b').capture(|b| {
                        b.char('c');
                    });
                    b.char('d');
                });
                b.char('e');
            });
        });
        assert_eq!(built.as_str(), "(a(?:b(c)d)e)");
    }

    #[test]
    fn test_whitespace_is_a_space() {
        let built = expression(|b| {
            b.char('a').whitespace().char('b');
        });
        assert_eq!(built.as_str(), "a b");
    }

    #[test]
    fn test_expression_with_options() {
        let built = expression_with(MatchOption::IgnoreCase, |b| {
            b.string("abc");
        });
        assert!(built.options().contains(MatchOption::IgnoreCase));
        assert!(built.compile().unwrap().is_full_match("ABC"));
    }

    #[test]
    fn test_boot_returns_built_expression() {
        let mut builder = ExpressionBuilder::with_options([MatchOption::Multiline]);
        builder.start().word(|_| {}).end();
        let expr = builder.boot();
        assert_eq!(expr.as_str(), r"^\w$");
        assert!(expr.options().contains(MatchOption::Multiline));
    }
}
