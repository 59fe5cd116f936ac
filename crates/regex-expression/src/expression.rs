//! Append-only pattern accumulator.
//!
//! [`Expression`] is the low-level layer: every primitive appends a fixed
//! fragment to the buffer and returns `&mut Self`, so calls chain. Nothing is
//! validated until [`Expression::compile`] hands the text to the host compiler.
//!
//! ```rust
//! use regex_expression::{Expression, GroupKind};
//!
//! let mut expr = Expression::new();
//! expr.start_group(GroupKind::Capturing)
//!     .set_digit()
//!     .exact(4)
//!     .end_group();
//!
//! assert_eq!(expr.as_str(), r"(\d{4,4})");
//! assert!(expr.compile().unwrap().is_full_match("2017"));
//! ```

use tracing::{debug, trace};

use crate::bound::Bound;
use crate::compiled::CompiledPattern;
use crate::error::ExpressionResult;
use crate::options::MatchOptions;
use crate::quantifier::{GroupKind, Quantifier};

/// Mutable pattern text plus the options it will be compiled with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    options: MatchOptions,
    buffer: String,
}

impl Expression {
    /// Create an empty expression with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty expression with a fixed option set.
    pub fn with_options(options: impl Into<MatchOptions>) -> Self {
        Self {
            options: options.into(),
            buffer: String::new(),
        }
    }

    /// The options this expression compiles with.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// The pattern text assembled so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Length of the pattern text in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn append(&mut self, fragment: &str) -> &mut Self {
        self.buffer.push_str(fragment);
        self
    }

    fn append_char(&mut self, c: char) -> &mut Self {
        self.buffer.push(c);
        self
    }

    // =========================================================================
    // Anchors and alternation
    // =========================================================================

    /// Appends `^`.
    pub fn mark_start(&mut self) -> &mut Self {
        self.append_char('^')
    }

    /// Appends `$`.
    pub fn mark_end(&mut self) -> &mut Self {
        self.append_char('$')
    }

    /// Appends `|`.
    pub fn mark_or(&mut self) -> &mut Self {
        self.append_char('|')
    }

    // =========================================================================
    // Repetition
    // =========================================================================

    /// Appends the quantifier suffix. The preceding atom is not checked.
    pub fn quantity(&mut self, quantifier: Quantifier) -> &mut Self {
        self.append_char(quantifier.suffix())
    }

    /// Appends a range using the `-` delimiter.
    ///
    /// `range(0, 9)` appends `[0-9]`; `range('A', 'z')` appends `A-z`.
    pub fn range(&mut self, min: impl Into<Bound>, max: impl Into<Bound>) -> &mut Self {
        self.range_with(min, max, '-')
    }

    /// Appends a range with an explicit delimiter.
    ///
    /// When both endpoints are integers or text, `-` produces a class
    /// `[min-max]` and `,` a bounded repetition `{min,max}`. Any other
    /// combination is appended as the bare `min<delim>max`.
    ///
    /// Both endpoints are checked, so a mixed pair such as `range(1, 'z')`
    /// appends the bare `1-z`. Older builders wrapped whenever the lower
    /// endpoint was an integer and would have appended `[1-z]` here.
    pub fn range_with(
        &mut self,
        min: impl Into<Bound>,
        max: impl Into<Bound>,
        delim: char,
    ) -> &mut Self {
        let (min, max) = (min.into(), max.into());
        let body = format!("{}{}{}", min, delim, max);
        let wrappable = min.is_wrappable() && max.is_wrappable();

        match delim {
            '-' if wrappable => self.append(&format!("[{}]", body)),
            ',' if wrappable => self.append(&format!("{{{}}}", body)),
            _ => self.append(&body),
        }
    }

    /// Appends `{n,n}`.
    pub fn exact(&mut self, times: usize) -> &mut Self {
        self.range_with(times, times, ',')
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Appends a character verbatim.
    pub fn set_char(&mut self, c: char) -> &mut Self {
        self.append_char(c)
    }

    /// Appends a string verbatim. No escaping is performed.
    pub fn set_string(&mut self, s: &str) -> &mut Self {
        self.append(s)
    }

    /// Appends `c` preceded by a backslash, e.g. `\%`.
    pub fn set_literal(&mut self, c: char) -> &mut Self {
        self.append_char('\\').append_char(c)
    }

    /// Appends the digit class `\d`.
    pub fn set_digit(&mut self) -> &mut Self {
        self.append(r"\d")
    }

    /// Appends the word class `\w`.
    pub fn set_word(&mut self) -> &mut Self {
        self.append(r"\w")
    }

    // =========================================================================
    // Classes and groups
    // =========================================================================

    /// Appends `[`.
    pub fn start_match(&mut self) -> &mut Self {
        self.append_char('[')
    }

    /// Appends `]`.
    pub fn end_match(&mut self) -> &mut Self {
        self.append_char(']')
    }

    /// Appends `(` or `(?:` depending on `kind`.
    pub fn start_group(&mut self, kind: GroupKind) -> &mut Self {
        self.append(kind.opener())
    }

    /// Appends `)`. Balance is the caller's responsibility.
    pub fn end_group(&mut self) -> &mut Self {
        self.append_char(')')
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Emits the current pattern as a `tracing` debug event.
    pub fn debug(&self) -> &Self {
        debug!(pattern = %self.buffer, options = ?self.options, "expression");
        self
    }

    /// Compiles the current text with the fixed options.
    ///
    /// Each call compiles afresh. A failed compile leaves the buffer as it
    /// was, so the caller may keep appending and try again.
    pub fn compile(&self) -> ExpressionResult<CompiledPattern> {
        match CompiledPattern::new(&self.buffer, &self.options) {
            Ok(pattern) => {
                trace!(pattern = %self.buffer, "compiled expression");
                Ok(pattern)
            }
            Err(err) => {
                debug!(pattern = %self.buffer, error = %err, "expression failed to compile");
                Err(err)
            }
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buffer)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpressionError;
    use crate::options::MatchOption;

    #[test]
    fn test_new_expression_is_empty() {
        let expr = Expression::new();
        assert!(expr.is_empty());
        assert!(expr.options().is_empty());
        assert_eq!(expr.as_str(), "");
    }

    #[test]
    fn test_anchors_and_or() {
        let mut expr = Expression::new();
        expr.mark_start();
        assert!(expr.as_str().starts_with('^'));
        expr.mark_or();
        assert!(expr.as_str().ends_with('|'));
        expr.mark_end();
        assert!(expr.as_str().ends_with('$'));
    }

    #[test]
    fn test_quantity() {
        let mut expr = Expression::new();
        expr.quantity(Quantifier::ZeroOrOne);
        assert!(expr.as_str().ends_with('?'));
        expr.quantity(Quantifier::OneOrMore);
        assert!(expr.as_str().ends_with('+'));
        expr.quantity(Quantifier::ZeroOrMore);
        assert!(expr.as_str().ends_with('*'));
    }

    #[test]
    fn test_range_dash_is_class() {
        let mut expr = Expression::new();
        expr.range(0, 9);
        assert_eq!(expr.as_str(), "[0-9]");
    }

    #[test]
    fn test_range_comma_is_repetition() {
        let mut expr = Expression::new();
        expr.range_with(0, 9, ',');
        assert_eq!(expr.as_str(), "{0,9}");
    }

    #[test]
    fn test_range_text_endpoints_wrap() {
        let mut expr = Expression::new();
        expr.range("a", "f");
        assert_eq!(expr.as_str(), "[a-f]");
    }

    #[test]
    fn test_range_char_endpoints_are_bare() {
        let mut expr = Expression::new();
        expr.start_match().range('A', 'z');
        assert!(expr.as_str().ends_with("A-z"));
        expr.end_match();
        assert_eq!(expr.as_str(), "[A-z]");
    }

    #[test]
    fn test_range_mixed_kinds_fall_back_to_bare() {
        let mut expr = Expression::new();
        expr.range(1, 'z');
        assert_eq!(expr.as_str(), "1-z");
    }

    #[test]
    fn test_range_other_delimiter_is_bare() {
        let mut expr = Expression::new();
        expr.range_with(1, 5, ':');
        assert_eq!(expr.as_str(), "1:5");
    }

    #[test]
    fn test_exact() {
        let mut expr = Expression::new();
        expr.exact(9);
        assert!(expr.as_str().ends_with("{9,9}"));
    }

    #[test]
    fn test_text_primitives() {
        let mut expr = Expression::new();
        expr.set_char('A');
        assert!(expr.as_str().ends_with('A'));
        expr.set_string("TestString");
        assert!(expr.as_str().ends_with("TestString"));
        expr.set_literal('%');
        assert!(expr.as_str().ends_with(r"\%"));
        expr.set_digit();
        assert!(expr.as_str().ends_with(r"\d"));
        expr.set_word();
        assert!(expr.as_str().ends_with(r"\w"));
    }

    #[test]
    fn test_set_string_does_not_escape() {
        let mut expr = Expression::new();
        expr.set_string("a.b*");
        assert_eq!(expr.as_str(), "a.b*");
    }

    #[test]
    fn test_groups_balance() {
        let mut expr = Expression::new();
        expr.start_group(GroupKind::Capturing).end_group();
        assert_eq!(expr.as_str(), "()");

        let mut expr = Expression::new();
        expr.start_group(GroupKind::NonCapturing).end_group();
        assert_eq!(expr.as_str(), "(?:)");
    }

    #[test]
    fn test_unknown_group_code_appends_nothing() {
        let mut expr = Expression::new();
        let result = GroupKind::try_from(5).map(|kind| {
            expr.start_group(kind);
        });
        assert_eq!(result, Err(ExpressionError::UnknownGroupKind(5)));
        assert!(expr.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut expr = Expression::new();
        expr.mark_start()
            .set_word()
            .quantity(Quantifier::OneOrMore)
            .set_char('@')
            .set_word()
            .quantity(Quantifier::OneOrMore)
            .mark_end();
        assert_eq!(expr.as_str(), r"^\w+@\w+$");
    }

    #[test]
    fn test_compile_is_repeatable() {
        let mut expr = Expression::new();
        expr.set_digit().exact(2);
        let first = expr.compile().unwrap();
        let second = expr.compile().unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(expr.as_str(), r"\d{2,2}");
    }

    #[test]
    fn test_failed_compile_leaves_buffer() {
        let mut expr = Expression::new();
        expr.start_group(GroupKind::Capturing).set_digit();
        let err = expr.compile().unwrap_err();
        assert!(matches!(err, ExpressionError::Compile(_)));
        assert_eq!(expr.as_str(), r"(\d");

        expr.end_group();
        assert!(expr.compile().unwrap().is_full_match("7"));
    }

    #[test]
    fn test_compile_accepts_whatever_the_host_accepts() {
        let mut expr = Expression::new();
        expr.set_string("(?x)a b # letters");
        assert!(regex::Regex::new(expr.as_str()).is_ok());

        let pattern = expr.compile().unwrap();
        assert_eq!(pattern.as_str(), "(?x)a b # letters");
        assert!(pattern.is_full_match("ab"));
    }

    #[test]
    fn test_compile_with_options() {
        let mut expr = Expression::with_options(MatchOption::IgnoreCase);
        expr.start_group(GroupKind::Capturing)
            .set_string("Catch me")
            .set_literal('!')
            .end_group();

        let pattern = expr.compile().unwrap();
        assert_eq!(pattern.as_str(), r"(Catch me\!)");
        assert!(pattern.is_full_match("CAtCh Me!"));
        assert!(pattern.options().contains(MatchOption::IgnoreCase));
    }

    #[test]
    fn test_display_and_debug() {
        let mut expr = Expression::new();
        expr.set_word().debug();
        assert_eq!(expr.to_string(), r"\w");
    }
}
