//! Compilation options handed to the host pattern compiler.

use std::collections::BTreeSet;

use regex::RegexBuilder;

/// A single host-compiler flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchOption {
    /// Letters match both upper and lower case.
    IgnoreCase,
    /// `^` and `$` match at line boundaries.
    Multiline,
    /// `.` also matches `\n`.
    DotMatchesNewLine,
    /// Whitespace in the pattern is ignored and `#` starts a comment.
    IgnoreWhitespace,
    /// Greedy and lazy quantifiers swap meaning.
    SwapGreed,
    /// `\r\n` is treated as a line terminator in multiline mode.
    Crlf,
    /// Unicode support is disabled; classes like `\w` are ASCII-only.
    Ascii,
    /// The whole pattern text is matched verbatim.
    Literal,
}

/// Immutable set of [`MatchOption`]s, fixed when an expression is created.
///
/// # Example
///
/// ```rust
/// use regex_expression::{MatchOption, MatchOptions};
///
/// let options = MatchOptions::builder()
///     .with(MatchOption::IgnoreCase)
///     .with(MatchOption::Multiline)
///     .build();
///
/// assert!(options.contains(MatchOption::IgnoreCase));
/// assert_eq!(options.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MatchOptions {
    options: BTreeSet<MatchOption>,
}

impl MatchOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder for MatchOptions.
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }

    /// Returns true if the set contains `option`.
    pub fn contains(&self, option: MatchOption) -> bool {
        self.options.contains(&option)
    }

    /// Iterates the options in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = MatchOption> + '_ {
        self.options.iter().copied()
    }

    /// Number of options in the set.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if no options are set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Applies every option onto a host compiler builder.
    ///
    /// [`MatchOption::Literal`] has no builder flag; it is handled by escaping
    /// the text before it reaches the builder (see [`MatchOptions::source_text`]).
    pub(crate) fn apply(&self, builder: &mut RegexBuilder) {
        for option in self.iter() {
            match option {
                MatchOption::IgnoreCase => {
                    builder.case_insensitive(true);
                }
                MatchOption::Multiline => {
                    builder.multi_line(true);
                }
                MatchOption::DotMatchesNewLine => {
                    builder.dot_matches_new_line(true);
                }
                MatchOption::IgnoreWhitespace => {
                    builder.ignore_whitespace(true);
                }
                MatchOption::SwapGreed => {
                    builder.swap_greed(true);
                }
                MatchOption::Crlf => {
                    builder.crlf(true);
                }
                MatchOption::Ascii => {
                    builder.unicode(false);
                }
                MatchOption::Literal => {}
            }
        }
    }

    /// The text the host compiler actually sees for `pattern`.
    pub(crate) fn source_text(&self, pattern: &str) -> String {
        if self.contains(MatchOption::Literal) {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        }
    }
}

impl FromIterator<MatchOption> for MatchOptions {
    fn from_iter<I: IntoIterator<Item = MatchOption>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[MatchOption; N]> for MatchOptions {
    fn from(options: [MatchOption; N]) -> Self {
        options.into_iter().collect()
    }
}

impl From<MatchOption> for MatchOptions {
    fn from(option: MatchOption) -> Self {
        [option].into()
    }
}

/// Builder for MatchOptions.
#[derive(Debug, Clone, Default)]
pub struct MatchOptionsBuilder {
    options: BTreeSet<MatchOption>,
}

impl MatchOptionsBuilder {
    /// Adds an option.
    pub fn with(mut self, option: MatchOption) -> Self {
        self.options.insert(option);
        self
    }

    /// Enables or disables case-insensitive matching.
    pub fn with_ignore_case(self, enabled: bool) -> Self {
        self.toggle(MatchOption::IgnoreCase, enabled)
    }

    /// Enables or disables multiline anchors.
    pub fn with_multiline(self, enabled: bool) -> Self {
        self.toggle(MatchOption::Multiline, enabled)
    }

    /// Enables or disables `.` matching newlines.
    pub fn with_dot_matches_new_line(self, enabled: bool) -> Self {
        self.toggle(MatchOption::DotMatchesNewLine, enabled)
    }

    fn toggle(mut self, option: MatchOption, enabled: bool) -> Self {
        if enabled {
            self.options.insert(option);
        } else {
            self.options.remove(&option);
        }
        self
    }

    /// Builds the MatchOptions.
    pub fn build(self) -> MatchOptions {
        MatchOptions {
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_options_default() {
        let options = MatchOptions::default();
        assert!(options.is_empty());
        assert_eq!(options.len(), 0);
        assert!(!options.contains(MatchOption::IgnoreCase));
    }

    #[test]
    fn test_match_options_builder() {
        let options = MatchOptions::builder()
            .with(MatchOption::IgnoreCase)
            .with_multiline(true)
            .with_dot_matches_new_line(true)
            .with_dot_matches_new_line(false)
            .build();

        assert!(options.contains(MatchOption::IgnoreCase));
        assert!(options.contains(MatchOption::Multiline));
        assert!(!options.contains(MatchOption::DotMatchesNewLine));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_match_options_dedup_and_order() {
        let options: MatchOptions = [
            MatchOption::Multiline,
            MatchOption::IgnoreCase,
            MatchOption::Multiline,
        ]
        .into();

        let collected: Vec<_> = options.iter().collect();
        assert_eq!(collected, vec![MatchOption::IgnoreCase, MatchOption::Multiline]);
    }

    #[test]
    fn test_apply_ignore_case() {
        let mut builder = RegexBuilder::new("abc");
        MatchOptions::from(MatchOption::IgnoreCase).apply(&mut builder);
        let re = builder.build().unwrap();
        assert!(re.is_match("ABC"));
    }

    #[test]
    fn test_apply_ascii_disables_unicode_word() {
        let mut builder = RegexBuilder::new(r"^\w$");
        MatchOptions::from(MatchOption::Ascii).apply(&mut builder);
        let re = builder.build().unwrap();
        assert!(re.is_match("a"));
        assert!(!re.is_match("é"));
    }

    #[test]
    fn test_source_text_literal_escapes() {
        let options = MatchOptions::from(MatchOption::Literal);
        assert_eq!(options.source_text("a.b"), r"a\.b");
        assert_eq!(MatchOptions::new().source_text("a.b"), "a.b");
    }
}
