//! Compiled pattern handle returned by [`Expression::compile`](crate::Expression::compile).

use std::ops::Deref;

use regex::{Captures, Match, Matches, Regex, RegexBuilder};
use tracing::debug;

use crate::error::ExpressionResult;
use crate::options::MatchOptions;

/// An immutable, compiled pattern.
///
/// Wraps the host [`Regex`] together with an anchored twin used for
/// whole-input matching. Everything else the host type offers is reachable
/// through [`Deref`] or [`CompiledPattern::as_regex`].
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    options: MatchOptions,
    regex: Regex,
    anchored: Option<Regex>,
}

impl CompiledPattern {
    pub(crate) fn new(source: &str, options: &MatchOptions) -> ExpressionResult<Self> {
        let text = options.source_text(source);
        let regex = Self::build(&text, options)?;

        let anchored = Self::build_anchored(&text, options);
        if anchored.is_none() {
            debug!(pattern = %source, "no anchored form, full match falls back to search");
        }

        Ok(Self {
            source: source.to_string(),
            options: options.clone(),
            regex,
            anchored,
        })
    }

    /// Builds `\A(?:text)\z` for whole-input matching.
    ///
    /// `\A` and `\z` ignore multiline mode. If the text ends inside a `#`
    /// comment (via the option or an inline `(?x)`), the plain wrapper fails
    /// and the form with a newline before the closer is used. Only called
    /// after the text itself compiled, so a failure here is never reported.
    fn build_anchored(text: &str, options: &MatchOptions) -> Option<Regex> {
        [format!(r"\A(?:{})\z", text), format!("\\A(?:{}\n)\\z", text)]
            .iter()
            .find_map(|candidate| Self::build(candidate, options).ok())
    }

    fn build(text: &str, options: &MatchOptions) -> ExpressionResult<Regex> {
        let mut builder = RegexBuilder::new(text);
        options.apply(&mut builder);
        Ok(builder.build()?)
    }

    /// The pattern text as it was assembled.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The options the pattern was compiled with.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Matches `text` as a whole, returning the match when it spans all of it.
    pub fn full_match<'h>(&self, text: &'h str) -> Option<Match<'h>> {
        match &self.anchored {
            Some(anchored) => anchored.find(text),
            None => self
                .regex
                .find(text)
                .filter(|m| m.start() == 0 && m.end() == text.len()),
        }
    }

    /// Returns true if the pattern matches the entire `text`.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.full_match(text).is_some()
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Finds the leftmost match in `text`.
    pub fn find<'h>(&self, text: &'h str) -> Option<Match<'h>> {
        self.regex.find(text)
    }

    /// Iterates all non-overlapping matches in `text`.
    pub fn find_iter<'r, 'h>(&'r self, text: &'h str) -> Matches<'r, 'h> {
        self.regex.find_iter(text)
    }

    /// Captures groups of the leftmost match in `text`.
    pub fn captures<'h>(&self, text: &'h str) -> Option<Captures<'h>> {
        self.regex.captures(text)
    }

    /// The underlying host pattern.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// Consumes the handle, returning the underlying host pattern.
    pub fn into_regex(self) -> Regex {
        self.regex
    }
}

impl Deref for CompiledPattern {
    type Target = Regex;

    fn deref(&self) -> &Regex {
        &self.regex
    }
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
