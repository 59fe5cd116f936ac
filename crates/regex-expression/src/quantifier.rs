//! Quantifier and group kind enumerations.

use crate::error::ExpressionError;

/// Repetition suffix applied to the preceding atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Quantifier {
    /// `?`
    #[default]
    ZeroOrOne,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Quantifier {
    /// The single-character suffix for this quantifier.
    pub fn suffix(self) -> char {
        match self {
            Quantifier::ZeroOrOne => '?',
            Quantifier::ZeroOrMore => '*',
            Quantifier::OneOrMore => '+',
        }
    }
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Kind of parenthesized group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GroupKind {
    /// `( ... )`, matched text is retrievable by position.
    #[default]
    Capturing,
    /// `(?: ... )`, grouping only.
    NonCapturing,
}

impl GroupKind {
    /// The opening token for this group kind.
    pub fn opener(self) -> &'static str {
        match self {
            GroupKind::Capturing => "(",
            GroupKind::NonCapturing => "(?:",
        }
    }
}

/// Numeric group codes: `0` is capturing, `1` is non-capturing.
impl TryFrom<u8> for GroupKind {
    type Error = ExpressionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GroupKind::Capturing),
            1 => Ok(GroupKind::NonCapturing),
            other => Err(ExpressionError::UnknownGroupKind(other)),
        }
    }
}
