//! Patterns as data.
//!
//! A [`Pattern`] is a tree of [`Node`]s that describes the same compositions
//! the builder does, but as a value: it can be assembled ahead of time,
//! inspected, compared and (with the `serde` feature) stored. Rendering folds
//! the tree onto an [`Expression`](crate::Expression) through the ordinary
//! primitives, so both layers produce byte-identical text.
//!
//! ## Example
//!
//! ```rust
//! use regex_expression::pattern::{Node, Pattern};
//!
//! let pattern = Pattern::new()
//!     .push(Node::capture(vec![
//!         Node::Digit,
//!         Node::exact(2),
//!         Node::Char('.'),
//!         Node::Digit,
//!         Node::exact(2),
//!     ]));
//!
//! assert_eq!(pattern.to_string(), r"(\d{2,2}.\d{2,2})");
//! assert!(pattern.compile().unwrap().is_full_match("20.05"));
//! ```

mod render;

use crate::bound::Bound;
use crate::compiled::CompiledPattern;
use crate::error::ExpressionResult;
use crate::expression::Expression;
use crate::options::MatchOptions;
use crate::quantifier::{GroupKind, Quantifier};

/// One element of a pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Node {
    /// `^`
    Start,
    /// `$`
    End,
    /// `|`
    Or,
    /// Verbatim text.
    Text(String),
    /// Verbatim character.
    Char(char),
    /// Backslash-escaped character.
    Literal(char),
    /// `\d`
    Digit,
    /// `\w`
    Word,
    /// A range, rendered by the endpoint/delimiter rule.
    Range {
        /// Lower endpoint.
        min: Bound,
        /// Upper endpoint.
        max: Bound,
        /// Delimiter, `-` or `,` for the wrapped forms.
        delim: char,
    },
    /// Quantifier suffix.
    Quantifier(Quantifier),
    /// `[` children `]`
    Class(Vec<Node>),
    /// Group opener, children, `)`.
    Group {
        /// Group kind.
        kind: GroupKind,
        /// Group contents.
        nodes: Vec<Node>,
    },
    /// Children in order, no output of its own.
    Sequence(Vec<Node>),
}

impl Node {
    /// Verbatim text node.
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Range with the `-` delimiter.
    pub fn range(min: impl Into<Bound>, max: impl Into<Bound>) -> Self {
        Self::range_with(min, max, '-')
    }

    /// Range with an explicit delimiter.
    pub fn range_with(min: impl Into<Bound>, max: impl Into<Bound>, delim: char) -> Self {
        Node::Range {
            min: min.into(),
            max: max.into(),
            delim,
        }
    }

    /// `{n,n}`
    pub fn exact(times: usize) -> Self {
        Self::range_with(times, times, ',')
    }

    /// Capturing group.
    pub fn capture(nodes: Vec<Node>) -> Self {
        Node::Group {
            kind: GroupKind::Capturing,
            nodes,
        }
    }

    /// Non-capturing group.
    pub fn nocapture(nodes: Vec<Node>) -> Self {
        Node::Group {
            kind: GroupKind::NonCapturing,
            nodes,
        }
    }

    /// Character class.
    pub fn class(nodes: Vec<Node>) -> Self {
        Node::Class(nodes)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut expr = Expression::new();
        render::render_node(self, &mut expr);
        f.write_str(expr.as_str())
    }
}

/// A pattern tree plus the options it compiles with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    /// Compilation options.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "MatchOptions::is_empty")
    )]
    pub options: MatchOptions,

    /// Top-level nodes, rendered in order.
    pub nodes: Vec<Node>,
}

impl Pattern {
    /// Create an empty pattern with no options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pattern with `options`.
    pub fn with_options(options: impl Into<MatchOptions>) -> Self {
        Self {
            options: options.into(),
            nodes: vec![],
        }
    }

    /// Append a top-level node.
    pub fn push(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Render the tree onto a fresh expression.
    pub fn to_expression(&self) -> Expression {
        let mut expr = Expression::with_options(self.options.clone());
        for node in &self.nodes {
            render::render_node(node, &mut expr);
        }
        expr
    }

    /// Render and compile.
    pub fn compile(&self) -> ExpressionResult<CompiledPattern> {
        self.to_expression().compile()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_expression().as_str())
    }
}

impl FromIterator<Node> for Pattern {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            options: MatchOptions::default(),
            nodes: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
