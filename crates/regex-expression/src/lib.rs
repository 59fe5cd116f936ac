//! # regex-expression
//!
//! A fluent, composable builder for regular expressions.
//!
//! This crate provides:
//! - **Expression**: an append-only pattern accumulator with one method per
//!   primitive (anchors, quantifiers, classes, groups, literals, ranges)
//! - **ExpressionBuilder**: a declarative layer where nested blocks wrap
//!   primitives, e.g. `capture(|b| ...)`
//! - **Pattern**: the same compositions as a data tree, rendered in one pass
//!
//! Compilation is delegated to the [`regex`] crate.
//!
//! ## Builder Usage
//!
//! ```rust
//! use regex_expression::expression;
//!
//! let date = expression(|b| {
//!     b.capture(|b| {
//!         b.digit(|b| { b.exact(2); })
//!             .char('.')
//!             .digit(|b| { b.exact(2); })
//!             .char('.')
//!             .digit(|b| { b.exact(4); });
//!     });
//! });
//!
//! assert_eq!(date.as_str(), r"(\d{2,2}.\d{2,2}.\d{4,4})");
//!
//! let compiled = date.compile().unwrap();
//! assert!(compiled.is_full_match("20.05.2017"));
//! ```
//!
//! ## Options
//!
//! ```rust
//! use regex_expression::{expression_with, MatchOption};
//!
//! let shout = expression_with(MatchOption::IgnoreCase, |b| {
//!     b.capture(|b| {
//!         b.string("Catch me").literal('!');
//!     });
//! });
//!
//! assert!(shout.compile().unwrap().is_full_match("CAtCh Me!"));
//! ```
//!
//! ## Primitive Quick Reference
//!
//! | Builder | Expression | Appends |
//! |---------|------------|---------|
//! | `start` / `end` / `or` | `mark_start` / `mark_end` / `mark_or` | `^` `$` `\|` |
//! | `quantity(q)` | `quantity(q)` | `?` `*` `+` |
//! | `range(0, 9)` | `range(0, 9)` | `[0-9]` |
//! | `range_with(0, 9, ',')` | `range_with(0, 9, ',')` | `{0,9}` |
//! | `range('A', 'z')` | `range('A', 'z')` | `A-z` |
//! | `exact(n)` | `exact(n)` | `{n,n}` |
//! | `literal(c)` | `set_literal(c)` | `\c` |
//! | `string(s)` / `char(c)` | `set_string(s)` / `set_char(c)` | verbatim |
//! | `digit(..)` / `word(..)` | `set_digit` / `set_word` | `\d` / `\w` |
//! | `match_class(..)` | `start_match` / `end_match` | `[` `]` |
//! | `capture(..)` | `start_group(Capturing)` / `end_group` | `(` `)` |
//! | `nocapture(..)` | `start_group(NonCapturing)` / `end_group` | `(?:` `)` |
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for options and pattern trees
//!
//! ## Logging
//!
//! [`Expression::debug`] and [`Expression::compile`] emit [`tracing`] events.
//! Install a subscriber in the application to see them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bound;
mod builder;
mod compiled;
mod error;
mod expression;
mod options;
pub mod pattern;
mod quantifier;

pub use bound::Bound;
pub use builder::{expression, expression_with, ExpressionBuilder};
pub use compiled::CompiledPattern;
pub use error::{ExpressionError, ExpressionResult};
pub use expression::Expression;
pub use options::{MatchOption, MatchOptions, MatchOptionsBuilder};
pub use quantifier::{GroupKind, Quantifier};
