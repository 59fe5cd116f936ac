//! Single-pass fold of a pattern tree onto an expression.

use super::Node;
use crate::expression::Expression;

/// Appends `node` and its children to `expr`, depth-first.
pub(super) fn render_node(node: &Node, expr: &mut Expression) {
    match node {
        Node::Start => {
            expr.mark_start();
        }
        Node::End => {
            expr.mark_end();
        }
        Node::Or => {
            expr.mark_or();
        }
        Node::Text(s) => {
            expr.set_string(s);
        }
        Node::Char(c) => {
            expr.set_char(*c);
        }
        Node::Literal(c) => {
            expr.set_literal(*c);
        }
        Node::Digit => {
            expr.set_digit();
        }
        Node::Word => {
            expr.set_word();
        }
        Node::Range { min, max, delim } => {
            expr.range_with(min.clone(), max.clone(), *delim);
        }
        Node::Quantifier(q) => {
            expr.quantity(*q);
        }
        Node::Class(nodes) => {
            expr.start_match();
            render_all(nodes, expr);
            expr.end_match();
        }
        Node::Group { kind, nodes } => {
            expr.start_group(*kind);
            render_all(nodes, expr);
            expr.end_group();
        }
        Node::Sequence(nodes) => render_all(nodes, expr),
    }
}

fn render_all(nodes: &[Node], expr: &mut Expression) {
    for node in nodes {
        render_node(node, expr);
    }
}
