//! Indented debug dump of expression trees
//!
//! Renders pair chains one atom per line, the cdr indented four dashes
//! deeper than its car, with an explicit `nil` marker at list end. Meant
//! for eyeballing tree shape, not for re-serialization; use the `Display`
//! impl on [`Expression`] for that.

use std::fmt::Write;

use super::expr::Expression;

/// Indent step between a car and the chain hanging off its cdr.
const INDENT_STEP: usize = 4;

/// Renders the expression tree as an indented multi-line string.
pub fn dump(expr: &Expression) -> String {
    let mut out = String::new();
    write_indented(&mut out, expr, 0);
    out
}

fn write_indented(out: &mut String, expr: &Expression, indent: usize) {
    match expr {
        Expression::Pair { car, cdr } => {
            write_indented(out, car, indent);
            match cdr.as_ref() {
                Expression::Nil => line(out, indent, "nil"),
                other => write_indented(out, other, indent + INDENT_STEP),
            }
        }
        Expression::Nil => line(out, indent, "nil"),
        atom => line(out, indent, &atom.to_string()),
    }
}

fn line(out: &mut String, indent: usize, text: &str) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}{}", "-".repeat(indent), text);
}
