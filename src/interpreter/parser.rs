use logos::Logos;
use tracing::debug;

use crate::{ast::RawExpression, interpreter::lexer::Token};

/// Splits a whitespace-free line into its operand and operator spans.
///
/// Every operator symbol is appended to the operator span. Other characters
/// go to the left operand until the first operator has been seen, and to the
/// right operand afterwards. This never fails; a missing or repeated operator
/// shows up as an operator span whose length is not one.
///
/// # Example
/// ```
/// use romanus::interpreter::parser::tokenize;
///
/// let raw = tokenize("3+4-2");
/// assert_eq!(raw.left, "3");
/// assert_eq!(raw.operator, "+-");
/// assert_eq!(raw.right, "42");
/// ```
#[must_use]
pub fn tokenize(line: &str) -> RawExpression {
    let mut raw = RawExpression::default();

    for token in Token::lexer(line).flatten() {
        match token {
            Token::Operator(symbol) => raw.operator.push(symbol),
            Token::Text(text) if raw.operator.is_empty() => raw.left.push_str(text),
            Token::Text(text) => raw.right.push_str(text),
        }
    }

    debug!(left = %raw.left, operator = %raw.operator, right = %raw.right, "tokenized line");

    raw
}
