//! # romanus
//!
//! romanus is a calculator for single binary expressions whose operands are
//! written either in Arabic digits or in Roman numerals, such as `3 + 4` or
//! `X / II`. Both operands must use the same numeral system, and the answer
//! is given in that system.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::core::eval_expression, parser::tokenize};

/// Defines the shape of a parsed expression.
///
/// This module declares the raw tokenizer output, the validated
/// `Expression` and the `BinaryOperator` enum.
///
/// # Responsibilities
/// - Keeps the raw operand and operator spans as the tokenizer found them.
/// - Guarantees by construction that an `Expression` has exactly one
///   operator and two non-empty operands.
pub mod ast;
/// Provides the error type for evaluation.
///
/// Every failure is one of a closed set of `CalcError` variants. Each variant
/// carries a `Disposition` telling the caller whether to keep prompting or to
/// end the session.
pub mod error;
/// Orchestrates tokenizing, classification, conversion and evaluation.
///
/// # Responsibilities
/// - Splits a line into operands and operator.
/// - Decides which numeral system each operand uses.
/// - Converts between Roman numerals and integers.
/// - Computes the result under the range rules of each numeral system.
pub mod interpreter;
/// The read/evaluate/print loop used by the command-line binary.
pub mod session;
/// Input normalization helpers.
pub mod util;

/// Evaluates one expression and returns the answer.
///
/// The line must not contain whitespace; see [`util::strip_whitespace`].
/// Decimal operands produce a decimal answer and Roman operands produce a
/// Roman answer.
///
/// # Errors
/// Returns a [`error::CalcError`] if the expression is malformed, mixes
/// numeral systems, has an operand outside 1 to 10, or yields a Roman result
/// below one. The error's disposition says whether the caller should stop.
///
/// # Examples
/// ```
/// use romanus::{error::CalcError, evaluate};
///
/// assert_eq!(evaluate("3+4"), Ok("7".to_string()));
/// assert_eq!(evaluate("X+I"), Ok("XI".to_string()));
///
/// let err = evaluate("3+I").unwrap_err();
/// assert_eq!(err, CalcError::MixedNumeralSystems);
/// assert!(err.terminates_session());
/// ```
pub fn evaluate(line: &str) -> Result<String, error::CalcError> {
    eval_expression(tokenize(line))
}
