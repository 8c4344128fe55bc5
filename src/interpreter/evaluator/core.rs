use std::ops::RangeInclusive;

use tracing::debug;

use crate::{
    ast::{Expression, RawExpression},
    error::CalcError,
    interpreter::{
        classifier::Operand,
        evaluator::{decimal::eval_decimal, roman::eval_roman},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `CalcError` describing the failure.
pub type EvalResult<T> = Result<T, CalcError>;

/// Accepted operand values, shared by both numeral systems (`1..=10` and
/// `I..=X`).
pub const OPERAND_RANGE: RangeInclusive<u32> = 1..=10;

/// Evaluates a tokenized expression.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. The operator span must be exactly one symbol, both operand spans must
///    be non-empty, and both operands must be decimal or Roman. Otherwise the
///    expression is malformed.
/// 2. Both operands must use the same numeral system.
/// 3. The matching sub-evaluator applies its range rules and computes the
///    result.
///
/// # Errors
/// Returns the [`CalcError`] produced by the first failing check.
///
/// # Example
/// ```
/// use romanus::{
///     error::CalcError,
///     interpreter::{evaluator::core::eval_expression, parser::tokenize},
/// };
///
/// assert_eq!(eval_expression(tokenize("VI*II")), Ok("XII".to_string()));
/// assert_eq!(eval_expression(tokenize("6*II")), Err(CalcError::MixedNumeralSystems));
/// ```
pub fn eval_expression(raw: RawExpression) -> EvalResult<String> {
    let expression = Expression::try_from(raw)?;
    let left = Operand::classify(expression.left());
    let right = Operand::classify(expression.right());
    let operator = expression.operator();

    let result = match (left, right) {
        (Operand::Invalid(_), _) | (_, Operand::Invalid(_)) => {
            Err(CalcError::MalformedExpression)
        },
        (Operand::Decimal(left), Operand::Decimal(right)) => eval_decimal(left, operator, right),
        (Operand::Roman(left), Operand::Roman(right)) => eval_roman(left, operator, right),
        (Operand::Decimal(_), Operand::Roman(_)) | (Operand::Roman(_), Operand::Decimal(_)) => {
            Err(CalcError::MixedNumeralSystems)
        },
    };

    debug!(?left, %operator, ?right, ?result, "evaluated expression");

    result
}
