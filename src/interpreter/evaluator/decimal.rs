use crate::{
    ast::BinaryOperator,
    error::CalcError,
    interpreter::{
        classifier::NumeralSystem,
        evaluator::core::{EvalResult, OPERAND_RANGE},
    },
};

/// Evaluates an operation on two decimal operands.
///
/// Both operands must lie in [`OPERAND_RANGE`]. Digit strings too long to
/// parse are out of range as well. Division truncates toward zero; the range
/// check guarantees the divisor is never zero.
///
/// # Errors
/// Returns [`CalcError::OperandOutOfRange`] if either operand is outside the
/// accepted range.
///
/// # Example
/// ```
/// use romanus::{ast::BinaryOperator, interpreter::evaluator::decimal::eval_decimal};
///
/// assert_eq!(eval_decimal("7", BinaryOperator::Div, "2"), Ok("3".to_string()));
/// assert!(eval_decimal("0", BinaryOperator::Add, "2").is_err());
/// ```
pub fn eval_decimal(left: &str, op: BinaryOperator, right: &str) -> EvalResult<String> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;

    Ok(op.apply(i64::from(left), i64::from(right)).to_string())
}

fn parse_operand(raw: &str) -> EvalResult<u32> {
    raw.parse::<u32>()
       .ok()
       .filter(|value| OPERAND_RANGE.contains(value))
       .ok_or(CalcError::OperandOutOfRange { system: NumeralSystem::Decimal })
}
