use crate::{
    ast::BinaryOperator,
    error::CalcError,
    interpreter::{
        classifier::NumeralSystem,
        evaluator::core::{EvalResult, OPERAND_RANGE},
        numeral::{int_to_roman, roman_to_int},
    },
};

/// Evaluates an operation on two Roman operands.
///
/// Both operands are decoded and must lie in [`OPERAND_RANGE`]. The result is
/// encoded back as a Roman numeral; since Roman numerals have no zero or
/// negative values, a result below one is rejected.
///
/// # Errors
/// - [`CalcError::MalformedExpression`] if an operand contains a non-Roman
///   symbol.
/// - [`CalcError::OperandOutOfRange`] if an operand decodes outside the
///   accepted range.
/// - [`CalcError::ResultBelowRomanFloor`] if the result is less than one.
///
/// # Example
/// ```
/// use romanus::{
///     ast::BinaryOperator,
///     error::CalcError,
///     interpreter::evaluator::roman::eval_roman,
/// };
///
/// assert_eq!(eval_roman("X", BinaryOperator::Add, "I"), Ok("XI".to_string()));
/// assert_eq!(eval_roman("I", BinaryOperator::Sub, "X"), Err(CalcError::ResultBelowRomanFloor));
/// ```
pub fn eval_roman(left: &str, op: BinaryOperator, right: &str) -> EvalResult<String> {
    let left = decode_operand(left)?;
    let right = decode_operand(right)?;

    let result = op.apply(i64::from(left), i64::from(right));

    u32::try_from(result).ok()
                         .filter(|value| *value >= 1)
                         .map(int_to_roman)
                         .ok_or(CalcError::ResultBelowRomanFloor)
}

fn decode_operand(raw: &str) -> EvalResult<u32> {
    let value = roman_to_int(raw).ok_or(CalcError::MalformedExpression)?;

    if !OPERAND_RANGE.contains(&value) {
        return Err(CalcError::OperandOutOfRange { system: NumeralSystem::Roman });
    }

    Ok(value)
}
