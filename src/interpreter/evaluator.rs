/// Dispatch between the decimal and Roman sub-evaluators.
///
/// Validates the expression shape, classifies both operands and rejects
/// mixed numeral systems before any arithmetic happens.
pub mod core;

/// Arithmetic on decimal operands.
pub mod decimal;

/// Arithmetic on Roman operands, including conversion of the result back to
/// a Roman numeral.
pub mod roman;
