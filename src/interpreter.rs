/// The classifier module decides which numeral system an operand is written in.
///
/// # Responsibilities
/// - Matches raw operands against the decimal and Roman numeral grammars.
/// - Produces a single tagged [`classifier::Operand`] per operand.
pub mod classifier;
/// The evaluator module computes the result of an expression.
///
/// The evaluator dispatches on the operands' numeral systems, enforces the
/// operand range, performs the arithmetic and, for Roman operands, converts
/// the result back to a Roman numeral.
///
/// # Responsibilities
/// - Rejects malformed and mixed-system expressions.
/// - Applies the operand range and Roman result floor.
/// - Formats the result in the numeral system of the inputs.
pub mod evaluator;
/// The lexer module splits an input line into operator and text tokens.
pub mod lexer;
/// Conversion between Roman numerals and integers.
pub mod numeral;
/// The parser module turns a token stream into a [`crate::ast::RawExpression`].
///
/// # Responsibilities
/// - Accumulates operand characters on the correct side of the operator.
/// - Collects every operator symbol so that repeated or missing operators
///   can be detected downstream.
pub mod parser;
