/// Evaluation errors.
///
/// Defines the closed set of failures that can occur while evaluating a single
/// expression, together with the [`Disposition`] that tells the caller whether
/// the interactive session should continue or stop.
pub mod calc_error;

pub use calc_error::{CalcError, Disposition};
