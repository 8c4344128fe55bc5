use crate::interpreter::classifier::NumeralSystem;

/// What the caller should do after an evaluation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Report the error and prompt for the next expression.
    Continue,
    /// Report the error and end the session.
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum CalcError {
    /// The operator is missing or repeated, an operand span is empty, or an
    /// operand is neither a decimal nor a Roman numeral.
    MalformedExpression,
    /// One operand is decimal and the other is Roman.
    MixedNumeralSystems,
    /// An operand lies outside the accepted operand range.
    OperandOutOfRange {
        /// The numeral system the operands were written in.
        system: NumeralSystem,
    },
    /// A Roman calculation produced zero or a negative number, which has no
    /// Roman representation.
    ResultBelowRomanFloor,
}

impl CalcError {
    /// Returns how the caller should proceed after this error.
    ///
    /// # Example
    /// ```
    /// use romanus::error::{CalcError, Disposition};
    ///
    /// assert_eq!(CalcError::MalformedExpression.disposition(), Disposition::Continue);
    /// assert_eq!(CalcError::MixedNumeralSystems.disposition(), Disposition::Stop);
    /// ```
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        match self {
            Self::MalformedExpression | Self::ResultBelowRomanFloor => Disposition::Continue,
            Self::MixedNumeralSystems | Self::OperandOutOfRange { .. } => Disposition::Stop,
        }
    }

    /// Shorthand for `disposition() == Disposition::Stop`.
    #[must_use]
    pub const fn terminates_session(&self) -> bool {
        matches!(self.disposition(), Disposition::Stop)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression => {
                write!(f, "Input error: the expression is not a valid arithmetic operation.")
            },
            Self::MixedNumeralSystems => {
                write!(f, "Input error: operands use different numeral systems.")
            },
            Self::OperandOutOfRange { system } => {
                let (low, high) = system.range_labels();
                write!(f, "Input error: {system} operands must be in the range {low} to {high}.")
            },
            Self::ResultBelowRomanFloor => write!(f,
                                                  "Input error: the result of a Roman calculation cannot be less than I."),
        }
    }
}

impl std::error::Error for CalcError {}
