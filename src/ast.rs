use crate::error::CalcError;

/// The raw output of the tokenizer.
///
/// Holds the characters found before the first operator symbol, the characters
/// found after it, and every operator symbol encountered, in order. Nothing is
/// validated here: an empty or multi-character `operator` is a legitimate
/// value that is rejected later when building an [`Expression`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExpression {
    /// Operand characters seen before the first operator symbol.
    pub left:     String,
    /// Operand characters seen after the first operator symbol.
    pub right:    String,
    /// All operator symbols, concatenated.
    pub operator: String,
}

/// A well-formed binary expression.
///
/// An `Expression` always has exactly one operator and two non-empty operand
/// spans. The only way to obtain one is [`Expression::try_from`] on a
/// [`RawExpression`], so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    left:     String,
    operator: BinaryOperator,
    right:    String,
}

impl Expression {
    /// The left operand as written.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The right operand as written.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }

    /// The operator between the two operands.
    #[must_use]
    pub const fn operator(&self) -> BinaryOperator {
        self.operator
    }
}

impl TryFrom<RawExpression> for Expression {
    type Error = CalcError;

    /// Validates the shape of a tokenized line.
    ///
    /// # Errors
    /// Returns [`CalcError::MalformedExpression`] if the operator span is not
    /// exactly one character or if either operand span is empty.
    fn try_from(raw: RawExpression) -> Result<Self, Self::Error> {
        let mut symbols = raw.operator.chars();
        let operator = match (symbols.next(), symbols.next()) {
            (Some(symbol), None) => BinaryOperator::try_from(symbol)?,
            _ => return Err(CalcError::MalformedExpression),
        };

        if raw.left.is_empty() || raw.right.is_empty() {
            return Err(CalcError::MalformedExpression);
        }

        Ok(Self { left: raw.left,
                  operator,
                  right: raw.right })
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Applies the operator to two integers.
    ///
    /// Division truncates toward zero. Callers guarantee a non-zero divisor.
    ///
    /// # Example
    /// ```
    /// use romanus::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.apply(7, 2), 3);
    /// assert_eq!(BinaryOperator::Sub.apply(1, 10), -9);
    /// ```
    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }

    /// The symbol this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = CalcError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(CalcError::MalformedExpression),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
