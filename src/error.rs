//! Evaluation errors.

use std::fmt;

/// Reason an expression is malformed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Malformed {
    /// An operator found fewer operands on the stack than it needs.
    MissingOperands { operator: char, required: usize, found: usize },
    /// The stack does not hold exactly one value after the scan.
    /// `count == 0` for empty input.
    LeftoverOperands { count: usize },
}

/// Error type for evaluation of postfix expressions.
///
/// Positions are 0-based character indices into the expression.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EvalError {
    /// Character outside the recognized alphabet.
    UnknownSymbol { position: usize, symbol: char },
    /// Operator arity or final stack depth violated.
    /// `position` is `None` when the problem is detected after the scan.
    MalformedExpression { position: Option<usize>, kind: Malformed },
}

impl EvalError {
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::UnknownSymbol { position, .. } => Some(*position),
            EvalError::MalformedExpression { position, .. } => *position,
        }
    }

    pub fn is_unknown_symbol(&self) -> bool {
        matches!(self, EvalError::UnknownSymbol { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, EvalError::MalformedExpression { .. })
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformed::MissingOperands {
                operator,
                required,
                found,
            } => {
                let noun = if *required == 1 { "operand" } else { "operands" };
                write!(f, "operator '{}' requires {} {}, found {}", operator, required, noun, found)
            }
            Malformed::LeftoverOperands { count } => {
                write!(f, "expected exactly one value after evaluation, found {}", count)
            }
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownSymbol { position, symbol } => {
                write!(f, "error at position {}: unknown symbol '{}'", position, symbol)
            }
            EvalError::MalformedExpression { position: Some(i), kind } => {
                write!(f, "error at position {}: malformed expression: {}", i, kind)
            }
            EvalError::MalformedExpression { position: None, kind } => {
                write!(f, "malformed expression: {}", kind)
            }
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_symbol() {
        let e = EvalError::UnknownSymbol { position: 1, symbol: '$' };
        assert_eq!(e.to_string(), "error at position 1: unknown symbol '$'");
        assert_eq!(e.position(), Some(1));
        assert!(e.is_unknown_symbol());
    }

    #[test]
    fn test_display_missing_operands() {
        let e = EvalError::MalformedExpression {
            position: Some(0),
            kind: Malformed::MissingOperands {
                operator: '+',
                required: 2,
                found: 0,
            },
        };
        assert_eq!(
            e.to_string(),
            "error at position 0: malformed expression: operator '+' requires 2 operands, found 0"
        );
        assert!(e.is_malformed());
    }

    #[test]
    fn test_display_leftover() {
        let e = EvalError::MalformedExpression {
            position: None,
            kind: Malformed::LeftoverOperands { count: 2 },
        };
        assert_eq!(
            e.to_string(),
            "malformed expression: expected exactly one value after evaluation, found 2"
        );
        assert_eq!(e.position(), None);
    }
}
