//! Postfix evaluation of count summaries.
//!
//! The evaluator scans the expression left to right with an explicit operand
//! stack. Literals push leaf summaries, operators pop their operands and push
//! the combined summary. After the scan exactly one summary must remain.
//!
//! ```rust
//! use regex_kcount::eval::{is_k_occurrences_possible, Evaluator};
//! use regex_kcount::alphabet::Alphabet;
//!
//! assert!(is_k_occurrences_possible("aa.a*.", 'a', 4).unwrap());
//! assert!(!is_k_occurrences_possible("aa.a*.", 'a', 1).unwrap());
//!
//! let evaluator = Evaluator::new(Alphabet::new('b'));
//! let summary = evaluator.evaluate("ab.b*.").unwrap();
//! assert_eq!(summary.min_count, 1);
//! ```

use log::{debug, trace};

use crate::alphabet::{Alphabet, Token};
use crate::error::{EvalError, Malformed};
use crate::summary::CountSummary;

/// One evaluation step: the summary pushed for the token at `position`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Step {
    pub position: usize,
    pub symbol: char,
    pub token: Token,
    pub result: CountSummary,
}

/// Stack machine over postfix expressions.
#[derive(Debug, Clone)]
pub struct Evaluator {
    alphabet: Alphabet,
}

impl Evaluator {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Evaluates the expression to its final summary.
    pub fn evaluate(&self, expr: &str) -> Result<CountSummary, EvalError> {
        self.run(expr, |_| {})
    }

    /// Evaluates the expression, recording every step.
    ///
    /// Whitespace produces no step.
    pub fn trace(&self, expr: &str) -> Result<(CountSummary, Vec<Step>), EvalError> {
        let mut steps = Vec::new();
        let summary = self.run(expr, |step| steps.push(step))?;
        Ok((summary, steps))
    }

    /// Decides whether exactly `k` occurrences are admissible.
    pub fn is_possible(&self, expr: &str, k: u64) -> Result<bool, EvalError> {
        let summary = self.evaluate(expr)?;
        let res = summary.contains(k);
        debug!("is_possible(k = {}) on {} -> {}", k, summary, res);
        Ok(res)
    }

    fn leaf(&self, token: Token) -> CountSummary {
        match token {
            Token::Tracked => CountSummary::tracked(),
            Token::Empty => CountSummary::empty(),
            _ => CountSummary::other(),
        }
    }

    fn run<F>(&self, expr: &str, mut on_step: F) -> Result<CountSummary, EvalError>
    where
        F: FnMut(Step),
    {
        debug!("evaluate(expr = {:?}, tracked = {:?})", expr, self.alphabet.tracked());

        let mut stack: Vec<CountSummary> = Vec::new();

        for (position, symbol) in expr.chars().enumerate() {
            let token = self
                .alphabet
                .classify(symbol)
                .ok_or(EvalError::UnknownSymbol { position, symbol })?;

            let result = match token {
                Token::Skip => continue,
                Token::Tracked | Token::Empty | Token::Other(_) => self.leaf(token),
                Token::Star => {
                    let [operand] = pop_operands::<1>(&mut stack, position, symbol)?;
                    operand.star()
                }
                Token::Union => {
                    let [left, right] = pop_operands::<2>(&mut stack, position, symbol)?;
                    left.union(&right)
                }
                Token::Concat => {
                    let [left, right] = pop_operands::<2>(&mut stack, position, symbol)?;
                    left.concat(&right)
                }
            };

            trace!("evaluate: [{}] {} -> {} (depth = {})", position, token, result, stack.len() + 1);
            stack.push(result);
            on_step(Step {
                position,
                symbol,
                token,
                result,
            });
        }

        match stack.as_slice() {
            [summary] => {
                debug!("evaluate: result = {}", summary);
                Ok(*summary)
            }
            _ => Err(EvalError::MalformedExpression {
                position: None,
                kind: Malformed::LeftoverOperands { count: stack.len() },
            }),
        }
    }
}

/// Pops the top `N` operands, deepest first (so `[left, right]` for binary operators).
fn pop_operands<const N: usize>(
    stack: &mut Vec<CountSummary>,
    position: usize,
    operator: char,
) -> Result<[CountSummary; N], EvalError> {
    let found = stack.len();
    if found < N {
        debug!("pop_operands: operator {:?} at {} lacks operands", operator, position);
        return Err(EvalError::MalformedExpression {
            position: Some(position),
            kind: Malformed::MissingOperands {
                operator,
                required: N,
                found,
            },
        });
    }
    let base = found - N;
    let mut operands = [CountSummary::empty(); N];
    operands.copy_from_slice(&stack[base..]);
    stack.truncate(base);
    Ok(operands)
}

/// Decides whether some string matched by the postfix expression `expr` can
/// contain exactly `k` occurrences of `tracked`, using the default alphabet.
pub fn is_k_occurrences_possible(expr: &str, tracked: char, k: u64) -> Result<bool, EvalError> {
    Evaluator::new(Alphabet::new(tracked)).is_possible(expr, k)
}
