use crate::error::Error;
use crate::eval::{self, Assignment, Evaluation};
use crate::lexer::{self, Conversion, Lexer};
use crate::token::{Op, Token};
use std::collections::BTreeSet;

/// Evaluate a single expression from `input` for one assignment of truth
/// values.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// the expression is malformed or a variable has no value.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use veritable::eval;
///
/// let mut inputs = HashMap::new();
/// inputs.insert('A', true);
/// inputs.insert('B', false);
///
/// assert_eq!(eval("A AND B", &inputs), Ok(false));
/// assert_eq!(eval("A NAND B", &inputs), Ok(true));
/// ```
pub fn eval(input: &str, inputs: &Assignment) -> Result<bool, Error> {
    Expr::new(input).evaluate(inputs).map(|evaluation| evaluation.result)
}

/// A tokenized boolean expression over the variables `A`, `B` and `C`.
///
/// Construction never fails: tokenization does no validation, and unknown
/// words are only noticed (and dropped, with a diagnostic) when the
/// expression is converted to postfix. The same `Expr` can be evaluated
/// any number of times with different truth values.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use veritable::Expr;
///
/// let expr = Expr::new("(A AND B) XOR NOT C");
/// assert_eq!(expr.variables(), vec!['A', 'B', 'C']);
///
/// let mut inputs = HashMap::new();
/// inputs.insert('A', true);
/// inputs.insert('B', true);
/// inputs.insert('C', true);
///
/// let evaluation = expr.evaluate(&inputs).unwrap();
/// assert_eq!(evaluation.result, true);
/// assert_eq!(evaluation.steps.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    original: String,
    tokens: Vec<Token>,
}

impl Expr {
    /// Tokenize `expression`.
    pub fn new(expression: &str) -> Self {
        let tokens = Lexer::new(expression).tokenize();
        Expr {
            original: expression.to_string(),
            tokens,
        }
    }

    /// The expression exactly as the user wrote it
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The token sequence, in input order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Every operator appearing in the expression, in order of appearance.
    /// Duplicates are kept: `A AND B AND C` lists `AND` twice. Useful for
    /// user-facing listings next to each operator's
    /// [`explanation`](enum.Op.html#method.explanation).
    ///
    /// # Examples
    /// ```
    /// use veritable::{Expr, Op};
    ///
    /// let expr = Expr::new("A AND B AND NOT C");
    /// assert_eq!(expr.operators(), vec![Op::And, Op::And, Op::Not]);
    /// ```
    pub fn operators(&self) -> Vec<Op> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Word(word) => Op::from_word(word),
                _ => None,
            })
            .collect()
    }

    /// The variables appearing in the expression, deduplicated and sorted
    /// `A < B < C`. Words that are not declared variables never count, so
    /// `A XOR D` detects only `A`.
    ///
    /// The postfix form is scanned rather than the raw tokens: it is the
    /// normalized view the evaluator will see.
    pub fn variables(&self) -> Vec<char> {
        let Conversion { postfix, .. } = self.to_postfix();
        let mut found = BTreeSet::new();
        for token in &postfix {
            if let Token::Word(word) = token {
                if lexer::is_variable(word) {
                    found.extend(word.chars());
                }
            }
        }
        found.into_iter().collect()
    }

    /// Convert the expression to reverse polish notation, collecting
    /// diagnostics for every token that had to be dropped. Recomputed on
    /// each call.
    pub fn to_postfix(&self) -> Conversion {
        lexer::to_postfix(&self.tokens)
    }

    /// Evaluate the expression for one assignment of truth values,
    /// capturing every intermediate step.
    pub fn evaluate(&self, inputs: &Assignment) -> Result<Evaluation, Error> {
        let Conversion { postfix, .. } = self.to_postfix();
        eval::evaluate(&postfix, inputs)
    }
}
