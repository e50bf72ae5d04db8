use crate::error::Error;
use crate::lexer::is_variable;
use crate::token::{Op, Token};
use std::collections::HashMap;

/// Truth values for the variables of an expression, keyed by letter
pub type Assignment = HashMap<char, bool>;

/// One reduction performed during postfix evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Human-readable description of the sub-expression, e.g. `(A AND B)`
    pub label: String,
    /// The boolean the sub-expression reduced to
    pub value: bool,
}

/// The full outcome of evaluating a postfix sequence for one assignment
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Every intermediate reduction, in the order it happened
    pub steps: Vec<Step>,
    /// The value of the whole expression
    pub result: bool,
}

/// Evaluate a postfix token sequence against the truth values in `inputs`,
/// capturing one labeled [`Step`](struct.Step.html) per reduction.
///
/// Two stacks run in parallel: boolean values and the labels describing
/// how each value was obtained. A variable pushes its assigned value under
/// its own letter; `NOT` pops one pair and pushes `NOT <label>`; any other
/// operator pops the right operand first, then the left, and pushes
/// `(<left> <OP> <right>)`.
///
/// A postfix sequence degraded by dropped tokens can pop an empty stack or
/// finish with leftovers; both surface as
/// [`Error::MalformedExpression`](enum.Error.html), fatal to this
/// evaluation only. A variable missing from `inputs` is a
/// [`Error::NameError`](enum.Error.html).
pub fn evaluate(postfix: &[Token], inputs: &Assignment) -> Result<Evaluation, Error> {
    let mut values: Vec<bool> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    let mut steps = Vec::new();

    for token in postfix {
        match token {
            Token::Word(word) if is_variable(word) => {
                values.push(variable_value(word, inputs)?);
                labels.push(word.clone());
            }
            Token::Word(word) => match Op::from_word(word) {
                Some(op) if op.is_unary() => {
                    let value = values.pop().ok_or_else(|| underflow(word))?;
                    let operand = labels.pop().ok_or_else(|| underflow(word))?;

                    let result = op.eval(value, false);
                    let label = format!("{} {}", op.name(), operand);
                    steps.push(Step {
                        label: label.clone(),
                        value: result,
                    });

                    values.push(result);
                    labels.push(label);
                }
                Some(op) => {
                    // Right operand first, then left: stack order.
                    let b = values.pop().ok_or_else(|| underflow(word))?;
                    let a = values.pop().ok_or_else(|| underflow(word))?;
                    let b_label = labels.pop().ok_or_else(|| underflow(word))?;
                    let a_label = labels.pop().ok_or_else(|| underflow(word))?;

                    let result = op.eval(a, b);
                    let label = format!("({} {} {})", a_label, op.name(), b_label);
                    steps.push(Step {
                        label: label.clone(),
                        value: result,
                    });

                    values.push(result);
                    labels.push(label);
                }
                None => {
                    return Err(Error::MalformedExpression(format!(
                        "unexpected word '{}' in postfix input",
                        word
                    )));
                }
            },
            Token::LParen | Token::RParen => {
                return Err(Error::MalformedExpression(
                    "parenthesis in postfix input".into(),
                ));
            }
        }
    }

    let result = values.pop();
    if let (Some(result), true) = (result, values.is_empty()) {
        Ok(Evaluation { steps, result })
    } else {
        Err(Error::MalformedExpression(
            "evaluation did not reduce to a single value".into(),
        ))
    }
}

fn variable_value(word: &str, inputs: &Assignment) -> Result<bool, Error> {
    word.chars()
        .next()
        .and_then(|letter| inputs.get(&letter).copied())
        .ok_or_else(|| Error::NameError(format!("name '{}' is not defined", word)))
}

fn underflow(word: &str) -> Error {
    Error::MalformedExpression(format!("operator {} is missing an operand", word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{to_postfix, Lexer};

    fn postfix_of(input: &str) -> Vec<Token> {
        to_postfix(&Lexer::new(input).tokenize()).postfix
    }

    #[test]
    fn binary_step() {
        let mut inputs = Assignment::new();
        inputs.insert('A', true);
        inputs.insert('B', false);

        let evaluation = evaluate(&postfix_of("A AND B"), &inputs).unwrap();
        assert_eq!(evaluation.result, false);
        assert_eq!(
            evaluation.steps,
            vec![Step {
                label: "(A AND B)".into(),
                value: false,
            }]
        );
    }

    #[test]
    fn unary_step() {
        let mut inputs = Assignment::new();
        inputs.insert('A', false);

        let evaluation = evaluate(&postfix_of("NOT A"), &inputs).unwrap();
        assert_eq!(evaluation.result, true);
        assert_eq!(
            evaluation.steps,
            vec![Step {
                label: "NOT A".into(),
                value: true,
            }]
        );
    }

    #[test]
    fn nested_steps_in_reduction_order() {
        let mut inputs = Assignment::new();
        inputs.insert('A', true);
        inputs.insert('B', true);
        inputs.insert('C', true);

        let evaluation = evaluate(&postfix_of("(A AND B) XOR NOT C"), &inputs).unwrap();
        assert_eq!(evaluation.result, true);
        assert_eq!(
            evaluation.steps,
            vec![
                Step {
                    label: "(A AND B)".into(),
                    value: true,
                },
                Step {
                    label: "NOT C".into(),
                    value: false,
                },
                Step {
                    label: "((A AND B) XOR NOT C)".into(),
                    value: true,
                },
            ]
        );
    }

    #[test]
    fn same_inputs_same_outcome() {
        let mut inputs = Assignment::new();
        inputs.insert('A', true);
        inputs.insert('B', false);
        inputs.insert('C', true);

        let postfix = postfix_of("A NAND (B NOR C)");
        assert_eq!(
            evaluate(&postfix, &inputs).unwrap(),
            evaluate(&postfix, &inputs).unwrap()
        );
    }

    #[test]
    fn underflow_is_an_error_not_a_crash() {
        // "D" is dropped during conversion, leaving XOR one operand short
        let mut inputs = Assignment::new();
        inputs.insert('A', true);

        let result = evaluate(&postfix_of("A XOR D"), &inputs);
        assert!(matches!(result, Err(Error::MalformedExpression(_))));
    }

    #[test]
    fn leftover_operands_are_an_error() {
        let mut inputs = Assignment::new();
        inputs.insert('A', true);
        inputs.insert('B', true);

        let result = evaluate(&postfix_of("A B"), &inputs);
        assert!(matches!(result, Err(Error::MalformedExpression(_))));
    }

    #[test]
    fn empty_postfix_is_an_error() {
        let result = evaluate(&[], &Assignment::new());
        assert!(matches!(result, Err(Error::MalformedExpression(_))));
    }

    #[test]
    fn missing_variable_value_is_a_name_error() {
        let result = evaluate(&postfix_of("NOT A"), &Assignment::new());
        assert_eq!(
            result,
            Err(Error::NameError("name 'A' is not defined".into()))
        );
    }
}
