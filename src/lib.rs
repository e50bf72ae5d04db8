#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::needless_return, clippy::missing_docs_in_private_items)]

//! Veritable, a crate for boolean expressions and their truth tables.
//!
//! This crate parses boolean-logic expressions over the variables `A`, `B`
//! and `C`, evaluates them step by step, and builds complete truth tables.
//! The easiest way to use it is with the [`eval`](fn.eval.html) function:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut inputs = HashMap::new();
//! inputs.insert('A', true);
//! inputs.insert('B', false);
//! assert_eq!(veritable::eval("A AND B", &inputs), Ok(false));
//! ```
//!
//! It is also possible to separate parsing from evaluation with the
//! [`Expr`](struct.Expr.html) type. This allows reusing the same expression
//! with different truth values, and exposes the intermediate steps of each
//! evaluation:
//!
//! ```
//! use std::collections::HashMap;
//! use veritable::Expr;
//!
//! let expr = Expr::new("(A AND B) XOR NOT C");
//!
//! let mut inputs = HashMap::new();
//! inputs.insert('A', true);
//! inputs.insert('B', true);
//! inputs.insert('C', true);
//!
//! let evaluation = expr.evaluate(&inputs).unwrap();
//! assert_eq!(evaluation.result, true);
//! assert_eq!(evaluation.steps[0].label, "(A AND B)");
//! ```
//!
//! A [`TruthTable`](struct.TruthTable.html) enumerates every input
//! combination of the variables an expression actually uses, one row per
//! combination:
//!
//! ```
//! use veritable::{Expr, TruthTable};
//!
//! let expr = Expr::new("A OR B");
//! let table = TruthTable::new(&expr);
//! assert_eq!(table.assignments().len(), 4);
//!
//! println!("{}", table.render().unwrap());
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - the variables `A`, `B` and `C`;
//! - left and right parenthesis;
//! - the operator words `AND`, `OR`, `NOT`, `NAND`, `NOR` and `XOR`,
//!   uppercase only.
//!
//! `NOT` binds strongest, then `AND`/`NAND`, then `OR`/`NOR`/`XOR`;
//! operators of equal precedence group left to right. Tokens are separated
//! by whitespace, except parentheses which stand alone wherever they
//! appear.
//!
//! Anything else is not rejected up front: unknown words are dropped during
//! infix-to-postfix conversion and reported as
//! [`Diagnostic`](enum.Diagnostic.html)s, and the degraded expression then
//! fails evaluation with a
//! [`MalformedExpression`](enum.Error.html#variant.MalformedExpression)
//! error rather than a panic. An unmatched closing parenthesis is silently
//! absorbed.
//!
//! # Technical details
//!
//! veritable uses a simple shunting-yard conversion to reverse polish
//! notation and evaluates the result with two parallel stacks, one for
//! boolean values and one for the human-readable labels that become the
//! step columns of a truth table. Evaluation is pure: the same expression
//! and the same inputs always produce the same steps and result.

#[macro_use]
extern crate lazy_static;

mod error;
mod eval;
mod expr;
mod lexer;
mod table;
mod token;
mod util;

pub use crate::error::Error;
pub use crate::eval::{evaluate, Assignment, Evaluation, Step};
pub use crate::expr::{eval, Expr};
pub use crate::lexer::{is_variable, to_postfix, Conversion, Diagnostic, Lexer};
pub use crate::table::{Row, TruthTable};
pub use crate::token::{Op, Token};
pub use crate::util::OPERATORS;
