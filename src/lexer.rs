use crate::token::{Op, Token};
use std::fmt::{self, Display, Formatter};
use std::iter::Peekable;
use std::str::Chars;

#[must_use]
/// Check if `word` is one of the expression variables
///
/// # Examples
///
/// ```
/// # use veritable::is_variable;
///
/// assert_eq!(is_variable("A"), true);
/// assert_eq!(is_variable("a"), false);
/// assert_eq!(is_variable("D"), false);
/// ```
pub fn is_variable(word: &str) -> bool {
    matches!(word, "A" | "B" | "C")
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `string`
    pub fn new(string: &str) -> Lexer {
        Lexer {
            input: string.chars().peekable(),
        }
    }

    /// Split the input into tokens.
    ///
    /// Whitespace separates tokens and is discarded. Parentheses are always
    /// standalone tokens, even when glued to their neighbors. Any other run
    /// of characters accumulates into one word. No validation happens here:
    /// a word that is neither a variable nor an operator is passed through
    /// and classified during conversion.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(c) = self.input.next() {
            match c {
                c if c.is_whitespace() => continue,
                '(' => tokens.push(Token::LParen),
                ')' => tokens.push(Token::RParen),
                c => {
                    let mut word = String::new();
                    word.push(c);
                    'word: while let Some(&c) = self.input.peek() {
                        if c.is_whitespace() || c == '(' || c == ')' {
                            break 'word;
                        }
                        self.input.next();
                        word.push(c);
                    }
                    tokens.push(Token::Word(word));
                }
            }
        }

        tokens
    }
}

/// A non-fatal condition noticed while converting to postfix
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A word that is neither a variable, an operator nor a parenthesis.
    /// The word is dropped from the postfix output.
    UnknownWord(String),
}

impl Display for Diagnostic {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::UnknownWord(word) => write!(fmt, "undefined operator {}", word),
        }
    }
}

/// The outcome of an infix-to-postfix conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The expression in reverse polish notation
    pub postfix: Vec<Token>,
    /// Everything that was dropped along the way
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert infix `tokens` to postfix with the shunting-yard algorithm.
///
/// Variables go straight to the output. An operator first pops every
/// stacked operator of greater or equal precedence (never past an open
/// paren), so same-rank binary operators group left to right. A close
/// paren drains the stack to its matching open paren; one with no match is
/// absorbed without complaint. Unknown words are dropped from the output
/// and reported in the returned diagnostics.
///
/// The conversion itself never fails. Malformed input degrades the postfix
/// sequence instead, and shows up later as an evaluation error.
pub fn to_postfix(tokens: &[Token]) -> Conversion {
    let mut output = Vec::new();
    let mut operators: Vec<Token> = Vec::new();
    let mut diagnostics = Vec::new();

    for token in tokens {
        match token {
            Token::Word(word) if is_variable(word) => output.push(token.clone()),
            Token::Word(word) => {
                if let Some(op) = Op::from_word(word) {
                    'operators: loop {
                        let pop_me = match operators.last() {
                            Some(Token::Word(top)) => match Op::from_word(top) {
                                Some(top) => top.precedence() >= op.precedence(),
                                None => false,
                            },
                            _ => false,
                        };
                        if !pop_me {
                            break 'operators;
                        }
                        output.extend(operators.pop());
                    }
                    operators.push(token.clone());
                } else {
                    log::warn!("undefined operator {}", word);
                    diagnostics.push(Diagnostic::UnknownWord(word.clone()));
                }
            }
            Token::LParen => operators.push(token.clone()),
            Token::RParen => {
                while let Some(top) = operators.pop() {
                    match top {
                        Token::LParen => break,
                        other => output.push(other),
                    }
                }
            }
        }
    }

    // Anything still stacked goes to the output, top first. Open parens
    // that never found their match are discarded: they cannot evaluate.
    while let Some(top) = operators.pop() {
        if top != Token::LParen {
            output.push(top);
        }
    }

    Conversion {
        postfix: output,
        diagnostics,
    }
}
