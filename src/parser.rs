//! Parsing of the flat term syntax produced by `Term`'s `Display` impl:
//!
//! ```text
//! term       := identifier | identifier "(" [ arglist ] ")"
//! arglist    := term { "," [ " " ] term }
//! identifier := letter { letterOrDigit }
//! ```
//!
//! A bare identifier is a variable when it starts lower-case and a constant
//! when it starts upper-case.

use log::trace;

use crate::{
    error::ParseError,
    term::{Constant, Term, Variable},
};

/// Parses `text` into a term.
///
/// # Errors
/// Fails on empty input, unbalanced parentheses, empty arguments, input after
/// the closing parenthesis and identifiers that are not `letter {letterOrDigit}`.
pub fn parse_expression(text: &str) -> Result<Term, ParseError> {
    let term = parse_at(text, 0)?;
    trace!("parsed `{text}` as {term:?}");
    Ok(term)
}

/// Parses `text`, which starts at byte `offset` of the original input.
fn parse_at(text: &str, offset: usize) -> Result<Term, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut depth = 0usize;
    let mut operator: Option<&str> = None;
    // Byte index where the argument currently being scanned begins.
    let mut start = 0;
    let mut arguments: Vec<(usize, &str)> = Vec::new();
    let mut closed = false;

    for (j, c) in text.char_indices() {
        if closed {
            return Err(ParseError::TrailingInput {
                position: offset + j,
            });
        }
        match c {
            '(' => {
                if operator.is_none() {
                    operator = Some(&text[..j]);
                    start = j + 1;
                }
                depth += 1;
            }
            ')' => {
                match depth {
                    0 => {
                        return Err(ParseError::UnbalancedParens {
                            position: offset + j,
                        })
                    }
                    1 => {
                        let argument = &text[start..j];
                        // `P()` has no arguments, but `P(A, )` has an empty one.
                        if !argument.is_empty() || !arguments.is_empty() {
                            arguments.push((start, argument));
                        }
                        closed = true;
                    }
                    _ => {}
                }
                depth -= 1;
            }
            ',' if depth == 1 => {
                arguments.push((start, &text[start..j]));
                start = j + 1;
            }
            ' ' if depth >= 1 && start == j => start += 1,
            _ => {}
        }
    }

    if depth != 0 {
        return Err(ParseError::UnbalancedParens {
            position: offset + text.len(),
        });
    }

    let Some(operator) = operator else {
        return parse_leaf(text);
    };
    check_identifier(operator)?;

    let arguments = arguments
        .into_iter()
        .map(|(at, argument)| {
            if argument.is_empty() {
                Err(ParseError::EmptyArgument {
                    position: offset + at,
                })
            } else {
                parse_at(argument, offset + at)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Term::expression(operator, arguments))
}

fn parse_leaf(identifier: &str) -> Result<Term, ParseError> {
    check_identifier(identifier)?;
    if identifier.starts_with(char::is_lowercase) {
        Ok(Variable::new(identifier)?.into())
    } else if identifier.starts_with(char::is_uppercase) {
        Ok(Constant::new(identifier)?.into())
    } else {
        // A letter without case, so neither a variable nor a constant.
        Err(invalid(identifier))
    }
}

fn check_identifier(identifier: &str) -> Result<(), ParseError> {
    let mut chars = identifier.chars();
    match chars.next() {
        None => Err(ParseError::Empty),
        Some(c) if c.is_alphabetic() && chars.all(char::is_alphanumeric) => Ok(()),
        Some(_) => Err(invalid(identifier)),
    }
}

fn invalid(identifier: &str) -> ParseError {
    ParseError::InvalidIdentifier {
        identifier: identifier.to_string(),
    }
}
