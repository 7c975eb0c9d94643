//! Structural validation of expression text, run once before an expression is
//! accepted. Nothing is computed; a text either is well-formed or it is not.

use crate::interpreter::lexer::{
    is_binary_operator, is_identifier_continuation, is_identifier_start,
    is_literal_character, is_unary_function_name, is_valid_identifier,
    is_valid_numeric_literal, run_end, strip_whitespace,
};
use log::debug;

/// Why and where a text was rejected.
#[derive(Debug, PartialEq, Eq)]
struct Rejection {
    position: usize,
    reason: &'static str,
}

fn reject(position: usize, reason: &'static str) -> Result<(), Rejection> {
    Err(Rejection { position, reason })
}

/// Checks that `text` is a well-formed expression.
///
/// Whitespace is ignored. Parentheses must balance, operators must sit between
/// operands (a `-` may additionally negate the operand after it), numbers may hold
/// at most one decimal point, names must be valid identifiers, and function names
/// must be followed by their parenthesized operand.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::validator::validate;
///
/// assert!(validate("2 * (x + -1)"));
/// assert!(!validate("2 * (x + 1"));
/// ```
pub fn validate(text: &str) -> bool {
    let text = strip_whitespace(text);
    match check(&text) {
        Ok(()) => true,
        Err(Rejection { position, reason }) => {
            debug!("rejected `{}` at {}: {}", text, position, reason);
            false
        }
    }
}

fn check(text: &str) -> Result<(), Rejection> {
    if text.is_empty() {
        return reject(0, "expression is empty");
    }

    let bytes = text.as_bytes();
    let mut open_parentheses = 0usize;
    let mut close_parentheses = 0usize;
    let mut index = 0;
    while index < bytes.len() {
        let character = bytes[index] as char;
        let previous = index.checked_sub(1).map(|previous| bytes[previous] as char);
        match character {
            '(' => {
                open_parentheses += 1;
                if previous == Some(')') {
                    return reject(index, "`(` cannot directly follow `)`");
                }
                index += 1;
            }
            ')' => {
                close_parentheses += 1;
                if close_parentheses > open_parentheses {
                    return reject(index, "`)` has no matching `(`");
                }
                if !previous.map_or(false, ends_operand) {
                    return reject(index, "`)` must directly follow an operand");
                }
                index += 1;
            }
            '-' => {
                check_minus(bytes, index)?;
                index += 1;
            }
            character if is_binary_operator(character) => {
                if previous.map_or(true, is_binary_operator) {
                    return reject(index, "operator is missing its left operand");
                }
                index += 1;
            }
            character if character.is_ascii_digit() => {
                let end = run_end(bytes, index, is_literal_character);
                if !is_valid_numeric_literal(&text[index..end]) {
                    return reject(index, "malformed number");
                }
                index = end;
            }
            character if is_identifier_start(character) => {
                if previous.map_or(false, is_literal_character) {
                    return reject(index, "name directly follows a number");
                }
                let end = run_end(bytes, index, is_identifier_continuation);
                let name = &text[index..end];
                if is_unary_function_name(name) {
                    if bytes.get(end) != Some(&b'(') {
                        return reject(end, "function name must be followed by `(`");
                    }
                } else if !is_valid_identifier(name) {
                    return reject(index, "malformed name");
                }
                index = end;
            }
            _ => return reject(index, "unexpected character"),
        }
    }

    if open_parentheses != close_parentheses {
        return reject(bytes.len(), "`(` has no matching `)`");
    }
    Ok(())
}

/// A `-` is subtraction after an operand and negation at the start, after `(` or
/// after another operator. A negating `-` may follow at most one operator.
fn check_minus(bytes: &[u8], index: usize) -> Result<(), Rejection> {
    let previous = match index.checked_sub(1) {
        None => return Ok(()),
        Some(previous) => previous,
    };
    if !is_binary_operator(bytes[previous] as char) {
        return Ok(());
    }
    match previous.checked_sub(1).map(|before| bytes[before] as char) {
        Some(before) if !is_binary_operator(before) => Ok(()),
        _ => reject(index, "too many operators in a row"),
    }
}

fn ends_operand(character: char) -> bool {
    is_literal_character(character) || is_identifier_continuation(character) || character == ')'
}
