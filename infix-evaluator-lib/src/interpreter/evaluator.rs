//! Two-stack evaluation of validated expression text.

use crate::interpreter::error::EvalError;
use crate::interpreter::expression::Binding;
use crate::interpreter::lexer::{
    is_binary_operator, is_identifier_continuation, is_identifier_start, is_literal_character,
    run_end,
};
use crate::interpreter::operator::{BinaryOperator, UnaryFunction};
use crate::interpreter::resolver::Resolver;
use log::trace;

/// An entry of the operator stack.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    OpenParenthesis,
    Operator(BinaryOperator),
}

/// Evaluates whitespace-free, validated expression text against `binding`.
///
/// Operators are resolved eagerly as soon as an operator of lower or equal
/// precedence arrives, so operators of equal precedence associate to the left,
/// exponentiation included.
pub fn evaluate(text: &str, binding: &Binding) -> Result<f64, EvalError> {
    evaluate_text(text, &Resolver::new(binding))
}

fn evaluate_text(text: &str, resolver: &Resolver) -> Result<f64, EvalError> {
    let bytes = text.as_bytes();
    let mut operands: Vec<f64> = vec![];
    let mut operators: Vec<Pending> = vec![];
    let mut index = 0;
    while index < bytes.len() {
        let character = bytes[index] as char;
        if character == '(' {
            operators.push(Pending::OpenParenthesis);
            index += 1;
        } else if character.is_ascii_digit() {
            let sign = take_negation(bytes, index, &mut operators)?;
            let end = run_end(bytes, index, is_literal_character);
            let value = parse_literal(&text[index..end])?;
            operands.push(sign * value);
            index = end;
        } else if is_identifier_start(character) {
            let sign = take_negation(bytes, index, &mut operators)?;
            let end = run_end(bytes, index, is_identifier_continuation);
            let name = &text[index..end];
            match name.parse::<UnaryFunction>() {
                Ok(function) => {
                    let argument_end = matching_parenthesis(bytes, end)?;
                    let argument = evaluate_text(&text[end..argument_end], resolver)?;
                    let value = function.evaluate(argument);
                    trace!("{}({}) = {}", function, argument, value);
                    operands.push(sign * value);
                    index = argument_end;
                }
                Err(()) => {
                    operands.push(sign * resolver.resolve(name)?);
                    index = end;
                }
            }
        } else if character == ')' {
            parse_closing_parenthesis(&mut operators, &mut operands)?;
            index += 1;
        } else if let Some(operator) = BinaryOperator::from_symbol(character) {
            // Nothing is resolved across a negating `-`.
            let follows_operator = index > 0 && is_binary_operator(bytes[index - 1] as char);
            if !follows_operator {
                resolve_preceding_operators(&mut operators, &mut operands, &operator)?;
            }
            operators.push(Pending::Operator(operator));
            index += 1;
        } else {
            return Err(EvalError::InternalError(format!(
                "unexpected character `{}` at {}",
                character, index
            )));
        }
    }

    resolve_leftover_operators(&mut operators, &mut operands)?;

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::ArityError),
    }
}

/// Returns -1 when the operand starting at `index` is negated, discarding the `-`
/// that was pushed as an operator when it was scanned. Returns 1 otherwise.
fn take_negation(
    bytes: &[u8],
    index: usize,
    operators: &mut Vec<Pending>,
) -> Result<f64, EvalError> {
    let negated = match index {
        0 => false,
        1 => bytes[0] == b'-',
        _ => {
            let before = bytes[index - 2] as char;
            bytes[index - 1] == b'-' && (before == '(' || is_binary_operator(before))
        }
    };
    if !negated {
        return Ok(1.0);
    }
    match operators.pop() {
        Some(Pending::Operator(BinaryOperator::Subtract)) => Ok(-1.0),
        _ => Err(EvalError::InternalError(format!(
            "negation at {} has no pending `-`",
            index
        ))),
    }
}

fn parse_literal(literal: &str) -> Result<f64, EvalError> {
    literal
        .parse::<f64>()
        .map_err(|_| EvalError::InternalError(format!("malformed number `{}`", literal)))
}

/// Returns the index just past the `)` matching the `(` at `start`.
fn matching_parenthesis(bytes: &[u8], start: usize) -> Result<usize, EvalError> {
    if bytes.get(start) != Some(&b'(') {
        return Err(EvalError::InternalError(format!(
            "function at {} is not followed by `(`",
            start
        )));
    }
    let mut depth = 0usize;
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(start + offset + 1);
                }
            }
            _ => {}
        }
    }
    Err(EvalError::InternalError(format!(
        "`(` at {} is never closed",
        start
    )))
}

/// Pops the two topmost operands, applies `operator` to them and pushes the result.
fn apply_operator(operator: &BinaryOperator, operands: &mut Vec<f64>) -> Result<(), EvalError> {
    let b = operands.pop().ok_or(EvalError::ArityError)?;
    let a = operands.pop().ok_or(EvalError::ArityError)?;
    let result = operator.evaluate(a, b);
    trace!("{} {} {} = {}", a, operator, b, result);
    operands.push(result);
    Ok(())
}

fn resolve_preceding_operators(
    operators: &mut Vec<Pending>,
    operands: &mut Vec<f64>,
    incoming: &BinaryOperator,
) -> Result<(), EvalError> {
    while let Some(&Pending::Operator(top_of_operator_stack)) = operators.last() {
        if !top_of_operator_stack.precedence_ge(incoming) {
            break;
        }
        operators.pop();
        apply_operator(&top_of_operator_stack, operands)?;
    }
    Ok(())
}

fn parse_closing_parenthesis(
    operators: &mut Vec<Pending>,
    operands: &mut Vec<f64>,
) -> Result<(), EvalError> {
    loop {
        match operators.pop() {
            None => {
                return Err(EvalError::InternalError(
                    "`)` has no matching `(`".to_string(),
                ))
            }
            // Discard the open parenthesis.
            Some(Pending::OpenParenthesis) => return Ok(()),
            Some(Pending::Operator(operator)) => apply_operator(&operator, operands)?,
        }
    }
}

fn resolve_leftover_operators(
    operators: &mut Vec<Pending>,
    operands: &mut Vec<f64>,
) -> Result<(), EvalError> {
    while let Some(pending) = operators.pop() {
        match pending {
            Pending::OpenParenthesis => {
                return Err(EvalError::InternalError(
                    "`(` has no matching `)`".to_string(),
                ))
            }
            Pending::Operator(operator) => apply_operator(&operator, operands)?,
        }
    }
    Ok(())
}
