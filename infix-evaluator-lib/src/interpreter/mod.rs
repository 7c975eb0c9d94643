pub mod error;
pub mod evaluator;
pub mod expression;
pub mod lexer;
pub mod operator;
pub mod resolver;
pub mod validator;

use crate::interpreter::error::{ConstructionError, Error};
use crate::interpreter::expression::{Binding, Expression};

/// Validates and evaluates the given expression in one step.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `binding`: Values of the variables present in the expression.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::evaluate;
/// use infix_evaluator::Binding;
/// # use infix_evaluator::Error;
///
/// # fn main() -> Result<(), Error> {
/// let binding = Binding::from([("x".to_string(), 4.0)]);
/// let value = evaluate("1 - sqrt(x)", &binding)?;
/// assert_eq!(value, -1.0);
/// # Ok(()) }
/// ```
pub fn evaluate(expression: &str, binding: &Binding) -> Result<f64, Error> {
    let expression = Expression::new(expression)?;
    Ok(expression.evaluate_with(binding)?)
}

/// Lists the variables of the given expression, in order of first appearance.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The names of the variables that must be bound to evaluate it.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::variables;
///
/// let names = variables("a * x^2 + b * x + c").unwrap();
/// assert_eq!(names, vec!["a", "x", "b", "c"]);
/// ```
pub fn variables(expression: &str) -> Result<Vec<String>, ConstructionError> {
    let expression = Expression::new(expression)?;
    Ok(expression.variables().map(str::to_string).collect())
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::EvalError;
    use parameterized_macro::parameterized;

    #[parameterized(
        expression = {
            "5 + -6",
            "-5 + 3",
            "1 - sqrt(25)",
            "sqrt(sqrt(16))",
            "2 + 3 * 4 ^ 2 / 8",
            "(2 + 3) * (4 - 1) % 4",
            "round(rad2deg(PI / 4))",
            "abs(-3) - -2"
        },
        expected_value = {
            -1.0,
            -2.0,
            -4.0,
            2.0,
            8.0,
            3.0,
            45.0,
            5.0
        }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = evaluate(expression, &Binding::new()).unwrap();
        assert_eq!(actual_value, expected_value);
    }

    #[parameterized(
        expression = { "5 -+ 6", "(5 + 6", "5 + 6)", "1.2.3", "PI+9E", "" }
    )]
    fn evaluate_malformed_expression_returns_construction_error(expression: &str) {
        let result = evaluate(expression, &Binding::new());
        assert!(matches!(
            result,
            Err(Error::Construction(ConstructionError::InvalidSyntax(_)))
        ));
    }

    #[test]
    fn evaluate_with_missing_variable_names_it() {
        let binding = Binding::from([("x".to_string(), 1.0)]);

        let result = evaluate("x + y", &binding);

        assert_eq!(
            result,
            Err(Error::Evaluation(EvalError::UndefinedVariable(
                "y".to_string()
            )))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "variable `y` is undefined"
        );
    }

    #[test]
    fn variables_of_malformed_expression_is_error() {
        assert!(variables("x + ").is_ok());
        assert!(variables("x + (").is_err());
    }
}
