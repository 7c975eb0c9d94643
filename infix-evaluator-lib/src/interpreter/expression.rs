use crate::interpreter::error::{ConstructionError, EvalError};
use crate::interpreter::lexer::{identifiers, is_unary_function_name, strip_whitespace};
use crate::interpreter::resolver::is_predefined_constant;
use crate::interpreter::{evaluator, validator};
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str;

/// Values of the variables an expression is evaluated with, by name.
pub type Binding = HashMap<String, f64>;

/// A structurally well-formed infix expression.
///
/// The text is validated once when the expression is created and kept without
/// whitespace. Evaluation can still fail, for example when a variable is missing
/// from the binding, but the expression itself never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    text: String,
}

impl Expression {
    /// Validates `text` and wraps it.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_evaluator::Expression;
    ///
    /// let expression = Expression::new("2 * (x + 1)").unwrap();
    /// assert_eq!(expression.text(), "2*(x+1)");
    ///
    /// assert!(Expression::new("2 * (x + 1").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Expression, ConstructionError> {
        let text = strip_whitespace(text);
        if !validator::validate(&text) {
            return Err(ConstructionError::InvalidSyntax(text));
        }
        Ok(Expression { text })
    }

    /// Evaluates the expression with no variables bound. Only the predefined
    /// constants are available.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.evaluate_with(&Binding::new())
    }

    /// Evaluates the expression, looking up variables in `binding` before the
    /// predefined constants.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_evaluator::{Binding, Expression};
    ///
    /// let expression = Expression::new("m * x + b").unwrap();
    /// let binding = Binding::from([
    ///     ("m".to_string(), 2.0),
    ///     ("x".to_string(), 3.0),
    ///     ("b".to_string(), 1.0),
    /// ]);
    /// assert_eq!(expression.evaluate_with(&binding), Ok(7.0));
    /// ```
    pub fn evaluate_with(&self, binding: &Binding) -> Result<f64, EvalError> {
        evaluator::evaluate(&self.text, binding)
    }

    /// The variables the expression reads, in order of first appearance and
    /// without duplicates. Function names and predefined constants are left out.
    pub fn variables(&self) -> impl Iterator<Item = &str> + '_ {
        identifiers(&self.text)
            .filter(|name| !is_unary_function_name(name) && !is_predefined_constant(name))
            .unique()
    }

    /// The validated text, without whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl str::FromStr for Expression {
    type Err = ConstructionError;

    fn from_str(input: &str) -> Result<Expression, Self::Err> {
        Expression::new(input)
    }
}

impl TryFrom<&str> for Expression {
    type Error = ConstructionError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Expression::new(text)
    }
}

impl TryFrom<String> for Expression {
    type Error = ConstructionError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Expression::new(&text)
    }
}
