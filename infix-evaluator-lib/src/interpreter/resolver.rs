use crate::interpreter::error::EvalError;
use crate::interpreter::expression::Binding;

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

/// Named values available in every evaluation, whatever the binding contains.
pub static PREDEFINED_CONSTANTS: [(&str, f64); 2] = [("PI", PI), ("E", E)];

/// Looks up a predefined constant by name.
pub fn constant(name: &str) -> Option<f64> {
    PREDEFINED_CONSTANTS
        .iter()
        .find(|(constant_name, _)| *constant_name == name)
        .map(|(_, value)| *value)
}

pub fn is_predefined_constant(name: &str) -> bool {
    constant(name).is_some()
}

/// Resolves variable names for one evaluation: the caller's binding first,
/// then the predefined constants.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    binding: &'a Binding,
}

impl<'a> Resolver<'a> {
    pub fn new(binding: &'a Binding) -> Self {
        Resolver { binding }
    }

    pub fn resolve(&self, name: &str) -> Result<f64, EvalError> {
        self.binding
            .get(name)
            .copied()
            .or_else(|| constant(name))
            .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
    }
}
