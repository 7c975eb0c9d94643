use thiserror::Error;

/// The text of an expression is not structurally well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("invalid expression `{0}`")]
    InvalidSyntax(String),
}

/// A well-formed expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable `{0}` is undefined")]
    UndefinedVariable(String),
    #[error("too many operators for the available operands")]
    ArityError,
    /// A state that validation should have ruled out.
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Either phase of handling an expression failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Evaluation(#[from] EvalError),
}
