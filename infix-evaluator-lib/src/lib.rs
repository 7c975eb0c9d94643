pub mod interpreter;

pub use interpreter::error::{ConstructionError, Error, EvalError};
pub use interpreter::expression::{Binding, Expression};
