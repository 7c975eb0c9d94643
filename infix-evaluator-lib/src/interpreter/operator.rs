use crate::interpreter::resolver;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
    Modulo,
}

/// A named function of a single operand, written `name(operand)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    SquareRoot,
    Round,
    AbsoluteValue,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    RadiansToDegrees,
    Logarithm,
    NaturalLogarithm,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            '%' => Some(BinaryOperator::Modulo),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
            BinaryOperator::Modulo => '%',
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator with `a` as the left operand and `b` as the right one.
    ///
    /// Non-finite results are returned as they are, including the NaN produced by
    /// taking a remainder by zero.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => a / b,
            BinaryOperator::Exponentiate => f64::powf(a, b),
            // Remainder of the operands truncated toward zero; takes the sign of `a`.
            BinaryOperator::Modulo => a.trunc() % b.trunc(),
        }
    }
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 12] = [
        UnaryFunction::SquareRoot,
        UnaryFunction::Round,
        UnaryFunction::AbsoluteValue,
        UnaryFunction::Sine,
        UnaryFunction::Cosine,
        UnaryFunction::Tangent,
        UnaryFunction::ArcSine,
        UnaryFunction::ArcCosine,
        UnaryFunction::ArcTangent,
        UnaryFunction::RadiansToDegrees,
        UnaryFunction::Logarithm,
        UnaryFunction::NaturalLogarithm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryFunction::SquareRoot => "sqrt",
            UnaryFunction::Round => "round",
            UnaryFunction::AbsoluteValue => "abs",
            UnaryFunction::Sine => "sin",
            UnaryFunction::Cosine => "cos",
            UnaryFunction::Tangent => "tan",
            UnaryFunction::ArcSine => "asin",
            UnaryFunction::ArcCosine => "acos",
            UnaryFunction::ArcTangent => "atan",
            UnaryFunction::RadiansToDegrees => "rad2deg",
            UnaryFunction::Logarithm => "log",
            UnaryFunction::NaturalLogarithm => "ln",
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryFunction::SquareRoot => f64::sqrt(x),
            UnaryFunction::Round => round_half_up(x),
            UnaryFunction::AbsoluteValue => f64::abs(x),
            UnaryFunction::Sine => f64::sin(x),
            UnaryFunction::Cosine => f64::cos(x),
            UnaryFunction::Tangent => f64::tan(x),
            UnaryFunction::ArcSine => f64::asin(x),
            UnaryFunction::ArcCosine => f64::acos(x),
            UnaryFunction::ArcTangent => f64::atan(x),
            UnaryFunction::RadiansToDegrees => 180.0 * x / resolver::PI,
            UnaryFunction::Logarithm => f64::log10(x),
            UnaryFunction::NaturalLogarithm => f64::ln(x),
        }
    }
}

/// Truncates `x`, then steps up to the next integer when the discarded fraction
/// is at least one half. Negative values therefore round toward positive infinity
/// on a tie and truncate otherwise.
fn round_half_up(x: f64) -> f64 {
    let whole = x.trunc();
    if x - whole >= 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl str::FromStr for UnaryFunction {
    type Err = ();

    fn from_str(input: &str) -> Result<UnaryFunction, Self::Err> {
        UnaryFunction::ALL
            .into_iter()
            .find(|function| function.name() == input)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_ge_holds_for_equal_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Modulo;
        assert!(equal1.precedence_ge(&equal2));
        assert!(equal2.precedence_ge(&equal1));
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let greater = BinaryOperator::Exponentiate;
        let lesser = BinaryOperator::Add;
        assert!(greater.precedence_ge(&lesser));
        assert!(!lesser.precedence_ge(&greater));
    }

    #[test]
    fn every_symbol_maps_back_to_its_operator() {
        for symbol in ['+', '-', '*', '/', '^', '%'] {
            let operator = BinaryOperator::from_symbol(symbol).unwrap();
            assert_eq!(operator.symbol(), symbol)
        }
    }

    #[test]
    fn every_function_name_parses_back_to_its_function() {
        for function in UnaryFunction::ALL {
            assert_eq!(function.name().parse::<UnaryFunction>(), Ok(function))
        }
    }

    #[parameterized(
        a = { 7.9, -7.9, 7.0, 5.5 },
        b = { 3.2, 3.0, -2.0, 2.5 },
        expected = { 1.0, -1.0, 1.0, 1.0 }
    )]
    fn modulo_truncates_operands(a: f64, b: f64, expected: f64) {
        assert_eq!(BinaryOperator::Modulo.evaluate(a, b), expected)
    }

    #[test]
    fn modulo_by_zero_is_nan() {
        assert!(BinaryOperator::Modulo.evaluate(4.0, 0.4).is_nan())
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert_eq!(BinaryOperator::Divide.evaluate(1.0, 0.0), f64::INFINITY)
    }

    #[parameterized(
        x = { 2.5, 2.4, 2.0, -2.5, -2.7, 0.49 },
        expected = { 3.0, 2.0, 2.0, -2.0, -2.0, 0.0 }
    )]
    fn round_steps_up_from_half(x: f64, expected: f64) {
        assert_eq!(UnaryFunction::Round.evaluate(x), expected)
    }

    #[test]
    fn rad2deg_converts_pi_to_half_turn() {
        let degrees = UnaryFunction::RadiansToDegrees.evaluate(resolver::PI);
        assert!((degrees - 180.0).abs() < 1e-12)
    }

    #[test]
    fn log_is_base_ten_and_ln_is_natural() {
        assert_eq!(UnaryFunction::Logarithm.evaluate(100.0), 2.0);
        assert_eq!(UnaryFunction::NaturalLogarithm.evaluate(1.0), 0.0);
    }

    #[test]
    fn square_root_of_negative_is_nan() {
        assert!(UnaryFunction::SquareRoot.evaluate(-1.0).is_nan())
    }
}
