//! Character and substring classification shared by the validator, the
//! evaluator and variable introspection.

use crate::interpreter::operator::UnaryFunction;

/// Every character that acts as a binary operator.
pub static BINARY_OPERATORS: [char; 6] = ['+', '-', '*', '/', '^', '%'];

/// Removes all whitespace. Whitespace carries no meaning anywhere in an expression.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_binary_operator(character: char) -> bool {
    BINARY_OPERATORS.contains(&character)
}

pub fn is_unary_function_name(name: &str) -> bool {
    name.parse::<UnaryFunction>().is_ok()
}

/// Whether `character` can start an identifier (or a function name).
pub fn is_identifier_start(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

/// Whether `character` can appear after the first character of an identifier.
pub fn is_identifier_continuation(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Whether `character` can appear in a numeric literal.
pub fn is_literal_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// A valid variable name starts with a letter or underscore, continues with letters,
/// digits or underscores, and is not the name of a unary function.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut characters = name.chars();
    match characters.next() {
        Some(first) if is_identifier_start(first) => {}
        _ => return false,
    }
    characters.all(is_identifier_continuation) && !is_unary_function_name(name)
}

/// A numeric literal is made of digits with at most one decimal point.
pub fn is_valid_numeric_literal(text: &str) -> bool {
    text.chars().all(is_literal_character) && text.matches('.').count() <= 1
}

/// Returns the end (exclusive) of the run starting at `start` whose characters
/// all satisfy `predicate`.
pub(crate) fn run_end(text: &[u8], start: usize, predicate: impl Fn(char) -> bool) -> usize {
    text[start..]
        .iter()
        .position(|&byte| !predicate(byte as char))
        .map_or(text.len(), |offset| start + offset)
}

/// Lazily yields every identifier run of a whitespace-free expression, in order
/// of appearance. Function names are included.
pub struct Identifiers<'a> {
    text: &'a str,
    position: usize,
}

pub fn identifiers(text: &str) -> Identifiers<'_> {
    Identifiers { text, position: 0 }
}

impl<'a> Iterator for Identifiers<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.position < bytes.len() {
            let character = bytes[self.position] as char;
            if is_identifier_start(character) {
                let start = self.position;
                self.position = run_end(bytes, start, is_identifier_continuation);
                return Some(&self.text[start..self.position]);
            }
            if is_literal_character(character) {
                // Skip whole literals so nothing inside one is mistaken for a name.
                self.position = run_end(bytes, self.position, |c| {
                    is_literal_character(c) || is_identifier_continuation(c)
                });
            } else {
                self.position += 1;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_operator_symbol_has_an_operator() {
        for symbol in BINARY_OPERATORS {
            assert!(
                BinaryOperator::from_symbol(symbol).is_some(),
                "{} should be an operator",
                symbol
            )
        }
    }

    #[test]
    fn parentheses_are_not_binary_operators() {
        assert!(!is_binary_operator('('));
        assert!(!is_binary_operator(')'));
    }

    #[test]
    fn whitespace_is_stripped_everywhere() {
        assert_eq!(strip_whitespace(" 1 +\t x *\n(2 ) "), "1+x*(2)")
    }

    #[parameterized(
        name = { "x", "_x", "x_1", "PI", "abc_DEF_123", "sqrtx" }
    )]
    fn well_formed_names_are_valid_identifiers(name: &str) {
        assert!(is_valid_identifier(name))
    }

    #[parameterized(
        name = { "", "1x", "x-y", "x.y", "sqrt", "ln", "rad2deg" }
    )]
    fn malformed_or_reserved_names_are_not_valid_identifiers(name: &str) {
        assert!(!is_valid_identifier(name))
    }

    #[test]
    fn function_names_are_recognized_exactly() {
        assert!(is_unary_function_name("asin"));
        assert!(!is_unary_function_name("ASIN"));
        assert!(!is_unary_function_name("asinh"));
    }

    #[parameterized(
        text = { "1", "12.5", "0.", "42" }
    )]
    fn literals_with_at_most_one_point_are_valid(text: &str) {
        assert!(is_valid_numeric_literal(text))
    }

    #[parameterized(
        text = { "1.2.3", "1..", "1e5", "-1" }
    )]
    fn malformed_literals_are_invalid(text: &str) {
        assert!(!is_valid_numeric_literal(text))
    }

    #[test]
    fn identifiers_are_yielded_in_order_of_appearance() {
        let found: Vec<&str> = identifiers("x+sqrt(y_1*2)-x").collect();

        assert_eq!(found, vec!["x", "sqrt", "y_1", "x"])
    }

    #[test]
    fn literals_produce_no_identifiers() {
        assert_eq!(identifiers("12.5+3").count(), 0)
    }
}
