use anyhow::{anyhow, Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use infix_evaluator::{Binding, Expression};
use log::{info, warn};

/// Evaluates the given infix expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate
    expression: String,

    /// Binds a variable to a value, e.g. `-D x=2.5`
    #[clap(
        short = 'D',
        long = "define",
        value_name = "NAME=VALUE",
        parse(try_from_str = parse_definition)
    )]
    definitions: Vec<(String, f64)>,

    /// Lists the variables of the expression instead of evaluating it
    #[clap(short, long)]
    list_variables: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn parse_definition(definition: &str) -> Result<(String, f64)> {
    let (name, value) = definition
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, found `{}`", definition))?;
    let value = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("`{}` is not a number", value.trim()))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let expression = Expression::new(&args.expression)
        .with_context(|| "could not parse expression".to_string())?;
    info!("parsed `{}`", expression);

    if args.list_variables {
        for variable in expression.variables() {
            println!("{}", variable);
        }
        return Ok(());
    }

    let binding: Binding = args.definitions.into_iter().collect();
    let value = expression
        .evaluate_with(&binding)
        .with_context(|| format!("could not evaluate `{}`", expression))?;
    if !value.is_finite() {
        warn!("`{}` has no finite value", expression);
    }
    println!("{}", value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_is_split_into_name_and_value() {
        assert_eq!(parse_definition("x=2.5").unwrap(), ("x".to_string(), 2.5));
        assert_eq!(parse_definition(" y = -1 ").unwrap(), ("y".to_string(), -1.0));
    }

    #[test]
    fn malformed_definition_is_rejected() {
        assert!(parse_definition("x").is_err());
        assert!(parse_definition("x=two").is_err());
    }
}
