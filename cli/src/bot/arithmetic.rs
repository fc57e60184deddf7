//! # Two-Operand Arithmetic
//!
//! File: cli/src/bot/arithmetic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Evaluates inputs like `what is 6*7` by throwing away everything except
//! digits and `+ - * /`, then splitting the rest into two operands around one
//! operator. There is no precedence, no parentheses, and no chaining.
//!
//! The operator is chosen by type, not position: `+` is tried first, then `-`,
//! `*`, and `/`. So `3*2+1` is treated as an addition of `3*2` and `1`, which
//! fails because `3*2` is not a number.
//!
use crate::core::error::NovaError;

/// Operators in the order they are looked for.
const OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// Keeps only digits and the four operator symbols.
pub fn clean_expression(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/'))
        .collect()
}

/// Evaluates `input` and returns the text Nova should reply with.
///
/// Division by zero is not an error: it produces its own reply.
pub fn evaluate(input: &str) -> Result<String, NovaError> {
    let cleaned = clean_expression(input);

    let operator = OPERATORS
        .into_iter()
        .find(|op| cleaned.contains(op.symbol()))
        .ok_or_else(|| NovaError::arithmetic(&cleaned, "no operator found"))?;

    let parts: Vec<&str> = cleaned.split(operator.symbol()).collect();
    let [left, right] = parts.as_slice() else {
        return Err(NovaError::arithmetic(
            &cleaned,
            format!("expected two operands, found {}", parts.len()),
        ));
    };

    let checked: fn(i64, i64) -> Option<i64> = match operator {
        Operator::Add => i64::checked_add,
        Operator::Subtract => i64::checked_sub,
        Operator::Multiply => i64::checked_mul,
        Operator::Divide => return divide(&cleaned, left, right),
    };
    let lhs = parse_integer(&cleaned, left)?;
    let rhs = parse_integer(&cleaned, right)?;
    let result = checked(lhs, rhs)
        .ok_or_else(|| NovaError::arithmetic(&cleaned, "result out of range"))?;

    Ok(format!("Answer: {}", result))
}

fn divide(cleaned: &str, left: &str, right: &str) -> Result<String, NovaError> {
    if parse_integer(cleaned, right)? == 0 {
        return Ok("Division by zero? Nope!".to_string());
    }
    let lhs = parse_float(cleaned, left)?;
    let rhs = parse_float(cleaned, right)?;
    let quotient = lhs / rhs;
    if !quotient.is_finite() {
        return Err(NovaError::arithmetic(cleaned, "result out of range"));
    }
    Ok(format!("Answer: {}", format_quotient(quotient)))
}

/// Plain decimal notation, never exponent form, always with a decimal point.
fn format_quotient(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}

fn parse_integer(cleaned: &str, operand: &str) -> Result<i64, NovaError> {
    operand
        .parse::<i64>()
        .map_err(|e| NovaError::arithmetic(cleaned, format!("bad operand '{}': {}", operand, e)))
}

fn parse_float(cleaned: &str, operand: &str) -> Result<f64, NovaError> {
    operand
        .parse::<f64>()
        .map_err(|e| NovaError::arithmetic(cleaned, format!("bad operand '{}': {}", operand, e)))
}
