//! # LaTeX Rendering Module
//!
//! Renders expressions as LaTeX source for client side typesetting. The output
//! targets math mode: `\frac` for quotients, braced exponents, `\sqrt`,
//! the standard function macros and `\int ... \, dx` for unevaluated integrals.
//! The constants e and π are recognized by value and rendered as `e` and `\pi`.

use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::{E, PI};

/// binding strength, used to decide where `\left( ... \right)` is required
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Add(_, _) | Expr::Sub(_, _) => 1,
        Expr::Mul(_, _) => 2,
        // \frac is visually self-delimiting
        Expr::Div(_, _) => 4,
        Expr::Pow(_, _) => 3,
        Expr::Const(c) if *c < 0.0 => 1,
        _ => 4,
    }
}

/// -f as Some(f): a negative constant or a product with a negative leading constant
fn extract_negative(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Const(c) if *c < 0.0 => Some(Expr::Const(-c)),
        Expr::Mul(l, r) => {
            if let Expr::Const(c) = l.as_ref() {
                if *c < 0.0 {
                    if (*c + 1.0).abs() < f64::EPSILON {
                        return Some(r.as_ref().clone());
                    }
                    return Some(Expr::Const(-c) * r.as_ref().clone());
                }
            }
            None
        }
        _ => None,
    }
}

fn latex_const(c: f64) -> String {
    if (c - E).abs() < f64::EPSILON {
        return "e".to_string();
    }
    if (c - PI).abs() < f64::EPSILON {
        return "\\pi".to_string();
    }
    if c.fract() == 0.0 && c.abs() < 1e15 {
        format!("{}", c as i64)
    } else {
        format!("{}", c)
    }
}

fn parenthesized(expr: &Expr, min_precedence: u8) -> String {
    let inner = expr.latex();
    if precedence(expr) < min_precedence {
        format!("\\left({}\\right)", inner)
    } else {
        inner
    }
}

fn function_call(name: &str, arg: &Expr) -> String {
    format!("{}\\left({}\\right)", name, arg.latex())
}

impl Expr {
    /// LaTeX source for this expression, without surrounding math delimiters.
    pub fn latex(&self) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(c) => latex_const(*c),

            Expr::Add(lhs, rhs) => {
                if let Some(positive) = extract_negative(rhs) {
                    format!("{} - {}", lhs.latex(), parenthesized(&positive, 2))
                } else {
                    format!("{} + {}", lhs.latex(), rhs.latex())
                }
            }

            Expr::Sub(lhs, rhs) => {
                format!("{} - {}", lhs.latex(), parenthesized(rhs, 2))
            }

            Expr::Mul(lhs, rhs) => {
                if let Expr::Const(c) = lhs.as_ref() {
                    if (*c + 1.0).abs() < f64::EPSILON {
                        return format!("-{}", parenthesized(rhs, 2));
                    }
                }
                let left = parenthesized(lhs, 2);
                let right = parenthesized(rhs, 2);
                // 2 \cdot 3, never 23; a digit juxtaposed with a digit is ambiguous
                if right.starts_with(|ch: char| ch.is_ascii_digit()) {
                    format!("{} \\cdot {}", left, right)
                } else {
                    format!("{} {}", left, right)
                }
            }

            Expr::Div(lhs, rhs) => {
                format!("\\frac{{{}}}{{{}}}", lhs.latex(), rhs.latex())
            }

            Expr::Pow(base, exp) => {
                // e^x keeps the exponential look
                let base_str = match base.as_ref() {
                    Expr::Const(c) if (*c - E).abs() < f64::EPSILON => "e".to_string(),
                    _ => parenthesized(base, 4),
                };
                format!("{{{}}}^{{{}}}", base_str, exp.latex())
            }

            Expr::Exp(expr) => format!("e^{{{}}}", expr.latex()),
            Expr::Ln(expr) => function_call("\\ln", expr),
            Expr::Sqrt(expr) => format!("\\sqrt{{{}}}", expr.latex()),

            Expr::sin(expr) => function_call("\\sin", expr),
            Expr::cos(expr) => function_call("\\cos", expr),
            Expr::tg(expr) => function_call("\\tan", expr),
            Expr::arcsin(expr) => function_call("\\arcsin", expr),
            Expr::arccos(expr) => function_call("\\arccos", expr),
            Expr::arctg(expr) => function_call("\\arctan", expr),
            Expr::sh(expr) => function_call("\\sinh", expr),
            Expr::ch(expr) => function_call("\\cosh", expr),
            Expr::th(expr) => function_call("\\tanh", expr),

            Expr::IntegralOf(expr, var) => {
                format!("\\int {} \\, d{}", expr.latex(), var)
            }
        }
    }
}

#[cfg(test)]
mod latex_tests {
    use super::*;

    fn parse(s: &str) -> Expr {
        Expr::parse_expression(s).unwrap()
    }

    #[test]
    fn test_atoms() {
        assert_eq!(parse("x").latex(), "x");
        assert_eq!(parse("3").latex(), "3");
        assert_eq!(parse("2.5").latex(), "2.5");
    }

    #[test]
    fn test_integer_constants_have_no_decimal_point() {
        assert_eq!(Expr::Const(4.0).latex(), "4");
        assert_eq!(Expr::Const(-2.0).latex(), "-2");
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(parse("pi").latex(), "\\pi");
        assert_eq!(parse("e^x").latex(), "{e}^{x}");
    }

    #[test]
    fn test_power() {
        assert_eq!(parse("x^2").latex(), "{x}^{2}");
        assert_eq!(
            parse("(x + 1)^2").latex(),
            "{\\left(x + 1\\right)}^{2}"
        );
    }

    #[test]
    fn test_fraction() {
        assert_eq!(parse("1/x").latex(), "\\frac{1}{x}");
        let half_x_squared = parse("x^2") / Expr::Const(2.0);
        assert_eq!(half_x_squared.latex(), "\\frac{{x}^{2}}{2}");
    }

    #[test]
    fn test_sqrt_and_functions() {
        assert_eq!(parse("sqrt(x)").latex(), "\\sqrt{x}");
        assert_eq!(parse("sin(x)").latex(), "\\sin\\left(x\\right)");
        assert_eq!(parse("tan(2x)").latex(), "\\tan\\left(2 x\\right)");
        assert_eq!(parse("ln(x)").latex(), "\\ln\\left(x\\right)");
        assert_eq!(parse("sinh(x)").latex(), "\\sinh\\left(x\\right)");
    }

    #[test]
    fn test_multiplication_spacing() {
        assert_eq!(parse("2x").latex(), "2 x");
        assert_eq!(
            (Expr::Const(2.0) * Expr::Const(3.0)).latex(),
            "2 \\cdot 3"
        );
    }

    #[test]
    fn test_product_of_sum_is_parenthesized() {
        assert_eq!(parse("2*(x + 1)").latex(), "2 \\left(x + 1\\right)");
    }

    #[test]
    fn test_negative_coefficient_renders_as_subtraction() {
        let expr = Expr::Var("x".to_string())
            + Expr::Const(-1.0) * Expr::cos(Box::new(Expr::Var("x".to_string())));
        assert_eq!(expr.latex(), "x - \\cos\\left(x\\right)");
    }

    #[test]
    fn test_leading_negative_one() {
        let expr = Expr::Const(-1.0) * Expr::cos(Box::new(Expr::Var("x".to_string())));
        assert_eq!(expr.latex(), "-\\cos\\left(x\\right)");
    }

    #[test]
    fn test_unevaluated_integral() {
        let inner = parse("exp(x^2)");
        let unresolved = Expr::IntegralOf(Box::new(inner), "x".to_string());
        assert_eq!(unresolved.latex(), "\\int e^{{x}^{2}} \\, dx");
    }

    #[test]
    fn test_subtraction_of_sum_is_parenthesized() {
        let expr = parse("x - (y + 1)");
        assert_eq!(expr.latex(), "x - \\left(y + 1\\right)");
    }
}
