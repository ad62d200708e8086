/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use symdx::symbolic::symbolic_engine::Expr;
/// let input = "x^2*sin(3x)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
///
/// Grammar, loosest binding first:
///   expression  := signed_term (('+' | '-') signed_term)*
///   signed_term := '-'? term
///   term        := juxtaposed (('*' | '/') juxtaposed)*
///   juxtaposed  := power power*            (implicit multiplication: 2x, 3sin(x))
///   power       := primary (('^' | '**') '-'? power)?
///   primary     := '(' expression ')' | number | 'π' | name
///
/// Only a closed set of function names is accepted; any other multi-letter
/// identifier is rejected so arbitrary input can never reach evaluation.
use crate::symbolic::symbolic_engine::Expr;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric0, char, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::fold_many0,
    sequence::{delimited, pair, preceded},
};
use regex::Regex;
use std::f64::consts::{E, PI};
use std::sync::LazyLock;

/// recursion in the grammar follows parenthesis nesting and power chains, so
/// both are bounded before the parser runs
const MAX_NESTING_DEPTH: usize = 64;

/// the closed whitelist: maps an accepted function name (with its aliases) to the
/// corresponding Expr constructor
fn function_from_name(name: &str) -> Option<fn(Box<Expr>) -> Expr> {
    match name {
        "sin" => Some(Expr::sin),
        "cos" => Some(Expr::cos),
        "tg" | "tan" => Some(Expr::tg),
        "arcsin" | "asin" => Some(Expr::arcsin),
        "arccos" | "acos" => Some(Expr::arccos),
        "arctg" | "arctan" | "atan" => Some(Expr::arctg),
        "sh" | "sinh" => Some(Expr::sh),
        "ch" | "cosh" => Some(Expr::ch),
        "th" | "tanh" => Some(Expr::th),
        "exp" => Some(Expr::Exp),
        "ln" | "log" => Some(Expr::Ln),
        "sqrt" => Some(Expr::Sqrt),
        _ => None,
    }
}

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn negate(expr: Expr) -> Expr {
    match expr {
        Expr::Const(c) => Expr::Const(-c),
        other => Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(other)),
    }
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr> {
    let (input, init) = parse_signed_term(input)?;
    fold_many0(
        pair(ws(alt((char('+'), char('-')))), parse_signed_term),
        move || init.clone(),
        |acc, (op, rhs)| {
            if op == '+' {
                Expr::Add(acc.boxed(), rhs.boxed())
            } else {
                Expr::Sub(acc.boxed(), rhs.boxed())
            }
        },
    )
    .parse(input)
}

fn parse_signed_term(input: &str) -> IResult<&str, Expr> {
    let (input, neg) = opt(ws(char('-'))).parse(input)?;
    let (input, expr) = parse_term(input)?;
    Ok((input, if neg.is_some() { negate(expr) } else { expr }))
}

fn parse_term(input: &str) -> IResult<&str, Expr> {
    let (input, init) = parse_juxtaposed(input)?;
    fold_many0(
        pair(ws(alt((char('*'), char('/')))), parse_juxtaposed),
        move || init.clone(),
        |acc, (op, rhs)| {
            if op == '*' {
                Expr::Mul(acc.boxed(), rhs.boxed())
            } else {
                Expr::Div(acc.boxed(), rhs.boxed())
            }
        },
    )
    .parse(input)
}

// implicit multiplication by juxtaposition: "2x", "3 sin(x)", "sin(x)cos(x)".
// the folded factors are sign-free, so "x - 3" stays a subtraction
fn parse_juxtaposed(input: &str) -> IResult<&str, Expr> {
    let (input, init) = parse_pow(input)?;
    fold_many0(parse_pow, move || init.clone(), |acc, rhs| {
        Expr::Mul(acc.boxed(), rhs.boxed())
    })
    .parse(input)
}

// right associative: x^2^3 = x^(2^3); '**' is an accepted spelling of '^'
fn parse_pow(input: &str) -> IResult<&str, Expr> {
    let (input, base) = parse_primary(input)?;
    let (input, exponent) = opt(preceded(
        ws(alt((tag("**"), tag("^")))),
        parse_pow_exponent,
    ))
    .parse(input)?;
    match exponent {
        Some(exp) => Ok((input, Expr::Pow(base.boxed(), exp.boxed()))),
        None => Ok((input, base)),
    }
}

fn parse_pow_exponent(input: &str) -> IResult<&str, Expr> {
    let (input, neg) = opt(preceded(multispace0, char('-'))).parse(input)?;
    let (input, expr) = parse_pow(input)?;
    Ok((input, if neg.is_some() { negate(expr) } else { expr }))
}

fn parse_primary(input: &str) -> IResult<&str, Expr> {
    preceded(
        multispace0,
        alt((parse_parens, parse_number, parse_pi_symbol, parse_name)),
    )
    .parse(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr> {
    delimited(char('('), parse_add_sub, preceded(multispace0, char(')'))).parse(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>().map(Expr::Const),
    )
    .parse(input)
}

fn parse_pi_symbol(input: &str) -> IResult<&str, Expr> {
    let (input, _) = char('π').parse(input)?;
    Ok((input, Expr::Const(PI)))
}

// an identifier is a whitelisted function, one of the closed constants e/pi, or
// a single-letter variable; everything else fails the parse
fn parse_name(input: &str) -> IResult<&str, Expr> {
    let (rest, name) = recognize(pair(alpha1, alphanumeric0)).parse(input)?;
    if let Some(constructor) = function_from_name(name) {
        // argument is parenthesised or the next tight power term: sin(x), sin x, sin x^2
        let (rest, arg) =
            preceded(multispace0, alt((parse_parens, parse_pow))).parse(rest)?;
        Ok((rest, constructor(Box::new(arg))))
    } else if name == "e" {
        Ok((rest, Expr::Const(E)))
    } else if name == "pi" || name == "PI" {
        Ok((rest, Expr::Const(PI)))
    } else if name.len() == 1 {
        Ok((rest, Expr::Var(name.to_string())))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )))
    }
}

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9]*").unwrap());

fn describe_failure(input: &str) -> String {
    for m in IDENTIFIER.find_iter(input) {
        let word = m.as_str();
        if word.len() > 1
            && function_from_name(word).is_none()
            && word != "pi"
            && word != "PI"
        {
            return format!("unknown function or symbol '{}'", word);
        }
    }
    format!("could not parse expression '{}'", input.trim())
}

fn nested_too_deeply(input: &str) -> bool {
    let mut depth: usize = 0;
    let mut deepest: usize = 0;
    for c in input.chars() {
        match c {
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    let powers = input.matches('^').count() + input.matches("**").count();
    deepest > MAX_NESTING_DEPTH || powers > MAX_NESTING_DEPTH
}

/// Parses a whole input string into a symbolic expression. The full input must be
/// consumed, so trailing garbage is an error rather than silently dropped.
pub fn parse_expression_func(input: &str) -> Result<Expr, String> {
    if nested_too_deeply(input) {
        return Err("expression is nested too deeply".to_string());
    }
    match all_consuming(delimited(multispace0, parse_add_sub, multispace0)).parse(input) {
        Ok((_, expr)) => Ok(expr),
        Err(_) => Err(describe_failure(input)),
    }
}

/// Parses the string and additionally checks that the only free variable is the
/// given integration variable.
pub fn parse_for_variable(input: &str, var: &str) -> Result<Expr, String> {
    let expr = parse_expression_func(input)?;
    let vars = expr.all_arguments_are_variables();
    if let Some(stray) = vars.iter().find(|v| v.as_str() != var) {
        return Err(format!(
            "expression contains the symbol '{}' but the integration variable is '{}'",
            stray, var
        ));
    }
    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constant() {
        let expr = parse_expression_func("42").unwrap();
        assert_eq!(expr, Expr::Const(42.0));
    }

    #[test]
    fn test_parse_variable() {
        let expr = parse_expression_func("x").unwrap();
        assert_eq!(expr, Expr::Var("x".to_string()));
    }

    #[test]
    fn test_parse_addition() {
        let expr = parse_expression_func("x + 2").unwrap();
        assert_eq!(
            expr,
            Expr::Add(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction() {
        let expr = parse_expression_func("x - 3").unwrap();
        assert_eq!(
            expr,
            Expr::Sub(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(3.0))
            )
        );
    }

    #[test]
    fn test_parse_power() {
        let expr = parse_expression_func("x^2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(2.0))
            )
        );
    }

    #[test]
    fn test_parse_double_star_power() {
        let expr = parse_expression_func("x**2").unwrap();
        assert_eq!(expr, parse_expression_func("x^2").unwrap());
    }

    #[test]
    fn test_power_is_right_associative() {
        let expr = parse_expression_func("x^2^3").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Pow(
                    Box::new(Expr::Const(2.0)),
                    Box::new(Expr::Const(3.0))
                ))
            )
        );
    }

    #[test]
    fn test_parse_negative_exponent() {
        let expr = parse_expression_func("x^-2").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(-2.0))
            )
        );
    }

    #[test]
    fn test_implicit_multiplication() {
        let expr = parse_expression_func("2x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(2.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_implicit_multiplication_with_function() {
        let expr = parse_expression_func("3sin(x)").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(3.0)),
                Box::new(Expr::sin(Box::new(Expr::Var("x".to_string()))))
            )
        );
    }

    #[test]
    fn test_implicit_multiplication_does_not_swallow_minus() {
        let expr = parse_expression_func("x - 3").unwrap();
        assert!(matches!(expr, Expr::Sub(_, _)));
    }

    #[test]
    fn test_parse_sin() {
        let expr = parse_expression_func("sin(x)").unwrap();
        assert_eq!(expr, Expr::sin(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_tan_alias() {
        let expr = parse_expression_func("tan(x)").unwrap();
        assert_eq!(expr, Expr::tg(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_sqrt() {
        let expr = parse_expression_func("sqrt(x)").unwrap();
        assert_eq!(expr, Expr::Sqrt(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_function_without_parens() {
        let expr = parse_expression_func("sin x").unwrap();
        assert_eq!(expr, Expr::sin(Box::new(Expr::Var("x".to_string()))));
    }

    #[test]
    fn test_parse_euler_constant_power() {
        let expr = parse_expression_func("e^x").unwrap();
        assert_eq!(
            expr,
            Expr::Pow(
                Box::new(Expr::Const(E)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_pi() {
        assert_eq!(parse_expression_func("pi").unwrap(), Expr::Const(PI));
        assert_eq!(parse_expression_func("π").unwrap(), Expr::Const(PI));
    }

    #[test]
    fn test_unary_minus() {
        let expr = parse_expression_func("-x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Const(-1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_division() {
        let expr = parse_expression_func("1/x").unwrap();
        assert_eq!(
            expr,
            Expr::Div(
                Box::new(Expr::Const(1.0)),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_with_brackets() {
        let expr = parse_expression_func("(x + 1) * x").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(1.0))
                )),
                Box::new(Expr::Var("x".to_string()))
            )
        );
    }

    #[test]
    fn test_parse_nested_functions() {
        let expr = parse_expression_func("sin(cos(x))").unwrap();
        assert_eq!(
            expr,
            Expr::sin(Box::new(Expr::cos(Box::new(Expr::Var("x".to_string())))))
        );
    }

    #[test]
    fn test_juxtaposed_functions() {
        let expr = parse_expression_func("sin(x)cos(x)").unwrap();
        assert_eq!(
            expr,
            Expr::Mul(
                Box::new(Expr::sin(Box::new(Expr::Var("x".to_string())))),
                Box::new(Expr::cos(Box::new(Expr::Var("x".to_string()))))
            )
        );
    }

    #[test]
    fn test_unknown_identifier_is_rejected() {
        let result = parse_expression_func("frobnicate(x)");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("frobnicate"));
    }

    #[test]
    fn test_unmatched_brackets() {
        assert!(parse_expression_func("(x + 1").is_err());
        assert!(parse_expression_func("x + ").is_err());
    }

    #[test]
    fn test_parse_for_variable_rejects_stray_symbols() {
        assert!(parse_for_variable("x + y", "x").is_err());
        assert!(parse_for_variable("x^2 + 1", "x").is_ok());
    }

    #[test]
    fn test_excessive_paren_nesting_is_rejected() {
        let deep = format!("{}x{}", "(".repeat(2000), ")".repeat(2000));
        assert!(parse_expression_func(&deep).is_err());
        let shallow = format!("{}x{}", "(".repeat(10), ")".repeat(10));
        assert!(parse_expression_func(&shallow).is_ok());
    }

    #[test]
    fn test_excessive_power_chain_is_rejected() {
        let chain = vec!["2"; 2000].join("^");
        assert!(parse_expression_func(&chain).is_err());
        let double_star = vec!["2"; 2000].join("**");
        assert!(parse_expression_func(&double_star).is_err());
        assert!(parse_expression_func("x^2^3").is_ok());
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let spaced = parse_expression_func("  x ^ 2  +  3 x ").unwrap();
        let tight = parse_expression_func("x^2+3x").unwrap();
        assert_eq!(spaced, tight);
    }
}
