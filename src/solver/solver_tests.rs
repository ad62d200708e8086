//___________________________________TESTS____________________________________

use crate::solver::error::CasError;
use crate::solver::solve::solve_integral;
use crate::symbolic::symbolic_engine::Expr;

#[test]
fn test_polynomial_with_differential() {
    let report = solve_integral("x^2 dx").unwrap();
    assert!(report.result_latex.ends_with("+ C"));
    assert!(report.verified);
    assert_eq!(report.steps_latex.len(), 3);
    assert_eq!(report.plots.len(), 0);
}

#[test]
fn test_product_with_exponential() {
    let report = solve_integral("x*exp(2*x) dx").unwrap();
    assert!(report.result_latex.ends_with("+ C"));
    assert!(report.verified);
}

#[test]
fn test_sine_yields_negative_cosine() {
    let report = solve_integral("sin(x) dx").unwrap();
    assert!(report.result_latex.contains("-\\cos"));
    assert!(report.result_latex.ends_with("+ C"));
    assert!(report.verified);
}

#[test]
fn test_integral_sign_prefix_is_accepted() {
    let report = solve_integral("∫ (2x+1)*exp(x) dx").unwrap();
    assert!(report.result_latex.ends_with("+ C"));
    assert!(report.verified);
}

#[test]
fn test_empty_input_is_rejected_before_parsing() {
    let err = solve_integral("").unwrap_err();
    assert!(matches!(err, CasError::InputShape(_)));
    assert_eq!(err.to_string(), "Falta 'input' con la expresión.");
}

#[test]
fn test_unknown_function_is_a_parse_error_with_hint() {
    let err = solve_integral("foo(x) dx").unwrap_err();
    assert!(matches!(err, CasError::Parse(_)));
    let msg = err.to_string();
    assert!(msg.contains("^ o **"));
    assert!(msg.contains("foo"));
}

#[test]
fn test_deeply_nested_input_is_a_parse_error() {
    let deep = format!("{}x{} dx", "(".repeat(5000), ")".repeat(5000));
    let err = solve_integral(&deep).unwrap_err();
    assert!(matches!(err, CasError::Parse(_)));
}

#[test]
fn test_caret_and_double_star_solve_identically() {
    let caret = solve_integral("x^2 dx").unwrap();
    let stars = solve_integral("x**2 dx").unwrap();
    assert_eq!(caret, stars);
}

#[test]
fn test_solving_is_deterministic() {
    let first = solve_integral("x*sin(x) dx").unwrap();
    let second = solve_integral("x*sin(x) dx").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parsing_is_idempotent() {
    let a = Expr::parse_expression("2x + sin(3x)").unwrap();
    let b = Expr::parse_expression("2x + sin(3x)").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_custom_integration_variable() {
    let report = solve_integral("t^3 dt").unwrap();
    assert!(report.verified);
    assert!(report.checks[0].contains("\\frac{d}{dt}"));
}

#[test]
fn test_unsolved_integral_is_a_result_not_an_error() {
    let report = solve_integral("exp(x^2) dx").unwrap();
    assert!(report.result_latex.starts_with("\\int"));
    assert!(report.result_latex.ends_with("+ C"));
}

#[test]
fn test_problem_latex_reflects_literal_input() {
    // the parsed problem is rendered before simplification, framed as the integral
    let report = solve_integral("1*x dx").unwrap();
    assert!(report.problem_latex.starts_with("\\int "));
    assert!(report.problem_latex.ends_with(" \\, dx"));
    assert!(report.problem_latex.contains("1"));

    let report = solve_integral("sin(x) dx").unwrap();
    assert_eq!(report.problem_latex, "\\int \\sin\\left(x\\right) \\, dx");

    let report = solve_integral("t^3 dt").unwrap();
    assert!(report.problem_latex.ends_with(" \\, dt"));
}

#[test]
fn test_verification_line_shows_the_derivative() {
    let report = solve_integral("cos(x) dx").unwrap();
    assert_eq!(report.checks.len(), 1);
    assert!(report.checks[0].contains("✓ correcto"));
}

#[test]
fn test_non_finite_constant_is_caught() {
    let problem = Expr::Const(f64::INFINITY) * Expr::Var("x".to_string());
    assert!(!problem.all_constants_finite());
}

#[test]
fn test_forced_mismatch_reports_unverified() {
    use crate::solver::report::SolveReport;

    // a mismatched antiderivative must be reported as unverified, not hidden
    let wrong = Expr::parse_expression("x^4").unwrap();
    let integrand = Expr::parse_expression("x^2").unwrap();
    let derivative = wrong.diff("x").simplify();
    assert!(!derivative.equivalent(&integrand));
    let report = SolveReport::assemble(&integrand, &wrong, &derivative, "x", false);
    assert!(report.checks[0].contains("✗ revisar"));
    assert!(!report.verified);
}

#[test]
fn test_whitespace_variants_solve_identically() {
    let tight = solve_integral("x^2+3x dx").unwrap();
    let loose = solve_integral("  x^2 + 3x   dx ").unwrap();
    assert_eq!(tight, loose);
}
