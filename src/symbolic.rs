#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use symdx::symbolic::symbolic_engine::Expr;
/// let input = "x^2*sin(3x)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the symbolic expression tree and its constructors
/// 2) turns a symbolic expression into a string expression for printing and control results
/// 3) overloads arithmetic operators so expressions compose like numbers
///# Example#
/// ```
/// use symdx::symbolic::symbolic_engine::Expr;
/// let input = "x^2 + 2x + 1";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// // differentiate with respect to x
/// let df_dx = parsed_expression.diff("x");
/// println!("df_dx = {}", df_dx);
/// // evaluate at a point
/// let value = parsed_expression.eval_expression(vec!["x"], &[2.0]);
/// println!("value = {}", value);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
///________________________________________________________________________________________________________________________________________________
/// algebraic simplification of symbolic expressions: constant folding, identity
/// elimination and collection of like polynomial terms
/// ```
/// use symdx::symbolic::symbolic_engine::Expr;
/// let e = Expr::parse_expression("x + x + 0*sin(x)").unwrap();
/// assert_eq!(e.simplify(), Expr::Const(2.0) * Expr::Var("x".to_string()));
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_simplify;
///________________________________________________________________________________________________________________________________________________
/// rule based indefinite integration: linearity, power rule, standard transcendental
/// forms, recursive integration by parts. An expression no rule covers is returned
/// as an unevaluated integral instead of an error
/// ```
/// use symdx::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^2").unwrap();
/// let F = f.integrate("x").unwrap();
/// println!("antiderivative = {}", F);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_integration;
///________________________________________________________________________________________________________________________________________________
/// decides whether two expressions are the same function by expanding both into a
/// sum of canonical terms and cancelling coefficients
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_equivalence;
///________________________________________________________________________________________________________________________________________________
/// renders a symbolic expression as a LaTeX string for client side typesetting
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_latex;
pub mod symbolic_engine_tests;
