//! # Symbolic Engine Derivatives Module
//!
//! This module extends the symbolic engine with analytical differentiation, direct
//! numerical evaluation and string conversion. Differentiation is the verification
//! half of the solving pipeline: an antiderivative is accepted only when its
//! derivative is equivalent to the original integrand.
//!
//! ## Key Methods
//!
//! ### Differentiation
//! - `diff(var: &str)` - Analytical partial/total derivative
//!
//! ### Function evaluation
//! - `eval_expression()` - Direct evaluation without closure creation
//!
//! ### Parsing and Utilities
//! - `parse_expression()` - String to symbolic expression
//! - `sym_to_str()` - Symbolic expression to string
//! - `all_arguments_are_variables()` - Extract variable names
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Differentiation Rules**: Implements complete calculus rules including
//!    product rule, quotient rule, chain rule for all supported functions
//!
//! 2. **Generalized Power Rule**: d/dx(f^g) handles constant exponents, constant bases
//!    (c^x forms) and the fully general f^g case
//!
//! 3. **Unevaluated Integrals**: differentiating `IntegralOf(f, x)` with respect to x
//!    returns f, the fundamental theorem of calculus as a rewrite rule

use crate::symbolic::parse_expr::parse_expression_func;
use crate::symbolic::symbolic_engine::Expr;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to a variable.
    ///
    /// Implements all standard differentiation rules from calculus:
    /// - Power rule: d/dx(x^n) = n*x^(n-1)
    /// - Product rule: d/dx(f*g) = f'*g + f*g'
    /// - Quotient rule: d/dx(f/g) = (f'*g - f*g')/g^2
    /// - Chain rule: d/dx(f(g(x))) = f'(g(x))*g'(x)
    ///
    /// # Arguments
    /// * `var` - Variable name to differentiate with respect to
    ///
    /// # Returns
    /// New symbolic expression representing the derivative
    ///
    /// # Examples
    /// ```rust, ignore
    /// let x = Expr::Var("x".to_string());
    /// let f = x.clone().pow(Expr::Const(2.0)); // x^2
    /// let df_dx = f.diff("x"); // 2*x
    /// ```
    pub fn diff(&self, var: &str) -> Expr {
        match self {
            Expr::Var(name) => {
                if name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Pow(base, exp) => {
                if !exp.contains_variable(var) {
                    // n * base^(n-1) * base'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::Pow(
                                base.clone(),
                                Box::new(Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0)))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                } else if !base.contains_variable(var) {
                    // c^g: c^g * ln(c) * g'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            Box::new(Expr::Pow(base.clone(), exp.clone())),
                            Box::new(Expr::Ln(base.clone())),
                        )),
                        Box::new(exp.diff(var)),
                    )
                } else {
                    // f^g: f^g * (g' * ln(f) + g * f' / f)
                    Expr::Mul(
                        Box::new(Expr::Pow(base.clone(), exp.clone())),
                        Box::new(Expr::Add(
                            Box::new(Expr::Mul(
                                Box::new(exp.diff(var)),
                                Box::new(Expr::Ln(base.clone())),
                            )),
                            Box::new(Expr::Div(
                                Box::new(Expr::Mul(exp.clone(), Box::new(base.diff(var)))),
                                base.clone(),
                            )),
                        )),
                    )
                }
            }
            Expr::Exp(expr) => {
                Expr::Mul(Box::new(Expr::Exp(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::Ln(expr) => Expr::Div(Box::new(expr.diff(var)), expr.clone()),
            Expr::Sqrt(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(2.0)),
                    Box::new(Expr::Sqrt(expr.clone())),
                )),
            ),
            Expr::sin(expr) => {
                Expr::Mul(Box::new(Expr::cos(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::cos(expr) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(Expr::sin(expr.clone())),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::tg(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::cos(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            Expr::arcsin(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arccos(expr) => Expr::Div(
                Box::new(Expr::Mul(
                    Box::new(Expr::Const(-1.0)),
                    Box::new(expr.diff(var)),
                )),
                Box::new(Expr::Pow(
                    Box::new(Expr::Sub(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                    )),
                    Box::new(Expr::Const(0.5)),
                )),
            ),
            Expr::arctg(expr) => Expr::Div(
                Box::new(expr.diff(var)),
                Box::new(Expr::Add(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(expr.clone(), Box::new(Expr::Const(2.0)))),
                )),
            ),
            Expr::sh(expr) => {
                Expr::Mul(Box::new(Expr::ch(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::ch(expr) => {
                Expr::Mul(Box::new(Expr::sh(expr.clone())), Box::new(expr.diff(var)))
            }
            Expr::th(expr) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Pow(
                        Box::new(Expr::ch(expr.clone())),
                        Box::new(Expr::Const(2.0)),
                    )),
                )),
                Box::new(expr.diff(var)),
            ),
            // fundamental theorem of calculus: d/dx integral(f, dx) = f
            Expr::IntegralOf(expr, ivar) => {
                if ivar == var {
                    *expr.clone()
                } else {
                    Expr::IntegralOf(Box::new(expr.diff(var)), ivar.clone())
                }
            }
        }
    } // end of diff

    /// Converts symbolic expression to human-readable string representation.
    ///
    /// Generates mathematical notation with proper parentheses for precedence.
    /// Uses standard mathematical symbols and function names.
    ///
    /// # Arguments
    /// * `var` - Primary variable name (used for context, but all variables are converted)
    ///
    /// # Returns
    /// String representation of the expression
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::Add(Box::new(Expr::Var("x".to_string())), Box::new(Expr::Const(2.0)));
    /// assert_eq!(expr.sym_to_str("x"), "(x) + (2)");
    /// ```
    pub fn sym_to_str(&self, var: &str) -> String {
        match self {
            Expr::Var(name) => name.clone(),
            Expr::Const(val) => val.to_string(),
            Expr::Add(lhs, rhs) => format!("({}) + ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Sub(lhs, rhs) => format!("({}) - ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Mul(lhs, rhs) => format!("({}) * ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Div(lhs, rhs) => format!("({}) / ({})", lhs.sym_to_str(var), rhs.sym_to_str(var)),
            Expr::Pow(base, exp) => format!("({}^{})", base.sym_to_str(var), exp.sym_to_str(var)),
            Expr::Exp(expr) => format!("exp({})", expr.sym_to_str(var)),
            Expr::Ln(expr) => format!("ln({})", expr.sym_to_str(var)),
            Expr::Sqrt(expr) => format!("sqrt({})", expr.sym_to_str(var)),
            Expr::sin(expr) => format!("sin({})", expr.sym_to_str(var)),
            Expr::cos(expr) => format!("cos({})", expr.sym_to_str(var)),
            Expr::tg(expr) => format!("tg({})", expr.sym_to_str(var)),
            Expr::arcsin(expr) => format!("arcsin({})", expr.sym_to_str(var)),
            Expr::arccos(expr) => format!("arccos({})", expr.sym_to_str(var)),
            Expr::arctg(expr) => format!("arctg({})", expr.sym_to_str(var)),
            Expr::sh(expr) => format!("sh({})", expr.sym_to_str(var)),
            Expr::ch(expr) => format!("ch({})", expr.sym_to_str(var)),
            Expr::th(expr) => format!("th({})", expr.sym_to_str(var)),
            Expr::IntegralOf(expr, ivar) => {
                format!("integral({}, d{})", expr.sym_to_str(var), ivar)
            }
        } // end of match
    } // end of sym_to_str

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates symbolic expression directly without creating a closure.
    ///
    /// Recursively evaluates the expression tree with given variable values.
    ///
    /// # Arguments
    /// * `vars` - Variable names in order matching values array
    /// * `values` - Numerical values for each variable
    ///
    /// # Returns
    /// Numerical result of expression evaluation
    ///
    /// # Panics
    /// Panics when the expression holds a variable absent from `vars` or an
    /// unevaluated integral, which has no numerical value
    pub fn eval_expression(&self, vars: Vec<&str>, values: &[f64]) -> f64 {
        match self {
            Expr::Var(name) => {
                let index = vars.iter().position(|&x| x == name).unwrap();
                values[index]
            }
            Expr::Const(val) => {
                let val = *val;
                val
            }
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.eval_expression(vars.clone(), values);
                let rhs_fn = rhs.eval_expression(vars, values);
                lhs_fn + rhs_fn
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.eval_expression(vars.clone(), values);
                let rhs_fn = rhs.eval_expression(vars, values);
                lhs_fn - rhs_fn
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.eval_expression(vars.clone(), values);
                let rhs_fn = rhs.eval_expression(vars, values);
                lhs_fn * rhs_fn
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.eval_expression(vars.clone(), values);
                let rhs_fn = rhs.eval_expression(vars, values);
                lhs_fn / rhs_fn
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.eval_expression(vars.clone(), values);
                let exp_fn = exp.eval_expression(vars, values);
                base_fn.powf(exp_fn)
            }
            Expr::Exp(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.exp()
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.ln()
            }
            Expr::Sqrt(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.sqrt()
            }
            Expr::sin(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.sin()
            }
            Expr::cos(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.cos()
            }
            Expr::tg(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.tan()
            }
            Expr::arcsin(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.asin()
            }
            Expr::arccos(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.acos()
            }
            Expr::arctg(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.atan()
            }
            Expr::sh(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.sinh()
            }
            Expr::ch(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.cosh()
            }
            Expr::th(expr) => {
                let expr_fn = expr.eval_expression(vars, values);
                expr_fn.tanh()
            }
            Expr::IntegralOf(_, _) => {
                panic!("an unevaluated integral has no numerical value")
            }
        }
    } // end of eval_expression

    /// EXPRESSION PARSING FROM STRINGS

    /// Parses a mathematical expression from string representation.
    ///
    /// Converts human-readable mathematical notation into symbolic expression tree.
    /// Supports standard mathematical operators, a closed set of function names,
    /// and parentheses.
    ///
    /// # Arguments
    /// * `input` - String containing mathematical expression (e.g., "x^2 + sin(x)")
    ///
    /// # Returns
    /// Parsed symbolic expression, or a message describing what could not be parsed
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 + 2*x + 1")?;
    /// ```
    ///
    /// # Supported Syntax
    /// - Variables: single letters x, y, t
    /// - Constants: 3.14, 2, 1.5, e, pi
    /// - Operators: +, -, *, /, ^, ** and implicit multiplication (2x, 3sin(x))
    /// - Functions: sin, cos, tan, exp, ln, sqrt, inverse trig, hyperbolics
    /// - Parentheses for grouping
    pub fn parse_expression(input: &str) -> Result<Expr, String> {
        parse_expression_func(input)
    }

    /// Extracts all unique variable names from the symbolic expression.
    ///
    /// Recursively traverses the expression tree to collect all symbolic variables.
    /// Returns a sorted, deduplicated list of variable names.
    ///
    /// # Returns
    /// Vector of unique variable names in alphabetical order
    ///
    /// # Examples
    /// ```rust, ignore
    /// let expr = Expr::parse_expression("x^2 + y*z + x")?;
    /// let vars = expr.all_arguments_are_variables();
    /// assert_eq!(vars, vec!["x", "y", "z"]);
    /// ```
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();

        match self {
            Expr::Var(name) => {
                vars.push(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs) => {
                vars.extend(lhs.all_arguments_are_variables());
                vars.extend(rhs.all_arguments_are_variables());
            }
            Expr::Pow(base, exp) => {
                vars.extend(base.all_arguments_are_variables());
                vars.extend(exp.all_arguments_are_variables());
            }
            Expr::Exp(expr) | Expr::Ln(expr) | Expr::Sqrt(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
            Expr::sin(expr) | Expr::cos(expr) | Expr::tg(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
            Expr::arcsin(expr) | Expr::arccos(expr) | Expr::arctg(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
            Expr::sh(expr) | Expr::ch(expr) | Expr::th(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
            Expr::IntegralOf(expr, _) => {
                vars.extend(expr.all_arguments_are_variables());
            }
        }

        vars.sort();
        vars.dedup();
        vars
    } // end of all_arguments_are_variables
}
