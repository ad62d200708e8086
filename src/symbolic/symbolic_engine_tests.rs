//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::symbolic::symbolic_engine::Expr;
    use crate::symbols;
    use approx::assert_relative_eq;
    use std::collections::HashMap;
    use std::f64::consts::E;

    #[test]
    fn test_add_assign() {
        let mut expr = Expr::Var("x".to_string());
        expr += Expr::Const(2.0);
        let expected = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_sub_assign() {
        let mut expr = Expr::Var("x".to_string());
        expr -= Expr::Const(2.0);
        let expected = Expr::Sub(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_mul_assign() {
        let mut expr = Expr::Var("x".to_string());
        expr *= Expr::Const(2.0);
        let expected = Expr::Mul(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_div_assign() {
        let mut expr = Expr::Var("x".to_string());
        expr /= Expr::Const(2.0);
        let expected = Expr::Div(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg() {
        let expr = Expr::Var("x".to_string());
        let neg_expr = -expr;
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(neg_expr, expected);
    }

    #[test]
    fn test_symbols_macro() {
        let (x, y) = symbols!(x, y);
        assert_eq!(x, Expr::Var("x".to_string()));
        assert_eq!(y, Expr::Var("y".to_string()));
    }

    #[test]
    fn test_set_variable() {
        let (x, y) = symbols!(x, y);
        let expr = x.clone() * y.clone() + x.clone();
        let substituted = expr.set_variable("x", 2.0);
        let expected = Expr::Const(2.0) * y + Expr::Const(2.0);
        assert_eq!(substituted, expected);
    }

    #[test]
    fn test_set_variable_skips_bound_integration_variable() {
        let unresolved = Expr::IntegralOf(
            Box::new(Expr::Var("x".to_string())),
            "x".to_string(),
        );
        assert_eq!(unresolved.set_variable("x", 3.0), unresolved);
    }

    #[test]
    fn test_function_builders() {
        let x = symbols!(x);
        assert_eq!(x.clone().exp(), Expr::Exp(Box::new(x.clone())));
        assert_eq!(x.clone().ln(), Expr::Ln(Box::new(x.clone())));
        assert_eq!(x.clone().sqrt(), Expr::Sqrt(Box::new(x.clone())));
        assert_eq!(
            x.clone().pow(Expr::Const(2.0)),
            Expr::Pow(Box::new(x.clone()), Box::new(Expr::Const(2.0))),
        );
    }

    #[test]
    fn test_contains_variable() {
        let (x, y) = symbols!(x, y);
        let expr = x.clone() * Expr::sin(Box::new(y.clone()));
        assert!(expr.contains_variable("x"));
        assert!(expr.contains_variable("y"));
        assert!(!expr.contains_variable("z"));
    }

    #[test]
    fn test_unevaluated_integral_depends_on_its_variable() {
        let unresolved = Expr::IntegralOf(
            Box::new(Expr::Const(1.0)),
            "x".to_string(),
        );
        assert!(unresolved.contains_variable("x"));
    }

    #[test]
    fn test_contains_unevaluated_integral() {
        let plain = Expr::parse_expression("x^2 + sin(x)").unwrap();
        assert!(!plain.contains_unevaluated_integral());
        let wrapped = plain.clone()
            + Expr::IntegralOf(Box::new(plain), "x".to_string());
        assert!(wrapped.contains_unevaluated_integral());
    }

    #[test]
    fn test_all_constants_finite() {
        assert!(Expr::parse_expression("2x + 1").unwrap().all_constants_finite());
        let bad = Expr::Const(f64::NAN) * Expr::Var("x".to_string());
        assert!(!bad.all_constants_finite());
        let infinite = Expr::Const(f64::INFINITY) + Expr::Var("x".to_string());
        assert!(!infinite.all_constants_finite());
    }

    #[test]
    fn test_diff_power_rule() {
        let x = symbols!(x);
        let expr = x.clone().pow(Expr::Const(3.0));
        let df = expr.diff("x").simplify();
        let mut values = HashMap::new();
        values.insert("x".to_string(), 2.0);
        assert_relative_eq!(df.eval_safe(&values).unwrap(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_constant_base_exponential() {
        // d/dx 2^x = 2^x * ln(2)
        let expr = Expr::parse_expression("2^x").unwrap();
        let df = expr.diff("x");
        let mut values = HashMap::new();
        values.insert("x".to_string(), 1.5);
        let expected = 2.0_f64.powf(1.5) * 2.0_f64.ln();
        assert_relative_eq!(df.eval_safe(&values).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_chain_rule_sin() {
        let expr = Expr::parse_expression("sin(3x)").unwrap();
        let df = expr.diff("x");
        let mut values = HashMap::new();
        values.insert("x".to_string(), 0.4);
        assert_relative_eq!(
            df.eval_safe(&values).unwrap(),
            3.0 * (3.0 * 0.4_f64).cos(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_diff_hyperbolics() {
        let expr = Expr::parse_expression("sinh(x)").unwrap();
        let df = expr.diff("x");
        let mut values = HashMap::new();
        values.insert("x".to_string(), 0.7);
        assert_relative_eq!(
            df.eval_safe(&values).unwrap(),
            0.7_f64.cosh(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_diff_of_unevaluated_integral_recovers_integrand() {
        let integrand = Expr::parse_expression("exp(x^2)").unwrap();
        let unresolved = Expr::IntegralOf(Box::new(integrand.clone()), "x".to_string());
        assert_eq!(unresolved.diff("x"), integrand);
    }

    #[test]
    fn test_eval_expression() {
        let expr = Expr::parse_expression("x^2 + 2x + 1").unwrap();
        let result = expr.eval_expression(vec!["x"], &[3.0]);
        assert_relative_eq!(result, 16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_eval_exponential_constant() {
        let expr = Expr::parse_expression("e^x").unwrap();
        let result = expr.eval_expression(vec!["x"], &[1.0]);
        assert_relative_eq!(result, E, epsilon = 1e-12);
    }

    #[test]
    fn test_sym_to_str() {
        let x = symbols!(x);
        let expr = x.clone() + Expr::Const(2.0);
        assert_eq!(expr.sym_to_str("x"), "(x) + (2)");
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let expr = Expr::parse_expression("x*y + sin(z) + x").unwrap();
        let vars = expr.all_arguments_are_variables();
        assert_eq!(vars, vec!["x".to_string(), "y".to_string(), "z".to_string()]);
    }

    #[test]
    fn test_simplify_collects_like_terms() {
        let expr = Expr::parse_expression("x + x").unwrap();
        assert_eq!(
            expr.simplify(),
            Expr::Const(2.0) * Expr::Var("x".to_string())
        );
    }

    #[test]
    fn test_simplify_zero_and_one_identities() {
        let expr = Expr::parse_expression("1*x + 0*sin(x)").unwrap();
        assert_eq!(expr.simplify(), Expr::Var("x".to_string()));
    }

    #[test]
    fn test_simplify_power_merge() {
        let expr = Expr::parse_expression("x^2 * x^3").unwrap();
        assert_eq!(
            expr.simplify(),
            Expr::Pow(
                Box::new(Expr::Var("x".to_string())),
                Box::new(Expr::Const(5.0))
            )
        );
    }
}
