//! The structured response of a solve: problem, antiderivative, narration and
//! verification, each rendered as LaTeX source for client side typesetting.

use crate::symbolic::symbolic_engine::Expr;

/// Everything the presentation layer needs to typeset one solved integral.
/// All fields are LaTeX source without surrounding math delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    /// the integral as posed, "\int <expr> \, d<var>" over the unsimplified parse
    pub problem_latex: String,
    /// the antiderivative, always suffixed with "+ C"
    pub result_latex: String,
    /// fixed three line narration filled with the rendered pieces
    pub steps_latex: Vec<String>,
    /// the verification line: derivative of the result against the integrand
    pub checks: Vec<String>,
    /// reserved for future graphing support, always empty
    pub plots: Vec<String>,
    /// whether the derivative of the result matched the integrand
    pub verified: bool,
}

impl SolveReport {
    /// Assemble the report from the symbolic pieces of a finished solve.
    pub fn assemble(
        problem: &Expr,
        result: &Expr,
        derivative: &Expr,
        var: &str,
        verified: bool,
    ) -> SolveReport {
        let problem_latex = format!("\\int {} \\, d{}", problem.latex(), var);
        let result_body = result.latex();
        let result_latex = format!("{} + C", result_body);

        let steps_latex = vec![
            format!("\\text{{Identificamos la integral: }} {}", problem_latex),
            "\\text{Aplicamos reglas simbólicas de integración (sustitución o partes según corresponda).}"
                .to_string(),
            format!("\\text{{Obtenemos: }} {}", result_latex),
        ];

        let verdict = if verified { "✓ correcto" } else { "✗ revisar" };
        let checks = vec![format!(
            "\\frac{{d}}{{d{}}}\\left({}\\right) = {} \\\\ \\text{{{}}}",
            var,
            result_body,
            derivative.latex(),
            verdict
        )];

        SolveReport {
            problem_latex,
            result_latex,
            steps_latex,
            checks,
            plots: Vec::new(),
            verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_shapes_the_response() {
        let problem = Expr::parse_expression("x^2").unwrap();
        let result = Expr::parse_expression("x^3/3").unwrap();
        let derivative = problem.clone();
        let report = SolveReport::assemble(&problem, &result, &derivative, "x", true);

        assert_eq!(report.problem_latex, "\\int {x}^{2} \\, dx");
        assert!(report.result_latex.ends_with("+ C"));
        assert_eq!(report.steps_latex.len(), 3);
        assert_eq!(report.checks.len(), 1);
        assert!(report.checks[0].contains("✓ correcto"));
        assert!(report.plots.is_empty());
    }

    #[test]
    fn test_failed_verification_is_reported_not_hidden() {
        let problem = Expr::parse_expression("x^2").unwrap();
        let wrong = Expr::parse_expression("x^4").unwrap();
        let derivative = wrong.diff("x");
        let report = SolveReport::assemble(&problem, &wrong, &derivative, "x", false);
        assert!(report.checks[0].contains("✗ revisar"));
        assert!(!report.verified);
    }
}
