/// # Integral solving pipeline
///
/// A straight line pipeline over the symbolic core: normalize raw user text,
/// parse it against the closed function whitelist, integrate, verify by
/// differentiation and render every piece as LaTeX.
///
/// ```
/// use symdx::solver::solve::solve_integral;
///
/// let report = solve_integral("x^2 dx").unwrap();
/// assert!(report.result_latex.ends_with("+ C"));
/// assert!(report.verified);
/// ```
///
/// An integrand outside the rule set is an answer, not an error:
///
/// ```
/// use symdx::solver::solve::solve_integral;
///
/// let report = solve_integral("exp(x^2) dx").unwrap();
/// assert!(report.result_latex.starts_with("\\int"));
/// ```
pub mod solve;
//__________________________________________________________________________
/// Raw text to `(expression, variable)`: strips an integral sign prefix and a
/// trailing `d<var>` differential, defaults the variable to `x`.
pub mod normalizer;
//__________________________________________________________________________
/// Error taxonomy of the pipeline: input shape, parse and solve failures,
/// each carrying a user facing Spanish diagnostic.
pub mod error;
//__________________________________________________________________________
/// The response structure consumed by the presentation layer.
pub mod report;
//__________________________________________________________________________
#[cfg(test)]
mod solver_tests;
