//! The solve & verify engine: hand the parsed expression to the symbolic
//! integrator, differentiate the result back and compare against the original.
//! Verification failure is informational, never an error.

use crate::solver::error::CasError;
use crate::solver::normalizer::normalize_input;
use crate::solver::report::SolveReport;
use crate::symbolic::parse_expr::parse_for_variable;
use log::{info, warn};
use simplelog::*;

/// Per-request integral solver. The only configuration is the log level,
/// `"off"`/`"none"` disables logging entirely.
pub struct IntegralSolver {
    pub loglevel: Option<String>,
}

impl Default for IntegralSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegralSolver {
    pub fn new() -> Self {
        IntegralSolver {
            loglevel: Some("info".to_string()),
        }
    }

    pub fn with_loglevel(loglevel: Option<String>) -> Self {
        if let Some(level) = &loglevel {
            assert!(
                level == "debug"
                    || level == "info"
                    || level == "warn"
                    || level == "error"
                    || level == "off"
                    || level == "none",
                "loglevel must be debug/info, warn, error or off"
            );
        }
        IntegralSolver { loglevel }
    }

    // wrapper around the pipeline to implement logging
    pub fn solve_integral(&self, raw: &str) -> Result<SolveReport, CasError> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.pipeline(raw)
        } else {
            let loglevel = self.loglevel.clone();
            let log_option = if let Some(level) = loglevel {
                match level.as_str() {
                    "debug" => LevelFilter::Debug,
                    "info" => LevelFilter::Info,
                    "warn" => LevelFilter::Warn,
                    "error" => LevelFilter::Error,
                    _ => panic!("loglevel must be debug, info, warn or error"),
                }
            } else {
                LevelFilter::Info
            };
            let logger_instance = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);

            match logger_instance {
                Ok(()) => {
                    let res = self.pipeline(raw);
                    info!("solve finished");
                    res
                }
                // a logger from an earlier call is already installed
                Err(_) => self.pipeline(raw),
            }
        }
    }

    fn pipeline(&self, raw: &str) -> Result<SolveReport, CasError> {
        let (expr_text, var) = normalize_input(raw)?;
        info!("normalized input: '{}', variable '{}'", expr_text, var);

        let problem =
            parse_for_variable(&expr_text, &var).map_err(CasError::Parse)?;
        if !problem.all_constants_finite() {
            return Err(CasError::Solve(
                "the expression contains a non-finite constant".to_string(),
            ));
        }
        info!("parsed problem: {}", problem);

        let integrand = problem.simplify();
        let antiderivative = integrand
            .integrate(&var)
            .map_err(CasError::Solve)?;
        let result = antiderivative.simplify();
        info!("antiderivative: {}", result);

        let derivative = result.diff(&var).simplify();
        let verified = derivative.equivalent(&integrand);
        if !verified {
            warn!(
                "verification failed: d/d{} of {} gave {}",
                var, result, derivative
            );
        }

        Ok(SolveReport::assemble(
            &problem,
            &result,
            &derivative,
            &var,
            verified,
        ))
    }
}

/// Solve one indefinite integral from raw user text, quietly.
pub fn solve_integral(raw: &str) -> Result<SolveReport, CasError> {
    IntegralSolver::with_loglevel(Some("off".to_string())).solve_integral(raw)
}
