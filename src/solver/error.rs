use std::error::Error;
use std::fmt;

/// Failures of the solving pipeline. Every variant is recoverable and meant to
/// be translated by the caller into a client facing response; the pipeline
/// never panics on bad input.
#[derive(Debug, Clone, PartialEq)]
pub enum CasError {
    /// the request itself is malformed: empty expression, missing input
    InputShape(String),
    /// the text does not resolve to an expression under the whitelist
    Parse(String),
    /// integration or differentiation failed on a well formed expression
    Solve(String),
}

impl CasError {
    pub fn empty_input() -> Self {
        CasError::InputShape("Falta 'input' con la expresión.".to_string())
    }
}

impl fmt::Display for CasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CasError::InputShape(msg) => write!(f, "{}", msg),
            CasError::Parse(detail) => write!(
                f,
                "No pude interpretar la expresión. Revisa la sintaxis (usa ^ o ** para potencias). ({})",
                detail
            ),
            CasError::Solve(detail) => {
                write!(f, "No pude resolver la integral. ({})", detail)
            }
        }
    }
}

impl Error for CasError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        let err = CasError::empty_input();
        assert_eq!(err.to_string(), "Falta 'input' con la expresión.");
    }

    #[test]
    fn test_parse_error_carries_syntax_hint() {
        let err = CasError::Parse("unknown function or symbol 'foo'".to_string());
        let msg = err.to_string();
        assert!(msg.contains("^ o **"));
        assert!(msg.contains("foo"));
    }
}
