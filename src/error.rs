/*!
 * Error handling for the Cyclix coding module
 *
 * Provides typed errors for parameter validation, message validation,
 * generator search and GF(2) arithmetic, together with error codes,
 * user-friendly messages and suggested remediation.
 */

use std::collections::HashMap;
use thiserror::Error;

/// Error type for all cyclic code operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Invalid parameter: {parameter} - expected {expected} - got {actual}")]
    InvalidParameters {
        parameter: String,
        expected: String,
        actual: String,
        error_code: u32,
    },

    #[error("Invalid message: {cause} (expected {expected_len} bits, got {actual:?})")]
    InvalidMessage {
        expected_len: usize,
        actual: String,
        cause: String,
        error_code: u32,
    },

    #[error("No degree n-k generator polynomial divides x^{n} - 1 (n={n}, k={k})")]
    NoGeneratorExists { n: usize, k: usize, error_code: u32 },

    #[error("Division by the zero polynomial in {operation}")]
    DivisionByZero { operation: String, error_code: u32 },

    #[error("Polynomial needs {required} coefficients but only {width} were allowed")]
    WidthOverflow {
        width: usize,
        required: usize,
        error_code: u32,
    },

    #[error("Search budget exceeded: {budget} of {requested} is above the limit of {limit}")]
    SearchBudgetExceeded {
        budget: String,
        requested: u64,
        limit: u64,
        error_code: u32,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Error code constants for different error categories
pub mod error_codes {
    // Validation errors: 1000-1999
    pub const INVALID_CODE_LENGTH: u32 = 1001;
    pub const INVALID_MESSAGE_LENGTH: u32 = 1002;
    pub const NON_INCREASING_PARAMETERS: u32 = 1003;
    pub const UNPARSEABLE_PARAMETER: u32 = 1004;
    pub const PARAMETER_MISMATCH: u32 = 1005;
    pub const INVALID_BIT_STRING: u32 = 1006;
    pub const INVALID_GENERATOR: u32 = 1007;

    // Message errors: 2000-2999
    pub const MESSAGE_WRONG_LENGTH: u32 = 2001;
    pub const MESSAGE_INVALID_SYMBOL: u32 = 2002;

    // Search errors: 3000-3999
    pub const NO_GENERATOR_EXISTS: u32 = 3001;
    pub const SEARCH_BUDGET_EXCEEDED: u32 = 3002;

    // Arithmetic defects: 4000-4999
    pub const DIVISION_BY_ZERO: u32 = 4001;
    pub const WIDTH_OVERFLOW: u32 = 4002;

    // Configuration and serialization: 9000-9999
    pub const CONFIG_INVALID: u32 = 9001;
    pub const SERIALIZATION_FAILED: u32 = 9002;
}

impl CodeError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CodeError::InvalidParameters { error_code, .. } => *error_code,
            CodeError::InvalidMessage { error_code, .. } => *error_code,
            CodeError::NoGeneratorExists { error_code, .. } => *error_code,
            CodeError::DivisionByZero { error_code, .. } => *error_code,
            CodeError::WidthOverflow { error_code, .. } => *error_code,
            CodeError::SearchBudgetExceeded { error_code, .. } => *error_code,
            CodeError::ConfigError(_) => error_codes::CONFIG_INVALID,
            CodeError::SerializationError(_) => error_codes::SERIALIZATION_FAILED,
        }
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            CodeError::InvalidParameters {
                parameter,
                expected,
                ..
            } => format!(
                "Invalid value for '{}'. Expected {}.",
                parameter, expected
            ),
            CodeError::InvalidMessage {
                expected_len,
                cause,
                ..
            } => format!(
                "Message must be exactly {} bits long and contain only 0 and 1 ({}).",
                expected_len, cause
            ),
            CodeError::NoGeneratorExists { n, k, .. } => format!(
                "No valid generator polynomial exists for n={} and k={}.",
                n, k
            ),
            CodeError::DivisionByZero { operation, .. } => format!(
                "Internal arithmetic error in '{}'. This is a bug, please report it.",
                operation
            ),
            CodeError::WidthOverflow { width, required, .. } => format!(
                "Result needs {} bits and does not fit in {}.",
                required, width
            ),
            CodeError::SearchBudgetExceeded {
                budget,
                requested,
                limit,
                ..
            } => format!(
                "The generator search needs {} {} but is limited to {}.",
                requested, budget, limit
            ),
            CodeError::ConfigError(_) => {
                "Search configuration could not be read. Check the file format.".to_string()
            }
            CodeError::SerializationError(_) => {
                "Result serialization failed.".to_string()
            }
        }
    }

    /// Get technical details for debugging
    pub fn technical_details(&self) -> HashMap<String, String> {
        let mut details = HashMap::new();

        details.insert("error_code".to_string(), self.error_code().to_string());
        details.insert("error_type".to_string(), self.error_type().to_string());
        details.insert("timestamp".to_string(), chrono::Utc::now().to_rfc3339());

        match self {
            CodeError::InvalidParameters {
                parameter,
                expected,
                actual,
                ..
            } => {
                details.insert("parameter".to_string(), parameter.clone());
                details.insert("expected".to_string(), expected.clone());
                details.insert("actual".to_string(), actual.clone());
            }
            CodeError::InvalidMessage {
                expected_len,
                actual,
                cause,
                ..
            } => {
                details.insert("expected_len".to_string(), expected_len.to_string());
                details.insert("actual".to_string(), actual.clone());
                details.insert("cause".to_string(), cause.clone());
            }
            CodeError::NoGeneratorExists { n, k, .. } => {
                details.insert("n".to_string(), n.to_string());
                details.insert("k".to_string(), k.to_string());
            }
            CodeError::DivisionByZero { operation, .. } => {
                details.insert("operation".to_string(), operation.clone());
            }
            _ => {
                details.insert("details".to_string(), format!("{:?}", self));
            }
        }

        details
    }

    /// Get suggested remediation steps
    pub fn suggested_remediation(&self) -> Option<String> {
        match self {
            CodeError::InvalidParameters { error_code, .. } => match *error_code {
                error_codes::NON_INCREASING_PARAMETERS => {
                    Some("Choose a codeword length n strictly greater than k.".to_string())
                }
                error_codes::UNPARSEABLE_PARAMETER => {
                    Some("Enter n and k as positive integers.".to_string())
                }
                _ => Some("Check the code parameters n and k.".to_string()),
            },
            CodeError::InvalidMessage { .. } => {
                Some("Provide a message of exactly k characters, each 0 or 1.".to_string())
            }
            CodeError::NoGeneratorExists { .. } => Some(
                "Pick another k: n - k must be the degree of some factor of x^n + 1.".to_string(),
            ),
            CodeError::SearchBudgetExceeded { budget, .. } => Some(
                match budget.as_str() {
                    "redundancy" => {
                        "Raise max_redundancy in the search configuration, or use the factorization search."
                    }
                    "code length" => "Raise max_code_length in the search configuration.",
                    "factor degree" => {
                        "Raise max_factor_degree in the search configuration, or use the exhaustive search."
                    }
                    _ => "Raise max_candidates in the search configuration.",
                }
                .to_string(),
            ),
            _ => None,
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CodeError::InvalidParameters { .. } => "InvalidParameters",
            CodeError::InvalidMessage { .. } => "InvalidMessage",
            CodeError::NoGeneratorExists { .. } => "NoGeneratorExists",
            CodeError::DivisionByZero { .. } => "DivisionByZero",
            CodeError::WidthOverflow { .. } => "WidthOverflow",
            CodeError::SearchBudgetExceeded { .. } => "SearchBudgetExceeded",
            CodeError::ConfigError(_) => "ConfigError",
            CodeError::SerializationError(_) => "SerializationError",
        }
    }

    /// Whether this error indicates a bug rather than bad input
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            CodeError::DivisionByZero { .. } | CodeError::WidthOverflow { .. }
        )
    }
}

/// Convenience constructors for common error types
impl CodeError {
    pub fn invalid_parameter(parameter: &str, expected: &str, actual: &str, error_code: u32) -> Self {
        CodeError::InvalidParameters {
            parameter: parameter.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
            error_code,
        }
    }

    pub fn invalid_message(expected_len: usize, actual: &str, cause: &str, error_code: u32) -> Self {
        CodeError::InvalidMessage {
            expected_len,
            actual: actual.to_string(),
            cause: cause.to_string(),
            error_code,
        }
    }

    pub fn no_generator(n: usize, k: usize) -> Self {
        CodeError::NoGeneratorExists {
            n,
            k,
            error_code: error_codes::NO_GENERATOR_EXISTS,
        }
    }

    pub fn division_by_zero(operation: &str) -> Self {
        log::error!("division by the zero polynomial in {}", operation);
        CodeError::DivisionByZero {
            operation: operation.to_string(),
            error_code: error_codes::DIVISION_BY_ZERO,
        }
    }

    pub fn width_overflow(width: usize, required: usize) -> Self {
        CodeError::WidthOverflow {
            width,
            required,
            error_code: error_codes::WIDTH_OVERFLOW,
        }
    }

    pub fn search_budget_exceeded(budget: &str, requested: u64, limit: u64) -> Self {
        CodeError::SearchBudgetExceeded {
            budget: budget.to_string(),
            requested,
            limit,
            error_code: error_codes::SEARCH_BUDGET_EXCEEDED,
        }
    }
}

impl From<serde_json::Error> for CodeError {
    fn from(err: serde_json::Error) -> Self {
        CodeError::SerializationError(err.to_string())
    }
}

/// Result type alias for cyclic code operations
pub type CodeResult<T> = Result<T, CodeError>;
