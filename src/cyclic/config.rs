//! Search configuration
//!
//! Bounds on the generator searches. The exhaustive search tries up to 2^r
//! candidates and the factoring search up to 2^d trial divisors, where d is
//! the degree of the largest irreducible factor of x^n - 1. Both also hold
//! x^n - 1 in memory, so n itself is bounded too.

use serde::{Deserialize, Serialize};

use crate::error::{CodeError, CodeResult};

/// Largest redundancy accepted by default
pub const DEFAULT_MAX_REDUNDANCY: usize = 24;

/// Largest code length accepted by default
pub const DEFAULT_MAX_CODE_LENGTH: usize = 1 << 20;

/// Largest trial divisor degree the factoring search tries by default
pub const DEFAULT_MAX_FACTOR_DEGREE: usize = 16;

/// Configuration for the generator polynomial search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Largest r = n - k the exhaustive search will attempt
    pub max_redundancy: usize,

    /// Largest n either search will build x^n - 1 for
    pub max_code_length: usize,

    /// Largest trial divisor degree the factoring search will reach
    pub max_factor_degree: usize,

    /// Optional cap on the number of candidate divisions tried
    pub max_candidates: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_redundancy: DEFAULT_MAX_REDUNDANCY,
            max_code_length: DEFAULT_MAX_CODE_LENGTH,
            max_factor_degree: DEFAULT_MAX_FACTOR_DEGREE,
            max_candidates: None,
        }
    }
}

impl SearchConfig {
    /// No limits at all
    pub fn unbounded() -> Self {
        Self {
            max_redundancy: usize::MAX,
            max_code_length: usize::MAX,
            max_factor_degree: usize::MAX,
            max_candidates: None,
        }
    }

    pub fn with_max_redundancy(mut self, max_redundancy: usize) -> Self {
        self.max_redundancy = max_redundancy;
        self
    }

    pub fn with_max_code_length(mut self, max_code_length: usize) -> Self {
        self.max_code_length = max_code_length;
        self
    }

    pub fn with_max_factor_degree(mut self, max_factor_degree: usize) -> Self {
        self.max_factor_degree = max_factor_degree;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: u64) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> CodeResult<Self> {
        serde_json::from_str(json).map_err(|e| CodeError::ConfigError(e.to_string()))
    }

    /// Check a redundancy against the configured limit
    pub fn check_redundancy(&self, redundancy: usize) -> CodeResult<()> {
        if redundancy > self.max_redundancy {
            log::warn!(
                "refusing exhaustive search for r = {} (limit {})",
                redundancy,
                self.max_redundancy
            );
            return Err(CodeError::search_budget_exceeded(
                "redundancy",
                redundancy as u64,
                self.max_redundancy as u64,
            ));
        }
        Ok(())
    }

    /// Check a code length against the configured limit
    pub fn check_code_length(&self, n: usize) -> CodeResult<()> {
        if n > self.max_code_length {
            log::warn!("refusing to build x^{} - 1 (limit {})", n, self.max_code_length);
            return Err(CodeError::search_budget_exceeded(
                "code length",
                n as u64,
                self.max_code_length as u64,
            ));
        }
        Ok(())
    }

    /// Check a trial divisor degree against the configured limit
    pub fn check_factor_degree(&self, degree: usize) -> CodeResult<()> {
        if degree > self.max_factor_degree {
            log::warn!(
                "refusing trial divisors of degree {} (limit {})",
                degree,
                self.max_factor_degree
            );
            return Err(CodeError::search_budget_exceeded(
                "factor degree",
                degree as u64,
                self.max_factor_degree as u64,
            ));
        }
        Ok(())
    }

    /// Whether `tried` candidates already use up the candidate budget
    pub fn check_candidates(&self, tried: u64, requested: u64) -> CodeResult<()> {
        match self.max_candidates {
            Some(limit) if tried >= limit => Err(CodeError::search_budget_exceeded(
                "candidates",
                requested,
                limit,
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_redundancy, DEFAULT_MAX_REDUNDANCY);
        assert_eq!(config.max_candidates, None);
        assert!(config.check_redundancy(DEFAULT_MAX_REDUNDANCY).is_ok());
        assert!(config.check_redundancy(DEFAULT_MAX_REDUNDANCY + 1).is_err());
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::default()
            .with_max_redundancy(8)
            .with_max_candidates(100);
        assert_eq!(config.max_redundancy, 8);
        assert_eq!(config.max_candidates, Some(100));
    }

    #[test]
    fn test_from_json() {
        let config = SearchConfig::from_json(r#"{"max_redundancy": 10}"#).unwrap();
        assert_eq!(config.max_redundancy, 10);
        assert_eq!(config.max_code_length, DEFAULT_MAX_CODE_LENGTH);
        assert_eq!(config.max_candidates, None);

        let config =
            SearchConfig::from_json(r#"{"max_factor_degree": 8, "max_candidates": 50}"#).unwrap();
        assert_eq!(config.max_factor_degree, 8);
        assert_eq!(config.max_candidates, Some(50));

        let config = SearchConfig::from_json("{}").unwrap();
        assert_eq!(config, SearchConfig::default());

        let err = SearchConfig::from_json("max_redundancy = 10").unwrap_err();
        assert_eq!(err.error_type(), "ConfigError");
    }

    #[test]
    fn test_unbounded() {
        let config = SearchConfig::unbounded();
        assert!(config.check_redundancy(1000).is_ok());
        assert!(config.check_code_length(usize::MAX).is_ok());
        assert!(config.check_factor_degree(1000).is_ok());
    }

    #[test]
    fn test_code_length_and_factor_degree_limits() {
        let config = SearchConfig::default();
        assert!(config.check_code_length(DEFAULT_MAX_CODE_LENGTH).is_ok());
        let err = config.check_code_length(usize::MAX).unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");

        assert!(config.check_factor_degree(DEFAULT_MAX_FACTOR_DEGREE).is_ok());
        let err = config.check_factor_degree(DEFAULT_MAX_FACTOR_DEGREE + 1).unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");
    }

    #[test]
    fn test_candidate_budget() {
        assert!(SearchConfig::default().check_candidates(1_000_000, 2).is_ok());
        let config = SearchConfig::default().with_max_candidates(3);
        assert!(config.check_candidates(2, 8).is_ok());
        assert!(config.check_candidates(3, 8).is_err());
    }
}
