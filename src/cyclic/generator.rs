//! Generator polynomial search
//!
//! A generator polynomial of an (n, k) binary cyclic code is a polynomial of
//! degree r = n - k dividing x^n - 1. Among several valid choices the search
//! returns the one whose coefficient bit pattern is numerically smallest.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::SearchConfig;
use super::parameters::CodeParameters;
use crate::error::{error_codes, CodeError, CodeResult};
use crate::gf2::{self, Gf2Polynomial};

/// Largest redundancy whose candidates fit in a `u64` bit pattern
pub const MAX_ENUMERABLE_REDUNDANCY: usize = 63;

/// A polynomial of degree n - k known to divide x^n - 1
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GeneratorRecord", into = "GeneratorRecord")]
pub struct GeneratorPolynomial {
    params: CodeParameters,
    poly: Gf2Polynomial,
}

/// Serialized form of a generator
#[derive(Clone, Serialize, Deserialize)]
struct GeneratorRecord {
    n: usize,
    k: usize,
    bits: Gf2Polynomial,
}

impl TryFrom<GeneratorRecord> for GeneratorPolynomial {
    type Error = CodeError;

    fn try_from(record: GeneratorRecord) -> Result<Self, Self::Error> {
        Self::new(CodeParameters::new(record.n, record.k)?, record.bits)
    }
}

impl From<GeneratorPolynomial> for GeneratorRecord {
    fn from(generator: GeneratorPolynomial) -> Self {
        Self {
            n: generator.params.n(),
            k: generator.params.k(),
            bits: generator.poly,
        }
    }
}

impl GeneratorPolynomial {
    /// Validate a caller-supplied generator: it must have degree r and
    /// divide x^n - 1
    pub fn new(params: CodeParameters, poly: Gf2Polynomial) -> CodeResult<Self> {
        if poly.degree() != Some(params.r()) {
            return Err(CodeError::invalid_parameter(
                "generator",
                &format!("a polynomial of degree {}", params.r()),
                &poly.to_bits(),
                error_codes::INVALID_GENERATOR,
            ));
        }

        // g divides x^n - 1 exactly when x^n = 1 modulo g
        if gf2::x_pow_mod(params.n(), &poly)? != Gf2Polynomial::one() {
            return Err(CodeError::invalid_parameter(
                "generator",
                &format!("a divisor of x^{} - 1", params.n()),
                &poly.to_bits(),
                error_codes::INVALID_GENERATOR,
            ));
        }

        Ok(Self { params, poly })
    }

    /// Parse and validate a generator given as a bit string
    pub fn from_bits(params: CodeParameters, bits: &str) -> CodeResult<Self> {
        Self::new(params, Gf2Polynomial::from_bit_str(bits)?)
    }

    pub fn polynomial(&self) -> &Gf2Polynomial {
        &self.poly
    }

    pub fn parameters(&self) -> CodeParameters {
        self.params
    }

    /// Degree of the generator, always n - k
    pub fn degree(&self) -> usize {
        self.params.r()
    }

    /// Coefficients, most significant first, exactly r + 1 characters
    pub fn to_bits(&self) -> String {
        self.poly.to_bits()
    }

    /// The check polynomial h(x) = (x^n - 1) / g(x), of degree k
    pub fn check_polynomial(&self) -> CodeResult<Gf2Polynomial> {
        let target = Gf2Polynomial::x_pow_n_minus_one(self.params.n());
        let (quotient, _) = target.div_rem(&self.poly)?;
        Ok(quotient)
    }
}

impl fmt::Display for GeneratorPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.poly)
    }
}

/// Strategy for choosing a generator polynomial
///
/// Every implementation must return the numerically smallest degree-r
/// divisor of x^n - 1, so strategies are interchangeable.
pub trait GeneratorSearch {
    /// Find the generator for `params`, or `NoGeneratorExists`
    fn find(&self, params: CodeParameters) -> CodeResult<GeneratorPolynomial>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Reference search: try every degree-r polynomial in ascending order
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSearch {
    config: SearchConfig,
}

impl ExhaustiveSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Every degree-r divisor of x^n - 1, ascending
    pub fn all_generators(&self, params: CodeParameters) -> CodeResult<Vec<GeneratorPolynomial>> {
        let mut found = Vec::new();
        self.scan(params, |candidate, target| {
            if gf2::divides(&candidate, target)? {
                found.push(GeneratorPolynomial {
                    params,
                    poly: candidate,
                });
            }
            Ok(false)
        })?;
        Ok(found)
    }

    /// Refuse parameters outside the configured limits
    fn check_budget(&self, params: CodeParameters) -> CodeResult<()> {
        let r = params.r();
        self.config.check_redundancy(r)?;
        if r > MAX_ENUMERABLE_REDUNDANCY {
            return Err(CodeError::search_budget_exceeded(
                "redundancy",
                r as u64,
                MAX_ENUMERABLE_REDUNDANCY as u64,
            ));
        }
        self.config.check_code_length(params.n())
    }

    /// Feed candidates of exact degree r, with x^n - 1, to `visit` in
    /// ascending numeric order until it returns `true`. Returns whether it
    /// ever did. Nothing is allocated before the budget check passes.
    fn scan<F>(&self, params: CodeParameters, mut visit: F) -> CodeResult<bool>
    where
        F: FnMut(Gf2Polynomial, &Gf2Polynomial) -> CodeResult<bool>,
    {
        self.check_budget(params)?;
        let r = params.r();
        let target = Gf2Polynomial::x_pow_n_minus_one(params.n());

        // Patterns below 2^r have degree < r and are never generators
        let first = 1u64 << r;
        let last = u64::MAX >> (MAX_ENUMERABLE_REDUNDANCY - r);

        for (tried, code) in (first..=last).enumerate() {
            if let Err(e) = self.config.check_candidates(tried as u64, last - first + 1) {
                log::warn!("candidate budget spent for {}", params);
                return Err(e);
            }
            if visit(Gf2Polynomial::from_u64(code), &target)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl GeneratorSearch for ExhaustiveSearch {
    fn find(&self, params: CodeParameters) -> CodeResult<GeneratorPolynomial> {
        log::debug!("exhaustive search for {} over degree {} candidates", params, params.r());

        let mut generator = None;
        self.scan(params, |candidate, target| {
            if gf2::divides(&candidate, target)? {
                generator = Some(candidate);
                return Ok(true);
            }
            Ok(false)
        })?;

        match generator {
            Some(poly) => {
                log::info!("generator for {}: {}", params, poly);
                Ok(GeneratorPolynomial { params, poly })
            }
            None => {
                log::warn!("no generator of degree {} divides x^{} - 1", params.r(), params.n());
                Err(CodeError::no_generator(params.n(), params.k()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "exhaustive"
    }
}

/// Search by factoring x^n - 1 into irreducibles and combining factors
///
/// Its cost depends on the largest irreducible factor of x^n - 1 rather
/// than on r. It is bound by [`SearchConfig::max_factor_degree`],
/// [`SearchConfig::max_code_length`] and [`SearchConfig::max_candidates`]
/// but not by [`SearchConfig::max_redundancy`].
#[derive(Debug, Clone, Default)]
pub struct FactorizationSearch {
    config: SearchConfig,
}

impl FactorizationSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Irreducible factors of x^n - 1 with multiplicities, ascending
    pub fn factor_x_pow_n_minus_one(&self, n: usize) -> CodeResult<Vec<(Gf2Polynomial, usize)>> {
        self.config.check_code_length(n)?;

        let mut rest = Gf2Polynomial::x_pow_n_minus_one(n);
        let mut factors: Vec<(Gf2Polynomial, usize)> = Vec::new();
        let mut tried = 0u64;
        let mut d = 1;

        while rest.degree().map_or(false, |deg| 2 * d <= deg) {
            self.config.check_factor_degree(d)?;
            if d > MAX_ENUMERABLE_REDUNDANCY {
                return Err(CodeError::search_budget_exceeded(
                    "factor degree",
                    d as u64,
                    MAX_ENUMERABLE_REDUNDANCY as u64,
                ));
            }

            // Factors of x^n - 1 have a constant term, so only odd patterns
            let first = (1u64 << d) | 1;
            let last = u64::MAX >> (MAX_ENUMERABLE_REDUNDANCY - d);
            for code in (first..=last).step_by(2) {
                // Whatever is left is irreducible once it is below degree 2d
                if rest.degree().map_or(true, |deg| deg < 2 * d) {
                    break;
                }
                self.config.check_candidates(tried, tried + 1)?;
                tried += 1;

                let candidate = Gf2Polynomial::from_u64(code);
                let mut multiplicity = 0;
                loop {
                    let (quotient, remainder) = rest.div_rem(&candidate)?;
                    if !remainder.is_zero() {
                        break;
                    }
                    rest = quotient;
                    multiplicity += 1;
                }
                if multiplicity > 0 {
                    factors.push((candidate, multiplicity));
                }
            }
            d += 1;
        }

        if rest.degree().map_or(false, |deg| deg > 0) {
            factors.push((rest, 1));
        }

        Ok(factors)
    }

    /// Smallest product of the factors with total degree `r`
    fn smallest_product(
        factors: &[(Gf2Polynomial, usize)],
        r: usize,
        acc: Gf2Polynomial,
        best: &mut Option<Gf2Polynomial>,
    ) {
        let acc_deg = acc.degree().unwrap_or(0);
        if acc_deg == r {
            if best.as_ref().map_or(true, |b| acc < *b) {
                *best = Some(acc);
            }
            return;
        }

        let Some(((factor, multiplicity), remaining)) = factors.split_first() else {
            return;
        };
        let factor_deg = factor.degree().unwrap_or(0);

        let mut product = acc;
        for used in 0..=*multiplicity {
            if used > 0 {
                product = product.mul(factor);
            }
            if acc_deg + used * factor_deg > r {
                break;
            }
            Self::smallest_product(remaining, r, product.clone(), best);
        }
    }
}

impl GeneratorSearch for FactorizationSearch {
    fn find(&self, params: CodeParameters) -> CodeResult<GeneratorPolynomial> {
        let factors = self.factor_x_pow_n_minus_one(params.n())?;
        log::debug!(
            "x^{} - 1 has {} distinct irreducible factors",
            params.n(),
            factors.len()
        );

        let mut best = None;
        Self::smallest_product(&factors, params.r(), Gf2Polynomial::one(), &mut best);

        match best {
            Some(poly) => {
                log::info!("generator for {}: {}", params, poly);
                Ok(GeneratorPolynomial { params, poly })
            }
            None => {
                log::warn!("no generator of degree {} divides x^{} - 1", params.r(), params.n());
                Err(CodeError::no_generator(params.n(), params.k()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "factorization"
    }
}

/// Find the generator polynomial of an (n, k) cyclic code with the default
/// search configuration
pub fn find_generator_polynomial(n: usize, k: usize) -> CodeResult<GeneratorPolynomial> {
    find_generator_polynomial_with(n, k, &SearchConfig::default())
}

/// Find the generator polynomial of an (n, k) cyclic code under `config`
pub fn find_generator_polynomial_with(
    n: usize,
    k: usize,
    config: &SearchConfig,
) -> CodeResult<GeneratorPolynomial> {
    let params = CodeParameters::new(n, k)?;
    ExhaustiveSearch::new(config.clone()).find(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: usize, k: usize) -> CodeParameters {
        CodeParameters::new(n, k).unwrap()
    }

    #[test]
    fn test_hamming_7_4() {
        let g = find_generator_polynomial(7, 4).unwrap();
        assert_eq!(g.to_bits(), "1011");
        assert_eq!(g.to_string(), "x^3 + x + 1");
        assert_eq!(g.degree(), 3);
    }

    #[test]
    fn test_all_generators_7_4() {
        let all = ExhaustiveSearch::default().all_generators(params(7, 4)).unwrap();
        let bits: Vec<String> = all.iter().map(GeneratorPolynomial::to_bits).collect();
        assert_eq!(bits, vec!["1011", "1101"]);
    }

    #[test]
    fn test_no_generator() {
        // x^5 + 1 = (x + 1)(x^4 + x^3 + x^2 + x + 1): nothing of degree 2
        let err = find_generator_polynomial(5, 3).unwrap_err();
        assert_eq!(err, CodeError::no_generator(5, 3));
        assert!(!err.is_defect());
    }

    #[test]
    fn test_invalid_parameters_before_search() {
        let err = find_generator_polynomial(4, 5).unwrap_err();
        assert_eq!(err.error_type(), "InvalidParameters");
    }

    #[test]
    fn test_redundancy_budget() {
        let config = SearchConfig::default().with_max_redundancy(4);
        let err = find_generator_polynomial_with(15, 7, &config).unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");
        assert!(find_generator_polynomial_with(15, 11, &config).is_ok());
    }

    #[test]
    fn test_candidate_budget() {
        // (15, 11) needs four divisions: 10000, 10001, 10010, 10011
        let config = SearchConfig::default().with_max_candidates(4);
        assert!(find_generator_polynomial_with(15, 11, &config).is_ok());

        let config = SearchConfig::default().with_max_candidates(3);
        let err = find_generator_polynomial_with(15, 11, &config).unwrap_err();
        assert_eq!(err.error_code(), error_codes::SEARCH_BUDGET_EXCEEDED);
    }

    #[test]
    fn test_huge_code_length_is_refused_before_allocating() {
        let err = find_generator_polynomial(usize::MAX, 1).unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");

        // r = 1 passes the redundancy check, so n itself must be refused
        let err = find_generator_polynomial(usize::MAX, usize::MAX - 1).unwrap_err();
        assert_eq!(
            err,
            CodeError::search_budget_exceeded(
                "code length",
                usize::MAX as u64,
                crate::cyclic::DEFAULT_MAX_CODE_LENGTH as u64
            )
        );

        let err = ExhaustiveSearch::default()
            .all_generators(params(usize::MAX, 1))
            .unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");

        let err = FactorizationSearch::default()
            .find(params(usize::MAX, usize::MAX - 1))
            .unwrap_err();
        assert_eq!(err.error_type(), "SearchBudgetExceeded");
    }

    #[test]
    fn test_factor_degree_budget() {
        // x^53 + 1 = (x + 1) times an irreducible of degree 52
        let err = FactorizationSearch::default().find(params(53, 52)).unwrap_err();
        assert_eq!(
            err,
            CodeError::search_budget_exceeded("factor degree", 17, 16)
        );
        assert_eq!(find_generator_polynomial(53, 52).unwrap().to_bits(), "11");

        // x^13 + 1 = (x + 1) times an irreducible of degree 12
        let narrow = FactorizationSearch::new(SearchConfig::default().with_max_factor_degree(5));
        assert!(narrow.find(params(13, 12)).is_err());
        let wide = FactorizationSearch::new(SearchConfig::default().with_max_factor_degree(6));
        assert_eq!(wide.find(params(13, 12)).unwrap().to_bits(), "11");
    }

    #[test]
    fn test_factorization_candidate_budget() {
        // x^7 + 1 needs trial divisors 11, 101, 111, 1001, 1011 and 1101
        let config = SearchConfig::default().with_max_candidates(1);
        let err = FactorizationSearch::new(config).find(params(7, 4)).unwrap_err();
        assert_eq!(err.error_code(), error_codes::SEARCH_BUDGET_EXCEEDED);
    }

    #[test]
    fn test_validated_generator() {
        let p = params(7, 4);
        assert!(GeneratorPolynomial::from_bits(p, "1101").is_ok());

        // right degree, not a divisor
        let err = GeneratorPolynomial::from_bits(p, "1001").unwrap_err();
        assert_eq!(err.error_code(), error_codes::INVALID_GENERATOR);

        // divisor, wrong degree
        let err = GeneratorPolynomial::from_bits(p, "11").unwrap_err();
        assert_eq!(err.error_code(), error_codes::INVALID_GENERATOR);
    }

    #[test]
    fn test_validated_generator_for_huge_code() {
        let p = params(usize::MAX, usize::MAX - 1);
        assert_eq!(GeneratorPolynomial::from_bits(p, "11").unwrap().to_bits(), "11");
    }

    #[test]
    fn test_check_polynomial() {
        let g = find_generator_polynomial(7, 4).unwrap();
        let h = g.check_polynomial().unwrap();
        assert_eq!(h.degree(), Some(4));
        assert_eq!(
            g.polynomial().mul(&h),
            Gf2Polynomial::x_pow_n_minus_one(7)
        );
    }

    #[test]
    fn test_factorization_of_x15() {
        let factors = FactorizationSearch::default().factor_x_pow_n_minus_one(15).unwrap();
        let bits: Vec<(String, usize)> = factors.iter().map(|(f, m)| (f.to_bits(), *m)).collect();
        assert_eq!(
            bits,
            vec![
                ("11".to_string(), 1),
                ("111".to_string(), 1),
                ("10011".to_string(), 1),
                ("11001".to_string(), 1),
                ("11111".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_factorization_with_repeated_factors() {
        // x^6 + 1 = (x^3 + 1)^2 = (x + 1)^2 (x^2 + x + 1)^2
        let factors = FactorizationSearch::default().factor_x_pow_n_minus_one(6).unwrap();
        let bits: Vec<(String, usize)> = factors.iter().map(|(f, m)| (f.to_bits(), *m)).collect();
        assert_eq!(bits, vec![("11".to_string(), 2), ("111".to_string(), 2)]);
    }

    #[test]
    fn test_strategies_agree() {
        let exhaustive = ExhaustiveSearch::default();
        let factoring = FactorizationSearch::default();
        for n in 2..=15 {
            for k in 1..n {
                let p = params(n, k);
                let a = exhaustive.find(p);
                let b = factoring.find(p);
                assert_eq!(a, b, "strategies disagree for {}", p);
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_larger_codes() {
        for (n, k) in [(21, 12), (23, 12), (31, 26), (17, 9)] {
            let p = params(n, k);
            let exhaustive = ExhaustiveSearch::default().find(p).unwrap();
            let factored = FactorizationSearch::default().find(p).unwrap();
            assert_eq!(exhaustive, factored, "strategies disagree for {}", p);
        }
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let g = find_generator_polynomial(15, 11).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"n":15,"k":11,"bits":"10011"}"#);
        let back: GeneratorPolynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);

        let forged = r#"{"n":15,"k":11,"bits":"10001"}"#;
        assert!(serde_json::from_str::<GeneratorPolynomial>(forged).is_err());
    }
}
