//! Closed-form repayment arithmetic.

use thiserror::Error;

/// The two repayment structures on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MortgageType {
    /// Capital and interest: each payment reduces the principal.
    Repayment,
    /// Interest only: the principal is repaid in full at the end of the term.
    InterestOnly,
}

/// Validated inputs for one calculation.
#[derive(Debug, Clone, Copy)]
pub struct LoanTerms {
    pub principal: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
    pub mortgage_type: MortgageType,
}

/// Output of a successful calculation. Immutable once produced; the session
/// replaces it wholesale on the next successful run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub monthly_payment: f64,
    pub total_repayment: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// A zero-year term has no payments to spread the loan over.
    #[error("loan term must be at least one year")]
    ZeroTerm,
}

/// Computes the monthly payment and total amount repaid for the given terms.
pub fn calculate(terms: &LoanTerms) -> Result<CalculationResult, CalcError> {
    if terms.years == 0 {
        return Err(CalcError::ZeroTerm);
    }
    let monthly_rate = terms.annual_rate_percent / 100.0 / 12.0;
    let payments = f64::from(terms.years) * 12.0;

    let (monthly_payment, total_repayment) = match terms.mortgage_type {
        MortgageType::Repayment => {
            // Standard annuity formula: M = P * r(1+r)^n / ((1+r)^n - 1).
            let monthly = if monthly_rate == 0.0 {
                terms.principal / payments
            } else {
                let growth = (1.0 + monthly_rate).powf(payments);
                terms.principal * (monthly_rate * growth) / (growth - 1.0)
            };
            (monthly, monthly * payments)
        }
        MortgageType::InterestOnly => {
            let monthly = terms.principal * monthly_rate;
            (monthly, monthly * payments + terms.principal)
        }
    };

    Ok(CalculationResult {
        monthly_payment,
        total_repayment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.005,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn repayment_matches_annuity_formula() {
        let result = calculate(&LoanTerms {
            principal: 200000.0,
            years: 25,
            annual_rate_percent: 5.0,
            mortgage_type: MortgageType::Repayment,
        })
        .unwrap();

        assert_close(result.monthly_payment, 1169.18);
        assert_close(result.total_repayment, result.monthly_payment * 300.0);
    }

    #[test]
    fn interest_only_pays_rate_then_principal() {
        let result = calculate(&LoanTerms {
            principal: 200000.0,
            years: 25,
            annual_rate_percent: 5.0,
            mortgage_type: MortgageType::InterestOnly,
        })
        .unwrap();

        assert_close(result.monthly_payment, 833.33);
        assert_close(result.total_repayment, 450000.0);
    }

    #[test]
    fn zero_rate_repayment_is_flat_amortization() {
        let result = calculate(&LoanTerms {
            principal: 120000.0,
            years: 10,
            annual_rate_percent: 0.0,
            mortgage_type: MortgageType::Repayment,
        })
        .unwrap();

        assert_eq!(result.monthly_payment, 1000.0);
        assert_eq!(result.total_repayment, 120000.0);
    }

    #[test]
    fn zero_term_is_rejected() {
        let err = calculate(&LoanTerms {
            principal: 120000.0,
            years: 0,
            annual_rate_percent: 0.0,
            mortgage_type: MortgageType::Repayment,
        })
        .unwrap_err();

        assert_eq!(err, CalcError::ZeroTerm);
    }

    #[test]
    fn zero_rate_interest_only_costs_only_the_principal() {
        let result = calculate(&LoanTerms {
            principal: 50000.0,
            years: 5,
            annual_rate_percent: 0.0,
            mortgage_type: MortgageType::InterestOnly,
        })
        .unwrap();

        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_repayment, 50000.0);
    }
}
