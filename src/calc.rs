//! Loan EMI and SIP future-value formulas, shared by the calculator
//! subcommands.

use crate::error::{FinwellError, Result};

/// Equated monthly installment for a loan: P·r·(1+r)^n / ((1+r)^n − 1)
/// with the monthly rate r and tenure n in months. A zero-interest loan
/// divides the principal evenly.
pub fn emi(principal: f64, annual_rate_pct: f64, tenure_years: f64) -> Result<f64> {
    if principal <= 0.0 {
        return Err(FinwellError::Validation("Loan amount must be positive".to_string()));
    }
    if tenure_years <= 0.0 {
        return Err(FinwellError::Validation("Loan tenure must be positive".to_string()));
    }
    if annual_rate_pct < 0.0 {
        return Err(FinwellError::Validation("Interest rate cannot be negative".to_string()));
    }

    let months = tenure_years * 12.0;
    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    if monthly_rate == 0.0 {
        return Ok(principal / months);
    }
    let growth = (1.0 + monthly_rate).powf(months);
    Ok(principal * monthly_rate * growth / (growth - 1.0))
}

#[derive(Debug, Clone, Copy)]
pub struct SipProjection {
    pub future_value: f64,
    pub invested: f64,
    pub gains: f64,
}

/// SIP future value: P·((1+r)^n − 1)/r·(1+r), contributions at the start
/// of each month.
pub fn sip(monthly: f64, annual_return_pct: f64, years: f64) -> Result<SipProjection> {
    if monthly <= 0.0 {
        return Err(FinwellError::Validation("Monthly investment must be positive".to_string()));
    }
    if years <= 0.0 {
        return Err(FinwellError::Validation("Investment period must be positive".to_string()));
    }
    if annual_return_pct < 0.0 {
        return Err(FinwellError::Validation("Expected return cannot be negative".to_string()));
    }

    let months = years * 12.0;
    let rate = annual_return_pct / 12.0 / 100.0;
    let invested = monthly * months;
    let future_value = if rate == 0.0 {
        invested
    } else {
        monthly * (((1.0 + rate).powf(months) - 1.0) / rate) * (1.0 + rate)
    };
    Ok(SipProjection {
        future_value,
        invested,
        gains: future_value - invested,
    })
}
