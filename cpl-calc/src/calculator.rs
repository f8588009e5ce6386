//! CPL formula.
//!
//! ```text
//! breakeven  = payout * (approve / 100) / (1 + trash / 100)
//! lead_price = breakeven / (1 + roi / 100)
//! ```
//!
//! Both outputs are rounded to 4 decimals with [`round4`]. `lead_price` is derived from the
//! unrounded breakeven.

use serde::{Deserialize, Serialize};

use crate::economics::LeadEconomics;
use crate::error::{CalcError, Result};

const SCALE: f64 = 10_000.0;

/// Calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CplResult {
    /// Highest CPL with zero profit.
    pub breakeven: f64,
    /// Highest CPL that still yields the requested ROI.
    pub lead_price: f64,
}

impl CplResult {
    pub fn is_finite(&self) -> bool {
        self.breakeven.is_finite() && self.lead_price.is_finite()
    }
}

/// Rounds to 4 decimal places, half away from zero (`f64::round`). Non-finite values pass through.
pub fn round4(value: f64) -> f64 {
    let scaled = value * SCALE;
    if !scaled.is_finite() {
        // Too large to carry 4 decimals anyway.
        return value;
    }
    scaled.round() / SCALE
}

/// Pure formula; never fails. A -100% trash rate or ROI divides by zero and the result is
/// non-finite. Use [`compute`] when the result is shown to a user.
pub fn calculate(input: &LeadEconomics) -> CplResult {
    let approve = input.approve_rate / 100.0;
    let trash = input.trash_rate / 100.0;
    let roi = input.roi / 100.0;

    let breakeven = (input.payout * approve) / (1.0 + trash);
    let lead_price = breakeven / (1.0 + roi);

    CplResult {
        breakeven: round4(breakeven),
        lead_price: round4(lead_price),
    }
}

/// [`calculate`], rejecting non-finite results with [`CalcError::DegenerateInput`].
pub fn compute(input: &LeadEconomics) -> Result<CplResult> {
    let result = calculate(input);
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::DegenerateInput)
    }
}
