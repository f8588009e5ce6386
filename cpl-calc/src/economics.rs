//! Lead economics input: the complete form passed to the calculator and the partial
//! accumulator filled by the wizard or the one-shot parser.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Trash rate used when none was supplied.
pub const DEFAULT_TRASH_RATE: f64 = 0.0;
/// ROI used when none was supplied.
pub const DEFAULT_ROI: f64 = 0.0;

/// Calculator input. All rates are percentages (35 means 35%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadEconomics {
    pub payout: f64,
    pub approve_rate: f64,
    pub trash_rate: f64,
    pub roi: f64,
}

impl LeadEconomics {
    /// Builds input with trash rate and ROI at their defaults.
    pub fn new(payout: f64, approve_rate: f64) -> Self {
        Self {
            payout,
            approve_rate,
            trash_rate: DEFAULT_TRASH_RATE,
            roi: DEFAULT_ROI,
        }
    }

    pub fn with_trash_rate(mut self, trash_rate: f64) -> Self {
        self.trash_rate = trash_rate;
        self
    }

    pub fn with_roi(mut self, roi: f64) -> Self {
        self.roi = roi;
        self
    }
}

/// Input collected so far. Both the one-shot and the wizard path end in [`PartialEconomics::finish`],
/// so optional fields are defaulted in exactly one place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialEconomics {
    pub payout: Option<f64>,
    pub approve_rate: Option<f64>,
    pub trash_rate: Option<f64>,
    pub roi: Option<f64>,
}

impl PartialEconomics {
    /// Completes the input: payout and approve rate are required, trash rate and ROI fall back
    /// to [`DEFAULT_TRASH_RATE`] and [`DEFAULT_ROI`].
    pub fn finish(self) -> Result<LeadEconomics> {
        let payout = self.payout.ok_or(CalcError::InvalidSessionState)?;
        let approve_rate = self.approve_rate.ok_or(CalcError::InvalidSessionState)?;
        Ok(LeadEconomics {
            payout,
            approve_rate,
            trash_rate: self.trash_rate.unwrap_or(DEFAULT_TRASH_RATE),
            roi: self.roi.unwrap_or(DEFAULT_ROI),
        })
    }

    /// Number of fields set.
    pub fn filled(&self) -> usize {
        [self.payout, self.approve_rate, self.trash_rate, self.roi]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_applies_defaults() {
        let partial = PartialEconomics {
            payout: Some(20.0),
            approve_rate: Some(35.0),
            ..Default::default()
        };
        let input = partial.finish().unwrap();
        assert_eq!(input, LeadEconomics::new(20.0, 35.0));
        assert_eq!(input.trash_rate, 0.0);
        assert_eq!(input.roi, 0.0);
    }

    #[test]
    fn finish_keeps_explicit_values() {
        let partial = PartialEconomics {
            payout: Some(20.0),
            approve_rate: Some(35.0),
            trash_rate: Some(30.0),
            roi: Some(50.0),
        };
        assert_eq!(
            partial.finish().unwrap(),
            LeadEconomics::new(20.0, 35.0).with_trash_rate(30.0).with_roi(50.0)
        );
    }

    #[test]
    fn finish_without_payout_fails() {
        let partial = PartialEconomics {
            approve_rate: Some(35.0),
            ..Default::default()
        };
        assert_eq!(partial.finish(), Err(CalcError::InvalidSessionState));
    }

    #[test]
    fn filled_counts_set_fields() {
        let mut partial = PartialEconomics::default();
        assert_eq!(partial.filled(), 0);
        partial.payout = Some(1.0);
        partial.roi = Some(2.0);
        assert_eq!(partial.filled(), 2);
    }
}
