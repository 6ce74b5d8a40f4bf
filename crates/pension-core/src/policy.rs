use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::RiskCheckResult;

/// Holders younger than this (in whole years) may not close their account.
pub const RETIREMENT_AGE: u32 = 65;

/// Risk profile that always blocks approval. Compared exactly, case-sensitive.
pub const UNACCEPTABLE_RISK_PROFILE: &str = "HIGH";

/// Eligibility thresholds shared by the opening and closing decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityPolicy {
    /// Minimum age, in whole elapsed years, to close an account.
    pub retirement_age: u32,
    /// Reserved risk profile label that forces a non-approving outcome.
    pub unacceptable_risk_profile: String,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            retirement_age: RETIREMENT_AGE,
            unacceptable_risk_profile: UNACCEPTABLE_RISK_PROFILE.to_string(),
        }
    }
}

impl EligibilityPolicy {
    /// True when the risk result exists and is not the reserved label.
    ///
    /// The comparison is a plain string equality; `"high"` is acceptable.
    pub fn is_acceptable_risk(&self, result: Option<&RiskCheckResult>) -> bool {
        match result {
            Some(result) => result.risk_profile != self.unacceptable_risk_profile,
            None => false,
        }
    }

    /// Has the holder reached retirement age on `today`?
    pub fn has_reached_retirement(&self, date_of_birth: NaiveDate, today: NaiveDate) -> bool {
        age_in_whole_years(date_of_birth, today) >= self.retirement_age
    }
}

/// Whole calendar years elapsed from `date_of_birth` to `today`.
///
/// A birthday on `today` counts as completed. A 29 February birthday
/// completes on 1 March in non-leap years. A date of birth after `today`
/// yields 0.
pub fn age_in_whole_years(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(date_of_birth).unwrap_or(0)
}
