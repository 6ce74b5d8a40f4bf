use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A natural person as presented for compliance checks.
///
/// Uniqueness across holders is the reference id issuer's concern, not ours.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub tax_id: String,
    pub date_of_birth: NaiveDate,
}

impl Identity {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        tax_id: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            tax_id: tax_id.into(),
            date_of_birth,
        }
    }
}

/// Outcome of an external risk check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCheckResult {
    /// Classification label, e.g. `"OK"` or `"HIGH"`.
    pub risk_profile: String,
    /// Ceiling on the balance the account may hold.
    pub upper_account_limit: u64,
}

impl RiskCheckResult {
    pub fn new(risk_profile: impl Into<String>, upper_account_limit: u64) -> Self {
        Self {
            risk_profile: risk_profile.into(),
            upper_account_limit,
        }
    }
}

/// An existing pension account, read-only to the decision services.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub identity: Identity,
}

impl Account {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.identity.date_of_birth
    }
}

impl From<Identity> for Account {
    fn from(identity: Identity) -> Self {
        Self::new(identity)
    }
}

/// Terminal result of an opening decision. There is no pending state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountOpeningStatus {
    Opened,
    Declined,
}

impl AccountOpeningStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "OPENED",
            Self::Declined => "DECLINED",
        }
    }
}

impl fmt::Display for AccountOpeningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a closing decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountClosingStatus {
    /// Age and risk checks both passed.
    Approved,
    /// Holder has not reached retirement age.
    Denied,
    /// Risk status could not be confirmed as acceptable yet.
    Pending,
}

impl AccountClosingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Denied => "DENIED",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for AccountClosingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closing status paired with the instant the decision was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountClosingResponse {
    pub status: AccountClosingStatus,
    pub processing_date: NaiveDateTime,
}

impl AccountClosingResponse {
    pub fn new(status: AccountClosingStatus, processing_date: NaiveDateTime) -> Self {
        Self {
            status,
            processing_date,
        }
    }
}
