//! Collaborator seams consumed by the decision services.
//!
//! Implementations live outside this crate (or in `testkit` for
//! tests). The services hold them as `Arc<dyn Trait>` so live integrations
//! and stand-ins are interchangeable.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::RiskCheckError;
use crate::types::{Identity, RiskCheckResult};

/// External identity risk check.
pub trait RiskCheckService: Send + Sync {
    /// `Ok(None)` means no result is available yet.
    fn confirm(&self, identity: &Identity) -> Result<Option<RiskCheckResult>, RiskCheckError>;
}

/// Issues reference ids for new accounts.
pub trait ReferenceIdsManager: Send + Sync {
    /// `Ok(None)` means no id could be issued for this identity.
    fn obtain_id(&self, identity: &Identity) -> anyhow::Result<Option<String>>;
}

/// Persistence for opened accounts.
pub trait AccountRepository: Send + Sync {
    /// Returns whether the store accepted the record.
    fn save(
        &self,
        id: &str,
        identity: &Identity,
        risk_check: &RiskCheckResult,
    ) -> anyhow::Result<bool>;
}

/// Delivery of account-opened notifications.
pub trait AccountOpeningEventPublisher: Send + Sync {
    fn notify(&self, account_id: &str) -> anyhow::Result<()>;
}

/// Source of the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Wall clock in the host's local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Midnight at the start of `date`.
    pub fn at_start_of_day(date: NaiveDate) -> Self {
        Self::new(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
