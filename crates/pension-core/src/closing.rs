use std::sync::Arc;

use tracing::{debug, info, info_span, warn};

use crate::collaborators::{Clock, RiskCheckService, SystemClock};
use crate::error::DecisionError;
use crate::policy::{age_in_whole_years, EligibilityPolicy};
use crate::types::{Account, AccountClosingResponse, AccountClosingStatus};

/// Decides whether a pension account may be closed.
///
/// Holders below retirement age are denied outright. Otherwise the risk
/// check decides: an acceptable profile approves, an absent or reserved
/// profile leaves the request pending. Risk never produces a denial.
///
/// The clock is read once per decision; the response carries that instant.
pub struct AccountClosingService {
    risk_check: Arc<dyn RiskCheckService>,
    clock: Arc<dyn Clock>,
    policy: EligibilityPolicy,
}

impl AccountClosingService {
    pub fn new(risk_check: Arc<dyn RiskCheckService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            risk_check,
            clock,
            policy: EligibilityPolicy::default(),
        }
    }

    /// Service reading the host's local wall clock.
    pub fn with_system_clock(risk_check: Arc<dyn RiskCheckService>) -> Self {
        Self::new(risk_check, Arc::new(SystemClock))
    }

    pub fn with_policy(mut self, policy: EligibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    pub fn close_account(
        &self,
        account: &Account,
    ) -> Result<AccountClosingResponse, DecisionError> {
        self.decide_closing(account, self.clock.as_ref())
    }

    /// Decide against an explicit clock instead of the configured one.
    pub fn decide_closing(
        &self,
        account: &Account,
        clock: &dyn Clock,
    ) -> Result<AccountClosingResponse, DecisionError> {
        let identity = account.identity();
        let span = info_span!("account_closing", tax_id = %identity.tax_id);
        let _guard = span.enter();

        let now = clock.now();
        let age = age_in_whole_years(identity.date_of_birth, now.date());

        if age < self.policy.retirement_age {
            info!(
                age,
                retirement_age = self.policy.retirement_age,
                status = %AccountClosingStatus::Denied,
                "Holder below retirement age"
            );
            return Ok(AccountClosingResponse::new(AccountClosingStatus::Denied, now));
        }
        debug!(age, "Retirement age reached");

        let risk = self.risk_check.confirm(identity).map_err(|err| {
            warn!(error = %err, "Risk check failed");
            err
        })?;

        let status = match &risk {
            None => {
                debug!("No risk check result yet");
                AccountClosingStatus::Pending
            }
            Some(result) if !self.policy.is_acceptable_risk(Some(result)) => {
                debug!(risk_profile = %result.risk_profile, "Unacceptable risk profile");
                AccountClosingStatus::Pending
            }
            Some(_) => AccountClosingStatus::Approved,
        };

        info!(age, status = %status, "Closing decided");
        Ok(AccountClosingResponse::new(status, now))
    }
}
