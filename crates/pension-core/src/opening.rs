use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use crate::collaborators::{
    AccountOpeningEventPublisher, AccountRepository, ReferenceIdsManager, RiskCheckService,
};
use crate::error::DecisionError;
use crate::policy::EligibilityPolicy;
use crate::types::{AccountOpeningStatus, Identity};

/// Decides whether a pension account may be opened for an identity.
///
/// Gates, in order: risk check, reference id issuance, persistence,
/// notification. The first failing gate ends the decision. Nothing is kept
/// between calls, so concurrent requests for the same identity are not
/// deduplicated here.
pub struct AccountOpeningService {
    risk_check: Arc<dyn RiskCheckService>,
    reference_ids: Arc<dyn ReferenceIdsManager>,
    accounts: Arc<dyn AccountRepository>,
    events: Arc<dyn AccountOpeningEventPublisher>,
    policy: EligibilityPolicy,
}

impl AccountOpeningService {
    pub fn new(
        risk_check: Arc<dyn RiskCheckService>,
        reference_ids: Arc<dyn ReferenceIdsManager>,
        accounts: Arc<dyn AccountRepository>,
        events: Arc<dyn AccountOpeningEventPublisher>,
    ) -> Self {
        Self {
            risk_check,
            reference_ids,
            accounts,
            events,
            policy: EligibilityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EligibilityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Positional entry point; builds the [`Identity`] and decides.
    pub fn open_account(
        &self,
        first_name: &str,
        last_name: &str,
        tax_id: &str,
        date_of_birth: NaiveDate,
    ) -> Result<AccountOpeningStatus, DecisionError> {
        let identity = Identity::new(first_name, last_name, tax_id, date_of_birth);
        self.decide_opening(&identity)
    }

    /// Run the opening gates for `identity`.
    ///
    /// Risk check failures come back as [`DecisionError::RiskCheck`]; any
    /// other collaborator failure as [`DecisionError::Collaborator`]. A
    /// notification failure after a successful save leaves the account saved.
    pub fn decide_opening(
        &self,
        identity: &Identity,
    ) -> Result<AccountOpeningStatus, DecisionError> {
        let span = info_span!("account_opening", tax_id = %identity.tax_id);
        let _guard = span.enter();

        let risk = self.risk_check.confirm(identity).map_err(|err| {
            warn!(error = %err, "Risk check failed");
            err
        })?;

        let risk = match risk {
            Some(risk) if self.policy.is_acceptable_risk(Some(&risk)) => risk,
            Some(risk) => {
                info!(
                    risk_profile = %risk.risk_profile,
                    status = %AccountOpeningStatus::Declined,
                    "Unacceptable risk profile"
                );
                return Ok(AccountOpeningStatus::Declined);
            }
            None => {
                info!(status = %AccountOpeningStatus::Declined, "No risk check result");
                return Ok(AccountOpeningStatus::Declined);
            }
        };
        debug!(risk_profile = %risk.risk_profile, "Risk check passed");

        let Some(id) = self.reference_ids.obtain_id(identity).map_err(|err| {
            warn!(error = %err, "Reference id issuance failed");
            err
        })?
        else {
            info!(status = %AccountOpeningStatus::Declined, "No reference id issued");
            return Ok(AccountOpeningStatus::Declined);
        };
        debug!(reference_id = %id, "Reference id issued");

        let stored = self.accounts.save(&id, identity, &risk).map_err(|err| {
            warn!(reference_id = %id, error = %err, "Account save failed");
            err
        })?;
        if !stored {
            warn!(reference_id = %id, "Repository did not confirm the save");
        }

        self.events.notify(&id).map_err(|err| {
            warn!(reference_id = %id, error = %err, "Opening notification failed");
            err
        })?;

        info!(reference_id = %id, status = %AccountOpeningStatus::Opened, "Account opened");
        Ok(AccountOpeningStatus::Opened)
    }
}
