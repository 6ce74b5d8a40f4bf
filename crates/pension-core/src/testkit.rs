//! Stand-in collaborators for development and testing.
//!
//! Every double records what it was asked so tests can assert on call
//! counts and arguments. Not suitable for production use.

use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;

use crate::collaborators::{
    AccountOpeningEventPublisher, AccountRepository, ReferenceIdsManager, RiskCheckService,
};
use crate::error::RiskCheckError;
use crate::types::{Identity, RiskCheckResult};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Clone, Debug)]
enum RiskScript {
    Answer(Option<RiskCheckResult>),
    Unavailable(String),
    Rejected(String),
}

/// Risk check that always gives the same scripted answer.
#[derive(Debug)]
pub struct ScriptedRiskCheck {
    script: RiskScript,
    calls: Mutex<Vec<Identity>>,
}

impl ScriptedRiskCheck {
    fn scripted(script: RiskScript) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(result: RiskCheckResult) -> Self {
        Self::scripted(RiskScript::Answer(Some(result)))
    }

    pub fn with_profile(risk_profile: &str, upper_account_limit: u64) -> Self {
        Self::returning(RiskCheckResult::new(risk_profile, upper_account_limit))
    }

    /// No result available yet.
    pub fn absent() -> Self {
        Self::scripted(RiskScript::Answer(None))
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::scripted(RiskScript::Unavailable(reason.into()))
    }

    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self::scripted(RiskScript::Rejected(reason.into()))
    }

    pub fn calls(&self) -> Vec<Identity> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

impl RiskCheckService for ScriptedRiskCheck {
    fn confirm(&self, identity: &Identity) -> Result<Option<RiskCheckResult>, RiskCheckError> {
        lock(&self.calls).push(identity.clone());
        match &self.script {
            RiskScript::Answer(result) => Ok(result.clone()),
            RiskScript::Unavailable(reason) => Err(RiskCheckError::unavailable(reason.clone())),
            RiskScript::Rejected(reason) => Err(RiskCheckError::rejected(reason.clone())),
        }
    }
}

/// Reference id issuer with a fixed answer.
#[derive(Debug)]
pub struct ScriptedReferenceIds {
    answer: Result<Option<String>, String>,
    calls: Mutex<Vec<Identity>>,
}

impl ScriptedReferenceIds {
    pub fn issuing(id: impl Into<String>) -> Self {
        Self {
            answer: Ok(Some(id.into())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn none() -> Self {
        Self {
            answer: Ok(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            answer: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    pub fn calls(&self) -> Vec<Identity> {
        lock(&self.calls).clone()
    }
}

impl ReferenceIdsManager for ScriptedReferenceIds {
    fn obtain_id(&self, identity: &Identity) -> anyhow::Result<Option<String>> {
        lock(&self.calls).push(identity.clone());
        self.answer.clone().map_err(|message| anyhow!(message))
    }
}

/// A record written through [`InMemoryAccountRepository`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedAccount {
    pub id: String,
    pub identity: Identity,
    pub risk_check: RiskCheckResult,
}

/// In-memory account store.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    saved: Mutex<Vec<SavedAccount>>,
    failure: Option<String>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every save fails with `message`; nothing is recorded.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn saved(&self) -> Vec<SavedAccount> {
        lock(&self.saved).clone()
    }

    pub fn save_count(&self) -> usize {
        lock(&self.saved).len()
    }

    pub fn contains(&self, id: &str) -> bool {
        lock(&self.saved).iter().any(|record| record.id == id)
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn save(
        &self,
        id: &str,
        identity: &Identity,
        risk_check: &RiskCheckResult,
    ) -> anyhow::Result<bool> {
        if let Some(message) = &self.failure {
            return Err(anyhow!(message.clone()));
        }
        lock(&self.saved).push(SavedAccount {
            id: id.to_string(),
            identity: identity.clone(),
            risk_check: risk_check.clone(),
        });
        Ok(true)
    }
}

/// Publisher that remembers every notified account id.
#[derive(Debug, Default)]
pub struct RecordingEventPublisher {
    notified: Mutex<Vec<String>>,
    failure: Option<String>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            notified: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    pub fn notified(&self) -> Vec<String> {
        lock(&self.notified).clone()
    }

    pub fn notify_count(&self) -> usize {
        lock(&self.notified).len()
    }
}

impl AccountOpeningEventPublisher for RecordingEventPublisher {
    fn notify(&self, account_id: &str) -> anyhow::Result<()> {
        if let Some(message) = &self.failure {
            return Err(anyhow!(message.clone()));
        }
        lock(&self.notified).push(account_id.to_string());
        Ok(())
    }
}
