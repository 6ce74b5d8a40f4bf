#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use pension_core::testkit::{
    InMemoryAccountRepository, RecordingEventPublisher, ScriptedReferenceIds, ScriptedRiskCheck,
};
use pension_core::{AccountOpeningService, Identity};

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pension_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn john_smith() -> Identity {
    Identity::new("John", "Smith", "123xyz9", date(1990, 1, 1))
}

/// Opening service wired to recording doubles.
pub struct OpeningFixture {
    pub risk: Arc<ScriptedRiskCheck>,
    pub ids: Arc<ScriptedReferenceIds>,
    pub repo: Arc<InMemoryAccountRepository>,
    pub events: Arc<RecordingEventPublisher>,
}

impl OpeningFixture {
    pub fn new(risk: ScriptedRiskCheck, ids: ScriptedReferenceIds) -> Self {
        Self::with_sinks(
            risk,
            ids,
            InMemoryAccountRepository::new(),
            RecordingEventPublisher::new(),
        )
    }

    pub fn with_sinks(
        risk: ScriptedRiskCheck,
        ids: ScriptedReferenceIds,
        repo: InMemoryAccountRepository,
        events: RecordingEventPublisher,
    ) -> Self {
        init_tracing();
        Self {
            risk: Arc::new(risk),
            ids: Arc::new(ids),
            repo: Arc::new(repo),
            events: Arc::new(events),
        }
    }

    pub fn service(&self) -> AccountOpeningService {
        AccountOpeningService::new(
            self.risk.clone(),
            self.ids.clone(),
            self.repo.clone(),
            self.events.clone(),
        )
    }
}
