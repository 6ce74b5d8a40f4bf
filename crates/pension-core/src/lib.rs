//! # pension-core
//!
//! Compliance-gated lifecycle decisions for pension accounts:
//!
//! - **Account opening** — a risk check, then reference id issuance,
//!   persistence and an opening notification. Either `OPENED` or `DECLINED`.
//! - **Account closing** — retirement-age eligibility computed against an
//!   injected [`Clock`], then a risk check deciding between `APPROVED` and
//!   `PENDING`. Under-age holders are `DENIED` without a risk check.
//!
//! Both services are stateless control flow over injected collaborators
//! (see [`collaborators`]). Every side effect happens through a collaborator;
//! the services keep nothing between calls.
//!
//! ## Failure classes
//!
//! - Risk check failures are declared ([`RiskCheckError`]) and surface to the
//!   caller unchanged through [`DecisionError::RiskCheck`].
//! - Any other collaborator failure is an `anyhow::Error` and surfaces through
//!   [`DecisionError::Collaborator`] without added context.
//!
//! There is no compensation: a persisted account whose notification failed
//! stays persisted.

#![deny(unsafe_code)]

pub mod closing;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod opening;
pub mod policy;
#[cfg(any(test, feature = "test-utils"))]
pub mod testkit;
pub mod types;

pub use closing::AccountClosingService;
pub use collaborators::{
    AccountOpeningEventPublisher, AccountRepository, Clock, FixedClock, ReferenceIdsManager,
    RiskCheckService, SystemClock,
};
pub use config::PensionConfig;
pub use error::{ConfigError, DecisionError, RiskCheckError};
pub use opening::AccountOpeningService;
pub use policy::{EligibilityPolicy, RETIREMENT_AGE, UNACCEPTABLE_RISK_PROFILE};
pub use types::{
    Account, AccountClosingResponse, AccountClosingStatus, AccountOpeningStatus, Identity,
    RiskCheckResult,
};
