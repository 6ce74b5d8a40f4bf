mod common;

use std::sync::Arc;

use chrono::{Months, NaiveDate};
use common::{date, init_tracing};
use pension_core::testkit::ScriptedRiskCheck;
use pension_core::{
    Account, AccountClosingService, AccountClosingStatus, Clock, DecisionError, FixedClock,
    Identity, RiskCheckError,
};

const FIRST_NAME: &str = "John";
const LAST_NAME: &str = "Smith";
const TAX_ID: &str = "123";

fn today() -> NaiveDate {
    date(2020, 8, 26)
}

fn clock() -> FixedClock {
    FixedClock::at_start_of_day(today())
}

fn account(dob: NaiveDate) -> Account {
    Account::new(Identity::new(FIRST_NAME, LAST_NAME, TAX_ID, dob))
}

fn service(risk: &Arc<ScriptedRiskCheck>) -> AccountClosingService {
    init_tracing();
    AccountClosingService::new(risk.clone(), Arc::new(clock()))
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12)).unwrap()
}

#[test]
fn declines_closing_today_if_holder_retires_tomorrow() {
    let risk = Arc::new(ScriptedRiskCheck::with_profile("OK", 1));
    let dob = years_before(today(), 65).succ_opt().unwrap();

    let response = service(&risk).close_account(&account(dob)).unwrap();

    assert_eq!(response.status, AccountClosingStatus::Denied);
    assert_eq!(response.processing_date, clock().now());
    assert_eq!(risk.call_count(), 0);
}

#[test]
fn denies_holder_born_today() {
    let risk = Arc::new(ScriptedRiskCheck::with_profile("OK", 1));

    let response = service(&risk).close_account(&account(today())).unwrap();

    assert_eq!(response.status, AccountClosingStatus::Denied);
    assert_eq!(risk.call_count(), 0);
}

#[test]
fn approves_holder_reaching_retirement_today() {
    let risk = Arc::new(ScriptedRiskCheck::with_profile("OK", 1));
    let dob = years_before(today(), 65);

    let response = service(&risk).close_account(&account(dob)).unwrap();

    assert_eq!(response.status, AccountClosingStatus::Approved);
    assert_eq!(response.processing_date, clock().now());
    assert_eq!(risk.calls(), vec![Identity::new(FIRST_NAME, LAST_NAME, TAX_ID, dob)]);
}

#[test]
fn approves_long_retired_holder() {
    let risk = Arc::new(ScriptedRiskCheck::with_profile("OK", 1));

    let response = service(&risk)
        .close_account(&account(date(1954, 7, 4)))
        .unwrap();

    assert_eq!(response.status, AccountClosingStatus::Approved);
}

#[test]
fn pending_when_risk_result_absent() {
    let risk = Arc::new(ScriptedRiskCheck::absent());

    let response = service(&risk)
        .close_account(&account(date(1950, 1, 1)))
        .unwrap();

    assert_eq!(response.status, AccountClosingStatus::Pending);
    assert_eq!(risk.call_count(), 1);
}

#[test]
fn pending_not_denied_when_risk_unacceptable() {
    let risk = Arc::new(ScriptedRiskCheck::with_profile("HIGH", 1));

    let response = service(&risk)
        .close_account(&account(date(1950, 1, 1)))
        .unwrap();

    assert_eq!(response.status, AccountClosingStatus::Pending);
}

#[test]
fn risk_check_failure_propagates_after_age_gate() {
    let risk = Arc::new(ScriptedRiskCheck::unavailable("timeout"));

    let err = service(&risk)
        .close_account(&account(date(1950, 1, 1)))
        .unwrap_err();

    assert!(matches!(
        err,
        DecisionError::RiskCheck(RiskCheckError::Unavailable { .. })
    ));
}

#[test]
fn risk_check_failure_irrelevant_when_under_age() {
    let risk = Arc::new(ScriptedRiskCheck::unavailable("timeout"));

    let response = service(&risk)
        .close_account(&account(date(1990, 1, 1)))
        .unwrap();

    assert_eq!(response.status, AccountClosingStatus::Denied);
    assert_eq!(risk.call_count(), 0);
}

#[test]
fn processing_date_carries_time_of_day() {
    let risk = Arc::new(ScriptedRiskCheck::with_profile("OK", 1));
    let instant = today().and_hms_opt(14, 30, 5).unwrap();
    let clock = FixedClock::new(instant);

    let response = AccountClosingService::new(risk, Arc::new(clock))
        .close_account(&account(date(1950, 1, 1)))
        .unwrap();

    assert_eq!(response.processing_date, instant);
}
