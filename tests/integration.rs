//! Integration tests for the Budget Allocation Engine.
//!
//! This test suite covers:
//! - The reference allocation scenarios
//! - Month key matching and truncation
//! - File-backed budgets served over HTTP
//! - Error cases

use std::io::Write;
use std::str::FromStr;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use budget_engine::api::{AppState, create_router};
use budget_engine::calculation::get_budget;
use budget_engine::models::Budget;
use budget_engine::provider::{InMemoryBudgetProvider, YamlBudgetProvider};

// =============================================================================
// Test Helpers
// =============================================================================

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn budget_should_be(expected: &str, start: &str, end: &str, budgets: Vec<Budget>) {
    let provider = InMemoryBudgetProvider::new(budgets);
    let total = get_budget(date(start), date(end), &provider).unwrap();
    assert_eq!(
        total,
        decimal(expected),
        "Expected {} for {}..={}, got {}",
        expected,
        start,
        end,
        total
    );
}

fn write_budget_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn assert_total(result: &Value, expected: &str) {
    let actual = result["total"].as_str().unwrap();
    assert_eq!(
        decimal(actual).normalize(),
        decimal(expected).normalize(),
        "Expected total {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// SECTION 1: Reference scenarios
// =============================================================================

#[test]
fn test_invalid_period() {
    budget_should_be(
        "0",
        "2024-01-31",
        "2024-01-01",
        vec![Budget::new("202401", 31000)],
    );
}

#[test]
fn test_january_no_budget() {
    budget_should_be("0", "2024-01-01", "2024-01-31", vec![]);
}

#[test]
fn test_in_month() {
    budget_should_be(
        "10000",
        "2024-01-01",
        "2024-01-10",
        vec![Budget::new("202401", 31000)],
    );
}

#[test]
fn test_whole_month() {
    budget_should_be(
        "31000",
        "2024-01-01",
        "2024-01-31",
        vec![Budget::new("202401", 31000)],
    );
}

#[test]
fn test_cross_month() {
    budget_should_be(
        "4000",
        "2024-01-30",
        "2024-02-02",
        vec![Budget::new("202401", 31000), Budget::new("202402", 29000)],
    );
}

// =============================================================================
// SECTION 2: Key matching and truncation
// =============================================================================

#[test]
fn test_january_key_ignored_for_neighbouring_months() {
    let budgets = || vec![Budget::new("202401", 31000)];
    budget_should_be("0", "2023-12-01", "2023-12-31", budgets());
    budget_should_be("0", "2024-02-01", "2024-02-29", budgets());
    budget_should_be("1000", "2023-12-31", "2024-01-01", budgets());
}

#[test]
fn test_truncated_daily_rate_loses_remainder() {
    // 31 days: 100 / 31 = 3 per day, 3 * 31 = 93
    budget_should_be(
        "93",
        "2024-01-01",
        "2024-01-31",
        vec![Budget::new("202401", 100)],
    );
}

#[test]
fn test_long_range_with_gaps() {
    // Dec 2023: 31 days @ 100, Feb 2024: 29 days @ 200, Jan missing
    budget_should_be(
        "8900",
        "2023-12-01",
        "2024-02-29",
        vec![Budget::new("202312", 3100), Budget::new("202402", 5800)],
    );
}

// =============================================================================
// SECTION 3: HTTP with file-backed budgets
// =============================================================================

#[tokio::test]
async fn test_allocate_from_budget_file() {
    let file = write_budget_file(
        r#"
budgets:
  - year_month: "202401"
    amount: 31000
  - year_month: "202402"
    amount: 29000
"#,
    );
    let router = create_router(AppState::new(YamlBudgetProvider::new(file.path())));

    let (status, result) = post_json(
        router,
        "/allocate",
        json!({"start_date": "2024-01-30", "end_date": "2024-02-02"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "4000");
    assert_eq!(result["lines"][0]["year_month"], "202401");
    assert_eq!(result["lines"][0]["covered_days"], 2);
    assert_eq!(result["lines"][1]["year_month"], "202402");
    assert_eq!(result["lines"][1]["days_in_month"], 29);
    assert_eq!(result["range"]["start_date"], "2024-01-30");
    assert!(result["allocation_id"].is_string());
}

#[tokio::test]
async fn test_budget_endpoint_from_budget_file() {
    let file = write_budget_file("budgets:\n  - year_month: \"202401\"\n    amount: 31000\n");
    let router = create_router(AppState::new(YamlBudgetProvider::new(file.path())));

    let (status, result) = post_json(
        router,
        "/budget",
        json!({"start_date": "2024-01-01", "end_date": "2024-01-10"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "10000");
}

#[tokio::test]
async fn test_edited_budget_file_is_picked_up() {
    let mut file = write_budget_file("budgets:\n  - year_month: \"202401\"\n    amount: 31000\n");
    let state = AppState::new(YamlBudgetProvider::new(file.path()));
    let body = json!({"start_date": "2024-01-30", "end_date": "2024-02-02"});

    let (_, before) = post_json(create_router(state.clone()), "/budget", body.clone()).await;
    assert_total(&before, "2000");

    file.write_all(b"  - year_month: \"202402\"\n    amount: 29000\n")
        .unwrap();
    file.flush().unwrap();

    let (_, after) = post_json(create_router(state), "/budget", body).await;
    assert_total(&after, "4000");
}

#[tokio::test]
async fn test_missing_budget_warning_in_audit_trace() {
    let router = create_router(AppState::new(InMemoryBudgetProvider::new(vec![
        Budget::new("202401", 31000),
    ])));

    let (status, result) = post_json(
        router,
        "/allocate",
        json!({"start_date": "2024-01-30", "end_date": "2024-02-02"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "2000");
    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "NO_BUDGET");
}

// =============================================================================
// SECTION 4: Error cases
// =============================================================================

#[tokio::test]
async fn test_inverted_range_over_http_is_zero_even_with_missing_file() {
    // The provider is never read for an inverted range
    let router = create_router(AppState::new(YamlBudgetProvider::new(
        "/nonexistent/budgets.yaml",
    )));

    let (status, result) = post_json(
        router,
        "/allocate",
        json!({"start_date": "2024-02-01", "end_date": "2024-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_total(&result, "0");
    assert_eq!(result["lines"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_missing_budget_file_returns_500() {
    let router = create_router(AppState::new(YamlBudgetProvider::new(
        "/nonexistent/budgets.yaml",
    )));

    let (status, error) = post_json(
        router,
        "/budget",
        json!({"start_date": "2024-01-01", "end_date": "2024-01-31"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "CONFIG_ERROR");
}

#[tokio::test]
async fn test_malformed_key_in_file_returns_500() {
    let file = write_budget_file("budgets:\n  - year_month: \"2024-01\"\n    amount: 31000\n");
    let router = create_router(AppState::new(YamlBudgetProvider::new(file.path())));

    let (status, error) = post_json(
        router,
        "/allocate",
        json!({"start_date": "2024-01-01", "end_date": "2024-01-31"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error["code"], "INVALID_YEAR_MONTH");
}

#[tokio::test]
async fn test_missing_start_date_returns_400() {
    let router = create_router(AppState::new(InMemoryBudgetProvider::default()));

    let (status, error) = post_json(router, "/allocate", json!({"end_date": "2024-01-31"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}
