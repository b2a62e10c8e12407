//! Integration tests for the PAYE engine.
//!
//! This test suite covers:
//! - Tax band scenarios at and between band boundaries
//! - The end-to-end payroll breakdown
//! - Negative input clamping and the net salary floor
//! - Loading the shipped configuration from disk
//! - Error cases on the HTTP API

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use paye_engine::api::{AppState, create_router};
use paye_engine::calculation::{compute_payroll, compute_progressive_tax};
use paye_engine::config::ConfigLoader;
use paye_engine::models::{ContributionRates, PayrollInputs, TaxBracket, TaxTable};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/zra_2026").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
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

fn payroll_request(basic_pay: &str, allowances: &str, statutory: &str) -> Value {
    json!({
        "basic_pay": basic_pay,
        "allowances": allowances,
        "statutory_deduction": statutory
    })
}

fn assert_decimal_field(value: &Value, expected: &str, label: &str) {
    let actual = value.as_str().unwrap_or_else(|| panic!("{} is not a string", label));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        label,
        expected,
        actual
    );
}

fn assert_band(result: &Value, index: usize, taxable: &str, tax: &str) {
    let band = &result["bands"][index];
    assert_decimal_field(&band["taxable_amount"], taxable, &format!("band {} taxable", index + 1));
    assert_decimal_field(&band["tax_amount"], tax, &format!("band {} tax", index + 1));
}

fn zra_tax(income: &str) -> paye_engine::models::TaxResult {
    compute_progressive_tax(decimal(income), TaxTable::zra_2026().brackets())
}

// =============================================================================
// Tax Band Scenarios
// =============================================================================

#[test]
fn test_boundary_5100_absorbed_by_first_band() {
    let result = zra_tax("5100");

    assert_eq!(result.bands[0].taxable_amount, decimal("5100"));
    assert_eq!(result.bands[0].tax_amount, Decimal::ZERO);
    for band in &result.bands[1..] {
        assert_eq!(band.taxable_amount, Decimal::ZERO);
        assert_eq!(band.tax_amount, Decimal::ZERO);
    }
}

#[test]
fn test_income_9200_scenario() {
    let result = zra_tax("9200");

    assert_eq!(result.total_tax, decimal("820.00"));
    assert_eq!(result.bands[1].taxable_amount, decimal("4100"));
    assert_eq!(result.bands[1].tax_amount, decimal("820.00"));
    assert_eq!(result.bands[2].taxable_amount, Decimal::ZERO);
    assert_eq!(result.bands[3].taxable_amount, Decimal::ZERO);
}

#[test]
fn test_income_13600_scenario() {
    let result = zra_tax("13600");

    assert_eq!(result.total_tax, decimal("2140.00"));
    assert_eq!(result.bands[2].taxable_amount, decimal("4400"));
    assert_eq!(result.bands[2].tax_amount, decimal("1320"));
    assert_eq!(result.bands[3].taxable_amount, Decimal::ZERO);
}

#[test]
fn test_income_20000_scenario() {
    let result = zra_tax("20000");

    assert_eq!(result.total_tax, decimal("4508.00"));
    assert_eq!(result.bands[3].taxable_amount, decimal("6400"));
    assert_eq!(result.bands[3].tax_amount, decimal("2368.00"));
}

#[test]
fn test_loaded_table_matches_builtin_results() {
    let loader = ConfigLoader::load("./config/zra_2026").unwrap();

    for income in ["0", "5100", "9199.99", "13600", "17000", "250000"] {
        let from_file = compute_progressive_tax(decimal(income), loader.tax_table().brackets());
        assert_eq!(from_file, zra_tax(income), "income {}", income);
    }
}

// =============================================================================
// Payroll Aggregation
// =============================================================================

#[test]
fn test_end_to_end_payroll() {
    let inputs = PayrollInputs {
        basic_pay: decimal("15000"),
        allowances: decimal("2000"),
        statutory_deduction: decimal("500"),
    };
    let result = compute_payroll(
        &inputs,
        TaxTable::zra_2026().brackets(),
        &ContributionRates::zra_2026(),
    );

    assert_eq!(result.gross_pay, decimal("17000"));
    assert_eq!(result.contributions.napsa, decimal("850.00"));
    assert_eq!(result.contributions.nhima, decimal("170.00"));
    assert_eq!(result.contributions.total, decimal("1020.00"));
    assert_eq!(result.tax_result.total_tax, decimal("3398.00"));
    assert_eq!(result.total_deductions, decimal("4918.00"));
    assert_eq!(result.net_salary, decimal("12082.00"));
}

#[test]
fn test_future_year_table_without_recompilation() {
    let table = TaxTable::new(vec![
        TaxBracket::bounded(decimal("0"), decimal("6000"), decimal("0")),
        TaxBracket::bounded(decimal("6000"), decimal("10000"), decimal("0.20")),
        TaxBracket::unbounded(decimal("10000"), decimal("0.35")),
    ])
    .unwrap();
    let rates = ContributionRates::new(decimal("0.06"), decimal("0.01")).unwrap();
    let inputs = PayrollInputs {
        basic_pay: decimal("12000"),
        allowances: Decimal::ZERO,
        statutory_deduction: Decimal::ZERO,
    };

    let result = compute_payroll(&inputs, table.brackets(), &rates);

    // 4000 * 0.20 + 2000 * 0.35 = 1500
    assert_eq!(result.tax_result.total_tax, decimal("1500"));
    assert_eq!(result.tax_result.bands.len(), 3);
    // 12000 * 0.07 = 840
    assert_eq!(result.contributions.total, decimal("840"));
    assert_eq!(result.net_salary, decimal("9660"));
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_end_to_end_breakdown() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        payroll_request("15000", "2000", "500"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_decimal_field(&result["gross_pay"], "17000", "gross_pay");
    assert_decimal_field(&result["contributions"]["napsa"], "850", "napsa");
    assert_decimal_field(&result["contributions"]["nhima"], "170", "nhima");
    assert_decimal_field(&result["contributions"]["total"], "1020", "total contributions");
    assert_decimal_field(&result["tax_result"]["total_tax"], "3398", "total_tax");
    assert_decimal_field(&result["total_deductions"], "4918", "total_deductions");
    assert_decimal_field(&result["net_salary"], "12082", "net_salary");

    assert_band(&result["tax_result"], 0, "5100", "0");
    assert_band(&result["tax_result"], 1, "4100", "820");
    assert_band(&result["tax_result"], 2, "4400", "1320");
    assert_band(&result["tax_result"], 3, "3400", "1258");
}

#[tokio::test]
async fn test_api_display_formatting() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        payroll_request("15000", "2000", "500"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let display = &body["display"];
    assert_eq!(display["gross_pay"], "K 17,000.00");
    assert_eq!(display["napsa"], "K 850.00");
    assert_eq!(display["nhima"], "K 170.00");
    assert_eq!(display["total_contributions"], "K 1,020.00");
    assert_eq!(display["total_tax"], "K 3,398.00");
    assert_eq!(display["total_deductions"], "K 4,918.00");
    assert_eq!(display["net_salary"], "K 12,082.00");
    assert_eq!(display["bands"][3]["chargeable"], "3400.00");
    assert_eq!(display["bands"][3]["tax_due"], "1258.00");
}

#[tokio::test]
async fn test_api_negative_basic_pay_clamped() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        payroll_request("-100", "0", "0"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body["inputs"]["basic_pay"], "0", "basic_pay");
    assert_decimal_field(&body["result"]["gross_pay"], "0", "gross_pay");
    assert_decimal_field(&body["result"]["net_salary"], "0", "net_salary");
}

#[tokio::test]
async fn test_api_net_salary_floor() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        payroll_request("2000", "0", "10000"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body["result"]["total_deductions"], "10120", "total_deductions");
    assert_decimal_field(&body["result"]["net_salary"], "0", "net_salary");
    assert_eq!(body["display"]["net_salary"], "K 0.00");
}

#[tokio::test]
async fn test_api_empty_body_behaves_like_reset() {
    let (calc_status, calculated) = post(create_router_for_test(), "/calculate", json!({})).await;
    let (reset_status, reset) = post(create_router_for_test(), "/reset", json!({})).await;

    assert_eq!(calc_status, StatusCode::OK);
    assert_eq!(reset_status, StatusCode::OK);
    assert_eq!(calculated["result"], reset["result"]);
    assert_eq!(calculated["display"], reset["display"]);
}

#[tokio::test]
async fn test_api_tax_endpoint_boundary() {
    let (status, body) = post(create_router_for_test(), "/tax", json!({ "income": "5100" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body["result"]["total_tax"], "0", "total_tax");
    assert_band(&body["result"], 0, "5100", "0");
    assert_band(&body["result"], 1, "0", "0");
    assert_eq!(body["display"]["bands"][0]["chargeable"], "5100.00");
}

#[tokio::test]
async fn test_api_tax_endpoint_accepts_json_numbers() {
    let (status, body) = post(create_router_for_test(), "/tax", json!({ "income": 20000 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&body["result"]["total_tax"], "4508", "total_tax");
}

#[tokio::test]
async fn test_api_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{\"basic_pay\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_api_non_numeric_input_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/calculate",
        json!({ "basic_pay": "fifteen thousand" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_tax_bands_lists_shipped_configuration() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/tax-bands")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    assert_eq!(body["tax_year"]["code"], "ZRA-PAYE-2026");
    assert_eq!(body["bands"].as_array().unwrap().len(), 4);
    assert_decimal_field(&body["bands"][3]["lower_bound"], "13600", "top band lower bound");
    assert!(body["bands"][3]["upper_bound"].is_null());
    assert_decimal_field(&body["contributions"]["nhima"], "0.01", "nhima rate");
}

// =============================================================================
// Extreme Inputs
// =============================================================================

const DECIMAL_MAX: &str = "79228162514264337593543950335";

#[test]
fn test_payroll_with_decimal_max_fields_produces_result() {
    let table = TaxTable::zra_2026();
    let rates = ContributionRates::zra_2026();
    let extremes = [
        (Decimal::MAX, Decimal::ONE, Decimal::ZERO),
        (Decimal::ONE, Decimal::MAX, Decimal::ZERO),
        (decimal("1000"), Decimal::ZERO, Decimal::MAX),
        (Decimal::MAX, Decimal::MAX, Decimal::MAX),
    ];

    for (basic_pay, allowances, statutory_deduction) in extremes {
        let inputs = PayrollInputs {
            basic_pay,
            allowances,
            statutory_deduction,
        };
        let result = compute_payroll(&inputs, table.brackets(), &rates);

        assert!(result.net_salary >= Decimal::ZERO, "inputs: {:?}", inputs);
        assert!(result.net_salary <= result.gross_pay, "inputs: {:?}", inputs);
    }
}

#[tokio::test]
async fn test_api_decimal_max_on_each_field_never_panics() {
    for field in ["basic_pay", "allowances", "statutory_deduction"] {
        let mut body = payroll_request("1000", "0", "0");
        body[field] = json!(DECIMAL_MAX);

        let (status, json) = post(create_router_for_test(), "/calculate", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field: {}", field);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains(field));
    }
}

#[tokio::test]
async fn test_api_tax_decimal_max_income_rejected() {
    let (status, json) = post(
        create_router_for_test(),
        "/tax",
        json!({ "income": DECIMAL_MAX }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_api_largest_accepted_inputs_compute() {
    let limit = "1000000000000000";
    let (status, json) = post(
        create_router_for_test(),
        "/calculate",
        payroll_request(limit, limit, limit),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal_field(&json["result"]["gross_pay"], "2000000000000000", "gross_pay");
    let net = decimal(json["result"]["net_salary"].as_str().unwrap());
    assert!(net > Decimal::ZERO);
}
