//! HTTP API tests against the in-memory quote store

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_quote::{InMemoryQuoteStore, StateCode};
use interface_api::config::ApiConfig;
use interface_api::dto::quote::{CheckoutResponse, QuoteResponse};
use interface_api::{build_service, create_router};
use test_utils::{assert_two_decimal_places, DateFixtures};

fn server() -> TestServer {
    let config = ApiConfig::default();
    let service = build_service(Arc::new(InMemoryQuoteStore::new()), &config).unwrap();
    TestServer::new(create_router(Arc::new(service), config)).unwrap()
}

fn quote_body(state: &str, cancelled: bool, owner: bool) -> Value {
    json!({
        "effective_date": DateFixtures::next_month().to_string(),
        "prev_policy_cancelled": cancelled,
        "owns_insure_property": owner,
        "property_zip": "84116",
        "property_state": state,
    })
}

async fn create(server: &TestServer, body: Value) -> QuoteResponse {
    let response = server.post("/api/quotes").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<QuoteResponse>()
}

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

#[tokio::test]
async fn create_returns_full_record() {
    let server = server();
    let response = server.post("/api/quotes").json(&quote_body("UT", false, true)).await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["base_fee"], "59.94");
    assert_eq!(body["policy_term"], 6);
    assert_eq!(body["property_state"], "UT");
    assert_eq!(body["property_zip"], "84116");
    assert_eq!(body["prev_policy_cancelled"], false);
    assert_eq!(body["owns_insure_property"], true);
    assert_eq!(body["quote_id"].as_str().unwrap().len(), 10);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn client_supplied_server_fields_are_ignored() {
    let server = server();
    let mut body = quote_body("AR", false, false);
    body["quote_id"] = json!("HACKED0001");
    body["base_fee"] = json!("1.00");
    body["policy_term"] = json!(1);

    let created = create(&server, body).await;
    assert_ne!(created.quote_id, "HACKED0001");
    assert_eq!(created.base_fee, dec!(59.94));
    assert_eq!(created.policy_term, 6);
}

#[tokio::test]
async fn effective_date_today_is_accepted() {
    let server = server();
    let mut body = quote_body("AR", false, false);
    body["effective_date"] = json!(DateFixtures::today().to_string());

    server
        .post("/api/quotes")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn effective_date_in_past_is_rejected() {
    let server = server();
    let mut body = quote_body("AR", false, false);
    body["effective_date"] = json!(DateFixtures::yesterday().to_string());

    let response = server.post("/api/quotes").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(
        error["details"]["effective_date"],
        json!(["Effective date cannot be in the past"])
    );
}

#[tokio::test]
async fn malformed_effective_dates_are_rejected() {
    let server = server();
    for bad in ["10-17-2030", "10/17/2030", "hello world", "", "2030-13-01"] {
        let mut body = quote_body("AR", false, false);
        body["effective_date"] = json!(bad);

        let response = server.post("/api/quotes").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{bad:?}");
        let error: Value = response.json();
        assert!(error["details"]["effective_date"].is_array(), "{bad:?}");
    }

    let mut body = quote_body("AR", false, false);
    body["effective_date"] = Value::Null;
    server
        .post("/api/quotes")
        .json(&body)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_state_is_rejected() {
    let server = server();
    let response = server.post("/api/quotes").json(&quote_body("ZZ", false, false)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(
        error["details"]["property_state"],
        json!(["\"ZZ\" is not a valid choice"])
    );
}

#[tokio::test]
async fn zip_longer_than_ten_characters_is_rejected() {
    let server = server();
    let mut body = quote_body("AR", false, false);
    body["property_zip"] = json!("12345-678901");

    let response = server.post("/api/quotes").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["details"]["property_zip"].is_array());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = server();
    server
        .post("/api/quotes")
        .text("{not json")
        .content_type("application/json")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn checkout_matches_independent_figures_for_every_combination() {
    let server = server();
    let base = dec!(59.94);

    for state in [StateCode::UT, StateCode::AR] {
        for cancelled in [false, true] {
            for owner in [false, true] {
                let created = create(&server, quote_body(state.as_str(), cancelled, owner)).await;

                let mut fees = Decimal::ZERO;
                let mut discounts = Decimal::ZERO;
                if state == StateCode::UT {
                    fees += base * dec!(0.25);
                }
                if cancelled {
                    fees += base * dec!(0.15);
                } else {
                    discounts += base * dec!(-0.10);
                }
                if owner {
                    discounts += base * dec!(-0.20);
                }
                let monthly = base + fees + discounts;

                let response = server
                    .get("/api/checkout-quote")
                    .add_query_param("quote", &created.quote_id)
                    .await;
                response.assert_status_ok();

                let raw: Value = response.json();
                assert_two_decimal_places(raw["total_monthly_fees"].as_str().unwrap());

                let checkout: CheckoutResponse = response.json();
                let case = format!("{state} cancelled={cancelled} owner={owner}");
                assert_eq!(checkout.quote_id, created.quote_id, "{case}");
                assert_eq!(checkout.id, created.id, "{case}");
                assert_eq!(checkout.base_premium, dec!(359.64), "{case}");
                assert_eq!(checkout.total_monthly_fees, round(fees), "{case}");
                assert_eq!(checkout.total_monthly_discounts, round(discounts), "{case}");
                assert_eq!(checkout.total_monthly_premium, round(monthly), "{case}");
                assert_eq!(checkout.total_term_premium, round(monthly * dec!(6)), "{case}");
                assert_eq!(checkout.total_additional_term_fees, round(fees * dec!(6)), "{case}");
                assert_eq!(checkout.total_term_discounts, round(discounts * dec!(6)), "{case}");
            }
        }
    }
}

#[tokio::test]
async fn checkout_reference_figures() {
    let server = server();
    let created = create(&server, quote_body("UT", false, false)).await;

    let raw: Value = server
        .get("/api/checkout-quote")
        .add_query_param("quote", &created.quote_id)
        .await
        .json();

    assert_eq!(raw["total_monthly_premium"], "68.93");
    assert_eq!(raw["total_monthly_fees"], "14.98");
    assert_eq!(raw["total_monthly_discounts"], "-5.99");
    assert_eq!(raw["base_premium"], "359.64");
}

#[tokio::test]
async fn checkout_unknown_quote_is_bad_request() {
    let server = server();

    let response = server
        .get("/api/checkout-quote")
        .add_query_param("quote", "NOPE000000")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert!(error["details"]["quote"].is_array());

    server
        .get("/api/checkout-quote")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_list_and_delete() {
    let server = server();
    let first = create(&server, quote_body("AR", false, false)).await;
    let second = create(&server, quote_body("HI", true, true)).await;

    let listed: Vec<QuoteResponse> = server.get("/api/quotes").await.json();
    assert_eq!(listed.len(), 2);

    let fetched: QuoteResponse = server.get(&format!("/api/quotes/{}", second.id)).await.json();
    assert_eq!(fetched.quote_id, second.quote_id);
    assert_eq!(fetched.property_state, "HI");

    server
        .delete(&format!("/api/quotes/{}", first.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/quotes/{}", first.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/api/quotes/{}", first.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get("/api/quotes/not-a-uuid")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn no_update_route() {
    let server = server();
    let created = create(&server, quote_body("AR", false, false)).await;

    server
        .put(&format!("/api/quotes/{}", created.id))
        .json(&quote_body("UT", false, false))
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_endpoints() {
    let server = server();
    server.get("/health").await.assert_status_ok();

    let ready: Value = server.get("/health/ready").await.json();
    assert_eq!(ready["status"], "ready");
}
