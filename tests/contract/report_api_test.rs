//! Contract tests for the report endpoints.
//!
//! Runs the real handlers against in-memory stub readers, validating
//! response shapes, the empty-data policy (200 with empty aggregates) and
//! parameter validation (400 with a descriptive message).

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use async_trait::async_trait;
use chrono::NaiveDate;

use hemotrack::core::{BloodType, Result, RhFactor};
use hemotrack::modules::bags::models::BloodBag;
use hemotrack::modules::bags::repositories::BloodBagReader;
use hemotrack::modules::donors::models::Donor;
use hemotrack::modules::donors::repositories::DonorReader;
use hemotrack::modules::reports::controllers::report_controller;
use hemotrack::modules::reports::services::ReportService;
use hemotrack::modules::requests::models::BloodRequest;
use hemotrack::modules::requests::repositories::RequestReader;

/// In-memory snapshot standing in for the database collaborators
#[derive(Default, Clone)]
struct StubSnapshot {
    donors: Vec<Donor>,
    requests: Vec<BloodRequest>,
    bags: Vec<BloodBag>,
}

#[async_trait]
impl DonorReader for StubSnapshot {
    async fn list_donors(&self) -> Result<Vec<Donor>> {
        Ok(self.donors.clone())
    }
}

#[async_trait]
impl RequestReader for StubSnapshot {
    async fn list_requests(&self) -> Result<Vec<BloodRequest>> {
        Ok(self.requests.clone())
    }
}

#[async_trait]
impl BloodBagReader for StubSnapshot {
    async fn list_blood_bags(&self) -> Result<Vec<BloodBag>> {
        Ok(self.bags.clone())
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn fixture() -> StubSnapshot {
    let donor = Donor {
        id: "d1".to_string(),
        document: "11223344".to_string(),
        name: "Ana".to_string(),
        lastname: "Gomez".to_string(),
        birth_date: d(1990, 5, 4),
    };
    let request = BloodRequest {
        id: "r1".to_string(),
        date_created: d(2025, 1, 10),
        quantity_needed: 1000,
        due_date: d(2025, 3, 1),
        blood_type: BloodType::O,
        rh: RhFactor::Positive,
        health_entity_id: "h1".to_string(),
        health_entity_name: "Central Clinic".to_string(),
    };
    let bag = BloodBag {
        id: "b1".to_string(),
        quantity: 450,
        donation_date: d(2025, 1, 15),
        expiration_date: d(2025, 2, 26),
        blood_type: BloodType::O,
        rh: RhFactor::Positive,
        donor_id: "d1".to_string(),
        request_id: "r1".to_string(),
    };

    StubSnapshot {
        donors: vec![donor],
        requests: vec![request],
        bags: vec![bag],
    }
}

fn service_for(snapshot: StubSnapshot) -> web::Data<ReportService> {
    let shared = Arc::new(snapshot);
    web::Data::new(ReportService::new(
        shared.clone(),
        shared.clone(),
        shared,
    ))
}

macro_rules! test_app {
    ($snapshot:expr) => {
        test::init_service(
            App::new()
                .app_data(service_for($snapshot))
                .configure(report_controller::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn inventory_returns_grouped_rows() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/inventory")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(body.is_array());
    assert_eq!(body[0]["blood_type"], "O");
    assert_eq!(body[0]["rh"], "+");
    assert_eq!(body[0]["units"], 450);
    assert_eq!(body[0]["bags"], 1);
}

#[actix_web::test]
async fn inventory_honors_blood_filter() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/inventory?blood_type=AB")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn fulfillment_page_structure() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/fulfillment?limit=10&offset=0")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["offset"], 0);

    let item = &body["items"][0];
    assert_eq!(item["request_id"], "r1");
    assert_eq!(item["blood"], "O+");
    assert_eq!(item["health_entity_id"], "h1");
    assert_eq!(item["status"], "PARTIAL");
    assert_eq!(item["fulfillment"], 45);
}

#[actix_web::test]
async fn fulfillment_page_beyond_total_keeps_real_total() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/fulfillment?limit=10&offset=50")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn overdue_with_injected_reference_date() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/overdue?as_of=2025-04-01")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body[0]["request_id"], "r1");
    assert_eq!(body[0]["health_entity"], "Central Clinic");
    assert_eq!(body[0]["shortage"], 550);
    assert_eq!(body[0]["status"], "OVERDUE");
}

#[actix_web::test]
async fn donors_report_includes_inactive_donors() {
    let app = test_app!(fixture());

    // Window with no donations at all
    let req = test::TestRequest::get()
        .uri("/reports/donors?from=2026-01-01")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["donor_id"], "d1");
    assert_eq!(body[0]["name"], "Ana Gomez");
    assert_eq!(body[0]["donations"], 0);
    assert_eq!(body[0]["units"], 0);
}

#[actix_web::test]
async fn health_entities_summary_structure() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/health-entities")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let row = &body[0];
    assert_eq!(row["health_entity_id"], "h1");
    assert_eq!(row["name"], "Central Clinic");
    assert_eq!(row["requests"], 1);
    assert_eq!(row["units_requested"], 1000);
    assert_eq!(row["bags_received"], 1);
    assert_eq!(row["units_received"], 450);
    assert_eq!(row["fulfillment_pct"], 45);
}

#[actix_web::test]
async fn donations_histogram_flat_and_monthly() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/donations")
        .to_request();
    let flat: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(flat[0].get("period").is_none());
    assert_eq!(flat[0]["donations"], 1);

    let req = test::TestRequest::get()
        .uri("/reports/donations?group_by=month")
        .to_request();
    let monthly: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(monthly[0]["period"], "2025-01");
    assert_eq!(monthly[0]["items"][0]["blood_type"], "O");
}

#[actix_web::test]
async fn empty_snapshot_yields_empty_reports_not_errors() {
    let app = test_app!(StubSnapshot::default());

    for uri in [
        "/reports/inventory",
        "/reports/overdue",
        "/reports/donors",
        "/reports/health-entities",
        "/reports/donations",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "uri: {}", uri);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body.as_array().unwrap().is_empty(), "uri: {}", uri);
    }

    let req = test::TestRequest::get()
        .uri("/reports/fulfillment")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 0);
}

#[actix_web::test]
async fn malformed_date_is_rejected_with_400() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/inventory?from=not-a-date")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("YYYY-MM-DD"));
}

#[actix_web::test]
async fn inverted_range_is_rejected_with_400() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/donations?from=2025-06-01&to=2025-01-01")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn unknown_group_by_is_rejected_with_400() {
    let app = test_app!(fixture());

    let req = test::TestRequest::get()
        .uri("/reports/donations?group_by=week")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
