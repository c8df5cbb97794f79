use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::{AppError, Result};
use crate::modules::reports::models::{BloodFilter, GroupBy, Pagination, TimeRange};
use crate::modules::reports::services::ReportService;

/// Parse an optional `YYYY-MM-DD` query parameter, rejecting malformed
/// input instead of silently treating it as an open bound
fn parse_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some).map_err(|_| {
            AppError::validation(format!(
                "Invalid {} format: '{}'. Expected YYYY-MM-DD",
                name, raw
            ))
        }),
    }
}

fn parse_range(from: Option<&str>, to: Option<&str>) -> Result<TimeRange> {
    Ok(TimeRange::new(
        parse_date("from", from)?,
        parse_date("to", to)?,
    ))
}

/// Common `from`/`to` window parameters
#[derive(Debug, Deserialize)]
pub struct TimeRangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub blood_type: Option<String>,
    pub rh: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FulfillmentQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct OverdueQuery {
    /// Reference instant for "past due"; defaults to today (UTC)
    pub as_of: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistogramQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub group_by: Option<String>,
}

/// GET /reports/inventory
///
/// Usable stock grouped by (ABO, Rh), optionally filtered by donation date
/// and blood group.
pub async fn get_inventory(
    service: web::Data<ReportService>,
    query: web::Query<InventoryQuery>,
) -> Result<HttpResponse> {
    let range = parse_range(query.from.as_deref(), query.to.as_deref())?;

    let filter = BloodFilter {
        blood_type: query
            .blood_type
            .as_deref()
            .map(|s| s.parse().map_err(AppError::validation))
            .transpose()?,
        rh: query
            .rh
            .as_deref()
            .map(|s| s.parse().map_err(AppError::validation))
            .transpose()?,
    };

    let groups = service.inventory_by_blood(range, filter).await?;
    Ok(HttpResponse::Ok().json(groups))
}

/// GET /reports/fulfillment
///
/// Paginated per-request delivery progress, sorted by due date.
pub async fn get_fulfillment(
    service: web::Data<ReportService>,
    query: web::Query<FulfillmentQuery>,
) -> Result<HttpResponse> {
    let range = parse_range(query.from.as_deref(), query.to.as_deref())?;
    let page = Pagination::new(query.limit.unwrap_or(50), query.offset.unwrap_or(0));

    let report = service.requests_fulfillment(range, page).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /reports/overdue
///
/// Requests past their due date that remain under-delivered.
pub async fn get_overdue(
    service: web::Data<ReportService>,
    query: web::Query<OverdueQuery>,
) -> Result<HttpResponse> {
    let as_of = parse_date("as_of", query.as_of.as_deref())?;

    let rows = service.overdue_requests(as_of).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /reports/donors
///
/// Donation activity for every known donor, ranked by volume.
pub async fn get_donors_activity(
    service: web::Data<ReportService>,
    query: web::Query<TimeRangeQuery>,
) -> Result<HttpResponse> {
    let range = parse_range(query.from.as_deref(), query.to.as_deref())?;

    let rows = service.donors_activity(range).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /reports/health-entities
///
/// Requested vs. received volume per health entity, least served first.
pub async fn get_health_entities_summary(
    service: web::Data<ReportService>,
    query: web::Query<TimeRangeQuery>,
) -> Result<HttpResponse> {
    let range = parse_range(query.from.as_deref(), query.to.as_deref())?;

    let rows = service.health_entities_summary(range).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /reports/donations
///
/// Donation histogram, flat or bucketed by day/month.
pub async fn get_donations_by_blood(
    service: web::Data<ReportService>,
    query: web::Query<HistogramQuery>,
) -> Result<HttpResponse> {
    let range = parse_range(query.from.as_deref(), query.to.as_deref())?;
    let group_by = match query.group_by.as_deref() {
        None => GroupBy::None,
        Some(raw) => raw.parse().map_err(AppError::validation)?,
    };

    let histogram = service.donations_by_blood(range, group_by).await?;
    Ok(HttpResponse::Ok().json(histogram))
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/inventory", web::get().to(get_inventory))
            .route("/fulfillment", web::get().to(get_fulfillment))
            .route("/overdue", web::get().to(get_overdue))
            .route("/donors", web::get().to(get_donors_activity))
            .route("/health-entities", web::get().to(get_health_entities_summary))
            .route("/donations", web::get().to(get_donations_by_blood)),
    );
}
