use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::bags::repositories::BloodBagReader;
use crate::modules::donors::repositories::DonorReader;
use crate::modules::requests::repositories::RequestReader;

use crate::modules::reports::models::{
    BloodFilter, DonationHistogram, DonorActivity, FulfillmentReport, GroupBy,
    HealthEntitySummary, InventoryGroup, OverdueRequest, Pagination, TimeRange,
};
use crate::modules::reports::services::aggregation;

/// Orchestrates the report computations.
///
/// Fetches a fresh snapshot from the read collaborators on every call and
/// delegates to the pure functions in [`aggregation`]. Holds no state
/// between calls and never writes.
pub struct ReportService {
    donors: Arc<dyn DonorReader>,
    requests: Arc<dyn RequestReader>,
    bags: Arc<dyn BloodBagReader>,
}

impl ReportService {
    pub fn new(
        donors: Arc<dyn DonorReader>,
        requests: Arc<dyn RequestReader>,
        bags: Arc<dyn BloodBagReader>,
    ) -> Self {
        Self {
            donors,
            requests,
            bags,
        }
    }

    /// Reject inverted windows before any fetch happens
    fn validate_range(&self, range: &TimeRange) -> Result<()> {
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(AppError::validation(format!(
                    "from ({}) must be before or equal to to ({})",
                    from, to
                )));
            }
        }
        Ok(())
    }

    /// Stock grouped by (ABO, Rh) for bags donated inside the window
    pub async fn inventory_by_blood(
        &self,
        range: TimeRange,
        filter: BloodFilter,
    ) -> Result<Vec<InventoryGroup>> {
        self.validate_range(&range)?;

        let bags = self.bags.list_blood_bags().await?;
        let groups = aggregation::inventory_by_blood(&bags, &range, &filter);

        info!(
            "Inventory report: {} bags in snapshot, {} groups",
            bags.len(),
            groups.len()
        );
        Ok(groups)
    }

    /// Paginated delivery progress for requests created inside the window
    pub async fn requests_fulfillment(
        &self,
        range: TimeRange,
        page: Pagination,
    ) -> Result<FulfillmentReport> {
        self.validate_range(&range)?;

        let requests = self.requests.list_requests().await?;
        let bags = self.bags.list_blood_bags().await?;
        let report = aggregation::requests_fulfillment(&requests, &bags, &range, &page);

        info!(
            "Fulfillment report: {} matching requests, page offset {} limit {}",
            report.total, page.offset, page.limit
        );
        Ok(report)
    }

    /// Under-delivered requests past their due date.
    ///
    /// `as_of` defaults to today (UTC); injecting it keeps the report
    /// deterministic under test.
    pub async fn overdue_requests(&self, as_of: Option<NaiveDate>) -> Result<Vec<OverdueRequest>> {
        let now = as_of.unwrap_or_else(|| Utc::now().date_naive());

        let requests = self.requests.list_requests().await?;
        let bags = self.bags.list_blood_bags().await?;
        let rows = aggregation::overdue_requests(&requests, &bags, now);

        if rows.is_empty() {
            info!("Overdue report as of {}: nothing overdue", now);
        } else {
            warn!("Overdue report as of {}: {} requests overdue", now, rows.len());
        }
        Ok(rows)
    }

    /// Donation activity for every known donor, most units first
    pub async fn donors_activity(&self, range: TimeRange) -> Result<Vec<DonorActivity>> {
        self.validate_range(&range)?;

        let donors = self.donors.list_donors().await?;
        let bags = self.bags.list_blood_bags().await?;
        let rows = aggregation::donors_activity(&donors, &bags, &range);

        info!("Donor activity report: {} donors ranked", rows.len());
        Ok(rows)
    }

    /// Requested vs. received volume per health entity, least served first
    pub async fn health_entities_summary(
        &self,
        range: TimeRange,
    ) -> Result<Vec<HealthEntitySummary>> {
        self.validate_range(&range)?;

        let requests = self.requests.list_requests().await?;
        let bags = self.bags.list_blood_bags().await?;
        let rows = aggregation::health_entities_summary(&requests, &bags, &range);

        info!("Health-entity summary: {} entities", rows.len());
        Ok(rows)
    }

    /// Donation histogram bucketed by the requested calendar period
    pub async fn donations_by_blood(
        &self,
        range: TimeRange,
        group_by: GroupBy,
    ) -> Result<DonationHistogram> {
        self.validate_range(&range)?;

        let bags = self.bags.list_blood_bags().await?;
        let histogram = aggregation::donations_by_blood(&bags, &range, group_by);

        info!(
            "Donation histogram: {} bags in snapshot, group_by {:?}",
            bags.len(),
            group_by
        );
        Ok(histogram)
    }
}
