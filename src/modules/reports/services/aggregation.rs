//! Pure report computations over a data snapshot.
//!
//! Every function here is side-effect free: it takes slices of snapshot
//! entities plus filter parameters and returns a report. Fetching the
//! snapshot is the orchestrator's job (`ReportService`), which keeps these
//! functions trivially testable and repeatable.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::core::BloodGroup;
use crate::modules::bags::models::BloodBag;
use crate::modules::donors::models::Donor;
use crate::modules::requests::models::BloodRequest;

use crate::modules::reports::models::{
    BloodFilter, BloodGroupCount, DonationHistogram, DonorActivity, FulfillmentReport,
    FulfillmentStatus, GroupBy, HealthEntitySummary, HistogramBucket, InventoryGroup,
    OverdueRequest, OverdueStatus, Pagination, RequestFulfillment, TimeRange,
};

/// Delivered volume as an integer percentage of the needed volume, rounded
/// half away from zero and capped at 100. Zero need yields zero, uniformly
/// across all reports.
pub fn fulfillment_pct(delivered: i64, needed: i64) -> u8 {
    if needed <= 0 {
        return 0;
    }
    let pct = (delivered as f64 / needed as f64 * 100.0).round() as i64;
    pct.clamp(0, 100) as u8
}

/// Usable stock grouped by (ABO, Rh), filtered by donation date and the
/// optional blood filters. Groups come back ascending by blood type.
pub fn inventory_by_blood(
    bags: &[BloodBag],
    range: &TimeRange,
    filter: &BloodFilter,
) -> Vec<InventoryGroup> {
    let mut groups: BTreeMap<BloodGroup, InventoryGroup> = BTreeMap::new();

    for bag in bags {
        if !range.contains(bag.donation_date) {
            continue;
        }
        let group = bag.blood_group();
        if !filter.matches(&group) {
            continue;
        }

        let entry = groups
            .entry(group)
            .or_insert_with(|| InventoryGroup::new(group.blood_type, group.rh));
        entry.units += bag.quantity;
        entry.bags += 1;
    }

    groups.into_values().collect()
}

/// Delivered volume per request id, counting only bags inside the window
fn delivered_by_request<'a>(bags: &'a [BloodBag], range: &TimeRange) -> HashMap<&'a str, i64> {
    let mut delivered: HashMap<&str, i64> = HashMap::new();
    for bag in bags {
        if range.contains(bag.donation_date) {
            *delivered.entry(bag.request_id.as_str()).or_default() += bag.quantity;
        }
    }
    delivered
}

/// Per-request delivery progress over the requests created inside the
/// window. Bags outside the window do not count as delivered for that
/// window's report. Sorted by due date, ties by fulfillment percentage,
/// then paginated.
pub fn requests_fulfillment(
    requests: &[BloodRequest],
    bags: &[BloodBag],
    range: &TimeRange,
    page: &Pagination,
) -> FulfillmentReport {
    let delivered = delivered_by_request(bags, range);

    let mut rows: Vec<RequestFulfillment> = requests
        .iter()
        .filter(|request| range.contains(request.date_created))
        .map(|request| {
            let got = delivered.get(request.id.as_str()).copied().unwrap_or(0);
            let needed = request.quantity_needed;

            RequestFulfillment {
                request_id: request.id.clone(),
                blood: request.blood_group().label(),
                health_entity_id: request.health_entity_id.clone(),
                created_at: request.date_created,
                due_date: request.due_date,
                needed,
                delivered: got,
                fulfillment: fulfillment_pct(got, needed),
                status: FulfillmentStatus::classify(got, needed),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        a.due_date
            .cmp(&b.due_date)
            .then(a.fulfillment.cmp(&b.fulfillment))
    });

    let total = rows.len();
    let items = rows
        .into_iter()
        .skip(page.offset)
        .take(page.limit)
        .collect();

    FulfillmentReport {
        total,
        limit: page.limit,
        offset: page.offset,
        items,
    }
}

/// Requests past `now` that remain under-delivered, earliest due date
/// first. Delivery is counted over the bag's whole lifetime, no window.
pub fn overdue_requests(
    requests: &[BloodRequest],
    bags: &[BloodBag],
    now: NaiveDate,
) -> Vec<OverdueRequest> {
    let delivered = delivered_by_request(bags, &TimeRange::unbounded());

    let mut rows: Vec<OverdueRequest> = requests
        .iter()
        .filter(|request| request.due_date < now)
        .filter_map(|request| {
            let got = delivered.get(request.id.as_str()).copied().unwrap_or(0);
            let needed = request.quantity_needed;
            if got >= needed {
                // FULFILLED_LATE: delivered in full, just not on time
                return None;
            }

            Some(OverdueRequest {
                request_id: request.id.clone(),
                health_entity: request.health_entity_name.clone(),
                blood: request.blood_group().label(),
                due_date: request.due_date,
                needed,
                delivered: got,
                shortage: (needed - got).max(0),
                status: OverdueStatus::Overdue,
            })
        })
        .collect();

    rows.sort_by_key(|row| row.due_date);
    rows
}

/// Donation count and volume per known donor inside the window, most units
/// first. Donors with no in-window activity still appear with zeros.
pub fn donors_activity(
    donors: &[Donor],
    bags: &[BloodBag],
    range: &TimeRange,
) -> Vec<DonorActivity> {
    let mut rows: Vec<DonorActivity> = donors.iter().map(DonorActivity::for_donor).collect();
    let index: HashMap<&str, usize> = donors
        .iter()
        .enumerate()
        .map(|(i, donor)| (donor.id.as_str(), i))
        .collect();

    for bag in bags {
        if !range.contains(bag.donation_date) {
            continue;
        }
        // Bags from unknown donors are ignored rather than invented
        if let Some(&i) = index.get(bag.donor_id.as_str()) {
            rows[i].donations += 1;
            rows[i].units += bag.quantity;
        }
    }

    // Stable sort keeps encounter order for equal unit totals
    rows.sort_by(|a, b| b.units.cmp(&a.units));
    rows
}

/// Requested vs. received volume per health entity, least-served first.
///
/// Only entities with at least one in-window request are summarized; bags
/// for other entities' requests never create new entries. The request and
/// bag sides are windowed independently (`date_created` vs.
/// `donation_date`).
pub fn health_entities_summary(
    requests: &[BloodRequest],
    bags: &[BloodBag],
    range: &TimeRange,
) -> Vec<HealthEntitySummary> {
    let mut rows: Vec<HealthEntitySummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for request in requests {
        if !range.contains(request.date_created) {
            continue;
        }
        let i = *index
            .entry(request.health_entity_id.as_str())
            .or_insert_with(|| {
                rows.push(HealthEntitySummary::new(
                    request.health_entity_id.clone(),
                    request.health_entity_name.clone(),
                ));
                rows.len() - 1
            });
        rows[i].requests += 1;
        rows[i].units_requested += request.quantity_needed;
    }

    let request_entity: HashMap<&str, &str> = requests
        .iter()
        .map(|request| (request.id.as_str(), request.health_entity_id.as_str()))
        .collect();

    for bag in bags {
        if !range.contains(bag.donation_date) {
            continue;
        }
        if let Some(entity_id) = request_entity.get(bag.request_id.as_str()) {
            if let Some(&i) = index.get(entity_id) {
                rows[i].bags_received += 1;
                rows[i].units_received += bag.quantity;
            }
        }
    }

    for row in &mut rows {
        row.fulfillment_pct = fulfillment_pct(row.units_received, row.units_requested);
    }

    rows.sort_by_key(|row| row.fulfillment_pct);
    rows
}

/// In-window donations bucketed by calendar period and, within each bucket,
/// by (ABO, Rh). `GroupBy::None` collapses everything into a single flat
/// list.
pub fn donations_by_blood(
    bags: &[BloodBag],
    range: &TimeRange,
    group_by: GroupBy,
) -> DonationHistogram {
    let mut buckets: BTreeMap<String, BTreeMap<BloodGroup, BloodGroupCount>> = BTreeMap::new();

    for bag in bags {
        if !range.contains(bag.donation_date) {
            continue;
        }
        let period = match group_by {
            GroupBy::None => String::new(),
            GroupBy::Day => bag.donation_date.format("%Y-%m-%d").to_string(),
            GroupBy::Month => bag.donation_date.format("%Y-%m").to_string(),
        };

        let group = bag.blood_group();
        let entry = buckets
            .entry(period)
            .or_default()
            .entry(group)
            .or_insert_with(|| BloodGroupCount::new(group.blood_type, group.rh));
        entry.donations += 1;
        entry.units += bag.quantity;
    }

    match group_by {
        GroupBy::None => DonationHistogram::Flat(
            buckets
                .into_values()
                .next()
                .map(|groups| groups.into_values().collect())
                .unwrap_or_default(),
        ),
        // BTreeMap iteration gives ascending ISO periods, which is
        // chronological order
        _ => DonationHistogram::Periods(
            buckets
                .into_iter()
                .map(|(period, groups)| HistogramBucket {
                    period,
                    items: groups.into_values().collect(),
                })
                .collect(),
        ),
    }
}
