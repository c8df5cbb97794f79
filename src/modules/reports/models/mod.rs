pub mod activity;
pub mod filters;
pub mod fulfillment;
pub mod histogram;
pub mod inventory;
pub mod overdue;
pub mod summary;

pub use activity::DonorActivity;
pub use filters::{BloodFilter, GroupBy, Pagination, TimeRange};
pub use fulfillment::{FulfillmentReport, FulfillmentStatus, RequestFulfillment};
pub use histogram::{BloodGroupCount, DonationHistogram, HistogramBucket};
pub use inventory::InventoryGroup;
pub use overdue::{OverdueRequest, OverdueStatus};
pub use summary::HealthEntitySummary;
