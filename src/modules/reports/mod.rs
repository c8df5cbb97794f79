// Reporting engine: pure aggregations over snapshots of the operational
// data, exposed as one GET endpoint per report.

pub mod controllers;
pub mod models;
pub mod services;

pub use services::ReportService;
