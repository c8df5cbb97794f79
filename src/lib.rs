//! Hemotrack Blood-Bank Reporting Service Library
//!
//! Turns raw operational records (blood bags, requests, donors) into derived
//! operational reports: inventory, request fulfillment, overdue alerts,
//! donor activity, health-entity summaries, and donation histograms.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bags;
pub use modules::donors;
pub use modules::reports;
pub use modules::requests;
