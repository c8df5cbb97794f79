pub mod bags;
pub mod donors;
pub mod health;
pub mod reports;
pub mod requests;
