pub mod blood_bag;

pub use blood_bag::BloodBag;
