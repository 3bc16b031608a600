pub mod dashboard;
pub mod inventory;
pub mod location;
pub mod outcome;
