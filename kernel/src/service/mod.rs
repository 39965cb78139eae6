pub mod billing;
pub mod overlap;
pub mod reservation;
