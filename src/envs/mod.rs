pub mod discrete;
pub mod parking_lot;
