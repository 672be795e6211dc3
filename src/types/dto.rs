pub mod geocoding;
pub mod places;
