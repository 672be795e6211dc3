pub mod landmark;
pub mod place;
