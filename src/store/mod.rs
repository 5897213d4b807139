pub mod goals;
pub mod weight;
