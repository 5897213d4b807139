pub mod activities;
pub mod charts;
pub mod dashboard;
pub mod goals;
pub mod health;
pub mod weight;
