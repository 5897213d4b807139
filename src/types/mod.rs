pub mod activity;
pub mod chart;
pub mod gradient;
pub mod summary;
