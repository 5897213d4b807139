pub mod calendar;
pub mod consistency;
pub mod normalize;
pub mod rasterize;
pub mod render;
pub mod target;
pub mod weekly;
