use crate::types::gradient::Gradient;

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    pub stroke_width: f32,
    pub gradient: Gradient,
}

impl ChartOptions {
    pub fn line_defaults() -> Self {
        Self {
            width: 900,
            height: 480,
            padding: 56,
            stroke_width: 2.5,
            gradient: Gradient::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub background: Option<(u8, u8, u8, u8)>,
}
