use serde::{Deserialize, Serialize};

const PALETTES: &[(&str, [&str; 4])] = &[
    ("heat", ["#0E4429", "#006D32", "#26A641", "#39D353"]),
    ("ember", ["#5C1A00", "#B33F00", "#FF6600", "#FFB347"]),
    ("ocean", ["#0B2A55", "#0055FF", "#0099DD", "#00D1FF"]),
    ("mono", ["#2B2B2B", "#6E6E6E", "#B0B0B0", "#EDEDED"]),
];

/// Named color ramp used for heatmap cell fills and chart strokes. `t = 0`
/// is the quiet end of the ramp, `t = 1` the busiest day in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gradient {
    pub name: &'static str,
    pub colors: Vec<&'static str>,
}

impl Gradient {
    pub fn get(name: &str) -> Option<Self> {
        PALETTES
            .iter()
            .find(|&&(candidate, _)| candidate == name)
            .map(|&(name, colors)| Self {
                name,
                colors: colors.to_vec(),
            })
    }

    /// Hex color at position `t` along the ramp, linearly interpolated
    /// between the two enclosing stops.
    pub fn interpolate(&self, t: f64) -> String {
        let stops = &self.colors;
        match stops.len() {
            0 => return "#FFFFFF".to_string(),
            1 => return stops[0].to_string(),
            _ => {}
        }

        let scaled = t.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let idx = (scaled.floor() as usize).min(stops.len() - 2);
        let local = scaled - idx as f64;
        let low = parse_hex(stops[idx]).unwrap_or([255; 3]);
        let high = parse_hex(stops[idx + 1]).unwrap_or([255; 3]);

        let mut channels = [0u8; 3];
        for c in 0..3 {
            channels[c] = mix_channel(low[c], high[c], local);
        }
        format!("#{:02X}{:02X}{:02X}", channels[0], channels[1], channels[2])
    }

    /// Stroke color for line charts: the hot end of the ramp.
    pub fn stroke(&self) -> String {
        self.colors.last().copied().unwrap_or("#FFFFFF").to_string()
    }
}

impl Default for Gradient {
    fn default() -> Self {
        let (name, colors) = PALETTES[0];
        Self {
            name,
            colors: colors.to_vec(),
        }
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let mut out = [0u8; 3];
    for (slot, chunk) in out.iter_mut().zip([&digits[0..2], &digits[2..4], &digits[4..6]]) {
        *slot = u8::from_str_radix(chunk, 16).ok()?;
    }
    Some(out)
}

fn mix_channel(low: u8, high: u8, t: f64) -> u8 {
    (low as f64 + (high as f64 - low as f64) * t).round() as u8
}
