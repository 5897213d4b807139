use crate::error::RenderError;
use crate::store::weight::WeightEntry;
use crate::types::chart::ChartOptions;
use crate::types::gradient::Gradient;
use crate::types::summary::{CalendarWeek, WeekBucket};

const Y_TICKS: usize = 4;
const AXIS_COLOR: &str = "#8B949E";
const GRID_COLOR: &str = "#30363D";
const LABEL_COLOR: &str = "#C9D1D9";
const FONT_FAMILY: &str = "DejaVu Sans, sans-serif";
const LABEL_FONT_SIZE: u32 = 12;
const TITLE_FONT_SIZE: u32 = 16;
const MARKER_RADIUS: f64 = 3.5;
const MAX_X_LABELS: usize = 8;

const HEATMAP_CELL: u32 = 28;
const HEATMAP_GAP: u32 = 4;
const HEATMAP_LABEL_WIDTH: u32 = 88;
const HEATMAP_HEADER_HEIGHT: u32 = 36;
const HEATMAP_MARGIN: u32 = 16;
const HEATMAP_ZERO_FILL: &str = "#161B22";
const WEEKDAY_LETTERS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

enum ValueAxis {
    FromZero,
    Fitted,
}

pub fn render_weekly_chart(
    weeks: &[WeekBucket],
    options: &ChartOptions,
) -> Result<String, RenderError> {
    let series: Vec<(String, f64)> = weeks
        .iter()
        .map(|week| (week.week_start.format("%b %d").to_string(), week.total_miles))
        .collect();
    render_line_chart(&series, "Weekly Running Mileage", ValueAxis::FromZero, options)
}

pub fn render_weight_chart(
    entries: &[WeightEntry],
    options: &ChartOptions,
) -> Result<String, RenderError> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|entry| entry.date);
    let series: Vec<(String, f64)> = sorted
        .iter()
        .map(|entry| (entry.date.format("%b %d").to_string(), entry.weight_kg))
        .collect();
    render_line_chart(&series, "Body Weight (kg)", ValueAxis::Fitted, options)
}

fn render_line_chart(
    series: &[(String, f64)],
    title: &str,
    axis: ValueAxis,
    options: &ChartOptions,
) -> Result<String, RenderError> {
    let width = options.width as f64;
    let height = options.height as f64;
    let padding = options.padding as f64;
    let plot_width = width - 2.0 * padding;
    let plot_height = height - 2.0 * padding;
    if plot_width <= 0.0 || plot_height <= 0.0 {
        return Err(RenderError::SvgError("Invalid viewport size".to_string()));
    }

    let left = padding;
    let right = width - padding;
    let top = padding;
    let bottom = height - padding;

    let (y_min, y_max) = value_range(series, axis);
    let y_span = (y_max - y_min).max(f64::EPSILON);

    let mut gridlines = String::new();
    let mut y_labels = String::new();
    for tick in 0..=Y_TICKS {
        let value = y_min + y_span * tick as f64 / Y_TICKS as f64;
        let y = bottom - plot_height * tick as f64 / Y_TICKS as f64;
        gridlines.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            left, y, right, y, GRID_COLOR
        ));
        y_labels.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{}" fill="{}" text-anchor="end">{}</text>"#,
            left - 8.0,
            y + 4.0,
            FONT_FAMILY,
            LABEL_FONT_SIZE,
            LABEL_COLOR,
            format_tick(value, y_span)
        ));
    }

    let coords = series_coords(series, left, bottom, plot_width, plot_height, y_min, y_span);

    let stroke = options.gradient.stroke();
    let line = if coords.len() >= 2 {
        format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.1}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            build_polyline_path(&coords),
            stroke,
            options.stroke_width
        )
    } else {
        String::new()
    };

    let mut markers = String::new();
    for (x, y) in &coords {
        markers.push_str(&format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            x, y, MARKER_RADIUS, stroke
        ));
    }

    let mut x_labels = String::new();
    let stride = (series.len() / MAX_X_LABELS).max(1);
    for (idx, ((label, _), (x, _))) in series.iter().zip(&coords).enumerate() {
        if idx % stride != 0 && idx != series.len() - 1 {
            continue;
        }
        x_labels.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{}" fill="{}" text-anchor="middle">{}</text>"#,
            x,
            bottom + 20.0,
            FONT_FAMILY,
            LABEL_FONT_SIZE,
            LABEL_COLOR,
            label
        ));
    }

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  <text x="{:.1}" y="{:.1}" font-family="{}" font-size="{}" fill="{}" text-anchor="middle">{}</text>
  {}
  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1.5"/>
  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1.5"/>
  {}
  {}
  {}
  {}
</svg>"#,
        options.width,
        options.height,
        options.width,
        options.height,
        width / 2.0,
        top - 16.0,
        FONT_FAMILY,
        TITLE_FONT_SIZE,
        LABEL_COLOR,
        title,
        gridlines,
        left,
        top,
        left,
        bottom,
        AXIS_COLOR,
        left,
        bottom,
        right,
        bottom,
        AXIS_COLOR,
        y_labels,
        x_labels,
        line,
        markers
    ))
}

fn value_range(series: &[(String, f64)], axis: ValueAxis) -> (f64, f64) {
    let max = series.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let min = series.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    match axis {
        ValueAxis::FromZero => {
            let top = if max.is_finite() && max > 0.0 {
                (max / 5.0).ceil() * 5.0
            } else {
                5.0
            };
            (0.0, top)
        }
        ValueAxis::Fitted => {
            if !min.is_finite() || !max.is_finite() {
                return (0.0, 1.0);
            }
            let low = (min - 1.0).floor();
            let high = (max + 1.0).ceil();
            if high > low {
                (low, high)
            } else {
                (low, low + 1.0)
            }
        }
    }
}

fn format_tick(value: f64, span: f64) -> String {
    if span >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn series_coords(
    series: &[(String, f64)],
    left: f64,
    bottom: f64,
    plot_width: f64,
    plot_height: f64,
    y_min: f64,
    y_span: f64,
) -> Vec<(f64, f64)> {
    let n = series.len();
    series
        .iter()
        .enumerate()
        .map(|(idx, (_, value))| {
            let x = if n <= 1 {
                left + plot_width / 2.0
            } else {
                left + plot_width * idx as f64 / (n - 1) as f64
            };
            let y = bottom - plot_height * (value - y_min) / y_span;
            (x, y)
        })
        .collect()
}

fn build_polyline_path(points: &[(f64, f64)]) -> String {
    points.iter().enumerate().fold(String::new(), |mut s, (i, (x, y))| {
        if i == 0 {
            s.push_str(&format!("M {:.2} {:.2}", x, y));
        } else {
            s.push_str(&format!(" L {:.2} {:.2}", x, y));
        }
        s
    })
}

/// Natural pixel size of the heatmap SVG for a given number of week rows.
pub fn heatmap_dimensions(week_count: usize) -> (u32, u32) {
    let width =
        HEATMAP_MARGIN + HEATMAP_LABEL_WIDTH + 7 * (HEATMAP_CELL + HEATMAP_GAP) + HEATMAP_MARGIN;
    let height = HEATMAP_MARGIN
        + HEATMAP_HEADER_HEIGHT
        + week_count.max(1) as u32 * (HEATMAP_CELL + HEATMAP_GAP)
        + HEATMAP_MARGIN;
    (width, height)
}

/// Calendar heatmap: one row per week (most recent first, as produced by the
/// calendar builder), one cell per day Monday through Sunday. Fill intensity
/// is relative to the busiest day in the grid; rest days use a neutral fill.
pub fn render_calendar_heatmap(
    weeks: &[CalendarWeek],
    gradient: &Gradient,
) -> Result<String, RenderError> {
    let (width, height) = heatmap_dimensions(weeks.len());

    let max_miles = weeks
        .iter()
        .flat_map(|week| week.days.iter())
        .map(|cell| cell.total_miles)
        .fold(0.0_f64, f64::max);

    let grid_left = (HEATMAP_MARGIN + HEATMAP_LABEL_WIDTH) as f64;
    let grid_top = (HEATMAP_MARGIN + HEATMAP_HEADER_HEIGHT) as f64;
    let step = (HEATMAP_CELL + HEATMAP_GAP) as f64;

    let mut header = String::new();
    for (col, letter) in WEEKDAY_LETTERS.iter().enumerate() {
        header.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{}" fill="{}" text-anchor="middle">{}</text>"#,
            grid_left + col as f64 * step + HEATMAP_CELL as f64 / 2.0,
            grid_top - 10.0,
            FONT_FAMILY,
            LABEL_FONT_SIZE,
            LABEL_COLOR,
            letter
        ));
    }

    let mut rows = String::new();
    for (row, week) in weeks.iter().enumerate() {
        if week.days.len() != 7 {
            return Err(RenderError::SvgError(format!(
                "Calendar week {} has {} cells",
                week.week_start,
                week.days.len()
            )));
        }
        let y = grid_top + row as f64 * step;
        rows.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{}" fill="{}" text-anchor="end">{}</text>"#,
            grid_left - 12.0,
            y + HEATMAP_CELL as f64 * 0.7,
            FONT_FAMILY,
            LABEL_FONT_SIZE,
            LABEL_COLOR,
            week.week_start.format("%b %d")
        ));
        for (col, cell) in week.days.iter().enumerate() {
            let fill = if cell.total_miles > 0.0 && max_miles > 0.0 {
                gradient.interpolate(cell.total_miles / max_miles)
            } else {
                HEATMAP_ZERO_FILL.to_string()
            };
            rows.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{}" height="{}" rx="3" fill="{}"/>"#,
                grid_left + col as f64 * step,
                y,
                HEATMAP_CELL,
                HEATMAP_CELL,
                fill
            ));
        }
    }

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">
  {}
  {}
</svg>"#,
        width, height, width, height, header, rows
    ))
}
