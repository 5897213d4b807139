use std::cell::RefCell;

use crate::error::RasterError;
use crate::types::chart::OutputConfig;

// Charts reference DejaVu Sans by family name; load it from the usual
// distro locations before falling back to system font discovery.
const FONT_PATHS: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
];

thread_local! {
    static FONT_DB: RefCell<usvg::fontdb::Database> = RefCell::new(load_fonts());
}

fn load_fonts() -> usvg::fontdb::Database {
    let mut db = usvg::fontdb::Database::new();
    for path in FONT_PATHS {
        let _ = db.load_font_file(path);
    }
    db.load_system_fonts();
    db
}

/// Rasterizes an SVG document to PNG bytes at the requested output size,
/// stretching the SVG viewport to fit.
pub fn rasterize(svg: &str, config: &OutputConfig) -> Result<Vec<u8>, RasterError> {
    FONT_DB.with(|db| {
        let db = db.borrow();
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default(), &db)
            .map_err(|e| RasterError::RenderFailed(format!("SVG parse failed: {}", e)))?;

        let mut pixmap = tiny_skia::Pixmap::new(config.width, config.height).ok_or_else(|| {
            RasterError::RenderFailed(format!(
                "Pixmap allocation failed for {}x{}",
                config.width, config.height
            ))
        })?;
        if let Some((r, g, b, a)) = config.background {
            pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        }

        let scale_x = config.width as f32 / tree.size().width();
        let scale_y = config.height as f32 / tree.size().height();
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale_x, scale_y),
            &mut pixmap.as_mut(),
        );

        pixmap
            .encode_png()
            .map_err(|e| RasterError::RenderFailed(format!("PNG encode failed: {}", e)))
    })
}
