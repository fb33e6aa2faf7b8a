/// SVG output for pattern grids

use std::fmt::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::pattern::{PatternGrid, MODULE_COUNT};

/// Fill used for every marked cell
pub const FILL_COLOR: &str = "#1a1a2e";

/// Cell size used by the card page
pub const DEFAULT_CELL_SIZE: u32 = 5;

/// Render `grid` as a standalone SVG document.
///
/// Each marked cell becomes a `cell_size` square at `(col, row) * cell_size`;
/// blank cells are left transparent. Coordinates are computed in `u64`, so
/// every `cell_size` yields an exact `viewBox`.
pub fn render(grid: &PatternGrid, cell_size: u32) -> String {
    let cell = u64::from(cell_size);
    let extent = MODULE_COUNT as u64 * cell;
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
        extent, extent
    );

    for (row, cells) in grid.rows().enumerate() {
        for (col, marked) in cells.iter().enumerate() {
            if *marked {
                // writing into a String cannot fail
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    col as u64 * cell,
                    row as u64 * cell,
                    cell_size,
                    cell_size,
                    FILL_COLOR
                );
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Wrap an SVG document as a base64 `data:` URI for use as an image source.
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}
