//! Rendering of the card's decorative QR-style graphic

pub mod hash;
pub mod pattern;
pub mod svg;

pub use pattern::{generate, PatternGrid, FINDER_SIZE, MODULE_COUNT};
pub use svg::{render, to_data_uri, DEFAULT_CELL_SIZE, FILL_COLOR};

/// A rendered pattern ready to be placed on a page.
#[derive(Debug, Clone)]
pub struct QrGraphic {
    pub seed: String,
    pub cell_size: u32,
    pub svg: String,
}

impl QrGraphic {
    /// Generate and render the pattern for `seed` in one step.
    pub fn new(seed: &str, cell_size: u32) -> Self {
        let grid = generate(seed);
        log::debug!(
            "rendered card pattern: seed_len={} cell_size={} marks={}",
            seed.len(),
            cell_size,
            grid.dark_count()
        );
        Self {
            seed: seed.to_string(),
            cell_size,
            svg: render(&grid, cell_size),
        }
    }

    /// Width and height of the SVG coordinate space
    pub fn extent(&self) -> u64 {
        MODULE_COUNT as u64 * u64::from(self.cell_size)
    }

    pub fn data_uri(&self) -> String {
        to_data_uri(&self.svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphic_matches_direct_render() {
        let q = QrGraphic::new("https://example.com/", DEFAULT_CELL_SIZE);
        assert_eq!(q.svg, render(&generate("https://example.com/"), 5));
        assert_eq!(q.extent(), 105);
        assert!(q.data_uri().starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn extent_holds_for_largest_cell_size() {
        let q = QrGraphic::new("seed", u32::MAX);
        assert_eq!(q.extent(), 21 * u64::from(u32::MAX));
        assert!(q.svg.contains(&format!(r#"viewBox="0 0 {} {}""#, q.extent(), q.extent())));
    }
}
