/// Decorative QR-style pattern generator.
///
/// The grid only looks like a QR code: three corner "finder" targets and a
/// hash-driven field of marks. It carries no data and cannot be scanned.

use sha2::{Digest, Sha256};

use super::hash::string_hash;

/// Side length of every pattern grid
pub const MODULE_COUNT: usize = 21;

/// Side length of each corner finder zone
pub const FINDER_SIZE: usize = 7;

/// A 21x21 grid of marks. `true` cells are painted, `false` cells are blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternGrid {
    cells: [[bool; MODULE_COUNT]; MODULE_COUNT],
}

impl PatternGrid {
    pub fn size(&self) -> usize {
        MODULE_COUNT
    }

    /// Cell value; out-of-range coordinates read as blank.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; MODULE_COUNT]> {
        self.cells.iter()
    }

    /// Number of marked cells
    pub fn dark_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| **c).count()
    }

    /// Hex SHA-256 over the row-major cell bits (`1`/`0` per cell).
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for row in &self.cells {
            let bits: Vec<u8> = row.iter().map(|c| if *c { b'1' } else { b'0' }).collect();
            hasher.update(&bits);
        }
        hex::encode(hasher.finalize())
    }
}

/// Whether `(row, col)` lies in the top-left, top-right or bottom-left finder zone.
pub fn is_finder_zone(row: usize, col: usize) -> bool {
    let trailing = MODULE_COUNT - FINDER_SIZE;
    let top_left = row < FINDER_SIZE && col < FINDER_SIZE;
    let top_right = row < FINDER_SIZE && col >= trailing;
    let bottom_left = row >= trailing && col < FINDER_SIZE;
    top_left || top_right || bottom_left
}

/// Mark of a finder-zone cell: outer ring plus a solid 3x3 centre.
pub fn finder_module(row: usize, col: usize) -> bool {
    let trailing = MODULE_COUNT - FINDER_SIZE;
    let r = if row >= trailing { row - trailing } else { row };
    let c = if col >= trailing { col - trailing } else { col };

    if r == 0 || r == FINDER_SIZE - 1 || c == 0 || c == FINDER_SIZE - 1 {
        return true;
    }
    (2..=4).contains(&r) && (2..=4).contains(&c)
}

/// Build the pattern for `seed`. Same seed, same grid; every string is valid.
pub fn generate(seed: &str) -> PatternGrid {
    let mut cells = [[false; MODULE_COUNT]; MODULE_COUNT];
    for (row, line) in cells.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = if is_finder_zone(row, col) {
                finder_module(row, col)
            } else {
                string_hash(&format!("{}{}{}", seed, row, col)) % 3 != 0
            };
        }
    }
    PatternGrid { cells }
}
