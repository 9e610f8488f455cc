//! Test fixtures for wend development.
//!
//! Textual grid parsing/rendering in the conventional `#`/`.` format,
//! plus a few toy transition rules with known behaviour: a life-like
//! oscillator rule, a pure-drift rule (periodic up to shift), and a
//! deliberately translation-*variant* rule for exercising shift
//! verification failures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use wend_core::{Bounds, GridError, Point};
use wend_grid::DenseGrid;

/// The live cell byte in textual grids.
pub const LIVE: u8 = b'#';
/// The background byte in textual grids.
pub const DEAD: u8 = b'.';

/// Parse a `#`/`.` map into a byte grid with `.` as the background.
///
/// Rows are `y`, columns are `x`, origin at the top-left. Ragged rows
/// are padded with the background to the widest row's length. An empty
/// string fails with [`GridError::EmptyBounds`].
pub fn parse_grid(text: &str) -> Result<DenseGrid<u8>, GridError> {
    let rows: Vec<&str> = text.lines().collect();
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
    let mut grid = DenseGrid::new(Bounds::sized(width, rows.len() as u32), DEAD)?;
    for (y, row) in rows.iter().enumerate() {
        for (x, byte) in row.bytes().enumerate() {
            grid.set(Point::new(x as i64, y as i64), byte)?;
        }
    }
    Ok(grid)
}

/// Render a byte grid back to its textual form, one line per row.
pub fn render_grid(grid: &DenseGrid<u8>) -> String {
    let bounds = grid.bounds();
    let mut out = String::with_capacity(bounds.area() + bounds.height as usize);
    for y in bounds.min.y..bounds.max_y() {
        if y != bounds.min.y {
            out.push('\n');
        }
        for x in bounds.min.x..bounds.max_x() {
            let cell = *grid.get_or_background(Point::new(x, y));
            out.push(cell as char);
        }
    }
    out
}

/// Conway-style life on a fixed window: a cell is live next generation
/// with exactly three live 8-neighbours, or two if already live. Cells
/// beyond the window read as dead. Oscillators (blinkers, blocks) give
/// exact cycles.
pub fn life_rule(grid: &DenseGrid<u8>) -> DenseGrid<u8> {
    let mut out = grid.cleared();
    for (p, &cell) in grid.iter() {
        let mut live = 0;
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if *grid.get_or_background(p + Point::new(dx, dy)) == LIVE {
                    live += 1;
                }
            }
        }
        if live == 3 || (cell == LIVE && live == 2) {
            out.set(p, LIVE).unwrap();
        }
    }
    out
}

/// 1D rule: a cell is live next generation when exactly one of its
/// two horizontal neighbours is live. Applied over a fixed window
/// (out-of-window cells read dead).
pub fn one_neighbour_rule(grid: &DenseGrid<u8>) -> DenseGrid<u8> {
    let mut out = grid.cleared();
    for (p, _) in grid.iter() {
        let left = *grid.get_or_background(p + Point::new(-1, 0)) == LIVE;
        let right = *grid.get_or_background(p + Point::new(1, 0)) == LIVE;
        if left != right {
            out.set(p, LIVE).unwrap();
        }
    }
    out
}

/// Pure drift: every cell moves one column right and the window moves
/// with it. Translation-invariant, periodic up to shift with period 1
/// and shift `(1, 0)`, and never exactly periodic.
pub fn drift_rule(grid: &DenseGrid<u8>) -> DenseGrid<u8> {
    let step = Point::new(1, 0);
    let mut out = DenseGrid::new(grid.bounds().translated(step), *grid.background())
        .expect("source grid is non-empty");
    for (p, &cell) in grid.iter() {
        if cell != *grid.background() {
            out.set(p + step, cell).unwrap();
        }
    }
    out
}

/// Translation-*variant* drift: a live cell in an even column moves
/// one right; a live cell in an odd column spawns two cells (one and
/// two columns right). The first generation of a single cell at an
/// even column looks like a pure shift, so shift-based detection
/// matches — and verification against the next generation refutes it.
pub fn parity_rule(grid: &DenseGrid<u8>) -> DenseGrid<u8> {
    let mut out = DenseGrid::new(grid.bounds().expanded(2), *grid.background())
        .expect("source grid is non-empty");
    for (p, &cell) in grid.iter() {
        if cell == *grid.background() {
            continue;
        }
        out.set(p + Point::new(1, 0), cell).unwrap();
        if p.x.rem_euclid(2) == 1 {
            out.set(p + Point::new(2, 0), cell).unwrap();
        }
    }
    out
}
