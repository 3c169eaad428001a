//! Bounded nearest-item search shared by creatures and monsters

use crate::action::Direction;
use crate::grid::{Grid, ItemKind};

/// Offset (row, col) to the nearest cell holding `kind` within `sight`.
///
/// Scans the square of side `2 * sight + 1` around `from`, clipped to the
/// board and skipping `from` itself, in row-major order. The smallest
/// Manhattan distance wins; among equal distances the first cell scanned wins.
pub fn nearest_offset(
    grid: &Grid,
    from: (usize, usize),
    kind: ItemKind,
    sight: usize,
) -> Option<(isize, isize)> {
    let (rows, cols) = grid.dimensions();
    let (row, col) = from;

    let min_row = row.saturating_sub(sight);
    let max_row = row.saturating_add(sight).min(rows.saturating_sub(1));
    let min_col = col.saturating_sub(sight);
    let max_col = col.saturating_add(sight).min(cols.saturating_sub(1));

    let mut best: Option<(usize, (isize, isize))> = None;

    for r in min_row..=max_row {
        for c in min_col..=max_col {
            if (r, c) == from || grid.occupancy_at(kind, r, c) == 0 {
                continue;
            }
            let d_row = r as isize - row as isize;
            let d_col = c as isize - col as isize;
            let distance = d_row.unsigned_abs() + d_col.unsigned_abs();
            if best.map_or(true, |(best_distance, _)| distance < best_distance) {
                best = Some((distance, (d_row, d_col)));
            }
        }
    }

    best.map(|(_, offset)| offset)
}

/// Direction toward an offset; the row axis wins when both are equal
pub fn direction_of(offset: (isize, isize)) -> Direction {
    let (d_row, d_col) = offset;
    if d_row.abs() >= d_col.abs() {
        if d_row < 0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if d_col > 0 {
        Direction::Right
    } else {
        Direction::Left
    }
}

/// Direction of the nearest `kind` within `sight`, if any is visible
pub fn nearest_direction(
    grid: &Grid,
    from: (usize, usize),
    kind: ItemKind,
    sight: usize,
) -> Option<Direction> {
    nearest_offset(grid, from, kind, sight).map(direction_of)
}
