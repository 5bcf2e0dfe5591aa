//! Grid module - the numbered tile board
//!
//! The grid is `width x height` cells stored in one flat buffer, row-major from the bottom:
//! index `x + y * width`, with `y = 0` the lowest row. The top `out_zone_rows` rows form the
//! out zone; everything below is the play zone.
//!
//! Gravity only ever touches the play zone. The out zone is written by [`Grid::rise_with`]
//! alone, which is how a tile ends up there.

use crate::types::{Cell, Coord};

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    out_zone_rows: usize,
    /// Flat buffer of cells, `x + y * width`
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. `out_zone_rows` larger than `height` leaves no play zone.
    pub fn new(width: usize, height: usize, out_zone_rows: usize) -> Self {
        Self {
            width,
            height,
            out_zone_rows,
            cells: vec![None; width * height],
        }
    }

    /// Build a grid from rows listed bottom-up. Missing rows are empty; each row must be
    /// exactly `width` wide or `None` is returned.
    pub fn from_rows(
        width: usize,
        height: usize,
        out_zone_rows: usize,
        rows: &[&[Cell]],
    ) -> Option<Self> {
        if rows.len() > height || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let mut grid = Self::new(width, height, out_zone_rows);
        for (y, row) in rows.iter().enumerate() {
            grid.row_mut(y).copy_from_slice(row);
        }
        Some(grid)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Total height, out zone included
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn out_zone_rows(&self) -> usize {
        self.out_zone_rows
    }

    /// Rows available for play: `max(0, height - out_zone_rows)`
    pub fn play_height(&self) -> usize {
        self.height.saturating_sub(self.out_zone_rows)
    }

    /// Get cell at position (x, y).
    /// Returns `None` if out of bounds, `Some(None)` if empty.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Bounds-safe read that folds "out of bounds" into "empty".
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y).
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        self.index(c.x, c.y).is_some()
    }

    /// True for in-bounds cells that lie in the out zone
    pub fn in_out_zone(&self, c: Coord) -> bool {
        self.in_bounds(c) && c.y as usize >= self.play_height()
    }

    /// True for in-bounds cells below the out zone
    pub fn in_play_zone(&self, c: Coord) -> bool {
        self.in_bounds(c) && (c.y as usize) < self.play_height()
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of row `y`, left to right. Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        let start = y * self.width;
        &mut self.cells[start..start + self.width]
    }

    /// Cells of column `x`, bottom to top. Empty if `x >= width`.
    pub fn column(&self, x: usize) -> impl Iterator<Item = Cell> + '_ {
        let rows = if x < self.width { self.height } else { 0 };
        (0..rows).map(move |y| self.cells[y * self.width + x])
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether any out-zone cell holds a tile (the game-over condition)
    pub fn is_out_zone_occupied(&self) -> bool {
        let start = self.play_height() * self.width;
        self.cells[start..].iter().any(|cell| cell.is_some())
    }

    /// Compact every column of the play zone downward, keeping the vertical order of tiles.
    /// Uses a write pointer per column, so it is a no-op on an already compact column.
    pub fn apply_gravity(&mut self) {
        let width = self.width;
        let play_height = self.play_height();

        for x in 0..width {
            let mut write_y = 0usize;
            for read_y in 0..play_height {
                let read = read_y * width + x;
                if let Some(v) = self.cells[read] {
                    if write_y != read_y {
                        self.cells[write_y * width + x] = Some(v);
                        self.cells[read] = None;
                    }
                    write_y += 1;
                }
            }
        }
    }

    /// Shift every row up by one, out zone included, dropping the top row, then fill row 0
    /// with values from `next_value`.
    pub fn rise_with(&mut self, mut next_value: impl FnMut() -> u32) {
        if self.height == 0 {
            return;
        }

        let width = self.width;
        // copy_within handles the overlap between source and destination rows
        for row in (1..self.height).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in self.row_mut(0) {
            *cell = Some(next_value());
        }
    }

    /// Fill rows `0..rows` (clamped to the play zone) with values from `next_value`.
    pub fn fill_bottom_with(&mut self, rows: usize, mut next_value: impl FnMut() -> u32) {
        let rows = rows.min(self.play_height());
        for cell in &mut self.cells[..rows * self.width] {
            *cell = Some(next_value());
        }
    }

    /// Get a reference to the internal cells buffer
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Replace all cells from a buffer of the same length. Returns false on length mismatch.
    pub fn copy_from_cells(&mut self, cells: &[Cell]) -> bool {
        if cells.len() != self.cells.len() {
            return false;
        }
        self.cells.copy_from_slice(cells);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_values(grid: &Grid, x: usize) -> Vec<u32> {
        grid.column(x).flatten().collect()
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(5, 9, 1);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(4, 0), Some(4));
        assert_eq!(grid.index(0, 1), Some(5));
        assert_eq!(grid.index(4, 8), Some(44));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(5, 0), None);
        assert_eq!(grid.index(0, 9), None);
    }

    #[test]
    fn test_get_distinguishes_out_of_bounds_from_empty() {
        let mut grid = Grid::new(3, 3, 1);
        grid.set(1, 1, Some(7));

        assert_eq!(grid.get(1, 1), Some(Some(7)));
        assert_eq!(grid.get(0, 0), Some(None));
        assert_eq!(grid.get(3, 0), None);

        assert_eq!(grid.cell(1, 1), Some(7));
        assert_eq!(grid.cell(3, 0), None);
        assert_eq!(grid.cell(-1, -1), None);
        assert!(!grid.set(0, 3, Some(1)));

        assert!(grid.is_occupied(1, 1));
        assert!(!grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(3, 0));
    }

    #[test]
    fn test_column_outside_the_board_is_empty() {
        let mut grid = Grid::new(3, 3, 1);
        grid.set(2, 0, Some(4));
        grid.set(2, 1, Some(5));

        assert_eq!(grid.column(2).collect::<Vec<_>>(), vec![Some(4), Some(5), None]);
        assert_eq!(grid.column(3).count(), 0);
        assert_eq!(grid.column(usize::MAX).count(), 0);
    }

    #[test]
    fn test_zones() {
        let grid = Grid::new(5, 9, 2);
        assert_eq!(grid.play_height(), 7);
        assert!(grid.in_play_zone(Coord::new(0, 6)));
        assert!(grid.in_out_zone(Coord::new(0, 7)));
        assert!(grid.in_out_zone(Coord::new(4, 8)));
        assert!(!grid.in_out_zone(Coord::new(4, 9)));
        assert!(!grid.in_play_zone(Coord::new(-1, 0)));

        let oversized = Grid::new(2, 2, 5);
        assert_eq!(oversized.play_height(), 0);
        assert!(oversized.in_out_zone(Coord::new(0, 0)));
    }

    #[test]
    fn test_gravity_is_stable_per_column() {
        let mut grid = Grid::new(2, 6, 1);
        grid.set(0, 1, Some(4));
        grid.set(0, 3, Some(9));
        grid.set(0, 4, Some(2));
        grid.set(1, 2, Some(5));

        grid.apply_gravity();

        assert_eq!(grid.row(0), &[Some(4), Some(5)]);
        assert_eq!(grid.row(1), &[Some(9), None]);
        assert_eq!(grid.row(2), &[Some(2), None]);
        assert_eq!(grid.row(3), &[None, None]);
        assert_eq!(column_values(&grid, 0), vec![4, 9, 2]);
    }

    #[test]
    fn test_gravity_leaves_out_zone_alone() {
        let mut grid = Grid::new(1, 4, 1);
        grid.set(0, 3, Some(8));
        grid.set(0, 1, Some(3));

        grid.apply_gravity();

        assert_eq!(grid.cell(0, 0), Some(3));
        assert_eq!(grid.cell(0, 1), None);
        assert_eq!(grid.cell(0, 3), Some(8));
    }

    #[test]
    fn test_rise_shifts_everything_and_fills_bottom() {
        let mut grid = Grid::new(2, 3, 1);
        grid.set(0, 0, Some(1));
        grid.set(1, 1, Some(2));
        grid.set(0, 2, Some(3));

        let mut next = 10;
        grid.rise_with(|| {
            next += 1;
            next
        });

        assert_eq!(grid.row(0), &[Some(11), Some(12)]);
        assert_eq!(grid.row(1), &[Some(1), None]);
        assert_eq!(grid.row(2), &[None, Some(2)]);
        assert!(grid.is_out_zone_occupied());
    }

    #[test]
    fn test_fill_bottom_is_clamped_to_play_zone() {
        let mut grid = Grid::new(2, 3, 1);
        grid.fill_bottom_with(10, || 5);
        assert_eq!(grid.occupied_count(), 4);
        assert!(!grid.is_out_zone_occupied());
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let row: &[Cell] = &[Some(1), None];
        assert!(Grid::from_rows(2, 3, 1, &[row, row]).is_some());
        assert!(Grid::from_rows(3, 3, 1, &[row]).is_none());
        assert!(Grid::from_rows(2, 1, 0, &[row, row]).is_none());
    }
}
