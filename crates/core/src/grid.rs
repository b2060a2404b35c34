//! Grid module - owns the cell buffer
//!
//! A `width x height` field of cells stored in a flat vector, row-major
//! (`y * width + x`). Coordinates are signed so that positions just off the
//! edge (neighbour lookups, stray pointer events) are representable and can be
//! rejected instead of wrapping.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::{Cell, LifeError, MAX_GRID_DIM};

/// Relative offsets of the Moore neighbourhood.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// The simulation field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Build a grid from a flat row-major buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, LifeError> {
        check_dimensions(width, height)?;
        if cells.len() != width * height {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Assemble a grid whose extents were already validated.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from text rows, `#`/`O`/`1` alive and anything else dead.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return Err(LifeError::InvalidDimensions { width, height });
            }
            cells.extend(row.chars().map(|c| Cell::from(matches!(c, '#' | 'O' | '1'))));
        }
        Self::from_cells(width, height, cells)
    }

    /// Render as text rows (`#` alive, `.` dead).
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|c| if c.is_alive() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

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

    fn out_of_bounds(&self, x: i32, y: i32) -> LifeError {
        LifeError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Cell, LifeError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    pub fn set(&mut self, x: i32, y: i32, value: Cell) -> Result<(), LifeError> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Flip a cell and return its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Cell, LifeError> {
        let idx = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        let next = self.cells[idx].toggled();
        self.cells[idx] = next;
        Ok(next)
    }

    /// Replace the buffer with an all-dead grid of the new extents.
    ///
    /// Previous contents are discarded; on error the grid is left as it was.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), LifeError> {
        *self = Grid::new(width, height)?;
        Ok(())
    }

    /// Set every cell independently alive with probability 1/2.
    pub fn randomize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            *cell = Cell::from(rng.next_bool());
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// In-bounds neighbours of `(x, y)`. Corners have 3, edges 5, interior 8.
    pub fn neighbors(&self, x: i32, y: i32) -> ArrayVec<(i32, i32), 8> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| self.contains(nx, ny))
            .collect()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|c| c.is_alive())
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), LifeError> {
    if width == 0 || height == 0 || width > MAX_GRID_DIM || height > MAX_GRID_DIM {
        return Err(LifeError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_index_is_row_major() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(3, 0), Some(3));
        assert_eq!(grid.index(0, 1), Some(4));
        assert_eq!(grid.index(3, 2), Some(11));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 3), None);
    }

    #[test]
    fn test_out_of_bounds_reports_extents() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(
            grid.get(4, 1),
            Err(LifeError::OutOfBounds {
                x: 4,
                y: 1,
                width: 4,
                height: 3
            })
        );
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let grid = Grid::new(5, 5).unwrap();
        assert_eq!(grid.neighbors(0, 0).len(), 3);
        assert_eq!(grid.neighbors(4, 4).len(), 3);
        assert_eq!(grid.neighbors(2, 0).len(), 5);
        assert_eq!(grid.neighbors(0, 2).len(), 5);
        assert_eq!(grid.neighbors(2, 2).len(), 8);
    }

    #[test]
    fn test_one_wide_grid_neighbors() {
        let grid = Grid::new(1, 3).unwrap();
        assert_eq!(grid.neighbors(0, 0).as_slice(), &[(0, 1)]);
        assert_eq!(grid.neighbors(0, 1).len(), 2);
    }

    #[test]
    fn test_randomize_is_seed_deterministic() {
        let mut a = Grid::new(16, 16).unwrap();
        let mut b = Grid::new(16, 16).unwrap();
        a.randomize(&mut SimpleRng::new(7));
        b.randomize(&mut SimpleRng::new(7));
        assert_eq!(a, b);

        // Both states should show up on a grid this size.
        assert!(a.population() > 0);
        assert!(a.population() < 256);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = [".#.", "..#", "###"];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.to_rows(), vec![".#.", "..#", "###"]);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(&["##", "#"]).is_err());
        assert!(Grid::from_rows(&[]).is_err());
    }
}
