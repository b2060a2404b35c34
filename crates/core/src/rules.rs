//! Rules module - the B3/S23 transition
//!
//! Neighbourhoods are bounded: cells outside the grid are simply absent, so
//! corner cells see at most 3 neighbours and edge cells 5. There is no
//! wraparound.

use crate::grid::Grid;
use crate::types::Cell;

/// Count live cells among the in-bounds neighbours of `(x, y)`.
pub fn live_neighbors(grid: &Grid, x: i32, y: i32) -> u8 {
    grid.neighbors(x, y)
        .iter()
        .filter(|&&(nx, ny)| matches!(grid.get(nx, ny), Ok(Cell::Alive)))
        .count() as u8
}

/// Next state of a cell given its live neighbour count.
#[inline]
pub fn next_cell(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

/// Compute the next generation. The input grid is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let cells = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .zip(grid.cells())
        .map(|((x, y), &cell)| next_cell(cell, live_neighbors(grid, x, y)))
        .collect();

    Grid::from_parts(grid.width(), grid.height(), cells)
}
