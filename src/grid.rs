//! Board geometry: cell size, board dimensions, and the wrap-around
//! arithmetic everything else builds on.
//!
//! Positions are measured in pixels but always land on cell boundaries,
//! so the board is effectively a torus of `GRID_WIDTH x GRID_HEIGHT`
//! cells.

/// Side length of one grid cell, in pixels.
pub const CELL_SIZE: i32 = 20;

/// Board width in cells.
pub const GRID_WIDTH: i32 = 32;
/// Board height in cells.
pub const GRID_HEIGHT: i32 = 24;

/// Board width in pixels.
pub const BOARD_WIDTH: i32 = GRID_WIDTH * CELL_SIZE;
/// Board height in pixels.
pub const BOARD_HEIGHT: i32 = GRID_HEIGHT * CELL_SIZE;

/// Wraps a pixel coordinate into `[0, bound)`. Inputs are at most one
/// cell outside the board, but rem_euclid keeps this total either way.
pub fn wrap(coord: i32, bound: i32) -> i32 {
    coord.rem_euclid(bound)
}
