// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Per-channel visit counters, and the running maximum that all the
//! channels share.

use planes::Cell;
use std::slice::Chunks;

/// The largest count seen in any cell of any channel so far.  One of
/// these is threaded through all three sampling passes so that the
/// channels are normalized against a single peak.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedMaximum(u32);

impl SharedMaximum {
    /// Starts at zero.
    pub fn new() -> Self {
        SharedMaximum(0)
    }

    /// Current value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Raises the maximum to `value` if it is larger.  Never lowers it.
    #[inline]
    pub fn observe(&mut self, value: u32) {
        if value > self.0 {
            self.0 = value;
        }
    }
}

/// A dense grid of counters, `height` rows by `width` columns, stored
/// row-major in one allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl Heatmap {
    /// A zero-filled grid.  A grid with no columns has no rows to
    /// iterate either.
    pub fn new(width: usize, height: usize) -> Self {
        Heatmap {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.height && cell.col < self.width);
        cell.row * self.width + cell.col
    }

    /// Adds one visit to `cell` and raises the shared maximum to match.
    /// The cell must lie inside the grid.
    #[inline]
    pub fn increment(&mut self, cell: Cell, maximum: &mut SharedMaximum) {
        let offset = self.offset(cell);
        let count = self.cells[offset].saturating_add(1);
        self.cells[offset] = count;
        maximum.observe(count);
    }

    /// The count in `cell`.
    pub fn read(&self, cell: Cell) -> u32 {
        self.cells[self.offset(cell)]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> Chunks<'_, u32> {
        self.cells.chunks(self.width.max(1))
    }

    /// The largest count in this grid alone.
    pub fn peak(&self) -> u32 {
        self.cells.iter().cloned().max().unwrap_or(0)
    }
}
