//! Cell-level diff between two frames.

use crate::buffer::CellBuffer;

/// Cells that differ between the previously presented frame and the next.
#[derive(Clone, Debug, Default)]
pub struct BufferDiff {
    /// Changed positions as `(row, col)`, in row-major order.
    pub changed_cells: Vec<(u32, u32)>,
}

impl BufferDiff {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            changed_cells: Vec::with_capacity(capacity),
        }
    }

    /// Compute the diff into this instance, reusing its allocation.
    ///
    /// Buffers of different sizes mark every cell of `new` as changed.
    pub fn compute_into(&mut self, old: &CellBuffer, new: &CellBuffer) {
        self.changed_cells.clear();
        let same_size = old.size() == new.size();
        for row in 0..u32::from(new.rows()) {
            for col in 0..u32::from(new.cols()) {
                if !same_size || old.get(row, col) != new.get(row, col) {
                    self.changed_cells.push((row, col));
                }
            }
        }
    }

    #[must_use]
    pub fn compute(old: &CellBuffer, new: &CellBuffer) -> Self {
        let mut diff = Self::default();
        diff.compute_into(old, new);
        diff
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed_cells.is_empty()
    }

    /// Redrawing everything is cheaper once more than half the cells changed.
    #[must_use]
    pub fn should_full_redraw(&self, total_cells: usize) -> bool {
        self.changed_cells.len() > total_cells / 2
    }
}
