//! The [`SquareMatrix`] type: a growable dense `capacity × capacity` grid.
//!
//! Storage is a single row-major `Vec`. Only the top-left `live × live`
//! block is meaningful; the caller (a graph) tracks `live` and passes it to
//! the operations that need it. Cells outside the live block always hold
//! the fill value.

/// A dense square matrix addressed by `(row, col)` vertex indices.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareMatrix<V> {
    cells: Vec<V>,
    capacity: usize,
    fill: V,
}

impl<V: Copy> SquareMatrix<V> {
    /// Create a `capacity × capacity` matrix with every cell set to `fill`.
    pub fn new(capacity: usize, fill: V) -> Self {
        Self {
            cells: vec![fill; capacity * capacity],
            capacity,
            fill,
        }
    }

    /// Number of rows (and columns) allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The value an unset cell holds.
    #[inline]
    pub fn fill(&self) -> V {
        self.fill
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.capacity && col < self.capacity {
            Some(row * self.capacity + col)
        } else {
            None
        }
    }

    /// Read the cell at `(row, col)`. Returns the fill value if outside the
    /// allocation.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> V {
        self.index(row, col)
            .map(|i| self.cells[i])
            .unwrap_or(self.fill)
    }

    /// Set the cell at `(row, col)`. No-op if outside the allocation.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: V) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = value;
        }
    }

    /// Set both `(a, b)` and `(b, a)`.
    #[inline]
    pub fn set_symmetric(&mut self, a: usize, b: usize, value: V) {
        self.set(a, b, value);
        self.set(b, a, value);
    }

    /// Iterate over row `row` restricted to the first `live` columns.
    pub fn row(&self, row: usize, live: usize) -> impl Iterator<Item = V> + '_ {
        (0..live.min(self.capacity)).map(move |col| self.at(row, col))
    }

    /// Reset row and column `index` to the fill value.
    pub fn clear_index(&mut self, index: usize) {
        let fill = self.fill;
        for k in 0..self.capacity {
            self.set(index, k, fill);
            self.set(k, index, fill);
        }
    }

    /// Reallocate to `new_capacity`, copying the top-left `live × live`
    /// block. Shrinking below `live` is ignored.
    pub fn grow(&mut self, new_capacity: usize, live: usize) {
        if new_capacity <= self.capacity || new_capacity < live {
            return;
        }
        let mut cells = vec![self.fill; new_capacity * new_capacity];
        for row in 0..live {
            let src = row * self.capacity;
            let dst = row * new_capacity;
            cells[dst..dst + live].copy_from_slice(&self.cells[src..src + live]);
        }
        log::trace!(
            "matrix grew from {} to {} ({} live)",
            self.capacity,
            new_capacity,
            live
        );
        self.cells = cells;
        self.capacity = new_capacity;
    }

    /// Remove row and column `index` from the live block of size `live`,
    /// shifting every higher row up and every higher column left by one.
    /// The vacated last row and column are reset to the fill value.
    pub fn remove_index(&mut self, index: usize, live: usize) {
        let live = live.min(self.capacity);
        if index >= live {
            return;
        }
        // Targets are visited in increasing flat order and each source sits
        // at or after its target, so the shift can run in place.
        for row in 0..live - 1 {
            let src_row = if row < index { row } else { row + 1 };
            for col in 0..live - 1 {
                let src_col = if col < index { col } else { col + 1 };
                let v = self.at(src_row, src_col);
                self.set(row, col, v);
            }
        }
        self.clear_index(live - 1);
    }
}
