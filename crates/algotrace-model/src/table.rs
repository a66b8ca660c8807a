//! Row-major 2-D tables.

use crate::distance::Distance;
use crate::error::{Error, Result};

/// All-pairs distance matrix (Floyd–Warshall input and state).
pub type DistanceMatrix = Table<Distance>;

/// Knapsack table: `dp[i][w]` for item prefix `i` and capacity `w`.
pub type DpTable = Table<i64>;

/// A fixed-shape 2-D table stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// A `rows x cols` table with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Table<T> {
    /// Wrap row-major data. The length must equal `rows * cols`.
    pub fn from_row_major(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(Error::TableShape {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(Error::TableShape {
                    rows: row_count,
                    cols,
                    len: cells.len() + row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the table is `n x n`.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell at `(row, col)`, if in bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Overwrite the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of bounds", row, col);
        self.cells[row * self.cols + col] = value;
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> std::ops::Index<(usize, usize)> for Table<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "cell ({}, {}) out of bounds", row, col);
        &self.cells[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_table_shape() {
        let table = Table::filled(2, 3, 0i64);
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 3);
        assert_eq!(table.cells().len(), 6);
        assert!(!table.is_square());
    }

    #[test]
    fn set_and_index() {
        let mut table = Table::filled(3, 3, 0i64);
        table.set(1, 2, 7);

        assert_eq!(table[(1, 2)], 7);
        assert_eq!(table.get(1, 2), Some(&7));
        assert_eq!(table.get(3, 0), None);
        assert_eq!(table.row(1), &[0, 0, 7]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = Table::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, Error::TableShape { rows: 2, cols: 2, .. }));
    }

    #[test]
    fn from_row_major_checks_length() {
        assert!(Table::from_row_major(2, 2, vec![1, 2, 3, 4]).is_ok());
        assert!(Table::from_row_major(2, 2, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn iter_rows_in_order() {
        let table = Table::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let rows: Vec<_> = table.iter_rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    #[should_panic]
    fn set_out_of_bounds_panics() {
        let mut table = Table::filled(1, 1, 0i64);
        table.set(0, 1, 5);
    }
}
