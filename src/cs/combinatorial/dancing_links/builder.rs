//! Construction of the torus from row data.

use std::collections::HashSet;

use super::node::{DancingLinks, Node, NodeId};
use crate::error::{MalformedInput, Result};

impl DancingLinks {
    /// Builds the matrix from `(row id, columns)` pairs.
    ///
    /// Every column id must lie in `0..column_count` and every row id must be
    /// distinct, otherwise [`MalformedInput`] is returned. Columns inside a
    /// row may come in any order and are deduplicated; the row's horizontal
    /// ring follows ascending column order. Rows without columns produce no
    /// nodes and can never be part of a solution.
    ///
    /// # Example
    /// ```
    /// use dlx::DancingLinks;
    ///
    /// let rows = vec![(0, vec![0, 1]), (1, vec![1, 2]), (2, vec![0, 2]), (3, vec![0, 1, 2])];
    /// let mut dlx = DancingLinks::build(3, rows).unwrap();
    /// assert_eq!(dlx.solve_all(), vec![vec![3]]);
    /// ```
    pub fn build<R, C>(column_count: usize, rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = (usize, C)>,
        C: IntoIterator<Item = usize>,
    {
        let mut dlx = DancingLinks::with_headers(column_count)?;
        let mut columns = Vec::new();
        let mut seen = HashSet::new();
        for (row, cols) in rows {
            if !seen.insert(row) {
                return Err(MalformedInput::DuplicateRow { row }.into());
            }
            columns.clear();
            columns.extend(cols);
            if let Some(&column) = columns.iter().find(|&&c| c >= column_count) {
                return Err(MalformedInput::ColumnOutOfRange {
                    row,
                    column,
                    column_count,
                }
                .into());
            }
            columns.sort_unstable();
            columns.dedup();
            dlx.append_row(row, &columns);
        }
        log::debug!(
            "built toroidal matrix: {} columns, {} rows, {} data nodes",
            dlx.num_columns(),
            dlx.num_rows,
            dlx.num_data_nodes()
        );
        Ok(dlx)
    }

    /// Builds the matrix from a dense boolean table: `matrix[r][c] = true`
    /// means row `r` covers column `c`.
    ///
    /// Every row must have exactly `column_count` entries.
    pub fn from_matrix<B: AsRef<[bool]>>(column_count: usize, matrix: &[B]) -> Result<Self> {
        for (row, bits) in matrix.iter().enumerate() {
            let found = bits.as_ref().len();
            if found != column_count {
                return Err(MalformedInput::RowWidthMismatch {
                    row,
                    expected: column_count,
                    found,
                }
                .into());
            }
        }
        Self::build(
            column_count,
            matrix.iter().enumerate().map(|(row, bits)| {
                let cols = bits.as_ref().iter().enumerate().filter(|&(_, &b)| b).map(|(c, _)| c);
                (row, cols)
            }),
        )
    }

    /// Appends one row whose (sorted, in-range) columns are `columns`.
    fn append_row(&mut self, row: usize, columns: &[usize]) {
        self.num_rows += 1;
        let mut first_in_row: Option<NodeId> = None;
        for &c in columns {
            let header = NodeId(c + 1);
            let node = NodeId(self.nodes.len());
            self.nodes.push(Node::self_loop(node, header, Some(row)));

            self.push_above(header, node);
            self.cols[header.0].size += 1;

            match first_in_row {
                Some(first) => self.push_left_of(first, node),
                None => first_in_row = Some(node),
            }
        }
    }
}

/// Builds a [`DancingLinks`] matrix from `(row id, columns)` pairs.
///
/// Fails with [`MalformedInput`] if any column id is outside `0..column_count`
/// or a row id is repeated.
pub fn build<R, C>(column_count: usize, rows: R) -> Result<DancingLinks>
where
    R: IntoIterator<Item = (usize, C)>,
    C: IntoIterator<Item = usize>,
{
    DancingLinks::build(column_count, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::combinatorial::dancing_links::Direction;
    use crate::error::Error;

    fn column_rows(dlx: &DancingLinks, column: usize) -> Vec<usize> {
        let header = dlx.column_header(column).unwrap();
        dlx.ring(header, Direction::Down)
            .map(|n| dlx.row_of(n).unwrap())
            .collect()
    }

    #[test]
    fn test_build_links_rows_and_columns() {
        let rows = vec![(0, vec![0, 2]), (1, vec![1]), (2, vec![2, 0, 1])];
        let dlx = DancingLinks::build(3, rows).unwrap();
        assert!(dlx.is_consistent());
        assert_eq!(dlx.num_rows(), 3);
        assert_eq!(dlx.num_data_nodes(), 6);

        assert_eq!(column_rows(&dlx, 0), vec![0, 2]);
        assert_eq!(column_rows(&dlx, 1), vec![1, 2]);
        assert_eq!(column_rows(&dlx, 2), vec![0, 2]);
        let sizes: Vec<_> = dlx.live_columns().map(|h| dlx.size(h)).collect();
        assert_eq!(sizes, vec![2, 2, 2]);

        // Row 2 was given out of order; its ring follows column order.
        let last = dlx.column_header(0).map(|h| dlx.up(h)).unwrap();
        let mut cols = vec![dlx.column_of(last).unwrap()];
        cols.extend(dlx.ring(last, Direction::Right).map(|n| dlx.column_of(n).unwrap()));
        assert_eq!(cols, vec![0, 1, 2]);
    }

    #[test]
    fn test_data_nodes_point_at_their_header() {
        let dlx = DancingLinks::build(2, vec![(7, vec![1])]).unwrap();
        let header = dlx.column_header(1).unwrap();
        let node = dlx.down(header);
        assert_eq!(dlx.header(node), header);
        assert_eq!(dlx.row_of(node), Some(7));
        assert_eq!(dlx.left(node), node);
        assert_eq!(dlx.right(node), node);
    }

    #[test]
    fn test_duplicate_columns_are_merged() {
        let dlx = DancingLinks::build(2, vec![(0, vec![1, 1, 0])]).unwrap();
        assert_eq!(dlx.num_data_nodes(), 2);
        assert!(dlx.is_consistent());
    }

    #[test]
    fn test_out_of_range_column() {
        let err = DancingLinks::build(3, vec![(0, vec![0]), (1, vec![1, 3])]).unwrap_err();
        assert_eq!(
            err.as_malformed(),
            Some(&MalformedInput::ColumnOutOfRange {
                row: 1,
                column: 3,
                column_count: 3
            })
        );
    }

    #[test]
    fn test_duplicate_row_ids_are_rejected() {
        let err = DancingLinks::build(2, vec![(0, vec![0]), (1, vec![]), (0, vec![1])]).unwrap_err();
        assert_eq!(err.as_malformed(), Some(&MalformedInput::DuplicateRow { row: 0 }));

        // Ids only need to be distinct, not dense or ordered.
        let mut dlx = DancingLinks::build(2, vec![(9, vec![1]), (4, vec![0])]).unwrap();
        assert_eq!(dlx.solve_all(), vec![vec![4, 9]]);
    }

    #[test]
    fn test_huge_column_count_is_an_error() {
        let err = DancingLinks::from_matrix::<Vec<bool>>(usize::MAX, &[]).unwrap_err();
        assert_eq!(
            err.as_malformed(),
            Some(&MalformedInput::TooManyColumns {
                column_count: usize::MAX
            })
        );
    }

    #[test]
    fn test_row_width_mismatch() {
        let matrix = vec![vec![true, false], vec![true]];
        match DancingLinks::from_matrix(2, &matrix) {
            Err(Error::MalformedInput(MalformedInput::RowWidthMismatch {
                row,
                expected,
                found,
            })) => assert_eq!((row, expected, found), (1, 2, 1)),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_shapes() {
        let no_rows = DancingLinks::from_matrix::<Vec<bool>>(3, &[]).unwrap();
        assert_eq!(no_rows.live_columns().count(), 3);
        assert!(no_rows.is_consistent());

        let no_cols = DancingLinks::from_matrix(0, &[Vec::<bool>::new(), Vec::new()]).unwrap();
        assert!(no_cols.is_solved());
        assert_eq!(no_cols.num_rows(), 2);
    }

    #[test]
    fn test_empty_rows_create_no_nodes() {
        let matrix = vec![vec![false, false], vec![true, true], vec![false, false]];
        let dlx = DancingLinks::from_matrix(2, &matrix).unwrap();
        assert_eq!(dlx.num_rows(), 3);
        assert_eq!(dlx.num_data_nodes(), 2);
        assert_eq!(column_rows(&dlx, 0), vec![1]);
    }
}
