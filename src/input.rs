//! Reading exact-cover instances from text.
//!
//! The format is line based: the first non-blank line holds the number of
//! columns, every following non-blank line is one row written as
//! space-separated `0`/`1` values.
//!
//! ```text
//! 3
//! 1 1 0
//! 0 1 1
//! 1 0 1
//! 1 1 1
//! ```
//!
//! Rows are numbered from 0 in the order they appear; blank lines are
//! skipped and do not take a row number.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use bitvec::prelude::*;

use crate::cs::combinatorial::dancing_links::DancingLinks;
use crate::error::{Error, MalformedInput, Result};

/// A dense exact-cover instance: `rows[r][c]` is true when row `r` covers
/// column `c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    column_count: usize,
    rows: Vec<Vec<bool>>,
}

impl Instance {
    /// Creates an instance, checking every row against `column_count`.
    pub fn new(column_count: usize, rows: Vec<Vec<bool>>) -> Result<Self> {
        for (row, bits) in rows.iter().enumerate() {
            if bits.len() != column_count {
                return Err(MalformedInput::RowWidthMismatch {
                    row,
                    expected: column_count,
                    found: bits.len(),
                }
                .into());
            }
        }
        Ok(Instance { column_count, rows })
    }

    /// Creates an instance from sparse rows, each listing the columns it covers.
    pub fn from_sparse<R: AsRef<[usize]>>(column_count: usize, rows: &[R]) -> Result<Self> {
        let mut dense = Vec::with_capacity(rows.len());
        for (row, cols) in rows.iter().enumerate() {
            let mut bits = Vec::new();
            bits.try_reserve_exact(column_count)
                .map_err(|_| MalformedInput::TooManyColumns { column_count })?;
            bits.resize(column_count, false);
            for &column in cols.as_ref() {
                match bits.get_mut(column) {
                    Some(bit) => *bit = true,
                    None => {
                        return Err(MalformedInput::ColumnOutOfRange {
                            row,
                            column,
                            column_count,
                        }
                        .into())
                    }
                }
            }
            dense.push(bits);
        }
        Ok(Instance {
            column_count,
            rows: dense,
        })
    }

    /// Parses the textual format described in the module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| Error::parse(1, "missing column count"))?;
        let column_count: usize = header.parse().map_err(|_| {
            Error::parse(
                header_line,
                format!("expected a column count, found `{}`", header),
            )
        })?;

        let mut rows = Vec::new();
        for (line_no, line) in lines {
            let bits = line
                .split_whitespace()
                .map(|token| match token {
                    "0" => Ok(false),
                    "1" => Ok(true),
                    other => Err(Error::parse(
                        line_no,
                        format!("expected 0 or 1, found `{}`", other),
                    )),
                })
                .collect::<Result<Vec<bool>>>()?;
            if bits.len() != column_count {
                return Err(MalformedInput::RowWidthMismatch {
                    row: rows.len(),
                    expected: column_count,
                    found: bits.len(),
                }
                .into());
            }
            rows.push(bits);
        }
        log::debug!(
            "parsed instance with {} columns and {} rows",
            column_count,
            rows.len()
        );
        Ok(Instance { column_count, rows })
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// The dense rows, each exactly `column_count()` wide.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Reads and parses an instance from `reader`.
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let mut text = String::new();
        BufReader::new(reader).read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Reads and parses the instance stored at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading instance from {}", path.display());
        Self::read(File::open(path)?)
    }

    /// Builds the toroidal matrix for this instance.
    pub fn build(&self) -> Result<DancingLinks> {
        DancingLinks::from_matrix(self.column_count, &self.rows)
    }

    /// Checks that the rows in `solution` cover every column exactly once.
    /// Unknown row ids make the answer `false`.
    pub fn is_exact_cover(&self, solution: &[usize]) -> bool {
        let mut covered: BitVec = BitVec::new();
        for &r in solution {
            let Some(bits) = self.rows.get(r) else {
                return false;
            };
            if bits.len() > self.column_count {
                return false;
            }
            if covered.len() < bits.len() {
                covered.resize(bits.len(), false);
            }
            for (c, &set) in bits.iter().enumerate() {
                if set {
                    if covered[c] {
                        return false;
                    }
                    covered.set(c, true);
                }
            }
        }
        covered.count_ones() == self.column_count
    }
}

impl FromStr for Instance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
