// Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A small module to read and render distance matrices as plain text.
//!
//! Missing edges and unreachable nodes are written as the literal token
//! `MAX` (the reader additionally accepts `-`).
//!
//! *Warning*: the main purpose of this module is its use in the demo
//! programs, documentation comments and tests. It is not meant for
//! production use.

use crate::matrix::SquareMatrix;

use std::error;
use std::fmt::Display;
use std::str::FromStr;

/// The token rendered for a missing edge or an unreachable node.
pub const NO_EDGE: &str = "MAX";

/// Error reading a matrix from text.
#[derive(Debug)]
pub enum Error {
    /// Parsing a weight token failed.
    InvalidWeight(Box<dyn error::Error>),
    /// The rows do not form a square matrix.
    NotSquare { rows: usize, columns: usize },
    /// The text contains no rows at all.
    Empty,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Error::InvalidWeight(e) => write!(fmt, "Invalid weight: {}", e),
            Error::NotSquare { rows, columns } => {
                write!(fmt, "Matrix is not square: {} rows, but a row with {} columns", rows, columns)
            }
            Error::Empty => write!(fmt, "Matrix is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Read a square matrix from whitespace-separated text.
///
/// Each non-empty line is one row; the tokens `MAX` and `-` denote a
/// missing edge, every other token is parsed as a weight.
///
/// # Example
///
/// ```
/// use densepaths::string::from_text;
/// use densepaths::SquareMatrix;
///
/// let m: SquareMatrix<i32> = from_text(r"
///     0   5 MAX
///     MAX 0   6
///     2   - 0
/// ").unwrap();
///
/// assert_eq!(m[(0, 1)], Some(5));
/// assert_eq!(m[(0, 2)], None);
/// assert_eq!(m[(2, 1)], None);
/// ```
pub fn from_text<W>(text: &str) -> Result<SquareMatrix<W>, Error>
where
    W: FromStr,
    W::Err: error::Error + 'static,
{
    let mut rows = vec![];
    for line in text.lines() {
        let mut row = vec![];
        for token in line.split_whitespace() {
            if token == NO_EDGE || token == "-" {
                row.push(None);
            } else {
                row.push(Some(token.parse().map_err(|e: W::Err| Error::InvalidWeight(e.into()))?));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(Error::Empty);
    }
    let dim = rows.len();
    if let Some(row) = rows.iter().find(|row| row.len() != dim) {
        return Err(Error::NotSquare {
            rows: dim,
            columns: row.len(),
        });
    }

    Ok(SquareMatrix::from_rows(rows))
}

/// Render an all-pairs distance matrix in the classic demo format.
///
/// The output starts with the header line `Floyd Algorithm result:`
/// followed by one line per row with space-separated cells; unreachable
/// pairs are rendered as [`NO_EDGE`].
pub fn render_all_pairs<W>(dist: &SquareMatrix<W>) -> String
where
    W: Display,
{
    let mut out = String::from("Floyd Algorithm result:\n");
    for row in dist.rows() {
        let cells: Vec<String> = row.iter().map(cell).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Render a single-source distance array in the classic demo format.
///
/// The output starts with the header line `Vertex\tDistance from Source`
/// followed by one `<node>\t<distance>` line per node; unreachable nodes
/// are rendered as [`NO_EDGE`].
pub fn render_distances<W>(dist: &[Option<W>]) -> String
where
    W: Display,
{
    let mut out = String::from("Vertex\tDistance from Source\n");
    for (v, d) in dist.iter().enumerate() {
        out.push_str(&format!("{}\t{}\n", v, cell(d)));
    }
    out
}

fn cell<W>(d: &Option<W>) -> String
where
    W: Display,
{
    match d {
        Some(d) => d.to_string(),
        None => NO_EDGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{from_text, render_all_pairs, render_distances, Error};
    use crate::matrix::SquareMatrix;

    #[test]
    fn test_from_text_not_square() {
        match from_text::<i32>("1 2\n3") {
            Err(Error::NotSquare { rows: 2, columns: 1 }) => (),
            r => panic!("unexpected result: {:?}", r.map(|m| m.dim())),
        }
    }

    #[test]
    fn test_from_text_empty() {
        assert!(matches!(from_text::<i32>("  \n "), Err(Error::Empty)));
    }

    #[test]
    fn test_from_text_bad_token() {
        assert!(matches!(from_text::<i32>("0 x\n1 0"), Err(Error::InvalidWeight(_))));
    }

    #[test]
    fn test_render_all_pairs() {
        let m = SquareMatrix::from_rows(vec![vec![Some(0), Some(7)], vec![None, Some(0)]]);
        assert_eq!(render_all_pairs(&m), "Floyd Algorithm result:\n0 7\nMAX 0\n");
    }

    #[test]
    fn test_render_distances() {
        let dist = vec![Some(0), Some(4), None];
        assert_eq!(
            render_distances(&dist),
            "Vertex\tDistance from Source\n0\t0\n1\t4\n2\tMAX\n"
        );
    }
}
