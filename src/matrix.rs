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

//! A dense square matrix of optional edge weights.
//!
//! [`SquareMatrix`] is the graph representation used by all algorithms of
//! this crate. Entry `(i, j)` is the weight of the edge from node `i` to
//! node `j` or `None` if there is no such edge. Representing missing edges
//! by `None` instead of a large sentinel weight has two consequences:
//!
//! 1. relaxation steps never add two "infinity" values, so there is no
//!    sentinel overflow to guard against,
//! 2. an edge of weight zero is a perfectly valid edge and distinct from
//!    "no edge".
//!
//! Adjacency matrices using an in-band sentinel (a large constant, or zero
//! for "no edge" as in some textbook code) can be converted at the boundary
//! with [`SquareMatrix::from_weights`].

use std::ops::{Index, IndexMut};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A dense n×n matrix of optional weights in row-major order.
///
/// # Example
///
/// ```
/// use densepaths::SquareMatrix;
///
/// let mut m = SquareMatrix::with_dim(3);
/// m[(0, 1)] = Some(4);
/// m[(1, 2)] = Some(-1);
///
/// assert_eq!(m.dim(), 3);
/// assert_eq!(m[(0, 1)], Some(4));
/// assert_eq!(m[(1, 0)], None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SquareMatrix<W> {
    dim: usize,
    entries: Vec<Option<W>>,
}

impl<W> SquareMatrix<W> {
    /// Create a matrix of dimension `dim` without any edges.
    ///
    /// The method panics if `dim` is zero.
    pub fn with_dim(dim: usize) -> Self
    where
        W: Clone,
    {
        assert!(dim > 0, "matrix dimension must be positive");
        SquareMatrix {
            dim,
            entries: vec![None; dim * dim],
        }
    }

    /// Create a matrix from explicit rows of optional weights.
    ///
    /// The method panics if the rows do not form a non-empty square matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use densepaths::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(vec![
    ///     vec![Some(0), Some(7)],
    ///     vec![None, Some(0)],
    /// ]);
    /// assert_eq!(m[(1, 0)], None);
    /// ```
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Self {
        let dim = rows.len();
        assert!(dim > 0, "matrix dimension must be positive");
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            assert_eq!(row.len(), dim, "matrix must be square");
            entries.extend(row);
        }
        SquareMatrix { dim, entries }
    }

    /// Create a matrix from rows of plain weights with an in-band sentinel.
    ///
    /// Each weight equal to `no_edge` is translated to `None`. This is the
    /// boundary where legacy encodings enter the crate, e.g. a large
    /// "infinity" constant or the zero-means-no-edge convention of some
    /// adjacency matrices.
    ///
    /// The method panics if the rows do not form a non-empty square matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use densepaths::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_weights(vec![vec![0, 10], vec![10, 0]], 0);
    /// // the zero diagonal denotes *missing* edges in this encoding
    /// assert_eq!(m[(0, 0)], None);
    /// assert_eq!(m[(0, 1)], Some(10));
    /// ```
    pub fn from_weights(rows: Vec<Vec<W>>, no_edge: W) -> Self
    where
        W: PartialEq,
    {
        let dim = rows.len();
        assert!(dim > 0, "matrix dimension must be positive");
        let mut entries = Vec::with_capacity(dim * dim);
        for row in rows {
            assert_eq!(row.len(), dim, "matrix must be square");
            entries.extend(row.into_iter().map(|w| if w == no_edge { None } else { Some(w) }));
        }
        SquareMatrix { dim, entries }
    }

    /// Return the dimension (number of nodes) of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return an iterator over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<W>]> {
        self.entries.chunks(self.dim)
    }

    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(i < self.dim && j < self.dim, "node index out of range");
        i * self.dim + j
    }
}

impl<W> Index<(usize, usize)> for SquareMatrix<W> {
    type Output = Option<W>;

    fn index(&self, (i, j): (usize, usize)) -> &Option<W> {
        &self.entries[self.offset(i, j)]
    }
}

impl<W> IndexMut<(usize, usize)> for SquareMatrix<W> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Option<W> {
        let idx = self.offset(i, j);
        &mut self.entries[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::SquareMatrix;

    #[test]
    fn test_from_weights_sentinel() {
        let m = SquareMatrix::from_weights(vec![vec![0, 5, 99], vec![99, 0, 6], vec![99, 99, 0]], 99);
        assert_eq!(m.dim(), 3);
        assert_eq!(m[(0, 1)], Some(5));
        assert_eq!(m[(0, 2)], None);
        assert_eq!(m[(1, 0)], None);
        assert_eq!(m[(0, 0)], Some(0));
    }

    #[test]
    fn test_rows() {
        let m = SquareMatrix::from_rows(vec![vec![Some(1), None], vec![None, Some(2)]]);
        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows, vec![&[Some(1), None][..], &[None, Some(2)][..]]);
    }

    #[test]
    #[should_panic(expected = "matrix must be square")]
    fn test_nonsquare_panics() {
        SquareMatrix::from_rows(vec![vec![Some(1), None], vec![None]]);
    }

    #[test]
    #[should_panic(expected = "matrix dimension must be positive")]
    fn test_empty_panics() {
        SquareMatrix::<i32>::from_rows(vec![]);
    }

    #[test]
    #[should_panic(expected = "node index out of range")]
    fn test_index_out_of_range_panics() {
        let m = SquareMatrix::<i32>::with_dim(2);
        let _ = m[(0, 2)];
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::SquareMatrix;
        use serde_json;

        #[test]
        fn test_serde() {
            let m = SquareMatrix::from_weights(vec![vec![0, 3], vec![4, 0]], 0);
            let serialized = serde_json::to_string(&m).unwrap();
            let h: SquareMatrix<i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(m, h);
        }
    }
}
