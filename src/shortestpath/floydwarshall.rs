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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.

use crate::matrix::SquareMatrix;
use crate::num::traits::NumAssign;

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a dense adjacency matrix.
///
/// Entry `(i, j)` of the input matrix is the weight of the edge from
/// node `i` to node `j` or `None` if there is no such edge. Negative
/// weights are allowed, negative cycles are not detected.
///
/// The input matrix is left untouched; the returned matrix contains the
/// length of a shortest path for each pair of nodes, `None` if the pair
/// is not connected. The diagonal of the result is zero (unless the
/// input contains a negative diagonal entry).
///
/// The algorithm runs in time O(n³) and space O(n²).
///
/// # Example
/// ```
/// use densepaths::SquareMatrix;
/// use densepaths::shortestpath::floydwarshall;
///
/// let mut g = SquareMatrix::with_dim(4);
/// g[(0, 1)] = Some(1);
/// g[(0, 2)] = Some(5);
/// g[(1, 2)] = Some(2);
/// g[(1, 3)] = Some(7);
/// g[(2, 3)] = Some(1);
///
/// let dist = floydwarshall::all_pairs(&g);
///
/// let rows: Vec<Vec<_>> = dist.rows().map(|r| r.to_vec()).collect();
/// assert_eq!(rows, vec![
///     vec![Some(0), Some(1), Some(3), Some(4)],
///     vec![None, Some(0), Some(2), Some(3)],
///     vec![None, None, Some(0), Some(1)],
///     vec![None, None, None, Some(0)],
/// ]);
/// ```
pub fn all_pairs<W>(g: &SquareMatrix<W>) -> SquareMatrix<W>
where
    W: NumAssign + Ord + Copy,
{
    let n = g.dim();
    let mut dist = g.clone();

    for u in 0..n {
        if dist[(u, u)].map_or(true, |d| d > W::zero()) {
            dist[(u, u)] = Some(W::zero());
        }
    }

    // k must be the outermost loop
    for k in 0..n {
        for u in 0..n {
            if u == k {
                continue;
            }
            if let Some(dist_uk) = dist[(u, k)] {
                for v in 0..n {
                    if v == k {
                        continue;
                    }
                    if let Some(dist_kv) = dist[(k, v)] {
                        let d = dist_uk + dist_kv;
                        if dist[(u, v)].map_or(true, |duv| duv > d) {
                            dist[(u, v)] = Some(d);
                        }
                    }
                }
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::all_pairs;
    use crate::matrix::SquareMatrix;

    #[test]
    fn test_single_node() {
        let g = SquareMatrix::<i32>::with_dim(1);
        let dist = all_pairs(&g);
        assert_eq!(dist[(0, 0)], Some(0));
    }

    #[test]
    fn test_unreachable_stays_none() {
        // two isolated nodes
        let g = SquareMatrix::<i32>::with_dim(2);
        let dist = all_pairs(&g);
        assert_eq!(dist[(0, 1)], None);
        assert_eq!(dist[(1, 0)], None);
        assert_eq!(dist[(0, 0)], Some(0));
    }

    #[test]
    fn test_direct_edge_dominated() {
        let mut g = SquareMatrix::with_dim(3);
        g[(0, 1)] = Some(10);
        g[(0, 2)] = Some(1);
        g[(2, 1)] = Some(2);
        let dist = all_pairs(&g);
        assert_eq!(dist[(0, 1)], Some(3));
    }
}
