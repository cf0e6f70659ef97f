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

//! Dijkstra's shortest path algorithm on a dense adjacency matrix.
//!
//! Computes the shortest path from a source node $s \in V$ to all other
//! nodes. Each edge is assigned a non-negative weight $w \colon E \to
//! \mathbb{R}_+$.
//!
//! This is the classic O(n²) variant without a priority queue: in each
//! round the unvisited node with minimum tentative distance is found by a
//! linear scan, which is the appropriate choice for the dense matrix
//! representation (the scan is no more expensive than the following
//! relaxation row pass).

use crate::matrix::SquareMatrix;
use crate::num::traits::NumAssign;

/// Compute the shortest distance from `src` to every node of a dense
/// adjacency matrix with non-negative weights.
///
/// Entry `(i, j)` of the matrix is the weight of the edge from node `i`
/// to node `j` or `None` if there is no such edge. A weight of zero is a
/// valid edge weight.
///
/// Returns one entry per node: the length of a shortest path from `src`
/// to that node, or `None` if the node is unreachable. The distance to
/// `src` itself is zero.
///
/// Among several unvisited nodes with equal minimum distance the one
/// with the *highest* index is visited first (the scan uses a non-strict
/// comparison). The returned distances do not depend on this order.
///
/// The method panics if `src` is not a valid node index. The result is
/// unspecified if the matrix contains negative weights.
///
/// # Example
///
/// ```
/// use densepaths::SquareMatrix;
/// use densepaths::shortestpath::dijkstra;
///
/// let mut g = SquareMatrix::with_dim(5);
/// g[(0, 1)] = Some(10);
/// g[(0, 2)] = Some(3);
/// g[(2, 1)] = Some(4);
/// g[(1, 3)] = Some(2);
/// g[(2, 3)] = Some(8);
///
/// let dist = dijkstra::single_source(&g, 0);
/// assert_eq!(dist, vec![Some(0), Some(7), Some(3), Some(9), None]);
/// ```
pub fn single_source<W>(g: &SquareMatrix<W>, src: usize) -> Vec<Option<W>>
where
    W: NumAssign + Ord + Copy,
{
    let n = g.dim();
    assert!(src < n, "source node out of range");

    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[src] = Some(W::zero());

    for _ in 0..n {
        // find the unvisited node closest to the source
        let mut nearest = None;
        for (v, &d) in dist.iter().enumerate() {
            if visited[v] {
                continue;
            }
            if let Some(d) = d {
                if nearest.map_or(true, |(_, dmin)| d <= dmin) {
                    nearest = Some((v, d));
                }
            }
        }

        let (u, dist_u) = match nearest {
            Some(x) => x,
            // all remaining nodes are unreachable
            None => break,
        };
        visited[u] = true;

        for v in 0..n {
            if visited[v] {
                continue;
            }
            if let Some(w) = g[(u, v)] {
                let d = dist_u + w;
                if dist[v].map_or(true, |dv| d < dv) {
                    dist[v] = Some(d);
                }
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::single_source;
    use crate::matrix::SquareMatrix;

    #[test]
    fn test_single_node() {
        let g = SquareMatrix::<u32>::with_dim(1);
        assert_eq!(single_source(&g, 0), vec![Some(0)]);
    }

    #[test]
    fn test_source_distance_is_zero() {
        let mut g = SquareMatrix::with_dim(3);
        g[(1, 0)] = Some(4u32);
        g[(1, 2)] = Some(4);
        assert_eq!(single_source(&g, 1)[1], Some(0));
    }

    #[test]
    fn test_zero_weight_edge_is_an_edge() {
        let mut g = SquareMatrix::with_dim(3);
        g[(0, 1)] = Some(0u32);
        g[(1, 2)] = Some(5);
        assert_eq!(single_source(&g, 0), vec![Some(0), Some(0), Some(5)]);
    }

    #[test]
    fn test_unreachable() {
        let mut g = SquareMatrix::with_dim(3);
        g[(0, 1)] = Some(1u32);
        g[(2, 0)] = Some(1);
        assert_eq!(single_source(&g, 0), vec![Some(0), Some(1), None]);
    }

    #[test]
    #[should_panic(expected = "source node out of range")]
    fn test_invalid_source_panics() {
        let g = SquareMatrix::<u32>::with_dim(2);
        single_source(&g, 2);
    }
}
