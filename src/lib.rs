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

//! Shortest-path algorithms on dense adjacency matrices.
//!
//! This crate provides the two classic textbook algorithms on a dense,
//! matrix-based graph representation:
//!
//! - [`shortestpath::floydwarshall`] computes the distances between *all*
//!   pairs of nodes,
//! - [`shortestpath::dijkstra`] computes the distances from a single source
//!   node to all other nodes (non-negative weights only).
//!
//! The graph is given as a [`SquareMatrix`] where entry `(i, j)` is the
//! weight of the edge from node `i` to node `j`, or `None` if there is no
//! such edge. Unreachable pairs remain `None` in the result, so no "large
//! constant" infinity value is needed and sums of weights cannot overflow
//! on sentinel values.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod matrix;
pub use self::matrix::SquareMatrix;

// # Algorithms

pub mod shortestpath;

// # Text input/output

pub mod string;
