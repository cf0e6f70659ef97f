/*
 * Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Run Dijkstra's algorithm on the classic 6-node demo instance.
//!
//! The instance uses the zero-means-no-edge encoding, translated to
//! `None` when the matrix is built, so the weights seen by the algorithm
//! are strictly positive.

use rustop::opts;

use densepaths::shortestpath::dijkstra;
use densepaths::{string, SquareMatrix};

fn main() {
    let (args, _) = opts! {
        synopsis "Compute single-source shortest paths on the demo instance.";
        opt source:usize=0, desc:"Source node (0..6).";
    }
    .parse_or_exit();

    let g = SquareMatrix::from_weights(
        vec![
            vec![0, 10, 20, 0, 0, 0],
            vec![10, 0, 0, 50, 10, 0],
            vec![20, 0, 0, 20, 33, 0],
            vec![0, 50, 20, 0, 20, 2],
            vec![0, 10, 33, 20, 0, 1],
            vec![0, 0, 0, 2, 1, 0],
        ],
        0,
    );

    let dist = dijkstra::single_source(&g, args.source);
    print!("{}", string::render_distances(&dist));

    assert_eq!(dist[args.source], Some(0));
}
