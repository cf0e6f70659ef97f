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

//! Run the Floyd-Warshall algorithm on the classic 5-node demo instance.
//!
//! The instance encodes missing edges with a large constant, translated
//! to `None` when the matrix is built.

use densepaths::shortestpath::floydwarshall;
use densepaths::{string, SquareMatrix};

const MAX: i32 = 99999;

fn main() {
    let g = SquareMatrix::from_weights(
        vec![
            vec![0, 5, MAX, MAX, MAX],
            vec![MAX, 0, 6, MAX, -3],
            vec![MAX, MAX, 0, MAX, 2],
            vec![4, MAX, 8, 0, MAX],
            vec![4, MAX, MAX, -2, 0],
        ],
        MAX,
    );

    let dist = floydwarshall::all_pairs(&g);
    print!("{}", string::render_all_pairs(&dist));

    let n = dist.dim();
    assert!((0..n).all(|u| dist[(u, u)] == Some(0)));
    assert!((0..n).all(|u| {
        (0..n).all(|v| match (dist[(u, v)], g[(u, v)]) {
            (Some(d), Some(w)) => d <= w,
            (None, w) => w.is_none(),
            _ => true,
        })
    }));
}
