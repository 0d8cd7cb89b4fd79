// Copyright (c) 2015-2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Some common graph classes.
//!
//! All generators label the vertices `"0"`, `"1"`, ... in creation order,
//! leave them uncolored and give every edge the same weight. The
//! capacity of the returned graph is at least
//! [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
//!
//! ```
//! use weighted_graph::classes;
//!
//! let g = classes::cycle(5, 1);
//! assert_eq!(g.num_edges(), 5);
//! assert!(g.are_all_even());
//! ```

use crate::builder::Builder;
use crate::weightedgraph::WeightedGraph;

/// Returns a path with `m` edges.
pub fn path<W>(m: usize, weight: W) -> WeightedGraph<W>
where
    W: Copy,
{
    let mut b = Builder::new();
    let nodes = b.add_vertices(m + 1);
    for (&u, &v) in nodes.iter().zip(nodes.iter().skip(1)) {
        b.add_edge(u, v, weight);
    }
    b.into_graph()
}

/// Returns a cycle with length `n`.
pub fn cycle<W>(n: usize, weight: W) -> WeightedGraph<W>
where
    W: Copy,
{
    let mut b = Builder::new();
    let nodes = b.add_vertices(n);
    for (&u, &v) in nodes.iter().zip(nodes.iter().cycle().skip(1)) {
        b.add_edge(u, v, weight);
    }
    b.into_graph()
}

/// Returns the complete graph on `n` vertices.
pub fn complete_graph<W>(n: usize, weight: W) -> WeightedGraph<W>
where
    W: Copy,
{
    let mut b = Builder::new();
    let nodes = b.add_vertices(n);
    for (i, &u) in nodes.iter().enumerate() {
        for &v in &nodes[i + 1..] {
            b.add_edge(u, v, weight);
        }
    }
    b.into_graph()
}

/// Returns a star graph with `n` rays.
///
/// The center is the first vertex.
pub fn star<W>(n: usize, weight: W) -> WeightedGraph<W>
where
    W: Copy,
{
    let mut b = Builder::new();
    let nodes = b.add_vertices(n + 1);
    for &v in &nodes[1..] {
        b.add_edge(nodes[0], v, weight);
    }
    b.into_graph()
}
