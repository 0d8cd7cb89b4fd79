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

//! Constructing weighted graphs in one go.
//!
//! A [`Builder`] collects vertices and edges and turns them into a
//! [`WeightedGraph`] that is large enough to hold all of them. In
//! contrast to [`WeightedGraph::insert_vertex`], adding a vertex with an
//! existing label to a builder only updates its color and returns the
//! existing node; its edges are kept.

use crate::vertex::Vertex;
use crate::weightedgraph::{WeightedGraph, DEFAULT_CAPACITY};

use std::cmp::max;

/// A node of a builder.
///
/// This is the index of the vertex in the order of creation, which is
/// also its slot in the final graph.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Node(usize);

impl Node {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A builder for [`WeightedGraph`].
#[derive(Clone, Debug)]
pub struct Builder<W> {
    capacity: usize,
    vertices: Vec<Vertex>,
    edges: Vec<(Node, Node, W)>,
}

impl<W> Default for Builder<W>
where
    W: Copy,
{
    fn default() -> Self {
        Builder::new()
    }
}

impl<W> Builder<W>
where
    W: Copy,
{
    /// Create a new, empty builder for a graph with capacity
    /// [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Builder::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new, empty builder.
    ///
    /// The final graph has at least the given capacity. If more vertices
    /// are added, the capacity is enlarged to the number of vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Builder {
            capacity,
            vertices: vec![],
            edges: vec![],
        }
    }

    /// Return the current number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Return the current number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Add a vertex.
    ///
    /// If a vertex with the same label has been added before, its color
    /// is updated and the existing node is returned.
    pub fn add_vertex<V>(&mut self, vertex: V) -> Node
    where
        V: Into<Vertex>,
    {
        let vertex = vertex.into();
        match self.vertices.iter().position(|v| v.label() == vertex.label()) {
            Some(i) => {
                self.vertices[i].set_color(vertex.color());
                Node(i)
            }
            None => {
                self.vertices.push(vertex);
                Node(self.vertices.len() - 1)
            }
        }
    }

    /// Add `n` uncolored vertices labeled by their node index.
    pub fn add_vertices(&mut self, n: usize) -> Vec<Node> {
        (0..n)
            .map(|_| {
                let label = self.vertices.len().to_string();
                self.add_vertex(Vertex::uncolored(label))
            })
            .collect()
    }

    /// Add an edge.
    ///
    /// If the same pair of nodes is connected several times, the last
    /// weight wins.
    pub fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        self.edges.push((u, v, weight));
    }

    /// Turn the builder into a graph.
    pub fn into_graph(self) -> WeightedGraph<W> {
        let mut g = WeightedGraph::with_capacity(max(self.capacity, self.vertices.len()));
        for v in self.vertices {
            g.push_vertex(v);
        }
        for (u, v, w) in self.edges {
            g.set_edge(u.0, v.0, Some(w));
        }
        g
    }
}
