/*
 * Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! An undirected weighted graph stored as a dense adjacency matrix.
//!
//! The graph has a fixed maximum number of vertices. Vertices are
//! identified by their labels and occupy consecutive *slots*
//! `0..num_vertices()`. Removing a vertex shifts all later vertices down
//! by one slot, so slot indices are not stable across removals.
//!
//! # Example
//!
//! ```
//! use weighted_graph::{Vertex, WeightedGraph};
//!
//! let mut g = WeightedGraph::with_capacity(5);
//! for label in &["A", "B", "C"] {
//!     g.insert_vertex(Vertex::uncolored(*label)).unwrap();
//! }
//! g.insert_edge("A", "B", 4).unwrap();
//! g.insert_edge("B", "C", 2).unwrap();
//! g.insert_edge("A", "C", 9).unwrap();
//!
//! let paths = g.shortest_paths();
//! assert_eq!(paths.distance_between("A", "C").unwrap(), Some(6));
//! assert_eq!(g.edge_weight("A", "C").unwrap(), Some(9));
//! ```

use crate::builder::Builder;
use crate::draw::write_matrix;
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::shortestpath::{floydwarshall, PathMatrix};
use crate::vertex::Vertex;

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The default maximal number of vertices of a graph.
pub const DEFAULT_CAPACITY: usize = 10;

/// Error of a graph operation.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// A new vertex should be added to a graph that is full.
    #[error("the graph is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    /// A referenced vertex does not exist.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
    /// Stored graph data violates the invariants of the data structure.
    #[error("invalid graph data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// An undirected, labeled, weighted graph with a fixed capacity.
///
/// Missing edges are represented by `None` in the adjacency matrix.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "GraphData<W>",
        bound(deserialize = "W: Copy + PartialEq + serde::Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightedGraph<W = i32> {
    capacity: usize,
    vertices: Vec<Vertex>,
    // Row-major `capacity x capacity` matrix. Entries outside the
    // live `num_vertices() x num_vertices()` block are always `None`.
    adjacency: Vec<Option<W>>,
}

impl<W> Default for WeightedGraph<W>
where
    W: Copy,
{
    fn default() -> Self {
        WeightedGraph::new()
    }
}

impl<W> WeightedGraph<W>
where
    W: Copy,
{
    /// Create an empty graph with capacity [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        WeightedGraph::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty graph that can hold up to `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics if the `capacity x capacity` adjacency matrix does not fit
    /// into `usize` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let size = capacity.checked_mul(capacity).expect("capacity overflow");
        WeightedGraph {
            capacity,
            vertices: Vec::with_capacity(capacity),
            adjacency: vec![None; size],
        }
    }

    /// Create a new graph by passing a builder to the callback `f`.
    ///
    /// The graph's capacity is [`DEFAULT_CAPACITY`], enlarged to hold all
    /// added vertices if necessary. Use [`Builder::with_capacity`] for a
    /// different capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use weighted_graph::WeightedGraph;
    ///
    /// let g = WeightedGraph::new_with(|b| {
    ///     let u = b.add_vertex("u");
    ///     let v = b.add_vertex("v");
    ///     b.add_edge(u, v, 3);
    /// });
    ///
    /// assert_eq!(g.num_vertices(), 2);
    /// assert_eq!(g.edge_weight("v", "u").unwrap(), Some(3));
    /// ```
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut Builder<W>),
    {
        let mut b = Builder::new();
        f(&mut b);
        b.into_graph()
    }

    /// Return the maximal number of vertices.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the current number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Return the number of edges.
    ///
    /// Self-loops are not counted.
    pub fn num_edges(&self) -> usize {
        let n = self.num_vertices();
        (0..n)
            .map(|i| (i + 1..n).filter(|&j| self.edge(i, j).is_some()).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() == self.capacity
    }

    /// Return an iterator over all vertices in slot order.
    pub fn vertices(&self) -> std::slice::Iter<Vertex> {
        self.vertices.iter()
    }

    /// Return the vertex in slot `index`.
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Return the current slot index of the vertex with the given label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.label() == label)
    }

    /// Insert a vertex.
    ///
    /// If a vertex with the same label exists already, its color is
    /// updated and **all edges incident to it are removed**. Callers
    /// that only want to recolor a vertex must re-insert its edges
    /// afterwards.
    ///
    /// Fails with [`Error::CapacityExceeded`] if the vertex is new and
    /// the graph is full.
    pub fn insert_vertex<V>(&mut self, vertex: V) -> Result<()>
    where
        V: Into<Vertex>,
    {
        let vertex = vertex.into();
        if let Some(i) = self.index_of(vertex.label()) {
            debug!(label = vertex.label(), slot = i, "reset vertex");
            self.vertices[i] = vertex;
            for j in 0..self.num_vertices() {
                self.set_edge(i, j, None);
            }
            return Ok(());
        }

        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        debug!(label = vertex.label(), slot = self.num_vertices(), "insert vertex");
        self.push_vertex(vertex);
        Ok(())
    }

    /// Return the vertex with the given label.
    pub fn retrieve_vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.label() == label)
    }

    /// Remove the vertex with the given label and all its edges.
    ///
    /// All vertices in later slots move down by one slot. The removed
    /// vertex is returned.
    pub fn remove_vertex(&mut self, label: &str) -> Result<Vertex> {
        let i = self.lookup(label)?;
        let n = self.num_vertices();

        // shift the columns right of `i` one to the left ...
        for row in 0..n {
            for col in i..n - 1 {
                self.adjacency[row * self.capacity + col] = self.adjacency[row * self.capacity + col + 1];
            }
        }
        // ... and the rows below `i` one up
        for row in i..n - 1 {
            for col in 0..n - 1 {
                self.adjacency[row * self.capacity + col] = self.adjacency[(row + 1) * self.capacity + col];
            }
        }
        // the last slot is free now
        for j in 0..n {
            self.set_edge(n - 1, j, None);
        }

        debug!(label, slot = i, "remove vertex");
        Ok(self.vertices.remove(i))
    }

    /// Insert an undirected edge between the vertices `u` and `v`.
    ///
    /// An existing edge gets the new weight. Self-loops are stored but
    /// ignored by all other operations.
    pub fn insert_edge(&mut self, u: &str, v: &str, weight: W) -> Result<()> {
        let (i, j) = self.lookup_pair(u, v)?;
        debug!(size = self.num_vertices(), idx_v1 = i, idx_v2 = j, "insert edge");
        self.set_edge(i, j, Some(weight));
        Ok(())
    }

    /// Return the weight of the edge between `u` and `v`.
    ///
    /// Returns `Ok(None)` if both vertices exist but are not adjacent.
    pub fn edge_weight(&self, u: &str, v: &str) -> Result<Option<W>> {
        let (i, j) = self.lookup_pair(u, v)?;
        Ok(self.edge(i, j))
    }

    /// Remove the edge between `u` and `v`.
    ///
    /// Removing a non-existing edge between existing vertices is a
    /// no-op.
    pub fn remove_edge(&mut self, u: &str, v: &str) -> Result<()> {
        let (i, j) = self.lookup_pair(u, v)?;
        debug!(idx_v1 = i, idx_v2 = j, "remove edge");
        self.set_edge(i, j, None);
        Ok(())
    }

    /// Remove all vertices and edges.
    pub fn clear(&mut self) {
        self.vertices.clear();
        for w in self.adjacency.iter_mut() {
            *w = None;
        }
    }

    /// Return the neighbors of a vertex together with the edge weights.
    pub fn neighbors(&self, label: &str) -> Result<impl Iterator<Item = (&Vertex, W)> + '_> {
        let i = self.lookup(label)?;
        Ok(self
            .vertices
            .iter()
            .enumerate()
            .filter(move |&(j, _)| j != i)
            .filter_map(move |(j, v)| self.edge(i, j).map(|w| (v, w))))
    }

    /// Return the number of distinct neighbors of a vertex.
    pub fn degree(&self, label: &str) -> Result<usize> {
        Ok(self.neighbors(label)?.count())
    }

    /// Return an iterator over all edges.
    ///
    /// Each undirected edge is returned once, with its endpoints in slot
    /// order. Self-loops are skipped.
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex, W)> + '_ {
        let n = self.num_vertices();
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| self.edge(i, j).map(|w| (&self.vertices[i], &self.vertices[j], w)))
        })
    }

    /// Return `true` if no two adjacent vertices have the same color.
    pub fn has_proper_coloring(&self) -> bool {
        self.edges().all(|(u, v, _)| u.color() != v.color())
    }

    /// Return `true` if every vertex has even degree.
    pub fn are_all_even(&self) -> bool {
        let n = self.num_vertices();
        (0..n).all(|i| (0..n).filter(|&j| j != i && self.edge(i, j).is_some()).count() % 2 == 0)
    }

    /// Return the weight stored for the slots `row` and `col`.
    pub(crate) fn edge(&self, row: usize, col: usize) -> Option<W> {
        self.adjacency[row * self.capacity + col]
    }

    /// Set the weight of the undirected edge between two slots.
    pub(crate) fn set_edge(&mut self, row: usize, col: usize, weight: Option<W>) {
        self.adjacency[row * self.capacity + col] = weight;
        self.adjacency[col * self.capacity + row] = weight;
    }

    /// Append a vertex to the next free slot and return the slot.
    ///
    /// The caller must ensure that the graph is not full and that the
    /// label is not used yet.
    pub(crate) fn push_vertex(&mut self, vertex: Vertex) -> usize {
        debug_assert!(!self.is_full());
        let n = self.vertices.len();
        for j in 0..=n {
            self.set_edge(n, j, None);
        }
        self.vertices.push(vertex);
        n
    }

    fn lookup(&self, label: &str) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    fn lookup_pair(&self, u: &str, v: &str) -> Result<(usize, usize)> {
        Ok((self.lookup(u)?, self.lookup(v)?))
    }
}

/// The fields of a serialized graph, checked before they become a graph.
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct GraphData<W> {
    capacity: usize,
    vertices: Vec<Vertex>,
    adjacency: Vec<Option<W>>,
}

#[cfg(feature = "serialize")]
impl<W> std::convert::TryFrom<GraphData<W>> for WeightedGraph<W>
where
    W: Copy + PartialEq,
{
    type Error = Error;

    fn try_from(data: GraphData<W>) -> Result<Self> {
        let GraphData {
            capacity,
            vertices,
            adjacency,
        } = data;

        if capacity.checked_mul(capacity) != Some(adjacency.len()) {
            return Err(Error::InvalidData(format!(
                "adjacency matrix has {} entries, expected {}x{}",
                adjacency.len(),
                capacity,
                capacity
            )));
        }
        if vertices.len() > capacity {
            return Err(Error::InvalidData(format!(
                "{} vertices exceed capacity {}",
                vertices.len(),
                capacity
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if vertices[..i].iter().any(|u| u.label() == v.label()) {
                return Err(Error::InvalidData(format!("duplicate vertex label: {}", v.label())));
            }
        }

        let n = vertices.len();
        for row in 0..capacity {
            for col in 0..capacity {
                let w = adjacency[row * capacity + col];
                if w != adjacency[col * capacity + row] {
                    return Err(Error::InvalidData(format!(
                        "adjacency matrix is not symmetric at ({}, {})",
                        row, col
                    )));
                }
                if (row >= n || col >= n) && w.is_some() {
                    return Err(Error::InvalidData(format!("edge at unused slot ({}, {})", row, col)));
                }
            }
        }

        Ok(WeightedGraph {
            capacity,
            vertices,
            adjacency,
        })
    }
}

impl<W> WeightedGraph<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy,
{
    /// Compute the lengths of shortest paths between all pairs of
    /// vertices.
    ///
    /// The result is computed from scratch on each call and does not
    /// change when the graph is modified afterwards.
    pub fn shortest_paths(&self) -> PathMatrix<W> {
        floydwarshall::all_pairs(self)
    }
}

impl<W> WeightedGraph<W>
where
    W: Copy + fmt::Display,
{
    /// Return a textual dump of the vertex list and the adjacency matrix.
    ///
    /// This is meant for testing and debugging, the format may change.
    pub fn show_structure(&self) -> String {
        self.to_string()
    }
}

impl<W> fmt::Display for WeightedGraph<W>
where
    W: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Empty graph");
        }

        writeln!(f, "Vertex list :")?;
        for (i, v) in self.vertices.iter().enumerate() {
            writeln!(f, "{}\t{}\t{}", i, v.label(), v.color())?;
        }
        writeln!(f)?;
        write_matrix(f, "Edge matrix", self.num_vertices(), |i, j| self.edge(i, j))
    }
}
