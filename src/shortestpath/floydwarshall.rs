// Copyright (c) 2016, 2017, 2018, 2020, 2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

use crate::draw::write_matrix;
use crate::num::traits::{CheckedAdd, NumAssign};
use crate::weightedgraph::{Error, Result, WeightedGraph};

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
use tracing::trace;

/// The lengths of shortest paths between all pairs of vertices.
///
/// Vertices are referred to by the slot they had in the graph when the
/// matrix was computed. The matrix is a snapshot, it does not follow
/// later modifications of the graph.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "PathData<W>",
        bound(deserialize = "W: Copy + serde::Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMatrix<W> {
    labels: Vec<String>,
    // `dist[u][v] = (length, pred)` where `pred` is the slot of the
    // last vertex before `v` on a shortest `u`-`v`-path.
    dist: Vec<Vec<Option<(W, usize)>>>,
}

impl<W> PathMatrix<W>
where
    W: Copy,
{
    /// Return the number of vertices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Return the vertex labels in slot order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Return the length of a shortest path between two slots.
    ///
    /// Returns `None` if there is no path or a slot is out of range.
    pub fn distance(&self, u: usize, v: usize) -> Option<W> {
        self.dist.get(u).and_then(|row| row.get(v)).and_then(|d| d.map(|(d, _)| d))
    }

    /// Return the length of a shortest path between two vertices.
    ///
    /// Returns `Ok(None)` if both vertices exist but `v` is not
    /// reachable from `u`.
    pub fn distance_between(&self, u: &str, v: &str) -> Result<Option<W>> {
        let (s, t) = (self.lookup(u)?, self.lookup(v)?);
        Ok(self.distance(s, t))
    }

    /// Return the labels of the vertices on a shortest path from `u` to
    /// `v`, including both end points.
    ///
    /// Returns `Ok(None)` if `v` is not reachable from `u`.
    pub fn path(&self, u: &str, v: &str) -> Result<Option<Vec<&str>>> {
        let (s, t) = (self.lookup(u)?, self.lookup(v)?);
        let mut route = vec![t];
        let mut w = t;
        while w != s {
            match self.dist[s][w] {
                // a longer chain can only come from a negative cycle
                Some((_, pred)) if route.len() <= self.len() => {
                    route.push(pred);
                    w = pred;
                }
                _ => return Ok(None),
            }
        }
        route.reverse();
        Ok(Some(route.into_iter().map(|i| self.labels[i].as_str()).collect()))
    }

    fn lookup(&self, label: &str) -> Result<usize> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }
}

/// The fields of a serialized path matrix, checked before use.
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct PathData<W> {
    labels: Vec<String>,
    dist: Vec<Vec<Option<(W, usize)>>>,
}

#[cfg(feature = "serialize")]
impl<W> std::convert::TryFrom<PathData<W>> for PathMatrix<W>
where
    W: Copy,
{
    type Error = Error;

    fn try_from(data: PathData<W>) -> Result<Self> {
        let PathData { labels, dist } = data;
        let n = labels.len();
        if dist.len() != n || dist.iter().any(|row| row.len() != n) {
            return Err(Error::InvalidData(format!("path matrix is not {}x{}", n, n)));
        }
        if dist.iter().flatten().flatten().any(|&(_, pred)| pred >= n) {
            return Err(Error::InvalidData("predecessor out of range".to_string()));
        }
        Ok(PathMatrix { labels, dist })
    }
}

impl<W> fmt::Display for PathMatrix<W>
where
    W: Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_matrix(f, "Path matrix", self.len(), |u, v| self.distance(u, v))
    }
}

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a weighted graph.
///
/// The distance of each vertex to itself is zero. Sums of path lengths
/// that are not representable in `W` are never used, i.e. a path whose
/// length would overflow is treated as missing.
///
/// # Example
/// ```
/// use weighted_graph::WeightedGraph;
/// use weighted_graph::shortestpath::floydwarshall;
///
/// let g = WeightedGraph::new_with(|b| {
///     let x = b.add_vertex("A");
///     let y = b.add_vertex("B");
///     let z = b.add_vertex("C");
///     b.add_edge(x, y, 1);
///     b.add_edge(y, z, 1);
///     b.add_edge(x, z, 10);
/// });
///
/// let paths = floydwarshall::all_pairs(&g);
/// assert_eq!(paths.distance_between("A", "C").unwrap(), Some(2));
/// assert_eq!(paths.path("A", "C").unwrap(), Some(vec!["A", "B", "C"]));
/// ```
pub fn all_pairs<W>(g: &WeightedGraph<W>) -> PathMatrix<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy,
{
    let n = g.num_vertices();
    let mut dist: Vec<Vec<Option<(W, usize)>>> = vec![vec![None; n]; n];

    for u in 0..n {
        for v in 0..n {
            dist[u][v] = g.edge(u, v).map(|w| (w, u));
        }
        dist[u][u] = Some((W::zero(), u));
    }

    let mut nrelaxed = 0usize;
    for k in 0..n {
        for u in 0..n {
            if let Some((dist_uk, _)) = dist[u][k] {
                for v in 0..n {
                    if let Some((dist_kv, pred_kv)) = dist[k][v] {
                        if let Some(d) = dist_uk.checked_add(&dist_kv) {
                            if dist[u][v].map_or(true, |(dist_uv, _)| d < dist_uv) {
                                dist[u][v] = Some((d, pred_kv));
                                nrelaxed += 1;
                            }
                        }
                    }
                }
            }
        }
    }
    trace!(n, nrelaxed, "floyd-warshall finished");

    PathMatrix {
        labels: g.vertices().map(|v| v.label().to_string()).collect(),
        dist,
    }
}
