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

#![forbid(unsafe_code)]

//! An undirected, labeled, weighted graph on a dense adjacency matrix.
//!
//! The graph holds a fixed maximal number of vertices. Besides the usual
//! vertex and edge operations it provides all-pairs shortest paths
//! (Floyd-Warshall), a check for proper vertex colorings and a check
//! whether all vertices have even degree.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod vertex;
pub use self::vertex::Vertex;

pub mod weightedgraph;
pub use self::weightedgraph::{Error, Result, WeightedGraph, DEFAULT_CAPACITY};

pub mod builder;
pub use crate::builder::Builder;

/// Graph classes
pub mod classes;

// # Algorithms

pub mod shortestpath;
pub use self::shortestpath::PathMatrix;

// # Drawing

pub mod draw;
