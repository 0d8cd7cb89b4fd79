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

use weighted_graph::{Error, Vertex, WeightedGraph};

use std::error;

type TestResult = Result<(), Box<dyn error::Error>>;

fn with_vertices(capacity: usize, labels: &[&str]) -> Result<WeightedGraph, Error> {
    let mut g = WeightedGraph::with_capacity(capacity);
    for &label in labels {
        g.insert_vertex(Vertex::new(label, 'r'))?;
    }
    Ok(g)
}

fn assert_symmetric(g: &WeightedGraph) {
    let labels: Vec<_> = g.vertices().map(|v| v.label().to_string()).collect();
    for u in &labels {
        for v in &labels {
            assert_eq!(g.edge_weight(u, v), g.edge_weight(v, u), "{}-{}", u, v);
        }
    }
}

#[test]
fn test_symmetry() -> TestResult {
    let mut g = with_vertices(6, &["A", "B", "C", "D", "E"])?;
    g.insert_edge("A", "B", 1)?;
    g.insert_edge("C", "A", 2)?;
    g.insert_edge("D", "E", 3)?;
    g.insert_edge("E", "B", 4)?;
    assert_symmetric(&g);

    g.remove_edge("A", "C")?;
    assert_symmetric(&g);

    g.remove_vertex("C")?;
    assert_symmetric(&g);

    g.insert_edge("B", "A", 9)?;
    assert_symmetric(&g);
    assert_eq!(g.edge_weight("A", "B")?, Some(9));
    Ok(())
}

#[test]
fn test_capacity_exceeded() -> TestResult {
    let mut g = with_vertices(3, &["A", "B", "C"])?;
    assert!(g.is_full());
    g.insert_edge("A", "B", 1)?;

    let before = g.clone();
    assert_eq!(
        g.insert_vertex("D"),
        Err(Error::CapacityExceeded { capacity: 3 })
    );
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g, before);
    Ok(())
}

#[test]
fn test_reinsert_clears_edges() -> TestResult {
    let mut g = with_vertices(5, &["A", "B", "C"])?;
    g.insert_edge("A", "B", 3)?;
    g.insert_edge("A", "C", 4)?;
    g.insert_edge("B", "C", 5)?;

    g.insert_vertex(Vertex::new("A", 'b'))?;
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.retrieve_vertex("A").map(Vertex::color), Some('b'));
    assert_eq!(g.edge_weight("A", "B")?, None);
    assert_eq!(g.edge_weight("A", "C")?, None);
    assert_eq!(g.edge_weight("B", "C")?, Some(5));
    Ok(())
}

#[test]
fn test_removal_compaction() -> TestResult {
    let mut g = with_vertices(5, &["A", "B", "C", "D"])?;
    g.insert_edge("A", "C", 5)?;
    g.insert_edge("B", "D", 3)?;

    g.remove_vertex("B")?;
    assert!(g.retrieve_vertex("B").is_none());
    assert_eq!(g.edge_weight("A", "C")?, Some(5));
    assert_eq!(g.edge_weight("A", "D")?, None);
    assert_eq!(g.edge_weight("C", "D")?, None);
    assert_eq!(g.degree("D")?, 0);
    assert_eq!(
        g.edge_weight("B", "D"),
        Err(Error::VertexNotFound("B".to_string()))
    );
    Ok(())
}

#[test]
fn test_missing_vertices() -> TestResult {
    let mut g = with_vertices(5, &["A", "B"])?;
    let before = g.clone();

    assert!(g.retrieve_vertex("Z").is_none());
    assert!(matches!(g.insert_edge("A", "Z", 1), Err(Error::VertexNotFound(_))));
    assert!(matches!(g.insert_edge("Z", "A", 1), Err(Error::VertexNotFound(_))));
    assert!(matches!(g.remove_edge("Z", "B"), Err(Error::VertexNotFound(_))));
    assert!(matches!(g.remove_vertex("Z"), Err(Error::VertexNotFound(_))));
    assert!(matches!(g.edge_weight("A", "Z"), Err(Error::VertexNotFound(_))));
    assert_eq!(g, before);

    // known but unconnected is not an error
    assert_eq!(g.edge_weight("A", "B")?, None);
    Ok(())
}

#[test]
fn test_shortest_path_via_intermediate() -> TestResult {
    let mut g = with_vertices(10, &["A", "B", "C", "D"])?;
    g.insert_edge("A", "B", 1)?;
    g.insert_edge("B", "C", 1)?;
    g.insert_edge("A", "C", 10)?;

    let paths = g.shortest_paths();
    assert_eq!(paths.distance_between("A", "C")?, Some(2));
    assert_eq!(paths.path("A", "C")?, Some(vec!["A", "B", "C"]));
    assert_eq!(paths.distance_between("A", "D")?, None);
    assert_eq!(g.edge_weight("A", "C")?, Some(10));
    Ok(())
}

#[test]
fn test_shortest_paths_idempotent() -> TestResult {
    let mut g = with_vertices(10, &["A", "B", "C", "D", "E"])?;
    g.insert_edge("A", "B", 7)?;
    g.insert_edge("B", "C", 1)?;
    g.insert_edge("C", "D", 2)?;
    g.insert_edge("A", "D", 3)?;
    g.insert_edge("D", "E", 6)?;

    let first = g.shortest_paths();
    let second = g.shortest_paths();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    Ok(())
}

#[test]
fn test_shortest_paths_snapshot() -> TestResult {
    let mut g = with_vertices(10, &["A", "B"])?;
    g.insert_edge("A", "B", 2)?;
    let paths = g.shortest_paths();

    g.remove_edge("A", "B")?;
    assert_eq!(paths.distance_between("A", "B")?, Some(2));
    assert_eq!(g.shortest_paths().distance_between("A", "B")?, None);
    Ok(())
}

#[test]
fn test_coloring() -> TestResult {
    let mut g = WeightedGraph::new();
    g.insert_vertex(Vertex::new("A", 'r'))?;
    g.insert_vertex(Vertex::new("B", 'r'))?;
    g.insert_edge("A", "B", 1)?;
    assert!(!g.has_proper_coloring());

    // recoloring B drops its edges, so insert the edge again
    g.insert_vertex(Vertex::new("B", 'b'))?;
    g.insert_edge("A", "B", 1)?;
    assert!(g.has_proper_coloring());

    // unconnected vertices may share a color
    g.insert_vertex(Vertex::new("C", 'r'))?;
    assert!(g.has_proper_coloring());
    Ok(())
}

#[test]
fn test_parity() -> TestResult {
    let mut g = with_vertices(10, &["A", "B", "C", "D"])?;
    g.insert_edge("A", "B", 1)?;
    g.insert_edge("B", "C", 1)?;
    g.insert_edge("C", "A", 1)?;
    assert!(g.are_all_even());

    g.insert_edge("A", "D", 1)?;
    assert_eq!(g.degree("A")?, 3);
    assert!(!g.are_all_even());
    Ok(())
}

#[test]
fn test_end_to_end() -> TestResult {
    let mut g = WeightedGraph::with_capacity(5);
    for label in &["A", "B", "C"] {
        g.insert_vertex(*label)?;
    }
    g.insert_edge("A", "B", 4)?;
    g.insert_edge("B", "C", 2)?;
    g.insert_edge("A", "C", 9)?;

    let paths = g.shortest_paths();
    assert_eq!(paths.distance_between("A", "C")?, Some(6));
    assert_eq!(paths.distance_between("A", "B")?, Some(4));
    assert_eq!(paths.distance_between("B", "C")?, Some(2));
    Ok(())
}

#[test]
fn test_clone_keeps_capacity() -> TestResult {
    let mut g = with_vertices(8, &["A", "B"])?;
    g.insert_edge("A", "B", 1)?;

    let mut h = g.clone();
    assert_eq!(h.capacity(), 8);
    assert_eq!(h.num_vertices(), 2);
    h.insert_vertex("C")?;
    h.remove_edge("A", "B")?;

    assert_eq!(g.num_vertices(), 2);
    assert_eq!(g.edge_weight("A", "B")?, Some(1));
    Ok(())
}

#[test]
fn test_self_loops() -> TestResult {
    let mut g = WeightedGraph::new();
    g.insert_vertex(Vertex::new("A", 'r'))?;
    g.insert_edge("A", "A", 4)?;

    assert_eq!(g.edge_weight("A", "A")?, Some(4));
    assert!(g.are_all_even());
    assert!(g.has_proper_coloring());
    assert_eq!(g.shortest_paths().distance_between("A", "A")?, Some(0));
    Ok(())
}
