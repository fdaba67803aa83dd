//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::graph::{FringeEntry, Graph, GraphVertex};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

fn euclidean(a: &GraphVertex, b: &GraphVertex) -> f64 {
    (a.lat() - b.lat()).hypot(a.lon() - b.lon())
}

/// Plain Dijkstra over `graph`, skipping stale fringe entries
fn shortest_distance(graph: &Graph, start: i64, goal: i64) -> Option<f64> {
    let mut best: HashMap<i64, f64> = HashMap::new();
    let mut fringe = BinaryHeap::new();
    best.insert(start, 0.0);
    fringe.push(Reverse(FringeEntry::new(start, 0.0)));
    while let Some(Reverse(entry)) = fringe.pop() {
        if entry.id == goal {
            return Some(entry.distance);
        }
        if best.get(&entry.id).map_or(false, |&d| d < entry.distance) {
            continue;
        }
        let current = graph.vertex(entry.id)?;
        for &next in graph.neighbors(entry.id) {
            let neighbor = match graph.vertex(next) {
                Some(v) => v,
                None => continue,
            };
            let distance = entry.distance + euclidean(current, neighbor);
            if best.get(&next).map_or(true, |&d| distance < d) {
                best.insert(next, distance);
                fringe.push(Reverse(FringeEntry::new(next, distance)));
            }
        }
    }
    None
}

#[test]
fn test_vertex() {
    let mut vertex = GraphVertex::new(3, 37.87, -122.26);
    assert_eq!(vertex.id(), 3);
    assert_eq!(vertex.lat(), 37.87);
    assert_eq!(vertex.lon(), -122.26);
    assert!(vertex.adjacent().is_empty());

    vertex.add_adjacent(7);
    vertex.add_adjacent(2);
    vertex.add_adjacent(7);
    assert_eq!(vertex.adjacent(), &[7, 2, 7]);
}

#[test]
fn test_adjacency_direction() {
    let mut graph = Graph::new();
    graph.add_vertex(GraphVertex::new(3, 0.0, 0.0));
    graph.add_vertex(GraphVertex::new(7, 0.0, 1.0));
    assert!(graph.add_edge(3, 7));

    assert_eq!(graph.neighbors(3), &[7]);
    assert!(graph.neighbors(7).is_empty());
    assert_eq!(shortest_distance(&graph, 3, 7), Some(1.0));
    assert_eq!(shortest_distance(&graph, 7, 3), None);

    assert!(graph.add_edge(7, 3));
    assert_eq!(graph.neighbors(7), &[3]);
    assert_eq!(shortest_distance(&graph, 7, 3), Some(1.0));
}

#[test]
fn test_graph_building() {
    let mut graph = Graph::new();
    assert!(graph.is_empty());
    graph.add_vertex(GraphVertex::new(1, 0.0, 0.0));
    graph.add_vertex(GraphVertex::new(2, 1.0, 0.0));
    assert_eq!(graph.len(), 2);

    // edge from unknown vertex
    assert!(!graph.add_edge(99, 1));
    // edge to unknown vertex is recorded as is
    assert!(graph.add_edge(1, 99));
    assert_eq!(graph.neighbors(1), &[99]);
    assert!(graph.vertex(99).is_none());
    assert!(graph.neighbors(99).is_empty());

    assert!(!graph.add_road(1, 42));
    assert_eq!(graph.neighbors(1), &[99]);
    assert!(graph.add_road(1, 2));
    assert_eq!(graph.neighbors(1), &[99, 2]);
    assert_eq!(graph.neighbors(2), &[1]);

    // replacing a vertex keeps its slot
    graph.add_vertex(GraphVertex::new(2, 5.0, 5.0));
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.vertex(2).map(|v| v.lat()), Some(5.0));
    assert!(graph.neighbors(2).is_empty());

    let ids: Vec<i64> = graph.vertices().map(|v| v.id()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_shortest_path() {
    //  1 --- 2
    //  |     |
    //  3 --- 4 --- 5
    let mut graph = Graph::new();
    for &(id, lat, lon) in &[
        (1, 1.0, 0.0),
        (2, 1.0, 3.0),
        (3, 0.0, 0.0),
        (4, 0.0, 3.0),
        (5, 0.0, 4.0),
    ] {
        graph.add_vertex(GraphVertex::new(id, lat, lon));
    }
    for &(a, b) in &[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)] {
        assert!(graph.add_road(a, b));
    }
    assert_eq!(shortest_distance(&graph, 1, 5), Some(5.0));
    assert_eq!(shortest_distance(&graph, 3, 2), Some(4.0));
    assert_eq!(shortest_distance(&graph, 5, 5), Some(0.0));
    assert_eq!(shortest_distance(&graph, 1, 6), None);
}
