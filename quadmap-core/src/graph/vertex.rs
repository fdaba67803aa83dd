//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::collections::HashMap;

/// Graph node with fixed position and outgoing adjacencies.
///
/// Neighbors are recorded by id only. Adding `b` to `a` makes `b` reachable
/// from `a`, the reverse direction has to be added separately.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphVertex {
    id: i64,
    lat: f64,
    lon: f64,
    adjacent: Vec<i64>,
}

impl GraphVertex {
    pub fn new(id: i64, lat: f64, lon: f64) -> GraphVertex {
        GraphVertex {
            id,
            lat,
            lon,
            adjacent: Vec::new(),
        }
    }
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn lat(&self) -> f64 {
        self.lat
    }
    pub fn lon(&self) -> f64 {
        self.lon
    }
    /// Neighbor ids in insertion order
    pub fn adjacent(&self) -> &[i64] {
        &self.adjacent
    }
    /// Append a neighbor. The id is not checked against any graph.
    pub fn add_adjacent(&mut self, id: i64) {
        self.adjacent.push(id);
    }
}

/// Vertex arena indexed by id.
///
/// Built by a single writer, then shared read-only with searches. Edges may refer
/// to ids never added as vertex; resolving them is left to the caller.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<GraphVertex>,
    index: HashMap<i64, usize>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }
    /// Add a vertex, replacing an existing one with the same id
    pub fn add_vertex(&mut self, vertex: GraphVertex) {
        match self.index.get(&vertex.id) {
            Some(&idx) => {
                warn!("Replacing vertex {}", vertex.id);
                self.vertices[idx] = vertex;
            }
            None => {
                self.index.insert(vertex.id, self.vertices.len());
                self.vertices.push(vertex);
            }
        }
    }
    /// Record a one-way edge. Returns false if `from` is not in the graph.
    pub fn add_edge(&mut self, from: i64, to: i64) -> bool {
        match self.index.get(&from) {
            Some(&idx) => {
                self.vertices[idx].add_adjacent(to);
                true
            }
            None => false,
        }
    }
    /// Record edges in both directions. Returns false if either end is missing,
    /// in which case nothing is recorded.
    pub fn add_road(&mut self, a: i64, b: i64) -> bool {
        if !(self.index.contains_key(&a) && self.index.contains_key(&b)) {
            return false;
        }
        self.add_edge(a, b) && self.add_edge(b, a)
    }
    pub fn vertex(&self, id: i64) -> Option<&GraphVertex> {
        self.index.get(&id).map(|&idx| &self.vertices[idx])
    }
    /// Outgoing neighbor ids of `id`, empty for unknown vertices
    pub fn neighbors(&self, id: i64) -> &[i64] {
        self.vertex(id).map_or(&[][..], |v| v.adjacent())
    }
    pub fn vertices(&self) -> impl Iterator<Item = &GraphVertex> {
        self.vertices.iter()
    }
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
