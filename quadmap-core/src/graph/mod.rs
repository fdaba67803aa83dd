//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Road network graph primitives consumed by shortest path searches

pub mod fringe;
pub mod vertex;

pub use self::fringe::{by_distance, FringeEntry};
pub use self::vertex::{Graph, GraphVertex};

#[cfg(test)]
mod graph_test;
