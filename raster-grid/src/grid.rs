//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Quadtree tile grids

use std::fmt;

/// Geographic extent in decimal degrees
///
/// `minx`/`maxx` are the west/east longitudes, `miny`/`maxy` the south/north latitudes.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    /// Finite coordinates with min <= max on both axes
    pub fn is_valid(&self) -> bool {
        [self.minx, self.miny, self.maxx, self.maxy]
            .iter()
            .all(|v| v.is_finite())
            && self.minx <= self.maxx
            && self.miny <= self.maxy
    }
    /// True if both extents share at least one point (touching edges count).
    pub fn intersects(&self, other: &Extent) -> bool {
        !(other.minx > self.maxx
            || other.maxx < self.minx
            || other.miny > self.maxy
            || other.maxy < self.miny)
    }
    pub fn contains(&self, other: &Extent) -> bool {
        self.minx <= other.minx
            && self.maxx >= other.maxx
            && self.miny <= other.miny
            && self.maxy >= other.maxy
    }
    /// Clamp each edge into `bounds`
    pub fn clip(&self, bounds: &Extent) -> Extent {
        Extent {
            minx: self.minx.max(bounds.minx),
            miny: self.miny.max(bounds.miny),
            maxx: self.maxx.min(bounds.maxx),
            maxy: self.maxy.min(bounds.maxy),
        }
    }
}

/// Tile in file addressing scheme (y counted downwards from the north edge)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct TileAddress {
    pub depth: u8,
    pub x: u32,
    pub y: u32,
}

impl TileAddress {
    pub fn new(depth: u8, x: u32, y: u32) -> TileAddress {
        TileAddress { depth, x, y }
    }
    /// Image file name, e.g. `d3_x5_y2.png`
    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}_x{}_y{}.png", self.depth, self.x, self.y)
    }
}

/// Quadtree tile grid over a fixed root extent.
///
/// Depth 0 is a single tile covering `extent`, every further depth halves the tile
/// span on both axes. Tiles are square in pixels (`tile_size` x `tile_size`).
#[derive(Clone, Debug)]
pub struct QuadGrid {
    /// The width and height of an individual tile, in pixels.
    tile_size: u16,
    /// Finest depth available in the tile set.
    max_depth: u8,
    /// The geographical extent covered by depth 0, in decimal degrees.
    pub extent: Extent,
}

/// Feet per degree of longitude at the latitude of the default tile set.
pub const FEET_PER_DEGREE: f64 = 288200.0;

impl QuadGrid {
    /// Grid of the Berkeley tile set (256px tiles, depths 0 to 7)
    pub fn berkeley() -> QuadGrid {
        QuadGrid::new(
            256,
            7,
            Extent {
                minx: -122.2998046875,
                miny: 37.82280243352756,
                maxx: -122.2119140625,
                maxy: 37.892195547244356,
            },
        )
    }

    pub fn new(tile_size: u16, max_depth: u8, extent: Extent) -> QuadGrid {
        QuadGrid {
            tile_size,
            max_depth,
            extent,
        }
    }
    pub fn tile_size(&self) -> u16 {
        self.tile_size
    }
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
    /// Number of tiles per axis
    pub fn tile_count(&self, depth: u8) -> u32 {
        1 << depth
    }
    /// Longitude and latitude span of a single tile
    pub fn tile_span(&self, depth: u8) -> (f64, f64) {
        let n = f64::from(self.tile_count(depth));
        (self.extent.width() / n, self.extent.height() / n)
    }
    /// Longitude degrees per pixel
    pub fn resolution(&self, depth: u8) -> f64 {
        self.tile_span(depth).0 / f64::from(self.tile_size)
    }
    /// Approximate ground resolution in feet per pixel
    pub fn feet_per_pixel(&self, depth: u8) -> f64 {
        self.resolution(depth) * FEET_PER_DEGREE
    }
    /// Coarsest depth whose resolution is strictly finer than `lon_dpp`.
    ///
    /// Falls back to `max_depth` if no coarser level qualifies. A resolution equal to
    /// `lon_dpp` does not qualify, so ties select the next finer level.
    pub fn depth_for_lon_dpp(&self, lon_dpp: f64) -> u8 {
        (0..self.max_depth)
            .find(|&depth| self.resolution(depth) < lon_dpp)
            .unwrap_or(self.max_depth)
    }
    /// Geographic (bottom-up) tile index containing the point, clamped into the level
    pub fn tile_index(&self, depth: u8, lon: f64, lat: f64) -> (u32, u32) {
        let (tile_w, tile_h) = self.tile_span(depth);
        let last = self.tile_count(depth) - 1;
        let x = ((lon - self.extent.minx) / tile_w).floor();
        let y = ((lat - self.extent.miny) / tile_h).floor();
        // float to int casts saturate, negative values end up as 0
        ((x as u32).min(last), (y as u32).min(last))
    }
    /// Convert between bottom-up and top-down y tile numbering
    pub fn flip_y(&self, ytile: u32, depth: u8) -> u32 {
        (self.tile_count(depth) - 1).saturating_sub(ytile)
    }
    /// Extent of a given tile in file addressing scheme
    pub fn tile_extent(&self, tile: &TileAddress) -> Extent {
        let (tile_w, tile_h) = self.tile_span(tile.depth);
        let y = self.flip_y(tile.y, tile.depth);
        Extent {
            minx: self.extent.minx + tile_w * f64::from(tile.x),
            miny: self.extent.miny + tile_h * f64::from(y),
            maxx: self.extent.minx + tile_w * f64::from(tile.x + 1),
            maxy: self.extent.miny + tile_h * f64::from(y + 1),
        }
    }
    /// All tiles of a level, row by row starting at the north-west corner
    pub fn tiles(&self, depth: u8) -> impl Iterator<Item = TileAddress> {
        let n = self.tile_count(depth);
        (0..n).flat_map(move |y| (0..n).map(move |x| TileAddress::new(depth, x, y)))
    }
}
