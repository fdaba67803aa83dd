//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile grid selection for a viewport

use crate::grid::{Extent, QuadGrid, TileAddress};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Query window as sent by the map viewer
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct QueryBox {
    pub ullon: f64,
    pub ullat: f64,
    pub lrlon: f64,
    pub lrlat: f64,
}

impl From<&QueryBox> for Extent {
    fn from(query: &QueryBox) -> Extent {
        Extent {
            minx: query.ullon,
            miny: query.lrlat,
            maxx: query.lrlon,
            maxy: query.ullat,
        }
    }
}

/// Tiles covering a query window
#[derive(PartialEq, Clone, Debug)]
pub struct Raster {
    pub depth: u8,
    /// Extent exactly covered by `grid`
    pub bbox: Extent,
    /// Tile file names, north row first, west column first
    pub grid: Vec<Vec<String>>,
}

impl Raster {
    pub fn rows(&self) -> usize {
        self.grid.len()
    }
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }
}

#[derive(PartialEq, Clone, Debug)]
pub enum RasterResult {
    Success(Raster),
    /// Query outside of the grid or degenerate viewport
    Failure,
}

impl RasterResult {
    pub fn is_success(&self) -> bool {
        match self {
            RasterResult::Success(_) => true,
            RasterResult::Failure => false,
        }
    }
    pub fn raster(&self) -> Option<&Raster> {
        match self {
            RasterResult::Success(raster) => Some(raster),
            RasterResult::Failure => None,
        }
    }
}

impl Serialize for RasterResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RasterResult::Success(raster) => {
                let mut s = serializer.serialize_struct("RasterResult", 7)?;
                s.serialize_field("render_grid", &raster.grid)?;
                s.serialize_field("raster_ul_lon", &raster.bbox.minx)?;
                s.serialize_field("raster_ul_lat", &raster.bbox.maxy)?;
                s.serialize_field("raster_lr_lon", &raster.bbox.maxx)?;
                s.serialize_field("raster_lr_lat", &raster.bbox.miny)?;
                s.serialize_field("depth", &raster.depth)?;
                s.serialize_field("query_success", &true)?;
                s.end()
            }
            RasterResult::Failure => {
                let mut s = serializer.serialize_struct("RasterResult", 1)?;
                s.serialize_field("query_success", &false)?;
                s.end()
            }
        }
    }
}

/// Number of tiles needed to span `distance`, at least one and at most `remaining`
fn tiles_to_cover(distance: f64, tile_span: f64, remaining: u32) -> u32 {
    let n = (distance / tile_span).ceil() as u32;
    n.max(1).min(remaining)
}

impl QuadGrid {
    /// Select the tiles covering `query` for a viewport of `width` x `height` pixels.
    ///
    /// The depth is chosen from the unclipped query, all tile indices from the query
    /// clipped to the grid extent.
    pub fn rasterize(&self, query: &QueryBox, width: f64, height: f64) -> RasterResult {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            debug!("Invalid viewport size {}x{}", width, height);
            return RasterResult::Failure;
        }
        let query = Extent::from(query);
        if !query.is_valid() || !self.extent.intersects(&query) {
            debug!("Query {:?} outside of grid extent", query);
            return RasterResult::Failure;
        }
        let clipped = query.clip(&self.extent);
        let lon_dpp = query.width() / width;
        let depth = self.depth_for_lon_dpp(lon_dpp);
        debug!(
            "lonDPP {} -> depth {} (resolution {})",
            lon_dpp,
            depth,
            self.resolution(depth)
        );

        let (tile_w, tile_h) = self.tile_span(depth);
        let ntiles = self.tile_count(depth);
        let (xtile, ytile) = self.tile_index(depth, clipped.minx, clipped.miny);
        let minx = self.extent.minx + xtile as f64 * tile_w;
        let miny = self.extent.miny + ytile as f64 * tile_h;
        let cols = tiles_to_cover(clipped.maxx - minx, tile_w, ntiles - xtile);
        let rows = tiles_to_cover(clipped.maxy - miny, tile_h, ntiles - ytile);

        // top row in file addressing
        let top = self.flip_y(ytile, depth) + 1 - rows;
        let grid = (0..rows)
            .map(|row| {
                (0..cols)
                    .map(|col| TileAddress::new(depth, xtile + col, top + row).file_name())
                    .collect()
            })
            .collect();

        RasterResult::Success(Raster {
            depth,
            bbox: Extent {
                minx,
                miny,
                maxx: minx + cols as f64 * tile_w,
                maxy: miny + rows as f64 * tile_h,
            },
            grid,
        })
    }
}

/// Rasterize with the default Berkeley grid
pub fn rasterize(query: &QueryBox, width: f64, height: f64) -> RasterResult {
    QuadGrid::berkeley().rasterize(query, width, height)
}
