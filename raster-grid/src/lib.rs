//! Quadtree tile grid selection for slippy map rasters
//!
//! ## Rasterize a viewport
//!
//! ```rust
//! use raster_grid::{QuadGrid, QueryBox};
//!
//! let grid = QuadGrid::berkeley();
//! let query = QueryBox {
//!     ullon: -122.2998046875,
//!     ullat: 37.892195547244356,
//!     lrlon: -122.2119140625,
//!     lrlat: 37.82280243352756,
//! };
//! let result = grid.rasterize(&query, 305.0, 300.0);
//! let raster = result.raster().unwrap();
//! assert_eq!(raster.depth, 1);
//! assert_eq!(raster.grid[0], vec!["d1_x0_y0.png", "d1_x1_y0.png"]);
//! ```
//!
//! ## Tile extents
//!
//! ```rust
//! use raster_grid::{Extent, QuadGrid, TileAddress};
//!
//! let grid = QuadGrid::new(
//!     256,
//!     3,
//!     Extent {
//!         minx: 0.0,
//!         miny: 0.0,
//!         maxx: 8.0,
//!         maxy: 8.0,
//!     },
//! );
//! assert_eq!(
//!     grid.tile_extent(&TileAddress::new(2, 1, 0)),
//!     Extent {
//!         minx: 2.0,
//!         miny: 6.0,
//!         maxx: 4.0,
//!         maxy: 8.0,
//!     }
//! );
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod grid;
mod raster;

pub use grid::{Extent, QuadGrid, TileAddress, FEET_PER_DEGREE};
pub use raster::{rasterize, QueryBox, Raster, RasterResult};
