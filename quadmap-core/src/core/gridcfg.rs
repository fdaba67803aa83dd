//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use raster_grid::{Extent, QuadGrid};

/// Deepest level with tile numbers fitting into `u32`
const MAX_DEPTH_LIMIT: u8 = 30;

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl From<&ExtentCfg> for Extent {
    fn from(cfg: &ExtentCfg) -> Extent {
        Extent {
            minx: cfg.minx,
            miny: cfg.miny,
            maxx: cfg.maxx,
            maxy: cfg.maxy,
        }
    }
}

impl<'a> Config<'a, GridCfg> for QuadGrid {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        if let Some(ref gridname) = grid_cfg.predefined {
            match gridname.as_str() {
                "berkeley" => Ok(QuadGrid::berkeley()),
                _ => Err(format!("Unkown grid '{}'", gridname)),
            }
        } else if let Some(ref usergrid) = grid_cfg.user {
            if usergrid.tile_size == 0 {
                return Err("Grid tile_size must be positive".to_string());
            }
            if usergrid.max_depth > MAX_DEPTH_LIMIT {
                return Err(format!(
                    "Grid max_depth {} exceeds limit of {}",
                    usergrid.max_depth, MAX_DEPTH_LIMIT
                ));
            }
            let extent = Extent::from(&usergrid.extent);
            if !extent.is_valid() || extent.width() <= 0.0 || extent.height() <= 0.0 {
                return Err(format!("Invalid grid extent {:?}", extent));
            }
            Ok(QuadGrid::new(
                usergrid.tile_size,
                usergrid.max_depth,
                extent,
            ))
        } else {
            Err("Invalid grid definition".to_string())
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
predefined = "berkeley"
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        format!(
            r#"
[grid.user]
tile_size = {}
max_depth = {}
extent = {{ minx = {:?}, miny = {:?}, maxx = {:?}, maxy = {:?} }}
"#,
            self.tile_size(),
            self.max_depth(),
            self.extent.minx,
            self.extent.miny,
            self.extent.maxx,
            self.extent.maxy
        )
    }
}
