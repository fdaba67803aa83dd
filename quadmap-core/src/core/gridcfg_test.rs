//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;

use crate::core::Config;
use raster_grid::{Extent, QuadGrid, QueryBox};

#[test]
fn test_grid_from_config() {
    use crate::core::parse_config;

    let toml = r#"
        #[grid]
        predefined = "berkeley"
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = QuadGrid::from_config(&config).unwrap();
    assert_eq!(grid.extent, QuadGrid::berkeley().extent);
    assert_eq!(grid.tile_size(), 256);
    assert_eq!(grid.max_depth(), 7);

    let toml = r#"
        #[grid.user]
        [user]
        tile_size = 512
        max_depth = 3
        extent = { minx = 0.0, miny = 0.0, maxx = 8.0, maxy = 4.0 }
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = QuadGrid::from_config(&config).unwrap();
    assert_eq!(
        grid.extent,
        Extent {
            minx: 0.0,
            miny: 0.0,
            maxx: 8.0,
            maxy: 4.0,
        }
    );
    assert_eq!(grid.tile_size(), 512);
    assert_eq!(grid.max_depth(), 3);
    assert_eq!(grid.resolution(0), 8.0 / 512.0);

    // very fine request is capped at max_depth
    let query = QueryBox {
        ullon: 1.0,
        ullat: 3.0,
        lrlon: 1.001,
        lrlat: 2.999,
    };
    let raster = grid.rasterize(&query, 1000.0, 1000.0);
    assert_eq!(raster.raster().map(|r| r.depth), Some(3));
}

#[test]
fn test_user_grid_defaults() {
    use crate::core::parse_config;

    let toml = r#"
        [user]
        extent = { minx = -1.0, miny = -1.0, maxx = 1.0, maxy = 1.0 }
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    let grid = QuadGrid::from_config(&config).unwrap();
    assert_eq!(grid.tile_size(), 256);
    assert_eq!(grid.max_depth(), 7);
}

#[test]
fn test_invalid_grid_config() {
    use crate::core::parse_config;

    let config: GridCfg = parse_config(r#"predefined = "web_mercator""#.to_string(), "").unwrap();
    assert_eq!(
        QuadGrid::from_config(&config).err(),
        Some("Unkown grid 'web_mercator'".to_string())
    );

    let config: GridCfg = parse_config("".to_string(), "").unwrap();
    assert_eq!(
        QuadGrid::from_config(&config).err(),
        Some("Invalid grid definition".to_string())
    );

    let toml = r#"
        [user]
        max_depth = 31
        extent = { minx = 0.0, miny = 0.0, maxx = 1.0, maxy = 1.0 }
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        QuadGrid::from_config(&config).err(),
        Some("Grid max_depth 31 exceeds limit of 30".to_string())
    );

    let toml = r#"
        [user]
        tile_size = 0
        extent = { minx = 0.0, miny = 0.0, maxx = 1.0, maxy = 1.0 }
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(QuadGrid::from_config(&config).is_err());

    let toml = r#"
        [user]
        extent = { minx = 1.0, miny = 0.0, maxx = 0.0, maxy = 1.0 }
        "#;
    let config: GridCfg = parse_config(toml.to_string(), "").unwrap();
    assert!(QuadGrid::from_config(&config)
        .err()
        .unwrap()
        .starts_with("Invalid grid extent"));
}

#[test]
fn test_runtime_config_roundtrip() {
    use crate::core::config::ApplicationCfg;
    use crate::core::parse_config;

    let grid = QuadGrid::berkeley();
    let toml = grid.gen_runtime_config();
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    let parsed = QuadGrid::from_config(&config.grid).unwrap();
    assert_eq!(parsed.extent, grid.extent);
    assert_eq!(parsed.max_depth(), grid.max_depth());
}
