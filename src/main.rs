//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use quadmap_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use quadmap_core::core::{parse_config, read_config, Config};
use raster_grid::{QuadGrid, QueryBox};
use std::env;
use std::io::Write;
use std::process;
use std::str::FromStr;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn exit_with_error(msg: String) -> ! {
    println!("{}", msg);
    process::exit(1)
}

fn config_from_args(args: &ArgMatches<'_>) -> ApplicationCfg {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath).unwrap_or_else(|err| {
            exit_with_error(format!("Error reading configuration - {} ", err))
        })
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "").unwrap_or_else(|err| {
            exit_with_error(format!("Error in default configuration - {} ", err))
        })
    }
}

fn grid_from_config(config: &ApplicationCfg) -> QuadGrid {
    QuadGrid::from_config(&config.grid).unwrap_or_else(|err| {
        exit_with_error(format!("Error reading configuration - {} ", err))
    })
}

fn parse_arg<T: FromStr>(args: &ArgMatches<'_>, name: &str) -> Option<T> {
    args.value_of(name).map(|s| {
        s.parse::<T>().unwrap_or_else(|_| {
            exit_with_error(format!("Error parsing '{}' value '{}'", name, s))
        })
    })
}

fn required_arg<T: FromStr>(args: &ArgMatches<'_>, name: &str) -> T {
    parse_arg(args, name).unwrap_or_else(|| exit_with_error(format!("Missing '{}'", name)))
}

fn raster(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let grid = grid_from_config(&config);
    let query = QueryBox {
        ullon: required_arg(args, "ullon"),
        ullat: required_arg(args, "ullat"),
        lrlon: required_arg(args, "lrlon"),
        lrlat: required_arg(args, "lrlat"),
    };
    let width = parse_arg::<f64>(args, "w");
    let height = parse_arg::<f64>(args, "h");
    let (width, height) = match (width, height, &config.viewport) {
        (Some(w), Some(h), _) => (w, h),
        (w, h, Some(viewport)) => (w.unwrap_or(viewport.width), h.unwrap_or(viewport.height)),
        _ => exit_with_error("Missing viewport size '--w' and '--h'".to_string()),
    };
    let result = grid.rasterize(&query, width, height);
    if !result.is_success() {
        warn!("No tiles for query {:?} with viewport {}x{}", query, width, height);
    }
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(format!("Error serializing result - {}", e)),
    }
}

fn tileextent(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let grid = grid_from_config(&config);
    let depth: u8 = required_arg(args, "depth");
    if depth > grid.max_depth() {
        exit_with_error(format!(
            "Depth {} exceeds maximum depth {}",
            depth,
            grid.max_depth()
        ));
    }
    info!(
        "Depth {}: {} tiles, {:.3} ft/px",
        depth,
        u64::from(grid.tile_count(depth)).pow(2),
        grid.feet_per_pixel(depth)
    );
    for tile in grid.tiles(depth) {
        let extent = grid.tile_extent(&tile);
        println!(
            "{} {} {} {} {}",
            tile, extent.minx, extent.miny, extent.maxx, extent.maxy
        );
    }
}

fn genconfig(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let grid = grid_from_config(&config);
    print!("{}", grid.gen_runtime_config());
    if let Some(viewport) = config.viewport {
        print!(
            "\n[viewport]\nwidth = {:?}\nheight = {:?}\n",
            viewport.width, viewport.height
        );
    }
}

fn main() {
    dotenv().ok();
    let mut app = App::new("quadmap")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("quadtree tile selection for slippy map viewers")
        .subcommand(SubCommand::with_name("raster")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --ullon=<LON> 'Upper left longitude of the query box'
                                              --ullat=<LAT> 'Upper left latitude of the query box'
                                              --lrlon=<LON> 'Lower right longitude of the query box'
                                              --lrlat=<LAT> 'Lower right latitude of the query box'
                                              --w=[PIXELS] 'Viewport width'
                                              --h=[PIXELS] 'Viewport height'")
                        .about("Select the tile grid covering a query box"))
        .subcommand(SubCommand::with_name("tileextent")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --depth=<LEVEL> 'Tree depth'")
                        .about("List tiles of a level with their extent"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("raster", Some(sub_m)) => {
                init_logger(sub_m);
                raster(sub_m);
            }
            ("tileextent", Some(sub_m)) => {
                init_logger(sub_m);
                tileextent(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                genconfig(sub_m);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
