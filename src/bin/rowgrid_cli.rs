//! CLI tool for rowgrid - computes grid state and outputs JSON
//!
//! Usage:
//!   rowgrid_cli <rows> [--sort <column>] [--desc] [--offset <px>]
//!               [--item-height <px>] [--container-height <px>]
//!
//! Generates the sample dataset, applies the requested sort and scroll
//! position, and prints the resulting window plus visible rows as JSON.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::io::{self, Write};

use rowgrid::grid::GridEngine;
use rowgrid::sample::sample_rows;
use rowgrid::types::Field;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: rowgrid_cli <rows> [--sort <column>] [--desc] [--offset <px>] \
             [--item-height <px>] [--container-height <px>]"
        );
        std::process::exit(1);
    }

    let count: usize = match args[1].parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Invalid row count {}: {}", args[1], e);
            std::process::exit(1);
        }
    };

    let mut sort_column: Option<Field> = None;
    let mut descending = false;
    let mut offset: f32 = 0.0;
    let mut item_height: f32 = 40.0;
    let mut container_height: f32 = 600.0;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--sort" => {
                i += 1;
                let name = args.get(i).map(String::as_str).unwrap_or("");
                match name.parse::<Field>() {
                    Ok(f) => sort_column = Some(f),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--desc" => descending = true,
            "--offset" => {
                i += 1;
                offset = parse_px(args.get(i), "--offset");
            }
            "--item-height" => {
                i += 1;
                item_height = parse_px(args.get(i), "--item-height");
            }
            "--container-height" => {
                i += 1;
                container_height = parse_px(args.get(i), "--container-height");
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut engine = match GridEngine::new(sample_rows(count), item_height, container_height) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error building grid: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(column) = sort_column {
        engine.toggle_sort(column);
        if descending {
            engine.toggle_sort(column);
        }
    }
    engine.set_scroll_offset(offset);

    let window = engine.window();
    let output = serde_json::json!({
        "sort": engine.sort_spec(),
        "window": window,
        "visibleRows": engine.rows_in_window(&window),
    });

    let json = match serde_json::to_string_pretty(&output) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    io::stdout().write_all(json.as_bytes()).unwrap();
    println!();
}

fn parse_px(arg: Option<&String>, flag: &str) -> f32 {
    match arg.map(|s| s.parse::<f32>()) {
        Some(Ok(v)) => v,
        _ => {
            eprintln!("{} expects a numeric value", flag);
            std::process::exit(1);
        }
    }
}
