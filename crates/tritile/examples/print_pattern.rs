//! Show a generated pattern for quick visual sanity.
//!
//! Usage:
//!   cargo run -p tritile --example print_pattern -- grid
//!   cargo run -p tritile --example print_pattern -- tables
//!
//! - grid mode: prints the shape grid with one glyph per tile.
//! - tables mode: prints the three table sizes and a few primitive rows.

use tritile::prelude::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "grid".to_string());
    match mode.as_str() {
        "grid" => show_grid(),
        "tables" => show_tables(),
        _ => {
            eprintln!("usage: print_pattern [grid|tables]");
        }
    }
}

fn show_grid() {
    let params = PatternParams {
        resolution: 8,
        ..PatternParams::default()
    };
    let pattern = generate_seeded(&params, 2025).unwrap();
    for row in pattern.grid.iter_rows() {
        let line: Vec<String> = row.iter().map(|s| format!("{s:>3}")).collect();
        println!("{}", line.join(" "));
    }
}

fn show_tables() {
    let params = PatternParams::default();
    let pattern = generate_seeded(&params, 777).unwrap();
    let tables = pattern.tables();
    println!(
        "outlines={} points={} vertices={} primitives={}",
        pattern.outlines.len(),
        tables.points.len(),
        tables.vertices.len(),
        tables.primitives.len()
    );
    for prim in tables.primitives.iter().take(5) {
        println!("{:?}", prim.to_row());
    }
}
