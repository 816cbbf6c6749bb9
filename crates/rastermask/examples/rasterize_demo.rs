//! Print a polygon mask as ASCII art for quick visual sanity.
//!
//! Usage:
//!   cargo run -p rastermask --example rasterize_demo -- diamond
//!   cargo run -p rastermask --example rasterize_demo -- triangle 0.5

use rastermask::prelude::*;

fn main() {
    let shape = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "diamond".to_string());
    let resolution: f64 = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1.0);

    let ring = match shape.as_str() {
        "diamond" => vec![
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, 5.0),
        ],
        "triangle" => vec![Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0), Vec2::new(0.0, 8.0)],
        "square" => ring_from_bbox(Vec2::new(0.0, 0.0), Vec2::new(8.0, 8.0)),
        _ => {
            eprintln!("usage: rasterize_demo [diamond|triangle|square] [resolution]");
            return;
        }
    };

    match rasterize(&close_ring(&ring), resolution, 0) {
        Ok(mask) => {
            println!("{}x{} mask, {} foreground cells", mask.rows(), mask.cols(), mask.count_ones());
            for r in 0..mask.rows() {
                let line: String = mask
                    .row(r)
                    .iter()
                    .map(|&v| if v != 0 { '#' } else { '.' })
                    .collect();
                println!("{line}");
            }
        }
        Err(e) => eprintln!("rasterize failed: {e}"),
    }
}
