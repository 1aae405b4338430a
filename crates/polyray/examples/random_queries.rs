//! Sample star-shaped polygons and report how many random queries land inside.
//!
//! Usage:
//!   cargo run -p polyray --example random_queries -- [count]
//!
//! Prints one line per polygon: vertex count, bounding box, hit ratio.

use polyray::prelude::*;

fn main() {
    let count: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 40 },
        radius_min: 0.2,
        ..StarCfg::default()
    };
    for index in 0..count {
        let tok = ReplayToken { seed: 2025, index };
        let poly = draw_star_polygon(&cfg, tok);
        let bb = poly.bounding_box();
        let queries = draw_queries(bb, 10_000, tok.next());
        let hits = queries.iter().filter(|q| poly.contains_point(q)).count();
        println!(
            "#{index}: n={:>3} bbox=[{:+.3},{:+.3}]x[{:+.3},{:+.3}] inside={:.3}",
            poly.len(),
            bb.x_min,
            bb.x_max,
            bb.y_min,
            bb.y_max,
            hits as f64 / queries.len() as f64
        );
    }
}
