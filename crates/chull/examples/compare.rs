//! Compare both hull builders on one random point set.
//!
//! Usage:
//!   cargo run -p chull --example compare -- [N] [SEED]
//!
//! Prints each builder's hull size, area and elapsed time, plus whether the
//! vertex sets agree. Defaults: N=100, SEED=0 (points in [0, 100]²).

use chull::api::{
    area, draw_points, perimeter, same_vertex_set, timed_hull, Algorithm, ReplayToken, SampleCfg,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let n = args.next().and_then(|s| s.parse().ok()).unwrap_or(100);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let cfg = SampleCfg {
        count: n,
        ..SampleCfg::default()
    };
    let points = match draw_points(cfg, ReplayToken::new(seed)) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("compare: {e}");
            return;
        }
    };
    let mut hulls = Vec::new();
    for algo in Algorithm::ALL {
        let t = timed_hull(algo, &points);
        println!(
            "{algo:>10}: {} vertices, area {:.1}, perimeter {:.2}, {:.3} ms",
            t.value.len(),
            area(&t.value),
            perimeter(&t.value),
            t.elapsed_ms()
        );
        hulls.push(t.value);
    }
    println!("agree: {}", same_vertex_set(&hulls[0], &hulls[1]));
}
