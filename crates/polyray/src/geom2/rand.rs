//! Random star-shaped polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple, generally non-convex
//!   polygons for property tests, benchmarks and the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π) and add angular jitter
//!   below half the spacing. No sort is needed: the jittered angles are still
//!   strictly increasing, so emitting vertices in index order with an
//!   independent radius each gives a star-shaped, hence simple, polygon.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bbox::BoundingBox;
use super::polygon::Polygon;
use super::types::Point;

/// How many vertices a drawn star polygon gets; never fewer than 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range `min..=max`.
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn resolve(self, rng: &mut StdRng) -> usize {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        let hi = hi.max(lo);
        if lo == hi {
            lo
        } else {
            rng.gen_range(lo..=hi)
        }
    }
}

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are drawn uniformly from `[radius_min, radius_max]`; a wide range gives deep notches.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radius_min: 0.4,
            radius_max: 1.0,
            random_phase: true,
        }
    }
}

/// `(seed, index)` pair naming one draw; the same token always yields the same
/// polygon, and `next()` walks the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    fn rng(self) -> StdRng {
        let salt = splitmix64(self.index.wrapping_add(0x9e3779b97f4a7c15));
        StdRng::seed_from_u64(splitmix64(self.seed ^ salt))
    }
}

/// SplitMix64 finalizer; spreads nearby seeds and indices over the whole state.
fn splitmix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Draw a star-shaped polygon around the origin, vertices in CCW order.
///
/// Always has at least 3 vertices, see `VertexCount`.
pub fn draw_star_polygon(cfg: &StarCfg, tok: ReplayToken) -> Polygon<f64> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.resolve(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_lo = cfg.radius_min.max(1e-9);
    let r_hi = cfg.radius_max.max(r_lo);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let vertices: Vec<Point<f64>> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let r = if r_hi > r_lo {
                rng.gen_range(r_lo..=r_hi)
            } else {
                r_lo
            };
            Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    Polygon::from_nonempty(vertices)
}

/// Draw `count` query points uniformly from `bbox` grown by 10% on every side.
///
/// Empty boxes yield no points.
pub fn draw_queries(bbox: &BoundingBox<f64>, count: usize, tok: ReplayToken) -> Vec<Point<f64>> {
    if bbox.is_empty() {
        return Vec::new();
    }
    let mut rng = tok.rng();
    let pad_x = 0.1 * (bbox.x_max - bbox.x_min);
    let pad_y = 0.1 * (bbox.y_max - bbox.y_min);
    let (x0, x1) = (bbox.x_min - pad_x, bbox.x_max + pad_x);
    let (y0, y1) = (bbox.y_min - pad_y, bbox.y_max + pad_y);
    (0..count)
        .map(|_| {
            let u: f64 = rng.gen();
            let v: f64 = rng.gen();
            Point::new(x0 + u * (x1 - x0), y0 + v * (y1 - y0))
        })
        .collect()
}
