use std::f64::consts::TAU;

use rand::Rng;

use super::VisualizerShape;

/// One radial bar: where it points, how far it reaches past the ring and
/// how strongly it is stroked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bar {
    pub angle: f64,
    pub length: f64,
    pub opacity: f64,
}

/// A bar resolved to canvas coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub opacity: f64,
}

impl Bar {
    pub fn segment(&self, center: (f64, f64), radius: f64) -> Segment {
        let (cx, cy) = center;
        let (sin, cos) = self.angle.sin_cos();
        let outer = radius + self.length;
        Segment {
            x1: cx + cos * radius,
            y1: cy + sin * radius,
            x2: cx + cos * outer,
            y2: cy + sin * outer,
            opacity: self.opacity,
        }
    }
}

/// The bars of a single frame. Regenerated every frame and thrown away after drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerFrame {
    bars: Vec<Bar>,
}

impl VisualizerFrame {
    pub fn generate<R: Rng + ?Sized>(shape: &VisualizerShape, rng: &mut R) -> Self {
        let count = shape.bar_count;
        let bars = (0..count)
            .map(|i| Bar {
                angle: i as f64 / count as f64 * TAU,
                length: sample(rng, shape.bar_min, shape.bar_max),
                opacity: sample(rng, shape.opacity_min, shape.opacity_max),
            })
            .collect();
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn segments<'a>(&'a self, shape: &VisualizerShape) -> impl Iterator<Item = Segment> + 'a {
        let center = shape.center();
        let radius = shape.radius();
        self.bars().iter().map(move |b| b.segment(center, radius))
    }
}

/// Uniform in `[lo, hi)`; a collapsed or unbounded range yields `lo`.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo && (hi - lo).is_finite() {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
