// File: crates/chart-core/src/scale.rs
// Summary: Time (X) and Value (Y) linear scale transforms with degenerate-domain handling.

/// Logical X coordinate (epoch milliseconds).
pub type Logical = f64;
/// Value Y coordinate (metric value).
pub type Value = f64;

const EPS: f64 = 1e-12;

/// Horizontal time scale mapping `[min, max]` onto `[left_px, left_px + width_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub width_px: f32,
    pub min: Logical,
    pub max: Logical,
}

impl TimeScale {
    pub fn new(left_px: f32, width_px: f32, min: Logical, max: Logical) -> Self {
        Self { left_px, width_px: width_px.max(0.0), min, max }
    }

    /// True when every timestamp is the same instant.
    pub fn is_degenerate(&self) -> bool {
        (self.max - self.min).abs() < EPS
    }

    /// A zero-width domain pins every point to the left edge.
    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 {
        if self.is_degenerate() {
            return self.left_px;
        }
        let frac = (x - self.min) / (self.max - self.min);
        (self.left_px as f64 + frac * self.width_px as f64) as f32
    }
}

/// Half-range used around a flat series: 10% of its magnitude, at least 5,
/// so the six Y tick labels stay distinct.
pub fn flat_padding(v: Value) -> Value {
    (v.abs() * 0.1).max(5.0)
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    flat: bool,
}

impl ValueScale {
    /// A zero-range domain is widened symmetrically by [`flat_padding`],
    /// which puts `v` on the vertical center of the plot.
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let flat = (vmax - vmin).abs() < EPS;
        let (vmin, vmax) = if flat {
            let pad = flat_padding(vmin);
            (vmin - pad, vmin + pad)
        } else {
            (vmin, vmax)
        };
        Self { top_px, bottom_px, vmin, vmax, flat }
    }

    /// True when the input domain had zero range and was padded.
    pub fn is_flat(&self) -> bool { self.flat }

    pub fn center_px(&self) -> f32 {
        self.top_px + (self.bottom_px - self.top_px) * 0.5
    }

    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        let frac = (y - self.vmin) / (self.vmax - self.vmin);
        (self.bottom_px as f64 - frac * (self.bottom_px - self.top_px) as f64) as f32
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> Value {
        let h = (self.bottom_px - self.top_px).max(f32::EPSILON) as f64;
        self.vmin + ((self.bottom_px - py) as f64 / h) * (self.vmax - self.vmin)
    }
}
