//! Color stops and multi-stop interpolation engine.

use evalpix_core::{Error, Result};
use serde::Serialize;

/// RGBA color with channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Transparent black (used for unmapped values).
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A color stop: breakpoint mapped to an RGBA anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(t: f64, color: Rgba) -> Self {
        Self { t, color }
    }
}

/// Validated list of stops with strictly ascending breakpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    stops: Vec<ColorStop>,
}

impl ColorRamp {
    pub fn new(stops: Vec<ColorStop>) -> Result<Self> {
        check_stops(&stops)?;
        Ok(Self { stops })
    }

    /// Build from parallel breakpoint/color lists, as `colorBlend` takes them.
    pub fn from_parts(breakpoints: &[f64], colors: &[Rgba]) -> Result<Self> {
        if breakpoints.len() != colors.len() {
            return Err(Error::ShapeMismatch {
                what: "color ramp anchors".into(),
                expected: breakpoints.len(),
                actual: colors.len(),
            });
        }
        let stops = breakpoints
            .iter()
            .zip(colors)
            .map(|(&t, &color)| ColorStop::new(t, color))
            .collect();
        Self::new(stops)
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Color at `value`; see [`color_blend`].
    pub fn evaluate(&self, value: f64) -> Rgba {
        multi_stop(&self.stops, value)
    }
}

// ─── NDVI ramp ─────────────────────────────────────────────────────────

/// Breakpoints of the 3-stop NDVI ramp.
pub const NDVI_BREAKPOINTS: [f64; 3] = [0.0, 0.5, 1.0];

const NDVI_LOW: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
const NDVI_MID: Rgba = Rgba::rgb(1.0, 1.0, 0.0);
const NDVI_HIGH: Rgba = Rgba::rgb(0.1, 0.31, 0.0);

/// Red -> yellow -> dark green ramp over [0, 1], every anchor carrying
/// `alpha`.
pub fn ndvi_ramp(alpha: f64) -> [ColorStop; 3] {
    [
        ColorStop::new(NDVI_BREAKPOINTS[0], NDVI_LOW.with_alpha(alpha)),
        ColorStop::new(NDVI_BREAKPOINTS[1], NDVI_MID.with_alpha(alpha)),
        ColorStop::new(NDVI_BREAKPOINTS[2], NDVI_HIGH.with_alpha(alpha)),
    ]
}

// ─── Interpolation engine ──────────────────────────────────────────────

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgba, c2: Rgba, t: f64) -> Rgba {
    Rgba::new(
        lerp(c1.r, c2.r, t),
        lerp(c1.g, c2.g, t),
        lerp(c1.b, c2.b, t),
        lerp(c1.a, c2.a, t),
    )
}

fn multi_stop(stops: &[ColorStop], value: f64) -> Rgba {
    if value.is_nan() {
        return Rgba::TRANSPARENT;
    }
    let first = stops[0];
    let last = stops[stops.len() - 1];
    if value <= first.t {
        return first.color;
    }
    if value >= last.t {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if value <= hi.t {
            let ratio = (value - lo.t) / (hi.t - lo.t);
            return lerp_color(lo.color, hi.color, ratio);
        }
    }
    last.color
}

fn check_stops(stops: &[ColorStop]) -> Result<()> {
    if stops.is_empty() {
        return Err(Error::InvalidParameter {
            name: "stops",
            value: "[]".into(),
            reason: "at least one color stop is required".into(),
        });
    }
    for pair in stops.windows(2) {
        if !(pair[1].t > pair[0].t) {
            return Err(Error::InvalidParameter {
                name: "stops",
                value: format!("{} after {}", pair[1].t, pair[0].t),
                reason: "breakpoints must be strictly ascending".into(),
            });
        }
    }
    Ok(())
}

/// Piecewise-linear blend of RGBA anchors keyed by `stops[i].t`.
///
/// Values below the first breakpoint or above the last clamp to the end
/// anchors. NaN maps to [`Rgba::TRANSPARENT`].
pub fn color_blend(value: f64, stops: &[ColorStop]) -> Result<Rgba> {
    check_stops(stops)?;
    Ok(multi_stop(stops, value))
}
