//! # evalpix colormap
//!
//! Color blending for evalscript visualizations.
//!
//! Provides the multi-stop RGBA interpolation used by `colorBlend` style
//! visualizations plus the 3-stop NDVI ramp. The main entry point is
//! [`color_blend`], which maps a scalar index value to an [`Rgba`] color.
//!
//! ## Usage
//!
//! ```ignore
//! use evalpix_colormap::{color_blend, ndvi_ramp};
//!
//! let color = color_blend(0.42, &ndvi_ramp(1.0))?;
//! ```

mod render;
mod scheme;

pub use scheme::{color_blend, ndvi_ramp, ColorRamp, ColorStop, Rgba, NDVI_BREAKPOINTS};
