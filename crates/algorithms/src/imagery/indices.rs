//! Spectral vegetation indices
//!
//! Closed-form indices computed from one pixel's reflectance values.
//! Undefined results (zero denominator, negative radicand) are NaN.

/// Enumeration of supported spectral indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralIndex {
    /// Normalized Difference Vegetation Index
    NDVI,
    /// Normalized Difference Red Edge Index
    NDRE,
    /// Modified Soil Adjusted Vegetation Index
    MSAVI,
    /// Red-edge Triangulated Vegetation Index (core form)
    RTVICore,
}

impl SpectralIndex {
    /// Output id used by the evalscripts.
    pub fn id(self) -> &'static str {
        match self {
            SpectralIndex::NDVI => "ndvi",
            SpectralIndex::NDRE => "ndre",
            SpectralIndex::MSAVI => "msavi",
            SpectralIndex::RTVICore => "rtvicore",
        }
    }
}

// ---------------------------------------------------------------------------
// Generic normalized difference
// ---------------------------------------------------------------------------

/// Compute the normalized difference between two bands:
///
/// `(band_a - band_b) / (band_a + band_b)`
///
/// Result is in the range [-1, 1] for non-negative inputs. NaN when
/// `band_a + band_b == 0`, whatever the numerator.
pub fn normalized_difference(band_a: f64, band_b: f64) -> f64 {
    let sum = band_a + band_b;
    if sum == 0.0 {
        return f64::NAN;
    }
    (band_a - band_b) / sum
}

// ---------------------------------------------------------------------------
// NDVI
// ---------------------------------------------------------------------------

/// Normalized Difference Vegetation Index
///
/// `NDVI = (NIR - Red) / (NIR + Red)`
///
/// Values range from -1 to 1:
/// - Dense vegetation: 0.6 to 0.9
/// - Sparse vegetation: 0.2 to 0.5
/// - Bare soil: 0.1 to 0.2
/// - Water/clouds: -1.0 to 0.0
pub fn ndvi(nir: f64, red: f64) -> f64 {
    normalized_difference(nir, red)
}

// ---------------------------------------------------------------------------
// NDRE
// ---------------------------------------------------------------------------

/// Normalized Difference Red Edge Index (Gitelson & Merzlyak, 1994)
///
/// `NDRE = (NIR - RedEdge) / (NIR + RedEdge)`
///
/// Sensitive to chlorophyll content in leaves. More effective than NDVI
/// for monitoring vegetation health in mid-to-late growth stages.
pub fn ndre(nir: f64, red_edge: f64) -> f64 {
    normalized_difference(nir, red_edge)
}

// ---------------------------------------------------------------------------
// MSAVI
// ---------------------------------------------------------------------------

/// Modified Soil Adjusted Vegetation Index (Qi et al., 1994)
///
/// `MSAVI = 0.5 * (2*NIR + 1 - sqrt((2*NIR + 1)^2 - 8*(NIR - Red)))`
///
/// Self-adjusting soil line, no L factor to tune. A negative radicand
/// yields NaN.
pub fn msavi(nir: f64, red: f64) -> f64 {
    let a = 2.0 * nir + 1.0;
    0.5 * (a - (a * a - 8.0 * (nir - red)).sqrt())
}

// ---------------------------------------------------------------------------
// RTVIcore
// ---------------------------------------------------------------------------

/// Red-edge Triangulated Vegetation Index, core form
///
/// `RTVIcore = 100 * (NIR - RedEdge) - 10 * (NIR - Green)`
pub fn rtvi_core(nir: f64, red_edge: f64, green: f64) -> f64 {
    100.0 * (nir - red_edge) - 10.0 * (nir - green)
}

// ---------------------------------------------------------------------------
// Masks
// ---------------------------------------------------------------------------

/// A pixel is clear when it holds data and is free of cloud/shadow.
pub fn clear_mask(data_mask: bool, clear: bool) -> bool {
    data_mask && clear
}

/// `value` where the pixel holds data, NaN elsewhere.
pub fn masked(value: f64, data_mask: bool) -> f64 {
    if data_mask {
        value
    } else {
        f64::NAN
    }
}

/// Engine encoding of a flag.
pub fn flag_value(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
