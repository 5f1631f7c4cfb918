//! Imagery analysis algorithms
//!
//! Per-pixel spectral computations used by the evalscripts:
//! - Spectral indices: NDVI, NDRE, MSAVI, RTVIcore
//! - Masks: data/clear flags
//! - Composites: median NDVI over an orbit sequence
//! - Preprocessing: date allow-list over orbits

mod composite;
mod indices;
mod preprocess;

pub use composite::{median, median_ndvi, valid_ndvi_values};
pub use indices::{
    clear_mask, flag_value, masked, msavi, ndre, ndvi, normalized_difference, rtvi_core,
    SpectralIndex,
};
pub use preprocess::{parse_date_part, DateFilter, Orbit};
