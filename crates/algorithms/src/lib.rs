//! # evalpix algorithms
//!
//! Per-pixel imagery algorithms and the evalscripts built on them.
//!
//! ## Modules
//!
//! - **imagery**: Spectral indices, masks, median composite, date filter
//! - **scripts**: The evalscripts and their registry

pub mod imagery;
pub mod scripts;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        clear_mask, median, median_ndvi, msavi, ndre, ndvi, normalized_difference, rtvi_core,
        DateFilter, Orbit, SpectralIndex,
    };
    pub use crate::scripts::{
        MedianNdvi, MedianNdviParams, Ndvi, NdviVisual, ScriptKind, TrueColor, TrueColorParams,
        VegetationIndices,
    };
    pub use evalpix_core::prelude::*;
}
