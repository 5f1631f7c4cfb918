//! Evalscripts
//!
//! Each script implements [`Evalscript`]: a static declaration plus a pure
//! per-pixel evaluation.
//! - `true-color`: RGB composite with cloud-aware alpha
//! - `ndvi`: NDVI with clear weight and data mask
//! - `ndvi-visual`: NDVI through the red-yellow-green ramp
//! - `vegetation-indices`: NDRE, NDVI, RTVIcore, MSAVI as float outputs
//! - `median-ndvi`: median NDVI over an orbit stack

mod median_ndvi;
mod ndvi;
mod true_color;
mod vegetation_indices;

use std::fmt;
use std::str::FromStr;

use evalpix_core::{Error, Evalscript, OutputDeclaration, Result};

pub use median_ndvi::{MedianNdvi, MedianNdviParams};
pub use ndvi::{Ndvi, NdviVisual};
pub use true_color::{TrueColor, TrueColorParams};
pub use vegetation_indices::VegetationIndices;

/// Registry of the available evalscripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    TrueColor,
    Ndvi,
    NdviVisual,
    VegetationIndices,
    MedianNdvi,
}

impl ScriptKind {
    /// All available scripts, in listing order.
    pub const ALL: &[ScriptKind] = &[
        Self::TrueColor,
        Self::Ndvi,
        Self::NdviVisual,
        Self::VegetationIndices,
        Self::MedianNdvi,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TrueColor => TrueColor.name(),
            Self::Ndvi => Ndvi.name(),
            Self::NdviVisual => NdviVisual.name(),
            Self::VegetationIndices => VegetationIndices.name(),
            Self::MedianNdvi => MedianNdvi.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::TrueColor => TrueColor.description(),
            Self::Ndvi => Ndvi.description(),
            Self::NdviVisual => NdviVisual.description(),
            Self::VegetationIndices => VegetationIndices.description(),
            Self::MedianNdvi => MedianNdvi.description(),
        }
    }

    pub fn describe(self) -> OutputDeclaration {
        match self {
            Self::TrueColor => TrueColor.describe(),
            Self::Ndvi => Ndvi.describe(),
            Self::NdviVisual => NdviVisual.describe(),
            Self::VegetationIndices => VegetationIndices.describe(),
            Self::MedianNdvi => MedianNdvi.describe(),
        }
    }

    /// Whether the script evaluates a sample sequence rather than one sample.
    pub fn is_composite(self) -> bool {
        self.describe().mosaicking.is_temporal()
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownScript(s.to_string()))
    }
}
