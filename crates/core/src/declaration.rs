//! Static input/output declaration of an evalscript
//!
//! This is the metadata an evalscript returns from `setup()`: the bands it
//! reads, the output rasters the engine must allocate, and how acquisitions
//! are grouped into one evaluation.

use serde::{Deserialize, Serialize};

use crate::band::Band;

/// Numeric encoding of an output raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SampleType {
    /// 8-bit normalized: values in [0, 1] are stretched to 0..=255
    #[default]
    Auto,
    Uint8,
    Uint16,
    Float32,
}

impl SampleType {
    /// Convert a computed value to the engine encoding of this sample type.
    ///
    /// Integer encodings clamp to their range and round; NaN becomes 0.
    pub fn encode(self, value: f64) -> f64 {
        match self {
            SampleType::Auto => encode_int(value * 255.0, 255.0),
            SampleType::Uint8 => encode_int(value, 255.0),
            SampleType::Uint16 => encode_int(value, 65535.0),
            SampleType::Float32 => value as f32 as f64,
        }
    }

    /// Engine spelling (`AUTO`, `FLOAT32`, ...).
    pub fn name(self) -> &'static str {
        match self {
            SampleType::Auto => "AUTO",
            SampleType::Uint8 => "UINT8",
            SampleType::Uint16 => "UINT16",
            SampleType::Float32 => "FLOAT32",
        }
    }
}

fn encode_int(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max).round()
}

/// How the engine groups acquisitions for one evaluation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mosaicking {
    /// One sample per pixel, already mosaicked by the engine
    #[default]
    Simple,
    /// One sample per orbit, delivered as a sequence
    Orbit,
    /// One sample per tile, delivered as a sequence
    Tile,
}

impl Mosaicking {
    /// Whether evaluation receives a sample sequence rather than one sample.
    pub fn is_temporal(self) -> bool {
        !matches!(self, Mosaicking::Simple)
    }
}

/// One output raster: id, channel count and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputBand {
    pub id: &'static str,
    pub bands: usize,
    pub sample_type: SampleType,
}

impl OutputBand {
    /// Output with the default 8-bit normalized encoding.
    pub const fn new(id: &'static str, bands: usize) -> Self {
        Self {
            id,
            bands,
            sample_type: SampleType::Auto,
        }
    }

    /// Output with 32-bit float encoding.
    pub const fn float32(id: &'static str, bands: usize) -> Self {
        Self {
            id,
            bands,
            sample_type: SampleType::Float32,
        }
    }
}

/// Everything an evalscript declares up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputDeclaration {
    pub input: &'static [Band],
    pub output: &'static [OutputBand],
    pub mosaicking: Mosaicking,
}

impl OutputDeclaration {
    pub const fn new(input: &'static [Band], output: &'static [OutputBand]) -> Self {
        Self {
            input,
            output,
            mosaicking: Mosaicking::Simple,
        }
    }

    pub const fn with_mosaicking(mut self, mosaicking: Mosaicking) -> Self {
        self.mosaicking = mosaicking;
        self
    }

    /// Look up a declared output by id.
    pub fn output(&self, id: &str) -> Option<&OutputBand> {
        self.output.iter().find(|o| o.id == id)
    }

    /// Output ids in declaration order.
    pub fn output_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.output.iter().map(|o| o.id)
    }
}
