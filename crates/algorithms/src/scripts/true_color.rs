//! True-color composite with cloud-aware alpha

use evalpix_core::prelude::*;

use crate::imagery::{clear_mask, flag_value};

const INPUT: &[Band] = &[Band::Blue, Band::Green, Band::Red, Band::DataMask, Band::Clear];
const OUTPUT: &[OutputBand] = &[OutputBand::new("default", 4)];

/// Parameters for [`TrueColor`]
#[derive(Debug, Clone)]
pub struct TrueColorParams {
    /// Reflectance mapped to full brightness (default: 3000)
    pub gain: f64,
}

impl Default for TrueColorParams {
    fn default() -> Self {
        Self { gain: 3000.0 }
    }
}

/// Red, green and blue scaled by `1 / gain`, alpha `dataMask · clear`.
///
/// No clamping: reflectance above `gain` yields channels above 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueColor;

impl Evalscript for TrueColor {
    type Input = Sample;
    type Params = TrueColorParams;

    fn name(&self) -> &'static str {
        "true-color"
    }

    fn description(&self) -> &'static str {
        "True-color RGB composite with alpha from the data and clear masks"
    }

    fn describe(&self) -> OutputDeclaration {
        OutputDeclaration::new(INPUT, OUTPUT)
    }

    fn evaluate(&self, sample: &Sample, params: &TrueColorParams) -> Result<Evaluation> {
        let red = sample.get(Band::Red)?;
        let green = sample.get(Band::Green)?;
        let blue = sample.get(Band::Blue)?;
        let alpha = clear_mask(sample.flag(Band::DataMask)?, sample.flag(Band::Clear)?);

        let g = params.gain;
        Ok(Evaluation::new().with(
            "default",
            vec![red / g, green / g, blue / g, flag_value(alpha)],
        ))
    }
}
