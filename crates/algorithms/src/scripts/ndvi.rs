//! NDVI with a clear-pixel weight, and its color visualization

use evalpix_colormap::{color_blend, ndvi_ramp};
use evalpix_core::prelude::*;

use crate::imagery::{clear_mask, flag_value, masked, ndvi};

const INPUT: &[Band] = &[Band::Red, Band::Nir, Band::DataMask, Band::Clear];
const OUTPUT: &[OutputBand] = &[OutputBand::new("ndvi", 2), OutputBand::new("dataMask", 1)];
const VISUAL_OUTPUT: &[OutputBand] = &[OutputBand::new("default", 4)];

/// NDVI masked to NaN outside the data mask, paired with `dataMask · clear`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ndvi;

impl Evalscript for Ndvi {
    type Input = Sample;
    type Params = ();

    fn name(&self) -> &'static str {
        "ndvi"
    }

    fn description(&self) -> &'static str {
        "NDVI with a clear-pixel weight and the data mask"
    }

    fn describe(&self) -> OutputDeclaration {
        OutputDeclaration::new(INPUT, OUTPUT)
    }

    fn evaluate(&self, sample: &Sample, _params: &()) -> Result<Evaluation> {
        let index = ndvi(sample.get(Band::Nir)?, sample.get(Band::Red)?);
        let data = sample.has_data()?;
        let clear = clear_mask(data, sample.flag(Band::Clear)?);

        Ok(Evaluation::new()
            .with("ndvi", vec![masked(index, data), flag_value(clear)])
            .with("dataMask", vec![flag_value(data)]))
    }
}

/// NDVI rendered through the red-yellow-green ramp, alpha `dataMask · clear`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdviVisual;

impl Evalscript for NdviVisual {
    type Input = Sample;
    type Params = ();

    fn name(&self) -> &'static str {
        "ndvi-visual"
    }

    fn description(&self) -> &'static str {
        "NDVI color visualization, transparent where cloudy or without data"
    }

    fn describe(&self) -> OutputDeclaration {
        OutputDeclaration::new(INPUT, VISUAL_OUTPUT)
    }

    fn evaluate(&self, sample: &Sample, _params: &()) -> Result<Evaluation> {
        let index = ndvi(sample.get(Band::Nir)?, sample.get(Band::Red)?);
        let alpha = clear_mask(sample.has_data()?, sample.flag(Band::Clear)?);
        let color = color_blend(index, &ndvi_ramp(flag_value(alpha)))?;

        Ok(Evaluation::new().with("default", color.to_array().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(nir: f64, red: f64, data: f64, clear: f64) -> Sample {
        Sample::new(
            INPUT,
            [
                (Band::Nir, nir),
                (Band::Red, red),
                (Band::DataMask, data),
                (Band::Clear, clear),
            ],
        )
        .unwrap()
    }

    #[test]
    fn ndvi_with_clear_weight() {
        let out = Ndvi.evaluate_default(&sample(0.5, 0.1, 1.0, 1.0)).unwrap();
        let ndvi = out.get("ndvi").unwrap();
        assert!((ndvi[0] - 0.4 / 0.6).abs() < 1e-10, "got {}", ndvi[0]);
        assert_eq!(ndvi[1], 1.0);
        assert_eq!(out.get("dataMask").unwrap(), &[1.0]);
    }

    #[test]
    fn ndvi_masked_without_data() {
        let out = Ndvi.evaluate_default(&sample(0.5, 0.1, 0.0, 1.0)).unwrap();
        let ndvi = out.get("ndvi").unwrap();
        assert!(ndvi[0].is_nan());
        assert_eq!(ndvi[1], 0.0);
        assert_eq!(out.get("dataMask").unwrap(), &[0.0]);
    }

    #[test]
    fn ndvi_cloudy_keeps_index() {
        let out = Ndvi.evaluate_default(&sample(0.5, 0.1, 1.0, 0.0)).unwrap();
        let ndvi = out.get("ndvi").unwrap();
        assert!(!ndvi[0].is_nan());
        assert_eq!(ndvi[1], 0.0);
    }

    #[test]
    fn ndvi_zero_denominator_is_nan() {
        let out = Ndvi.evaluate_checked(&sample(0.0, 0.0, 1.0, 1.0), &()).unwrap();
        assert!(out.get("ndvi").unwrap()[0].is_nan());
    }

    #[test]
    fn visual_high_ndvi_is_green() {
        // nir 0.9, red 0.0 → NDVI 1.0, last anchor
        let out = NdviVisual.evaluate_default(&sample(0.9, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(out.get("default").unwrap(), &[0.1, 0.31, 0.0, 1.0]);
    }

    #[test]
    fn visual_cloudy_is_transparent() {
        let out = NdviVisual.evaluate_default(&sample(0.9, 0.0, 1.0, 0.0)).unwrap();
        assert_eq!(out.get("default").unwrap()[3], 0.0);
    }

    #[test]
    fn visual_undefined_ndvi_is_transparent() {
        let out = NdviVisual
            .evaluate_checked(&sample(0.0, 0.0, 1.0, 1.0), &())
            .unwrap();
        assert_eq!(out.get("default").unwrap(), &[0.0, 0.0, 0.0, 0.0]);
    }
}
