//! Several agricultural indices in one pass

use evalpix_core::prelude::*;

use crate::imagery::{clear_mask, flag_value, msavi, ndre, ndvi, rtvi_core, SpectralIndex};

const INPUT: &[Band] = &[
    Band::Nir,
    Band::RedEdge,
    Band::DataMask,
    Band::Green,
    Band::Red,
    Band::Clear,
];

const OUTPUT: &[OutputBand] = &[
    OutputBand::float32("ndre", 1),
    OutputBand::float32("ndvi", 1),
    OutputBand::float32("rtvicore", 1),
    OutputBand::float32("msavi", 1),
    OutputBand::float32("clear", 1),
    OutputBand::new("dataMask", 1),
];

/// NDRE, NDVI, RTVIcore and MSAVI as float outputs, plus the clear flag and
/// the data mask.
///
/// Index values are not masked; consumers combine them with `dataMask`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VegetationIndices;

impl Evalscript for VegetationIndices {
    type Input = Sample;
    type Params = ();

    fn name(&self) -> &'static str {
        "vegetation-indices"
    }

    fn description(&self) -> &'static str {
        "NDRE, NDVI, RTVIcore and MSAVI with clear and data masks"
    }

    fn describe(&self) -> OutputDeclaration {
        OutputDeclaration::new(INPUT, OUTPUT)
    }

    fn evaluate(&self, sample: &Sample, _params: &()) -> Result<Evaluation> {
        let nir = sample.get(Band::Nir)?;
        let red = sample.get(Band::Red)?;
        let red_edge = sample.get(Band::RedEdge)?;
        let green = sample.get(Band::Green)?;
        let data = sample.has_data()?;
        let clear = clear_mask(data, sample.flag(Band::Clear)?);

        Ok(Evaluation::new()
            .with(SpectralIndex::NDRE.id(), vec![ndre(nir, red_edge)])
            .with(SpectralIndex::NDVI.id(), vec![ndvi(nir, red)])
            .with(SpectralIndex::RTVICore.id(), vec![rtvi_core(nir, red_edge, green)])
            .with(SpectralIndex::MSAVI.id(), vec![msavi(nir, red)])
            .with("clear", vec![flag_value(clear)])
            .with("dataMask", vec![flag_value(data)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(data: f64, clear: f64) -> Sample {
        Sample::new(
            INPUT,
            [
                (Band::Nir, 0.6),
                (Band::RedEdge, 0.3),
                (Band::Green, 0.2),
                (Band::Red, 0.1),
                (Band::DataMask, data),
                (Band::Clear, clear),
            ],
        )
        .unwrap()
    }

    fn single(out: &Evaluation, id: &str) -> f64 {
        let v = out.get(id).unwrap();
        assert_eq!(v.len(), 1, "{} should have one channel", id);
        v[0]
    }

    #[test]
    fn computes_every_index() {
        let out = VegetationIndices.evaluate_default(&sample(1.0, 1.0)).unwrap();

        assert!((single(&out, "ndre") - 0.3 / 0.9).abs() < 1e-10);
        assert!((single(&out, "ndvi") - 0.5 / 0.7).abs() < 1e-10);
        assert!((single(&out, "rtvicore") - 26.0).abs() < 1e-10);
        assert!((single(&out, "msavi") - msavi(0.6, 0.1)).abs() < 1e-12);
        assert_eq!(single(&out, "clear"), 1.0);
        assert_eq!(single(&out, "dataMask"), 1.0);
    }

    #[test]
    fn clear_requires_both_masks() {
        let out = VegetationIndices.evaluate_default(&sample(0.0, 1.0)).unwrap();
        assert_eq!(single(&out, "clear"), 0.0);
        assert_eq!(single(&out, "dataMask"), 0.0);
        // indices are left unmasked
        assert!(!single(&out, "ndvi").is_nan());

        let out = VegetationIndices.evaluate_default(&sample(1.0, 0.0)).unwrap();
        assert_eq!(single(&out, "clear"), 0.0);
    }

    #[test]
    fn outputs_conform() {
        let out = VegetationIndices
            .evaluate_checked(&sample(1.0, 1.0), &())
            .unwrap();
        assert_eq!(out.len(), 6);
        let decl = VegetationIndices.describe();
        assert_eq!(decl.output("ndvi").unwrap().sample_type, SampleType::Float32);
        assert_eq!(decl.output("dataMask").unwrap().sample_type, SampleType::Auto);
    }

    #[test]
    fn missing_rededge_fails_at_boundary() {
        let err = Sample::new(
            INPUT,
            [
                (Band::Nir, 0.6),
                (Band::Green, 0.2),
                (Band::Red, 0.1),
                (Band::DataMask, 1.0),
                (Band::Clear, 1.0),
            ],
        )
        .unwrap_err();
        assert_eq!(err, Error::MissingBand { band: "rededge" });
    }
}
