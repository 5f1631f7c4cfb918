//! Median NDVI over an orbit stack

use evalpix_colormap::{color_blend, ndvi_ramp};
use evalpix_core::prelude::*;
use tracing::debug;

use crate::imagery::{flag_value, median_ndvi, DateFilter, Orbit};

const INPUT: &[Band] = &[Band::Red, Band::Nir, Band::DataMask];
const OUTPUT: &[OutputBand] = &[OutputBand::new("default", 4)];

/// Parameters for [`MedianNdvi`]
#[derive(Debug, Clone, Default)]
pub struct MedianNdviParams {
    /// Orbits to keep before compositing; `None` keeps every orbit.
    pub date_filter: Option<DateFilter>,
}

impl MedianNdviParams {
    pub fn with_dates<I, S>(dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            date_filter: Some(DateFilter::new(dates)?),
        })
    }
}

/// Median NDVI of the valid samples of one pixel's orbit stack, rendered
/// through the red-yellow-green ramp.
///
/// Alpha comes from the data mask of the first sample in the sequence.
/// A sequence with no valid sample fails with [`Error::NoValidSamples`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianNdvi;

impl MedianNdvi {
    /// Orbits that pass the configured date filter.
    pub fn preprocess(&self, orbits: Vec<Orbit>, params: &MedianNdviParams) -> Result<Vec<Orbit>> {
        match &params.date_filter {
            Some(filter) => filter.retain(orbits),
            None => Ok(orbits),
        }
    }

    /// Apply the date filter to `orbits` and evaluate the samples of the
    /// orbits that remain. `samples[i]` belongs to `orbits[i]`.
    pub fn evaluate_orbits(
        &self,
        orbits: &[Orbit],
        samples: &[Sample],
        params: &MedianNdviParams,
    ) -> Result<Evaluation> {
        let selected = match &params.date_filter {
            Some(filter) => filter.select(orbits, samples)?,
            None => {
                if orbits.len() != samples.len() {
                    return Err(Error::ShapeMismatch {
                        what: "orbit samples".into(),
                        expected: orbits.len(),
                        actual: samples.len(),
                    });
                }
                samples.to_vec()
            }
        };
        debug!(selected = selected.len(), total = samples.len(), "orbit samples selected");
        self.evaluate(&selected, params)
    }
}

impl Evalscript for MedianNdvi {
    type Input = [Sample];
    type Params = MedianNdviParams;

    fn name(&self) -> &'static str {
        "median-ndvi"
    }

    fn description(&self) -> &'static str {
        "Median NDVI across orbits, rendered red-yellow-green"
    }

    fn describe(&self) -> OutputDeclaration {
        OutputDeclaration::new(INPUT, OUTPUT).with_mosaicking(Mosaicking::Orbit)
    }

    /// `samples` is the already preprocessed sequence; use
    /// [`MedianNdvi::evaluate_orbits`] to apply the date filter.
    fn evaluate(&self, samples: &[Sample], _params: &MedianNdviParams) -> Result<Evaluation> {
        let value = median_ndvi(samples)?;
        // median_ndvi only succeeds with at least one sample
        let reference = samples[0].has_data()?;
        let color = color_blend(value, &ndvi_ramp(flag_value(reference)))?;

        Ok(Evaluation::new().with("default", color.to_array().to_vec()))
    }
}
