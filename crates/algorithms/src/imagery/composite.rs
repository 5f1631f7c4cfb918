//! Temporal composites over an orbit sequence

use evalpix_core::{Band, Error, Result, Sample};
use tracing::trace;

use super::indices::ndvi;

/// Median of `values`.
///
/// Sorts ascending; an odd count yields the exact middle element, an even
/// count the mean of the two central elements. `None` for an empty slice.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let middle = values.len() / 2;
    if values.len() % 2 != 0 {
        Some(values[middle])
    } else {
        Some((values[middle - 1] + values[middle]) / 2.0)
    }
}

/// NDVI of every sample that holds data, in sequence order.
///
/// Samples with `dataMask == 0` are skipped, as are samples whose NDVI is
/// undefined (`nir + red == 0`).
pub fn valid_ndvi_values(samples: &[Sample]) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(samples.len());
    for sample in samples {
        if !sample.has_data()? {
            continue;
        }
        let value = ndvi(sample.get(Band::Nir)?, sample.get(Band::Red)?);
        if !value.is_nan() {
            values.push(value);
        }
    }
    Ok(values)
}

/// Median NDVI over the valid samples of an orbit sequence.
///
/// Fails with [`Error::NoValidSamples`] when no sample survives the mask,
/// e.g. every orbit is masked or a date filter removed them all.
pub fn median_ndvi(samples: &[Sample]) -> Result<f64> {
    let mut values = valid_ndvi_values(samples)?;
    trace!(
        survivors = values.len(),
        total = samples.len(),
        "median NDVI survivors"
    );
    median(&mut values).ok_or(Error::NoValidSamples("median NDVI"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &[Band] = &[Band::Red, Band::Nir, Band::DataMask];

    fn sample(nir: f64, red: f64, data: f64) -> Sample {
        Sample::new(
            INPUT,
            [(Band::Nir, nir), (Band::Red, red), (Band::DataMask, data)],
        )
        .unwrap()
    }

    /// Sample whose NDVI is exactly `v` (nir + red = 1)
    fn with_ndvi(v: f64) -> Sample {
        sample((1.0 + v) / 2.0, (1.0 - v) / 2.0, 1.0)
    }

    #[test]
    fn median_odd() {
        let mut v = vec![0.1, 0.4, 0.2];
        assert_eq!(median(&mut v), Some(0.2));
    }

    #[test]
    fn median_even() {
        let mut v = vec![0.7, 0.1, 0.5, 0.3];
        let m = median(&mut v).unwrap();
        assert!((m - 0.4).abs() < 1e-12, "Expected 0.4, got {}", m);
    }

    #[test]
    fn median_single_and_empty() {
        assert_eq!(median(&mut [0.9]), Some(0.9));
        assert_eq!(median(&mut Vec::<f64>::new()), None);
    }

    #[test]
    fn median_ndvi_skips_masked() {
        let samples = vec![
            with_ndvi(0.1),
            sample(0.9, 0.1, 0.0),
            with_ndvi(0.4),
            with_ndvi(0.2),
        ];
        let m = median_ndvi(&samples).unwrap();
        assert!((m - 0.2).abs() < 1e-10, "Expected 0.2, got {}", m);
    }

    #[test]
    fn median_ndvi_skips_undefined() {
        let samples = vec![sample(0.0, 0.0, 1.0), with_ndvi(0.5)];
        let m = median_ndvi(&samples).unwrap();
        assert!((m - 0.5).abs() < 1e-10, "Expected 0.5, got {}", m);
    }

    #[test]
    fn median_ndvi_no_survivors() {
        let samples = vec![sample(0.5, 0.1, 0.0), sample(0.4, 0.2, 0.0)];
        assert_eq!(
            median_ndvi(&samples).unwrap_err(),
            Error::NoValidSamples("median NDVI")
        );
        assert!(median_ndvi(&[]).is_err());
    }

    #[test]
    fn valid_values_keep_order() {
        let samples = vec![with_ndvi(0.3), with_ndvi(-0.2)];
        let v = valid_ndvi_values(&samples).unwrap();
        assert_eq!(v.len(), 2);
        assert!((v[0] - 0.3).abs() < 1e-10);
        assert!((v[1] + 0.2).abs() < 1e-10);
    }
}
