//! Per-pixel band samples
//!
//! A [`Sample`] is validated against the input band list of a script when it
//! is built, so missing or malformed bands are caught at the boundary rather
//! than in the middle of an index formula.

use std::collections::HashMap;

use crate::band::{Band, BAND_COUNT};
use crate::error::{Error, Result};

/// Band values of one pixel at one acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    values: [Option<f64>; BAND_COUNT],
}

impl Sample {
    /// Build a sample from `(band, value)` pairs, requiring every band in
    /// `required` to be present.
    pub fn new<I>(required: &[Band], values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Band, f64)>,
    {
        let mut sample = Sample::default();
        for (band, value) in values {
            if required.contains(&band) {
                sample.values[band.index()] = Some(check_value(band, value)?);
            }
        }
        for &band in required {
            if sample.values[band.index()].is_none() {
                return Err(Error::MissingBand {
                    band: band.as_str(),
                });
            }
        }
        Ok(sample)
    }

    /// Build a sample from the engine's name-keyed mapping.
    ///
    /// Every key must be a known band name; only the `required` bands are
    /// kept.
    pub fn from_map(required: &[Band], map: &HashMap<String, f64>) -> Result<Self> {
        let pairs = map
            .iter()
            .map(|(name, &value)| Ok((name.parse::<Band>()?, value)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(required, pairs)
    }

    /// Value of a band declared when the sample was built.
    pub fn get(&self, band: Band) -> Result<f64> {
        self.values[band.index()].ok_or(Error::MissingBand {
            band: band.as_str(),
        })
    }

    /// Mask band read as a flag.
    pub fn flag(&self, band: Band) -> Result<bool> {
        Ok(self.get(band)? == 1.0)
    }

    /// Whether the pixel holds valid sensor data.
    pub fn has_data(&self) -> Result<bool> {
        self.flag(Band::DataMask)
    }

    /// Bands held by this sample.
    pub fn bands(&self) -> impl Iterator<Item = Band> + '_ {
        Band::ALL
            .into_iter()
            .filter(move |b| self.values[b.index()].is_some())
    }
}

fn check_value(band: Band, value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(Error::InvalidBandValue {
            band: band.as_str(),
            value,
            reason: "not a number",
        });
    }
    if band.is_mask() && value != 0.0 && value != 1.0 {
        return Err(Error::InvalidBandValue {
            band: band.as_str(),
            value,
            reason: "mask bands must be 0 or 1",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NDVI_INPUT: &[Band] = &[Band::Red, Band::Nir, Band::DataMask];

    #[test]
    fn builds_from_pairs() {
        let s = Sample::new(
            NDVI_INPUT,
            [(Band::Red, 0.1), (Band::Nir, 0.5), (Band::DataMask, 1.0)],
        )
        .unwrap();
        assert!((s.get(Band::Nir).unwrap() - 0.5).abs() < 1e-12);
        assert!(s.has_data().unwrap());
        assert_eq!(s.bands().count(), 3);
    }

    #[test]
    fn missing_band_fails_fast() {
        let err = Sample::new(NDVI_INPUT, [(Band::Red, 0.1), (Band::DataMask, 1.0)]).unwrap_err();
        assert_eq!(err, Error::MissingBand { band: "nir" });
    }

    #[test]
    fn undeclared_bands_are_dropped() {
        let s = Sample::new(
            NDVI_INPUT,
            [
                (Band::Red, 0.1),
                (Band::Nir, 0.5),
                (Band::DataMask, 1.0),
                (Band::Blue, 0.3),
            ],
        )
        .unwrap();
        assert!(s.get(Band::Blue).is_err());
    }

    #[test]
    fn nan_is_rejected() {
        let err = Sample::new(
            NDVI_INPUT,
            [(Band::Red, f64::NAN), (Band::Nir, 0.5), (Band::DataMask, 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBandValue { band: "red", .. }));
    }

    #[test]
    fn mask_must_be_binary() {
        let err = Sample::new(
            NDVI_INPUT,
            [(Band::Red, 0.1), (Band::Nir, 0.5), (Band::DataMask, 0.5)],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBandValue { band: "dataMask", .. }));
    }

    #[test]
    fn from_map_rejects_unknown_names() {
        let mut map = HashMap::new();
        map.insert("red".to_string(), 0.1);
        map.insert("nir".to_string(), 0.5);
        map.insert("dataMask".to_string(), 1.0);
        assert!(Sample::from_map(NDVI_INPUT, &map).is_ok());

        map.insert("swir".to_string(), 0.2);
        assert_eq!(
            Sample::from_map(NDVI_INPUT, &map).unwrap_err(),
            Error::UnknownBand("swir".into())
        );
    }

    #[test]
    fn zero_mask_reads_false() {
        let s = Sample::new(
            NDVI_INPUT,
            [(Band::Red, 0.1), (Band::Nir, 0.5), (Band::DataMask, 0.0)],
        )
        .unwrap();
        assert!(!s.has_data().unwrap());
    }
}
