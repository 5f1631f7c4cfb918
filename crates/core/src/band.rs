//! Engine band identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A band the imagery engine can sample for an evalscript.
///
/// Names follow the engine spelling exactly (`dataMask`, `rededge`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "nir")]
    Nir,
    #[serde(rename = "rededge")]
    RedEdge,
    /// 1 where the pixel holds valid sensor data
    #[serde(rename = "dataMask")]
    DataMask,
    /// 1 where the pixel is free of cloud and shadow
    #[serde(rename = "clear")]
    Clear,
}

/// Number of distinct engine bands.
pub const BAND_COUNT: usize = 7;

impl Band {
    /// Every band, in storage order.
    pub const ALL: [Band; BAND_COUNT] = [
        Band::Red,
        Band::Green,
        Band::Blue,
        Band::Nir,
        Band::RedEdge,
        Band::DataMask,
        Band::Clear,
    ];

    /// Engine identifier of the band.
    pub const fn as_str(self) -> &'static str {
        match self {
            Band::Red => "red",
            Band::Green => "green",
            Band::Blue => "blue",
            Band::Nir => "nir",
            Band::RedEdge => "rededge",
            Band::DataMask => "dataMask",
            Band::Clear => "clear",
        }
    }

    /// Mask bands carry 0/1 flags instead of reflectance.
    pub const fn is_mask(self) -> bool {
        matches!(self, Band::DataMask | Band::Clear)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Band::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| Error::UnknownBand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_engine_names() {
        assert_eq!("dataMask".parse::<Band>().unwrap(), Band::DataMask);
        assert_eq!("rededge".parse::<Band>().unwrap(), Band::RedEdge);
        for band in Band::ALL {
            assert_eq!(band.as_str().parse::<Band>().unwrap(), band);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "datamask".parse::<Band>(),
            Err(Error::UnknownBand("datamask".into()))
        );
        assert!("NIR".parse::<Band>().is_err());
    }

    #[test]
    fn mask_bands() {
        assert!(Band::DataMask.is_mask());
        assert!(Band::Clear.is_mask());
        assert!(!Band::Nir.is_mask());
    }

    #[test]
    fn index_matches_storage_order() {
        for (i, band) in Band::ALL.into_iter().enumerate() {
            assert_eq!(band.index(), i);
        }
    }

    #[test]
    fn serde_uses_engine_spelling() {
        let json = serde_json::to_string(&Band::RedEdge).unwrap();
        assert_eq!(json, "\"rededge\"");
        let band: Band = serde_json::from_str("\"dataMask\"").unwrap();
        assert_eq!(band, Band::DataMask);
    }
}
