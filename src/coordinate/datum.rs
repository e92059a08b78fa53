//! Reference ellipsoid handling
//!
//! Named datums are read from an embedded TOML table on first use. Extra
//! definitions with the same layout can be loaded from disk.

use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;
use log::debug;

use crate::errors::{BoundsError, BoundsResult};

lazy_static! {
    // Parse the embedded table at startup
    static ref BUILTIN_DATUMS: DatumDefinitions = {
        let content = include_str!("../../datums.toml");
        DatumDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in datum definitions: {}", e);
            DatumDefinitions::default()
        })
    };
}

/// A reference ellipsoid
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    /// Registry name, upper case
    pub name: String,
    /// Equatorial radius in metres
    pub semi_major_axis: f64,
    /// 1/f; zero denotes a sphere
    pub inverse_flattening: f64,
}

impl Datum {
    /// Create a datum, rejecting non-physical parameters
    pub fn new(name: &str, semi_major_axis: f64, inverse_flattening: f64) -> BoundsResult<Self> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(BoundsError::ConfigError(format!(
                "Datum {}: semi_major_axis must be positive, got {}", name, semi_major_axis)));
        }
        if !(inverse_flattening.is_finite() && (inverse_flattening == 0.0 || inverse_flattening > 1.0)) {
            return Err(BoundsError::ConfigError(format!(
                "Datum {}: inverse_flattening must be 0 or greater than 1, got {}", name, inverse_flattening)));
        }

        Ok(Datum {
            name: name.to_uppercase(),
            semi_major_axis,
            inverse_flattening,
        })
    }

    /// The WGS 84 ellipsoid
    pub fn wgs84() -> Self {
        Datum {
            name: "WGS84".to_string(),
            semi_major_axis: 6378137.0,
            inverse_flattening: 298.257223563,
        }
    }

    pub fn flattening(&self) -> f64 {
        if self.inverse_flattening == 0.0 {
            0.0
        } else {
            1.0 / self.inverse_flattening
        }
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening())
    }

    /// First eccentricity squared, e² = f(2 - f)
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Second eccentricity squared, e'² = e² / (1 - e²)
    pub fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }

    /// Radius of curvature in the prime vertical at a latitude (radians)
    pub fn prime_vertical_radius(&self, lat_rad: f64) -> f64 {
        let sin_lat = lat_rad.sin();
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }
}

impl Default for Datum {
    fn default() -> Self {
        Datum::wgs84()
    }
}

/// Container for named datum definitions
#[derive(Debug, Default)]
pub struct DatumDefinitions {
    datums: HashMap<String, Datum>,
}

impl DatumDefinitions {
    /// Parse definitions from a TOML string
    ///
    /// Expected layout:
    /// ```toml
    /// [datums.WGS84]
    /// semi_major_axis = 6378137.0
    /// inverse_flattening = 298.257223563
    /// ```
    pub fn from_str(content: &str) -> BoundsResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(BoundsError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let table = toml_value.get("datums")
            .and_then(|v| v.as_table())
            .ok_or_else(|| BoundsError::ConfigError("Missing [datums] table".to_string()))?;

        let mut defs = DatumDefinitions::default();
        for (name, entry) in table {
            let semi_major_axis = Self::read_number(entry, name, "semi_major_axis")?;
            let inverse_flattening = Self::read_number(entry, name, "inverse_flattening")?;
            let datum = Datum::new(name, semi_major_axis, inverse_flattening)?;
            defs.datums.insert(datum.name.clone(), datum);
        }

        debug!("Loaded {} datum definitions", defs.datums.len());
        Ok(defs)
    }

    /// Integers are accepted where floats are expected
    fn read_number(entry: &toml::Value, datum: &str, key: &str) -> BoundsResult<f64> {
        match entry.get(key) {
            Some(toml::Value::Float(v)) => Ok(*v),
            Some(toml::Value::Integer(v)) => Ok(*v as f64),
            Some(other) => Err(BoundsError::ConfigError(format!(
                "Datum {}: {} must be a number, got {}", datum, key, other))),
            None => Err(BoundsError::ConfigError(format!("Datum {}: missing {}", datum, key))),
        }
    }

    /// Load definitions from a TOML file
    pub fn from_file(path: &str) -> BoundsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Look up a datum by case-insensitive name
    pub fn get(&self, name: &str) -> Option<&Datum> {
        self.datums.get(&name.trim().to_uppercase())
    }

    /// Names of all definitions, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.datums.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.datums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datums.is_empty()
    }
}

/// Factory for resolving datums from names and strings
pub struct DatumFactory;

impl DatumFactory {
    /// Resolve a datum from the built-in registry
    pub fn from_name(name: &str) -> BoundsResult<Datum> {
        BUILTIN_DATUMS.get(name)
            .cloned()
            .ok_or_else(|| BoundsError::UnknownDatum(name.to_string()))
    }

    /// Parse a datum from a string (e.g. "WGS84" or "custom:6378137,298.257223563")
    ///
    /// Names found in `extra` take precedence over the built-in registry.
    pub fn from_string(datum_str: &str, extra: Option<&DatumDefinitions>) -> BoundsResult<Datum> {
        let trimmed = datum_str.trim();

        if let Some(params) = trimmed.strip_prefix("custom:") {
            let values = crate::utils::coordinate_utils::parse_values(params, 2, 2)?;
            return Datum::new("CUSTOM", values[0], values[1]);
        }

        if let Some(datum) = extra.and_then(|defs| defs.get(trimmed)) {
            return Ok(datum.clone());
        }

        Self::from_name(trimmed)
    }

    /// Names of the built-in datums
    pub fn builtin_names() -> Vec<String> {
        BUILTIN_DATUMS.names()
    }
}
