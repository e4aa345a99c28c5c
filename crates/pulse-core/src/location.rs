//! Parsing of the coordinate payload clients send as a JSON-encoded string.

use serde::Deserialize;

use crate::{Error, Result};

/// A latitude/longitude pair in decimal degrees.
///
/// No range check is applied: values outside `[-90, 90]` / `[-180, 180]`
/// are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
  pub latitude:  f64,
  pub longitude: f64,
}

/// Wire shape of the encoded location: `{"lat": <number>, "lng": <number>}`.
#[derive(Deserialize)]
struct RawLocation {
  lat: f64,
  lng: f64,
}

impl Location {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self { latitude, longitude }
  }

  /// Parse a string such as `{"lat":48.1351,"lng":11.582}`.
  ///
  /// Any input that is not a JSON object with numeric `lat` and `lng` keys
  /// fails with [`Error::InvalidLocationFormat`]. Extra keys are ignored.
  pub fn parse(raw: &str) -> Result<Self> {
    let RawLocation { lat, lng } =
      serde_json::from_str(raw).map_err(|_| Error::InvalidLocationFormat)?;
    Ok(Self::new(lat, lng))
  }
}
