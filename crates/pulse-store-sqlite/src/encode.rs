//! Encoding and decoding helpers between domain types and the plain
//! representations stored in SQLite columns.
//!
//! Timestamps are RFC 3339 strings written by SQLite itself. Coordinates are
//! `REAL`s at a fixed scale of six decimal places.

use chrono::{DateTime, Utc};
use pulse_core::report::{Report, ReportReceipt};

use crate::{Error, Result};

/// Digits kept after the decimal point for latitude/longitude.
pub const COORDINATE_SCALE: i32 = 6;

/// Total significant digits of a coordinate column; with six of them after
/// the point, magnitudes must stay below `10^4`.
pub const COORDINATE_PRECISION: i32 = 10;

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// Round to [`COORDINATE_SCALE`] places, refusing values the column cannot
/// hold.
pub fn encode_coordinate(v: f64) -> Result<f64> {
  let factor  = 10f64.powi(COORDINATE_SCALE);
  let bound   = 10f64.powi(COORDINATE_PRECISION - COORDINATE_SCALE);
  let rounded = (v * factor).round() / factor;
  if !rounded.is_finite() || rounded.abs() >= bound {
    return Err(Error::CoordinateOverflow(v));
  }
  Ok(rounded)
}

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Raw row types ───────────────────────────────────────────────────────────

/// The `RETURNING id, time` row of an insert.
pub struct RawReceipt {
  pub id:   i64,
  pub time: String,
}

impl RawReceipt {
  pub fn into_receipt(self) -> Result<ReportReceipt> {
    Ok(ReportReceipt { id: self.id, time: decode_dt(&self.time)? })
  }
}

/// A `reports` row as read from SQLite, before timestamp decoding.
pub struct RawReport {
  pub id:            i64,
  pub time:          String,
  pub latitude:      f64,
  pub longitude:     f64,
  pub is_safe:       Option<bool>,
  pub is_clean:      Option<bool>,
  pub is_accessible: Option<bool>,
  pub is_quiet:      Option<bool>,
  pub is_uncrowded:  Option<bool>,
  pub is_lively:     Option<bool>,
}

impl RawReport {
  /// Column order expected by [`RawReport::from_row`].
  pub const COLUMNS: &'static str = "id, time, latitude, longitude, is_safe, \
                                     is_clean, is_accessible, is_quiet, \
                                     is_uncrowded, is_lively";

  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      time:          row.get(1)?,
      latitude:      row.get(2)?,
      longitude:     row.get(3)?,
      is_safe:       row.get(4)?,
      is_clean:      row.get(5)?,
      is_accessible: row.get(6)?,
      is_quiet:      row.get(7)?,
      is_uncrowded:  row.get(8)?,
      is_lively:     row.get(9)?,
    })
  }

  pub fn into_report(self) -> Result<Report> {
    Ok(Report {
      id:            self.id,
      time:          decode_dt(&self.time)?,
      latitude:      self.latitude,
      longitude:     self.longitude,
      is_safe:       self.is_safe,
      is_clean:      self.is_clean,
      is_accessible: self.is_accessible,
      is_quiet:      self.is_quiet,
      is_uncrowded:  self.is_uncrowded,
      is_lively:     self.is_lively,
    })
  }
}
