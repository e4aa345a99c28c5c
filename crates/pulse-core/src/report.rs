//! Report types — one observed signal at one coordinate.
//!
//! Reports are append-only: created once by an insert, never updated or
//! deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  location::Location,
  signal::{Signal, SignalField},
};

// ─── NewReport ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::ReportStore::insert_report`].
/// `id` and `time` are always assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReport {
  pub location: Location,
  pub signal:   Signal,
}

impl NewReport {
  pub fn new(location: Location, signal: Signal) -> Self {
    Self { location, signal }
  }
}

// ─── ReportReceipt ───────────────────────────────────────────────────────────

/// The confirmation row a store returns after a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportReceipt {
  pub id:   i64,
  pub time: DateTime<Utc>,
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// A stored row, flat. Each boolean is `None` unless the report's signal
/// wrote to that column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
  pub id:            i64,
  pub time:          DateTime<Utc>,
  pub latitude:      f64,
  pub longitude:     f64,
  pub is_safe:       Option<bool>,
  pub is_clean:      Option<bool>,
  pub is_accessible: Option<bool>,
  pub is_quiet:      Option<bool>,
  pub is_uncrowded:  Option<bool>,
  pub is_lively:     Option<bool>,
}

impl Report {
  /// Read one tri-state column.
  pub fn field(&self, field: SignalField) -> Option<bool> {
    match field {
      SignalField::Safe => self.is_safe,
      SignalField::Clean => self.is_clean,
      SignalField::Accessible => self.is_accessible,
      SignalField::Quiet => self.is_quiet,
      SignalField::Uncrowded => self.is_uncrowded,
      SignalField::Lively => self.is_lively,
    }
  }

  /// The `(column, value)` pairs that are set on this row.
  pub fn set_fields(&self) -> Vec<(SignalField, bool)> {
    <SignalField as strum::IntoEnumIterator>::iter()
      .filter_map(|f| self.field(f).map(|v| (f, v)))
      .collect()
  }

  /// The signal that produced this row.
  ///
  /// `None` if the row does not have exactly one field set, or if the set
  /// value has no key in the signal table (`is_lively = false`).
  pub fn signal(&self) -> Option<Signal> {
    match self.set_fields().as_slice() {
      [(field, value)] => Signal::from_mapping(*field, *value),
      _ => None,
    }
  }

  pub fn location(&self) -> Location {
    Location::new(self.latitude, self.longitude)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn blank() -> Report {
    Report {
      id:            1,
      time:          Utc::now(),
      latitude:      48.1351,
      longitude:     11.582,
      is_safe:       None,
      is_clean:      None,
      is_accessible: None,
      is_quiet:      None,
      is_uncrowded:  None,
      is_lively:     None,
    }
  }

  #[test]
  fn signal_recovers_single_field() {
    let report = Report { is_quiet: Some(false), ..blank() };
    assert_eq!(report.signal(), Some(Signal::Noisy));
    assert_eq!(report.set_fields(), vec![(SignalField::Quiet, false)]);
  }

  #[test]
  fn signal_is_none_for_unset_or_ambiguous_rows() {
    assert_eq!(blank().signal(), None);

    let two = Report { is_safe: Some(true), is_clean: Some(false), ..blank() };
    assert_eq!(two.signal(), None);

    let not_lively = Report { is_lively: Some(false), ..blank() };
    assert_eq!(not_lively.signal(), None);
  }

  #[test]
  fn serialises_flat_with_nulls() {
    let report = Report { is_safe: Some(true), ..blank() };
    let json = serde_json::to_value(&report).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 10);
    assert_eq!(obj["id"], 1);
    assert_eq!(obj["latitude"], 48.1351);
    assert_eq!(obj["longitude"], 11.582);
    assert_eq!(obj["is_safe"], true);
    for key in
      ["is_clean", "is_accessible", "is_quiet", "is_uncrowded", "is_lively"]
    {
      assert!(obj[key].is_null(), "{key}");
    }
    assert!(obj["time"].is_string());
  }
}
